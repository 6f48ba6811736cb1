//! # Calendar Handlers
//!
//! The feed endpoint and the dashboard. Both run on the visible-subject
//! set: subjects the caller owns plus subjects their student profile has
//! scheduled. The handlers fetch the two sets, merge them with the
//! visibility resolver, and hand the joined events to the pure feed
//! builder — no authorization decisions are made here beyond that set.

use axum::{Json, extract::State};
use chrono::Utc;
use coursecal_core::{
    calendar::{CalendarEvent, FeedEntry, build_feed},
    errors::CourseError,
    models::subject::{DashboardResponse, Subject},
    visibility,
};
use coursecal_db::models::DbCalendarEvent;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    handlers::{event::event_response, subject::subject_response},
    middleware::{error_handling::AppError, identity::CurrentUser},
};

/// Dashboard shows at most this many upcoming events.
const UPCOMING_EVENT_LIMIT: i64 = 5;

fn calendar_event(row: DbCalendarEvent) -> CalendarEvent {
    CalendarEvent {
        id: row.id,
        subject_id: row.subject_id,
        subject_code: row.subject_code,
        subject_name: row.subject_name,
        event_type: row.event_type,
        start_time: row.start_time,
        end_time: row.end_time,
        location: row.location,
        notes: row.notes,
    }
}

/// Resolves the subjects visible to the user: owned union scheduled.
async fn visible_subjects(
    state: &ApiState,
    user: &CurrentUser,
) -> Result<Vec<Subject>, CourseError> {
    let owned = coursecal_db::repositories::subject::list_subjects_created_by(
        &state.db_pool,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    let scheduled = coursecal_db::repositories::subject::list_subjects_scheduled_by_user(
        &state.db_pool,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(visibility::merge_visible(
        owned.into_iter().map(Subject::from).collect(),
        scheduled.into_iter().map(Subject::from).collect(),
    ))
}

/// Returns the calendar feed: every event of every visible subject, as the
/// calendar widget expects it. No pagination, no filtering.
#[axum::debug_handler]
pub async fn get_calendar_events(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<Vec<FeedEntry>>, AppError> {
    let visible = visible_subjects(&state, &user).await?;
    let subject_ids: Vec<Uuid> = visible.iter().map(|s| s.id).collect();

    let rows =
        coursecal_db::repositories::event::get_events_for_subjects(&state.db_pool, &subject_ids)
            .await
            .map_err(CourseError::Database)?;

    let events: Vec<CalendarEvent> = rows.into_iter().map(calendar_event).collect();

    Ok(Json(build_feed(&events)))
}

/// Returns the dashboard: owned subjects, scheduled subjects, and the next
/// five upcoming events for owned subjects.
#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<DashboardResponse>, AppError> {
    let owned = coursecal_db::repositories::subject::list_subjects_created_by(
        &state.db_pool,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    let scheduled = coursecal_db::repositories::subject::list_subjects_scheduled_by_user(
        &state.db_pool,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    let upcoming = coursecal_db::repositories::event::get_upcoming_events_for_owner(
        &state.db_pool,
        user.user_id,
        Utc::now(),
        UPCOMING_EVENT_LIMIT,
    )
    .await
    .map_err(CourseError::Database)?;

    let response = DashboardResponse {
        upcoming_events: upcoming.into_iter().map(event_response).collect(),
        subjects: owned
            .into_iter()
            .map(|s| subject_response(s, true))
            .collect(),
        scheduled_subjects: scheduled
            .into_iter()
            .map(|s| subject_response(s, false))
            .collect(),
    };

    Ok(Json(response))
}
