use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use coursecal_core::{
    auth,
    errors::{CourseError, CourseResult},
    models::event::{CreateEventRequest, DeleteEventResponse, EventResponse, UpdateEventRequest},
    models::subject::Subject,
};
use coursecal_db::models::DbEvent;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, identity::CurrentUser},
};

pub(crate) fn event_response(row: DbEvent) -> EventResponse {
    EventResponse {
        id: row.id,
        subject_id: row.subject_id,
        event_type: row.event_type,
        start_time: row.start_time,
        end_time: row.end_time,
        location: row.location,
        notes: row.notes,
        repeat_weekly: row.repeat_weekly,
    }
}

/// Events must end after they start. Applied to create and update alike, so
/// no partial save can leave an inverted range behind.
pub fn validate_event_times(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> CourseResult<()> {
    if start_time >= end_time {
        return Err(CourseError::field(
            "end_time",
            "End time must be after start time",
        ));
    }
    Ok(())
}

/// Loads the subject and checks the actor may mutate it. Event-level rights
/// derive from the parent subject.
async fn require_subject_owner(
    state: &ApiState,
    user: &CurrentUser,
    subject_id: Uuid,
) -> Result<Subject, AppError> {
    let db_subject =
        coursecal_db::repositories::subject::get_subject_by_id(&state.db_pool, subject_id)
            .await
            .map_err(CourseError::Database)?
            .ok_or_else(|| {
                CourseError::NotFound(format!("Subject with ID {} not found", subject_id))
            })?;

    let actor = user.actor(&state.db_pool).await?;
    let subject = Subject::from(db_subject);
    if !auth::can_mutate(&actor, &subject) {
        return Err(AppError(CourseError::Authorization(
            "You do not have permission to manage events for this subject".to_string(),
        )));
    }

    Ok(subject)
}

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(subject_id): Path<Uuid>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let subject = require_subject_owner(&state, &user, subject_id).await?;

    validate_event_times(payload.start_time, payload.end_time)?;

    let db_event = coursecal_db::repositories::event::create_event(
        &state.db_pool,
        subject.id,
        payload.event_type.as_str(),
        payload.start_time,
        payload.end_time,
        &payload.location,
        &payload.notes,
        payload.repeat_weekly,
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(Json(event_response(db_event)))
}

#[axum::debug_handler]
pub async fn update_event(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path((subject_id, event_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    require_subject_owner(&state, &user, subject_id).await?;

    let db_event = coursecal_db::repositories::event::get_event_by_id(&state.db_pool, event_id)
        .await
        .map_err(CourseError::Database)?
        .filter(|event| event.subject_id == subject_id)
        .ok_or_else(|| {
            CourseError::NotFound(format!(
                "Event with ID {} not found for subject {}",
                event_id, subject_id
            ))
        })?;

    // Validate the effective time range, mixing updated and existing values
    let start_time = payload.start_time.unwrap_or(db_event.start_time);
    let end_time = payload.end_time.unwrap_or(db_event.end_time);
    validate_event_times(start_time, end_time)?;

    let updated = coursecal_db::repositories::event::update_event(
        &state.db_pool,
        event_id,
        payload.event_type.map(|t| t.as_str()),
        payload.start_time,
        payload.end_time,
        payload.location.as_deref(),
        payload.notes.as_deref(),
        payload.repeat_weekly,
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(Json(event_response(updated)))
}

#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<DeleteEventResponse>, AppError> {
    let db_event = coursecal_db::repositories::event::get_event_by_id(&state.db_pool, event_id)
        .await
        .map_err(CourseError::Database)?
        .ok_or_else(|| CourseError::NotFound(format!("Event with ID {} not found", event_id)))?;

    require_subject_owner(&state, &user, db_event.subject_id).await?;

    coursecal_db::repositories::event::delete_event(&state.db_pool, event_id)
        .await
        .map_err(CourseError::Database)?;

    Ok(Json(DeleteEventResponse {
        id: event_id,
        deleted: true,
    }))
}
