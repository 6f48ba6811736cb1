use axum::{
    Json,
    extract::{Path, State},
};
use coursecal_core::{errors::CourseError, models::profile::ScheduleChangeResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, identity::CurrentUser},
};

/// Adds a subject to the caller's personal schedule.
///
/// Requires a student profile. Idempotent: scheduling an already-scheduled
/// subject reports the existing state instead of erroring. Owners are not
/// barred from scheduling their own subject.
#[axum::debug_handler]
pub async fn schedule_subject(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(subject_id): Path<Uuid>,
) -> Result<Json<ScheduleChangeResponse>, AppError> {
    let subject =
        coursecal_db::repositories::subject::get_subject_by_id(&state.db_pool, subject_id)
            .await
            .map_err(CourseError::Database)?
            .ok_or_else(|| {
                CourseError::NotFound(format!("Subject with ID {} not found", subject_id))
            })?;

    let student = user.student.as_ref().ok_or_else(|| {
        CourseError::Authorization("Only students can schedule subjects".to_string())
    })?;

    let already_scheduled = coursecal_db::repositories::profile::schedule_contains(
        &state.db_pool,
        student.id,
        subject.id,
    )
    .await
    .map_err(CourseError::Database)?;

    if already_scheduled {
        return Ok(Json(ScheduleChangeResponse {
            subject_id: subject.id,
            scheduled: true,
            changed: false,
        }));
    }

    coursecal_db::repositories::profile::add_schedule_entry(&state.db_pool, student.id, subject.id)
        .await
        .map_err(CourseError::Database)?;

    tracing::info!(
        "Subject scheduled: subject_id={}, student_id={}",
        subject.id,
        student.id
    );

    Ok(Json(ScheduleChangeResponse {
        subject_id: subject.id,
        scheduled: true,
        changed: true,
    }))
}

/// Removes a subject from the caller's personal schedule.
///
/// Requires a student profile. Idempotent: unscheduling a subject that is
/// not scheduled reports the existing state instead of erroring.
#[axum::debug_handler]
pub async fn unschedule_subject(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(subject_id): Path<Uuid>,
) -> Result<Json<ScheduleChangeResponse>, AppError> {
    let subject =
        coursecal_db::repositories::subject::get_subject_by_id(&state.db_pool, subject_id)
            .await
            .map_err(CourseError::Database)?
            .ok_or_else(|| {
                CourseError::NotFound(format!("Subject with ID {} not found", subject_id))
            })?;

    let student = user.student.as_ref().ok_or_else(|| {
        CourseError::Authorization("Only students can unschedule subjects".to_string())
    })?;

    let scheduled = coursecal_db::repositories::profile::schedule_contains(
        &state.db_pool,
        student.id,
        subject.id,
    )
    .await
    .map_err(CourseError::Database)?;

    if !scheduled {
        return Ok(Json(ScheduleChangeResponse {
            subject_id: subject.id,
            scheduled: false,
            changed: false,
        }));
    }

    coursecal_db::repositories::profile::remove_schedule_entry(
        &state.db_pool,
        student.id,
        subject.id,
    )
    .await
    .map_err(CourseError::Database)?;

    tracing::info!(
        "Subject unscheduled: subject_id={}, student_id={}",
        subject.id,
        student.id
    );

    Ok(Json(ScheduleChangeResponse {
        subject_id: subject.id,
        scheduled: false,
        changed: true,
    }))
}
