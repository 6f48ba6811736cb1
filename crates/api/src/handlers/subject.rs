use axum::{
    Json,
    extract::{Path, State},
};
use coursecal_core::{
    auth,
    errors::CourseError,
    models::subject::{
        CreateSubjectRequest, DeleteSubjectResponse, ListSubjectsResponse, Subject,
        SubjectDetailResponse, SubjectResponse, UpdateSubjectRequest,
    },
};
use coursecal_db::models::DbSubject;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    handlers::event::event_response,
    middleware::{error_handling::AppError, identity::CurrentUser},
};

pub(crate) fn subject_response(row: DbSubject, is_owner: bool) -> SubjectResponse {
    SubjectResponse {
        id: row.id,
        code: row.code,
        name: row.name,
        description: row.description,
        credits: row.credits,
        semester: row.semester,
        is_owner,
        created_at: row.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_subject(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<CreateSubjectRequest>,
) -> Result<Json<SubjectResponse>, AppError> {
    // Subject codes are globally unique. The unique constraint on the table
    // backstops concurrent creates.
    let existing =
        coursecal_db::repositories::subject::get_subject_by_code(&state.db_pool, &payload.code)
            .await
            .map_err(CourseError::Database)?;
    if existing.is_some() {
        return Err(AppError(CourseError::field(
            "code",
            format!("Subject code {} is already in use", payload.code),
        )));
    }

    // The creator becomes the owner in the same INSERT
    let db_subject = coursecal_db::repositories::subject::create_subject(
        &state.db_pool,
        &payload.code,
        &payload.name,
        &payload.description,
        payload.credits,
        &payload.semester,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(Json(subject_response(db_subject, true)))
}

#[axum::debug_handler]
pub async fn list_subjects(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<ListSubjectsResponse>, AppError> {
    let owned = coursecal_db::repositories::subject::list_subjects_created_by(
        &state.db_pool,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    // Everyone else's subjects are offered for scheduling
    let available = coursecal_db::repositories::subject::list_subjects_not_created_by(
        &state.db_pool,
        user.user_id,
    )
    .await
    .map_err(CourseError::Database)?;

    let scheduled_subject_ids = match &user.student {
        Some(student) => coursecal_db::repositories::profile::get_scheduled_subject_ids(
            &state.db_pool,
            student.id,
        )
        .await
        .map_err(CourseError::Database)?,
        None => Vec::new(),
    };

    let response = ListSubjectsResponse {
        subjects: owned
            .into_iter()
            .map(|s| subject_response(s, true))
            .collect(),
        available: available
            .into_iter()
            .map(|s| subject_response(s, false))
            .collect(),
        scheduled_subject_ids,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_subject(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SubjectDetailResponse>, AppError> {
    let db_subject = coursecal_db::repositories::subject::get_subject_by_id(&state.db_pool, id)
        .await
        .map_err(CourseError::Database)?
        .ok_or_else(|| CourseError::NotFound(format!("Subject with ID {} not found", id)))?;

    let actor = user.actor(&state.db_pool).await?;
    let subject = Subject::from(db_subject.clone());

    if !auth::can_view(&actor, &subject) {
        return Err(AppError(CourseError::Authorization(
            "You do not have permission to view this subject".to_string(),
        )));
    }

    let is_owner = auth::can_mutate(&actor, &subject);
    let is_scheduled = actor
        .student
        .as_ref()
        .is_some_and(|s| s.scheduled_subjects.contains(&subject.id));

    let events =
        coursecal_db::repositories::event::get_events_by_subject_id(&state.db_pool, subject.id)
            .await
            .map_err(CourseError::Database)?;

    let response = SubjectDetailResponse {
        subject: subject_response(db_subject, is_owner),
        events: events.into_iter().map(event_response).collect(),
        is_owner,
        is_scheduled,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_subject(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSubjectRequest>,
) -> Result<Json<SubjectResponse>, AppError> {
    let db_subject = coursecal_db::repositories::subject::get_subject_by_id(&state.db_pool, id)
        .await
        .map_err(CourseError::Database)?
        .ok_or_else(|| CourseError::NotFound(format!("Subject with ID {} not found", id)))?;

    let actor = user.actor(&state.db_pool).await?;
    if !auth::can_mutate(&actor, &Subject::from(db_subject.clone())) {
        return Err(AppError(CourseError::Authorization(
            "You do not have permission to edit this subject".to_string(),
        )));
    }

    // Re-check code uniqueness when the code changes
    if let Some(code) = &payload.code {
        if *code != db_subject.code {
            let existing =
                coursecal_db::repositories::subject::get_subject_by_code(&state.db_pool, code)
                    .await
                    .map_err(CourseError::Database)?;
            if existing.is_some() {
                return Err(AppError(CourseError::field(
                    "code",
                    format!("Subject code {} is already in use", code),
                )));
            }
        }
    }

    let updated = coursecal_db::repositories::subject::update_subject(
        &state.db_pool,
        id,
        payload.code.as_deref(),
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.credits,
        payload.semester.as_deref(),
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(Json(subject_response(updated, true)))
}

#[axum::debug_handler]
pub async fn delete_subject(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteSubjectResponse>, AppError> {
    let db_subject = coursecal_db::repositories::subject::get_subject_by_id(&state.db_pool, id)
        .await
        .map_err(CourseError::Database)?
        .ok_or_else(|| CourseError::NotFound(format!("Subject with ID {} not found", id)))?;

    let actor = user.actor(&state.db_pool).await?;
    if !auth::can_mutate(&actor, &Subject::from(db_subject)) {
        return Err(AppError(CourseError::Authorization(
            "You do not have permission to delete this subject".to_string(),
        )));
    }

    // One statement; events and membership rows cascade with it
    coursecal_db::repositories::subject::delete_subject(&state.db_pool, id)
        .await
        .map_err(CourseError::Database)?;

    Ok(Json(DeleteSubjectResponse { id, deleted: true }))
}
