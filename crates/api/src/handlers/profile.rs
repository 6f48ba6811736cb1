use axum::{Json, extract::State};
use coursecal_core::{
    errors::CourseError,
    models::profile::{
        CreateStudentRequest, CreateTeacherRequest, StudentResponse, TeacherResponse,
    },
};
use coursecal_db::models::{DbStudent, DbTeacher};
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, identity::CurrentUser},
};

async fn student_response(state: &ApiState, row: DbStudent) -> Result<StudentResponse, CourseError> {
    let enrolled_subject_ids =
        coursecal_db::repositories::profile::get_enrolled_subject_ids(&state.db_pool, row.id)
            .await
            .map_err(CourseError::Database)?;
    let scheduled_subject_ids =
        coursecal_db::repositories::profile::get_scheduled_subject_ids(&state.db_pool, row.id)
            .await
            .map_err(CourseError::Database)?;

    Ok(StudentResponse {
        id: row.id,
        user_id: row.user_id,
        student_number: row.student_number,
        enrolled_subject_ids,
        scheduled_subject_ids,
        created_at: row.created_at,
    })
}

async fn teacher_response(state: &ApiState, row: DbTeacher) -> Result<TeacherResponse, CourseError> {
    let managed_subject_ids =
        coursecal_db::repositories::profile::get_managed_subject_ids(&state.db_pool, row.id)
            .await
            .map_err(CourseError::Database)?;

    Ok(TeacherResponse {
        id: row.id,
        user_id: row.user_id,
        teacher_number: row.teacher_number,
        managed_subject_ids,
        created_at: row.created_at,
    })
}

/// Attaches a student profile to the authenticated user. A user holds at
/// most one, and student numbers are unique.
#[axum::debug_handler]
pub async fn create_student(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    if user.student.is_some() {
        return Err(AppError(CourseError::Validation(
            "User already has a student profile".to_string(),
        )));
    }

    let number_taken = coursecal_db::repositories::profile::student_number_exists(
        &state.db_pool,
        &payload.student_number,
    )
    .await
    .map_err(CourseError::Database)?;
    if number_taken {
        return Err(AppError(CourseError::field(
            "student_number",
            format!("Student number {} is already in use", payload.student_number),
        )));
    }

    let student = coursecal_db::repositories::profile::create_student(
        &state.db_pool,
        user.user_id,
        &payload.student_number,
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(Json(student_response(&state, student).await?))
}

#[axum::debug_handler]
pub async fn get_my_student(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<StudentResponse>, AppError> {
    let student = user
        .student
        .clone()
        .ok_or_else(|| CourseError::NotFound("No student profile for this user".to_string()))?;

    Ok(Json(student_response(&state, student).await?))
}

/// Attaches a teacher profile to the authenticated user. Teacher profiles
/// grant no extra permissions; the managed-subject set is carried but never
/// consulted by authorization.
#[axum::debug_handler]
pub async fn create_teacher(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<Json<TeacherResponse>, AppError> {
    if user.teacher.is_some() {
        return Err(AppError(CourseError::Validation(
            "User already has a teacher profile".to_string(),
        )));
    }

    let number_taken = coursecal_db::repositories::profile::teacher_number_exists(
        &state.db_pool,
        &payload.teacher_number,
    )
    .await
    .map_err(CourseError::Database)?;
    if number_taken {
        return Err(AppError(CourseError::field(
            "teacher_number",
            format!("Teacher number {} is already in use", payload.teacher_number),
        )));
    }

    let teacher = coursecal_db::repositories::profile::create_teacher(
        &state.db_pool,
        user.user_id,
        &payload.teacher_number,
    )
    .await
    .map_err(CourseError::Database)?;

    Ok(Json(teacher_response(&state, teacher).await?))
}

#[axum::debug_handler]
pub async fn get_my_teacher(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<TeacherResponse>, AppError> {
    let teacher = user
        .teacher
        .clone()
        .ok_or_else(|| CourseError::NotFound("No teacher profile for this user".to_string()))?;

    Ok(Json(teacher_response(&state, teacher).await?))
}
