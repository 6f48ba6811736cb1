//! # Identity Middleware
//!
//! Resolves the requesting user for each request. Authentication itself is
//! handled by an external identity provider sitting in front of this
//! service; what reaches the API is the opaque authenticated-user handle in
//! the `X-User-Id` header. The [`CurrentUser`] extractor parses that handle
//! and loads the optional student/teacher profiles attached to it — profile
//! presence is the signal the handlers branch on (a user without a student
//! profile cannot schedule subjects).

use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use coursecal_core::{auth::Actor, errors::CourseError};
use coursecal_db::models::{DbStudent, DbTeacher};
use coursecal_db::repositories::profile;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Header carrying the opaque user handle set by the identity provider.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user of the current request, with any profiles
/// attached to the handle.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub student: Option<DbStudent>,
    pub teacher: Option<DbTeacher>,
}

impl CurrentUser {
    /// Assembles the policy actor for this user, fetching the scheduled
    /// subject id set when a student profile exists.
    pub async fn actor(&self, pool: &PgPool) -> Result<Actor, CourseError> {
        match &self.student {
            Some(student) => {
                let scheduled = profile::get_scheduled_subject_ids(pool, student.id)
                    .await
                    .map_err(CourseError::Database)?;
                Ok(Actor::with_student(self.user_id, student.id, scheduled))
            }
            None => Ok(Actor::new(self.user_id)),
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError(CourseError::Authentication(
                    "Missing user identity header".to_string(),
                ))
            })?;

        let user_id = Uuid::parse_str(raw).map_err(|_| {
            AppError(CourseError::Authentication(
                "Malformed user identity header".to_string(),
            ))
        })?;

        let student = profile::get_student_by_user_id(&state.db_pool, user_id)
            .await
            .map_err(CourseError::Database)?;
        let teacher = profile::get_teacher_by_user_id(&state.db_pool, user_id)
            .await
            .map_err(CourseError::Database)?;

        Ok(CurrentUser {
            user_id,
            student,
            teacher,
        })
    }
}
