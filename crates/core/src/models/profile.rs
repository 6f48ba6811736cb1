use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub student_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacherRequest {
    pub teacher_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_number: String,
    /// Historical membership, kept separate from the active schedule.
    pub enrolled_subject_ids: Vec<Uuid>,
    pub scheduled_subject_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub teacher_number: String,
    pub managed_subject_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a schedule (enroll) or unschedule (unenroll) request.
///
/// Both operations are idempotent; `changed` is false when the subject was
/// already in (or already absent from) the caller's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleChangeResponse {
    pub subject_id: Uuid,
    pub scheduled: bool,
    pub changed: bool,
}
