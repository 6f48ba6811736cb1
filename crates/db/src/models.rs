use chrono::{DateTime, Utc};
use coursecal_core::models::subject::Subject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSubject {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: i32,
    pub semester: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DbSubject> for Subject {
    fn from(row: DbSubject) -> Self {
        Subject {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            credits: row.credits,
            semester: row.semester,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub notes: String,
    pub repeat_weekly: bool,
    pub created_at: DateTime<Utc>,
}

/// Event row joined with its subject's display fields, as the calendar feed
/// query returns it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCalendarEvent {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub subject_code: String,
    pub subject_name: String,
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub user_id: Uuid,
    pub teacher_number: String,
    pub created_at: DateTime<Utc>,
}

/// Active personal schedule membership (student, subject).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleEntry {
    pub student_id: Uuid,
    pub subject_id: Uuid,
}

/// Historical enrollment membership, independent of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEnrollment {
    pub student_id: Uuid,
    pub subject_id: Uuid,
}

/// Teacher-managed subject membership. Declared but never consulted by
/// authorization or visibility.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbManagedSubject {
    pub teacher_id: Uuid,
    pub subject_id: Uuid,
}
