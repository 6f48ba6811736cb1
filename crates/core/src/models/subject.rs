use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::event::EventResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: i32,
    pub semester: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubjectRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub credits: i32,
    pub semester: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubjectRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub semester: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: i32,
    pub semester: String,
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSubjectsResponse {
    /// Subjects owned by the caller.
    pub subjects: Vec<SubjectResponse>,
    /// Subjects owned by other users, offered for scheduling.
    pub available: Vec<SubjectResponse>,
    /// Ids the caller's student profile already has scheduled.
    pub scheduled_subject_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectDetailResponse {
    pub subject: SubjectResponse,
    pub events: Vec<EventResponse>,
    pub is_owner: bool,
    pub is_scheduled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSubjectResponse {
    pub id: Uuid,
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Next events for owned subjects, soonest first.
    pub upcoming_events: Vec<EventResponse>,
    pub subjects: Vec<SubjectResponse>,
    pub scheduled_subjects: Vec<SubjectResponse>,
}
