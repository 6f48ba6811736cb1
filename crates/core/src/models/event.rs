use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback color for event type tags outside the known set.
pub const DEFAULT_EVENT_COLOR: &str = "#6c757d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Class,
    Exam,
    Lab,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Class => "class",
            EventType::Exam => "exam",
            EventType::Lab => "lab",
        }
    }

    /// Human-readable label used in feed titles.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Class => "Class",
            EventType::Exam => "Exam",
            EventType::Lab => "Lab",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventType::Class => "#007bff",
            EventType::Exam => "#dc3545",
            EventType::Lab => "#28a745",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "class" => Some(EventType::Class),
            "exam" => Some(EventType::Exam),
            "lab" => Some(EventType::Lab),
            _ => None,
        }
    }
}

/// Display color for a stored event type tag. Unrecognized tags render gray.
pub fn color_for(tag: &str) -> &'static str {
    EventType::parse(tag).map_or(DEFAULT_EVENT_COLOR, |t| t.color())
}

/// Display label for a stored event type tag. Unrecognized tags pass through
/// as their raw value.
pub fn label_for(tag: &str) -> String {
    match EventType::parse(tag) {
        Some(t) => t.label().to_string(),
        None => tag.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub event_type: EventType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub repeat_weekly: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub event_type: Option<EventType>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub repeat_weekly: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub notes: String,
    pub repeat_weekly: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventResponse {
    pub id: Uuid,
    pub deleted: bool,
}
