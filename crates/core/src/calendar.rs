//! # Calendar Feed Builder
//!
//! Turns visible events into the display-ready entries the calendar UI
//! consumes. [`build_feed`] is a pure function of its input: no clock, no
//! store, no ordering of its own — upstream queries decide which events are
//! in and in what order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::event;

/// An event joined with identifying fields of its subject, ready for feed
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
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

/// Extra fields the calendar UI needs beyond the timeline placement; the
/// subject id supports delete-by-subject-context actions downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntryProps {
    pub location: String,
    pub notes: String,
    pub subject: String,
    pub subject_id: Uuid,
}

/// One calendar entry. Field names follow the calendar widget's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub id: Uuid,
    pub title: String,
    pub start: String,
    pub end: String,
    pub background_color: String,
    pub border_color: String,
    pub extended_props: FeedEntryProps,
}

/// Maps each event to one feed entry, preserving input order.
pub fn build_feed(events: &[CalendarEvent]) -> Vec<FeedEntry> {
    events.iter().map(feed_entry).collect()
}

fn feed_entry(event: &CalendarEvent) -> FeedEntry {
    let color = event::color_for(&event.event_type);

    FeedEntry {
        id: event.id,
        title: format!(
            "{} - {}",
            event.subject_code,
            event::label_for(&event.event_type)
        ),
        // RFC 3339 with explicit offset, e.g. 2026-01-12T09:00:00+00:00
        start: event.start_time.to_rfc3339(),
        end: event.end_time.to_rfc3339(),
        background_color: color.to_string(),
        border_color: color.to_string(),
        extended_props: FeedEntryProps {
            location: event.location.clone(),
            notes: event.notes.clone(),
            subject: event.subject_name.clone(),
            subject_id: event.subject_id,
        },
    }
}
