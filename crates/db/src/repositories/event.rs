use crate::models::{DbCalendarEvent, DbEvent};
use chrono::{DateTime, Utc};
use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_event(
    pool: &Pool<Postgres>,
    subject_id: Uuid,
    event_type: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    location: &str,
    notes: &str,
    repeat_weekly: bool,
) -> Result<DbEvent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating event: id={}, subject_id={}, event_type={}",
        id,
        subject_id,
        event_type
    );

    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        INSERT INTO events (id, subject_id, event_type, start_time, end_time, location, notes, repeat_weekly, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, subject_id, event_type, start_time, end_time, location, notes, repeat_weekly, created_at
        "#,
    )
    .bind(id)
    .bind(subject_id)
    .bind(event_type)
    .bind(start_time)
    .bind(end_time)
    .bind(location)
    .bind(notes)
    .bind(repeat_weekly)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

pub async fn get_event_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEvent>> {
    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, subject_id, event_type, start_time, end_time, location, notes, repeat_weekly, created_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(event)
}

pub async fn get_events_by_subject_id(
    pool: &Pool<Postgres>,
    subject_id: Uuid,
) -> Result<Vec<DbEvent>> {
    let events = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, subject_id, event_type, start_time, end_time, location, notes, repeat_weekly, created_at
        FROM events
        WHERE subject_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(subject_id)
    .fetch_all(pool)
    .await?;

    Ok(events)
}

pub async fn update_event(
    pool: &Pool<Postgres>,
    id: Uuid,
    event_type: Option<&str>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    location: Option<&str>,
    notes: Option<&str>,
    repeat_weekly: Option<bool>,
) -> Result<DbEvent> {
    let event = get_event_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Event not found"))?;

    let event_type = event_type.unwrap_or(&event.event_type);
    let start_time = start_time.unwrap_or(event.start_time);
    let end_time = end_time.unwrap_or(event.end_time);
    let location = location.unwrap_or(&event.location);
    let notes = notes.unwrap_or(&event.notes);
    let repeat_weekly = repeat_weekly.unwrap_or(event.repeat_weekly);

    let updated_event = sqlx::query_as::<_, DbEvent>(
        r#"
        UPDATE events
        SET event_type = $2, start_time = $3, end_time = $4, location = $5, notes = $6, repeat_weekly = $7
        WHERE id = $1
        RETURNING id, subject_id, event_type, start_time, end_time, location, notes, repeat_weekly, created_at
        "#,
    )
    .bind(id)
    .bind(event_type)
    .bind(start_time)
    .bind(end_time)
    .bind(location)
    .bind(notes)
    .bind(repeat_weekly)
    .fetch_one(pool)
    .await?;

    Ok(updated_event)
}

pub async fn delete_event(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// All events of the given subjects, joined with the subject display fields
/// the feed needs. Callers pass the visible-subject id set.
pub async fn get_events_for_subjects(
    pool: &Pool<Postgres>,
    subject_ids: &[Uuid],
) -> Result<Vec<DbCalendarEvent>> {
    let events = sqlx::query_as::<_, DbCalendarEvent>(
        r#"
        SELECT e.id, e.subject_id, s.code AS subject_code, s.name AS subject_name,
               e.event_type, e.start_time, e.end_time, e.location, e.notes
        FROM events e
        JOIN subjects s ON s.id = e.subject_id
        WHERE e.subject_id = ANY($1)
        ORDER BY e.start_time ASC
        "#,
    )
    .bind(subject_ids)
    .fetch_all(pool)
    .await?;

    Ok(events)
}

/// Upcoming events for subjects owned by the user: still running at `now`,
/// soonest first, at most `limit` rows. Backs the dashboard list.
pub async fn get_upcoming_events_for_owner(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    now: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<DbEvent>> {
    let events = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT e.id, e.subject_id, e.event_type, e.start_time, e.end_time, e.location, e.notes, e.repeat_weekly, e.created_at
        FROM events e
        JOIN subjects s ON s.id = e.subject_id
        WHERE s.created_by = $1 AND e.end_time >= $2
        ORDER BY e.start_time ASC
        LIMIT $3
        "#,
    )
    .bind(user_id)
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(events)
}
