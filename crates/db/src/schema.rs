use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Creates all tables and indexes if they do not exist.
///
/// Foreign keys from events and the membership tables carry
/// `ON DELETE CASCADE`, so deleting a subject removes its events and every
/// enrollment/schedule/management row in the same statement. Readers never
/// observe a half-deleted subject.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create subjects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            code VARCHAR(20) NOT NULL UNIQUE,
            name VARCHAR(100) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            credits INTEGER NOT NULL,
            semester VARCHAR(20) NOT NULL,
            created_by UUID NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create events table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            subject_id UUID NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
            event_type VARCHAR(10) NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            location VARCHAR(100) NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT '',
            repeat_weekly BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create students table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL UNIQUE,
            student_number VARCHAR(20) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create teachers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL UNIQUE,
            teacher_number VARCHAR(20) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule_entries table (active personal schedules)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule_entries (
            student_id UUID NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            subject_id UUID NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
            PRIMARY KEY (student_id, subject_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create enrollments table (historical membership)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            student_id UUID NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            subject_id UUID NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
            PRIMARY KEY (student_id, subject_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create managed_subjects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS managed_subjects (
            teacher_id UUID NOT NULL REFERENCES teachers(id) ON DELETE CASCADE,
            subject_id UUID NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
            PRIMARY KEY (teacher_id, subject_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_subjects_created_by ON subjects(created_by);
        CREATE INDEX IF NOT EXISTS idx_events_subject_id ON events(subject_id);
        CREATE INDEX IF NOT EXISTS idx_events_start_time ON events(start_time);
        CREATE INDEX IF NOT EXISTS idx_events_end_time ON events(end_time);
        CREATE INDEX IF NOT EXISTS idx_schedule_entries_subject_id ON schedule_entries(subject_id);
        CREATE INDEX IF NOT EXISTS idx_enrollments_subject_id ON enrollments(subject_id);
        CREATE INDEX IF NOT EXISTS idx_managed_subjects_subject_id ON managed_subjects(subject_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
