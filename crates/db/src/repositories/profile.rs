use crate::models::{DbStudent, DbTeacher};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Student profiles

pub async fn create_student(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    student_number: &str,
) -> Result<DbStudent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating student profile: id={}, user_id={}, student_number={}",
        id,
        user_id,
        student_number
    );

    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO students (id, user_id, student_number, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, student_number, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(student_number)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(student)
}

pub async fn get_student_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, user_id, student_number, created_at
        FROM students
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

pub async fn student_number_exists(pool: &Pool<Postgres>, student_number: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM students WHERE student_number = $1)
        "#,
    )
    .bind(student_number)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

// Teacher profiles

pub async fn create_teacher(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    teacher_number: &str,
) -> Result<DbTeacher> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating teacher profile: id={}, user_id={}, teacher_number={}",
        id,
        user_id,
        teacher_number
    );

    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (id, user_id, teacher_number, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, teacher_number, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(teacher_number)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(teacher)
}

pub async fn get_teacher_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<DbTeacher>> {
    let teacher = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, user_id, teacher_number, created_at
        FROM teachers
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(teacher)
}

pub async fn teacher_number_exists(pool: &Pool<Postgres>, teacher_number: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM teachers WHERE teacher_number = $1)
        "#,
    )
    .bind(teacher_number)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

// Personal schedule membership (student_id, subject_id)

/// Adds the subject to the student's schedule. Idempotent: re-adding an
/// existing entry is a no-op.
pub async fn add_schedule_entry(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    subject_id: Uuid,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO schedule_entries (student_id, subject_id)
        VALUES ($1, $2)
        ON CONFLICT (student_id, subject_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(subject_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Removes the subject from the student's schedule. Idempotent: removing an
/// absent entry is a no-op.
pub async fn remove_schedule_entry(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    subject_id: Uuid,
) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM schedule_entries
        WHERE student_id = $1 AND subject_id = $2
        "#,
    )
    .bind(student_id)
    .bind(subject_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn schedule_contains(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    subject_id: Uuid,
) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM schedule_entries
            WHERE student_id = $1 AND subject_id = $2
        )
        "#,
    )
    .bind(student_id)
    .bind(subject_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn get_scheduled_subject_ids(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<Uuid>> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT subject_id
        FROM schedule_entries
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

// Historical enrollment membership, read-only at this layer

pub async fn get_enrolled_subject_ids(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<Uuid>> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT subject_id
        FROM enrollments
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

// Managed subjects, read-only: no authorization rule consults these

pub async fn get_managed_subject_ids(
    pool: &Pool<Postgres>,
    teacher_id: Uuid,
) -> Result<Vec<Uuid>> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT subject_id
        FROM managed_subjects
        WHERE teacher_id = $1
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}
