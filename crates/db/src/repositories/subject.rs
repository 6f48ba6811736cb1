use crate::models::DbSubject;
use chrono::Utc;
use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_subject(
    pool: &Pool<Postgres>,
    code: &str,
    name: &str,
    description: &str,
    credits: i32,
    semester: &str,
    created_by: Uuid,
) -> Result<DbSubject> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating subject: id={}, code={}, created_by={}",
        id,
        code,
        created_by
    );

    // The owner is written in the same INSERT, so no ownerless subject is
    // ever observable.
    let subject = sqlx::query_as::<_, DbSubject>(
        r#"
        INSERT INTO subjects (id, code, name, description, credits, semester, created_by, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, code, name, description, credits, semester, created_by, created_at
        "#,
    )
    .bind(id)
    .bind(code)
    .bind(name)
    .bind(description)
    .bind(credits)
    .bind(semester)
    .bind(created_by)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Subject created successfully: id={}", id);
    Ok(subject)
}

pub async fn get_subject_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSubject>> {
    let subject = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT id, code, name, description, credits, semester, created_by, created_at
        FROM subjects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(subject)
}

pub async fn get_subject_by_code(pool: &Pool<Postgres>, code: &str) -> Result<Option<DbSubject>> {
    let subject = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT id, code, name, description, credits, semester, created_by, created_at
        FROM subjects
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(subject)
}

pub async fn list_subjects_created_by(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbSubject>> {
    let subjects = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT id, code, name, description, credits, semester, created_by, created_at
        FROM subjects
        WHERE created_by = $1
        ORDER BY code ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(subjects)
}

/// Subjects owned by other users, offered on the listing screen for
/// scheduling.
pub async fn list_subjects_not_created_by(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbSubject>> {
    let subjects = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT id, code, name, description, credits, semester, created_by, created_at
        FROM subjects
        WHERE created_by IS DISTINCT FROM $1
        ORDER BY code ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(subjects)
}

/// Subjects in the personal schedule of the user's student profile. Empty
/// when the user has no student profile.
pub async fn list_subjects_scheduled_by_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbSubject>> {
    let subjects = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT s.id, s.code, s.name, s.description, s.credits, s.semester, s.created_by, s.created_at
        FROM subjects s
        JOIN schedule_entries se ON se.subject_id = s.id
        JOIN students st ON st.id = se.student_id
        WHERE st.user_id = $1
        ORDER BY s.code ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(subjects)
}

pub async fn update_subject(
    pool: &Pool<Postgres>,
    id: Uuid,
    code: Option<&str>,
    name: Option<&str>,
    description: Option<&str>,
    credits: Option<i32>,
    semester: Option<&str>,
) -> Result<DbSubject> {
    let subject = get_subject_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Subject not found"))?;

    let code = code.unwrap_or(&subject.code);
    let name = name.unwrap_or(&subject.name);
    let description = description.unwrap_or(&subject.description);
    let credits = credits.unwrap_or(subject.credits);
    let semester = semester.unwrap_or(&subject.semester);

    let updated_subject = sqlx::query_as::<_, DbSubject>(
        r#"
        UPDATE subjects
        SET code = $2, name = $3, description = $4, credits = $5, semester = $6
        WHERE id = $1
        RETURNING id, code, name, description, credits, semester, created_by, created_at
        "#,
    )
    .bind(id)
    .bind(code)
    .bind(name)
    .bind(description)
    .bind(credits)
    .bind(semester)
    .fetch_one(pool)
    .await?;

    Ok(updated_subject)
}

/// Deletes the subject in one statement; events and membership rows go with
/// it through the cascading foreign keys.
pub async fn delete_subject(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting subject: id={}", id);

    sqlx::query(
        r#"
        DELETE FROM subjects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
