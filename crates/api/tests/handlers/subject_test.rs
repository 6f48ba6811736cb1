use coursecal_api::middleware::error_handling::AppError;
use coursecal_core::{
    auth::{self, Actor},
    errors::CourseError,
    models::subject::{DeleteSubjectResponse, Subject},
};
use coursecal_db::models::DbSubject;
use mockall::predicate;
use uuid::Uuid;

use crate::test_utils::{TestContext, sample_subject};

// Wrapper reproducing the create handler's uniqueness check against the
// mocked repository.
async fn test_create_subject_wrapper(
    ctx: &mut TestContext,
    user_id: Uuid,
    code: &'static str,
) -> Result<DbSubject, AppError> {
    if ctx.subject_repo.get_subject_by_code(code).await?.is_some() {
        return Err(AppError(CourseError::field(
            "code",
            format!("Subject code {} is already in use", code),
        )));
    }

    let subject = ctx
        .subject_repo
        .create_subject(code, "Operating Systems", "", 3, "1/2026", user_id)
        .await?;

    Ok(subject)
}

// Wrapper reproducing the delete handler's ownership gate.
async fn test_delete_subject_wrapper(
    ctx: &mut TestContext,
    actor: &Actor,
    id: Uuid,
) -> Result<DeleteSubjectResponse, AppError> {
    let db_subject = ctx
        .subject_repo
        .get_subject_by_id(id)
        .await?
        .ok_or_else(|| AppError(CourseError::NotFound(format!(
            "Subject with ID {} not found",
            id
        ))))?;

    if !auth::can_mutate(actor, &Subject::from(db_subject)) {
        return Err(AppError(CourseError::Authorization(
            "You do not have permission to delete this subject".to_string(),
        )));
    }

    ctx.subject_repo.delete_subject(id).await?;

    Ok(DeleteSubjectResponse { id, deleted: true })
}

#[tokio::test]
async fn test_create_subject_success() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    ctx.subject_repo
        .expect_get_subject_by_code()
        .with(predicate::eq("OS300"))
        .returning(|_| Ok(None));

    ctx.subject_repo
        .expect_create_subject()
        .times(1)
        .returning(move |code, name, description, credits, semester, created_by| {
            let mut subject = sample_subject(code, Some(created_by));
            subject.name = name.to_string();
            subject.description = description.to_string();
            subject.credits = credits;
            subject.semester = semester.to_string();
            Ok(subject)
        });

    let subject = test_create_subject_wrapper(&mut ctx, user_id, "OS300")
        .await
        .unwrap();

    // The creator is the owner as soon as the subject exists
    assert_eq!(subject.code, "OS300");
    assert_eq!(subject.created_by, Some(user_id));
}

#[tokio::test]
async fn test_create_subject_duplicate_code() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    ctx.subject_repo
        .expect_get_subject_by_code()
        .with(predicate::eq("OS300"))
        .returning(|code| Ok(Some(sample_subject(code, Some(Uuid::new_v4())))));

    ctx.subject_repo
        .expect_create_subject()
        .times(0)
        .returning(|_, _, _, _, _, created_by| Ok(sample_subject("OS300", Some(created_by))));

    let result = test_create_subject_wrapper(&mut ctx, user_id, "OS300").await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        CourseError::FieldValidation { field, .. } => assert_eq!(field, "code"),
        e => panic!("Expected FieldValidation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_delete_subject_as_owner() {
    let mut ctx = TestContext::new();
    let owner = Uuid::new_v4();
    let subject = sample_subject("CS101", Some(owner));
    let subject_id = subject.id;

    ctx.subject_repo
        .expect_get_subject_by_id()
        .with(predicate::eq(subject_id))
        .returning(move |_| Ok(Some(subject.clone())));

    ctx.subject_repo
        .expect_delete_subject()
        .with(predicate::eq(subject_id))
        .times(1)
        .returning(|_| Ok(()));

    let actor = Actor::new(owner);
    let response = test_delete_subject_wrapper(&mut ctx, &actor, subject_id)
        .await
        .unwrap();

    assert!(response.deleted);
    assert_eq!(response.id, subject_id);
}

#[tokio::test]
async fn test_delete_subject_denied_for_non_owner() {
    let mut ctx = TestContext::new();
    let subject = sample_subject("CS101", Some(Uuid::new_v4()));
    let subject_id = subject.id;

    ctx.subject_repo
        .expect_get_subject_by_id()
        .with(predicate::eq(subject_id))
        .returning(move |_| Ok(Some(subject.clone())));

    // The delete must never reach the repository
    ctx.subject_repo
        .expect_delete_subject()
        .times(0)
        .returning(|_| Ok(()));

    // A scheduled student can view the subject but still may not delete it
    let actor = Actor::with_student(Uuid::new_v4(), Uuid::new_v4(), [subject_id]);
    let result = test_delete_subject_wrapper(&mut ctx, &actor, subject_id).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        CourseError::Authorization(_) => {}
        e => panic!("Expected Authorization error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_delete_subject_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.subject_repo
        .expect_get_subject_by_id()
        .with(predicate::eq(id))
        .returning(|_| Ok(None));

    let actor = Actor::new(Uuid::new_v4());
    let result = test_delete_subject_wrapper(&mut ctx, &actor, id).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        CourseError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
