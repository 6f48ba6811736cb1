use chrono::{Duration, TimeZone, Utc};
use coursecal_api::handlers::event::validate_event_times;
use coursecal_api::middleware::error_handling::AppError;
use coursecal_core::{
    auth::{self, Actor},
    errors::CourseError,
    models::subject::Subject,
};
use mockall::predicate;
use rstest::rstest;
use uuid::Uuid;

use crate::test_utils::{TestContext, sample_event, sample_subject};

#[rstest]
#[case(0, false)] // start == end
#[case(-30, false)] // start after end
#[case(30, true)]
#[case(1, true)]
fn test_validate_event_times(#[case] duration_minutes: i64, #[case] valid: bool) {
    let start_time = Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap();
    let end_time = start_time + Duration::minutes(duration_minutes);

    let result = validate_event_times(start_time, end_time);

    assert_eq!(result.is_ok(), valid);
}

#[test]
fn test_validate_event_times_names_end_time() {
    let start_time = Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap();

    let result = validate_event_times(start_time, start_time);

    match result.unwrap_err() {
        CourseError::FieldValidation { field, .. } => assert_eq!(field, "end_time"),
        e => panic!("Expected FieldValidation error, got: {:?}", e),
    }
}

// Wrapper reproducing the delete handler's transitive ownership gate: event
// rights derive from the parent subject.
async fn test_delete_event_wrapper(
    ctx: &mut TestContext,
    actor: &Actor,
    event_id: Uuid,
) -> Result<(), AppError> {
    let event = ctx
        .event_repo
        .get_event_by_id(event_id)
        .await?
        .ok_or_else(|| {
            AppError(CourseError::NotFound(format!(
                "Event with ID {} not found",
                event_id
            )))
        })?;

    let subject = ctx
        .subject_repo
        .get_subject_by_id(event.subject_id)
        .await?
        .ok_or_else(|| {
            AppError(CourseError::NotFound(format!(
                "Subject with ID {} not found",
                event.subject_id
            )))
        })?;

    if !auth::can_mutate(actor, &Subject::from(subject)) {
        return Err(AppError(CourseError::Authorization(
            "You do not have permission to manage events for this subject".to_string(),
        )));
    }

    ctx.event_repo.delete_event(event_id).await?;

    Ok(())
}

#[tokio::test]
async fn test_delete_event_as_subject_owner() {
    let mut ctx = TestContext::new();
    let owner = Uuid::new_v4();
    let subject = sample_subject("CS101", Some(owner));
    let event = sample_event(subject.id, Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap());
    let event_id = event.id;
    let subject_id = subject.id;

    ctx.event_repo
        .expect_get_event_by_id()
        .with(predicate::eq(event_id))
        .returning(move |_| Ok(Some(event.clone())));

    ctx.subject_repo
        .expect_get_subject_by_id()
        .with(predicate::eq(subject_id))
        .returning(move |_| Ok(Some(subject.clone())));

    ctx.event_repo
        .expect_delete_event()
        .with(predicate::eq(event_id))
        .times(1)
        .returning(|_| Ok(()));

    let actor = Actor::new(owner);
    let result = test_delete_event_wrapper(&mut ctx, &actor, event_id).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_event_denied_for_scheduled_student() {
    let mut ctx = TestContext::new();
    let subject = sample_subject("CS101", Some(Uuid::new_v4()));
    let event = sample_event(subject.id, Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap());
    let event_id = event.id;
    let subject_id = subject.id;

    ctx.event_repo
        .expect_get_event_by_id()
        .with(predicate::eq(event_id))
        .returning(move |_| Ok(Some(event.clone())));

    ctx.subject_repo
        .expect_get_subject_by_id()
        .with(predicate::eq(subject_id))
        .returning(move |_| Ok(Some(subject.clone())));

    ctx.event_repo
        .expect_delete_event()
        .times(0)
        .returning(|_| Ok(()));

    // Viewing rights through the schedule do not extend to event mutation
    let actor = Actor::with_student(Uuid::new_v4(), Uuid::new_v4(), [subject_id]);
    let result = test_delete_event_wrapper(&mut ctx, &actor, event_id).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        CourseError::Authorization(_) => {}
        e => panic!("Expected Authorization error, got: {:?}", e),
    }
}
