use coursecal_api::middleware::error_handling::AppError;
use coursecal_core::models::profile::ScheduleChangeResponse;
use mockall::predicate;
use uuid::Uuid;

use crate::test_utils::TestContext;

// Wrapper reproducing the schedule handler's membership logic against the
// mocked repositories.
async fn test_schedule_wrapper(
    ctx: &mut TestContext,
    student_id: Uuid,
    subject_id: Uuid,
) -> Result<ScheduleChangeResponse, AppError> {
    let already_scheduled = ctx
        .profile_repo
        .schedule_contains(student_id, subject_id)
        .await?;

    if already_scheduled {
        return Ok(ScheduleChangeResponse {
            subject_id,
            scheduled: true,
            changed: false,
        });
    }

    ctx.profile_repo
        .add_schedule_entry(student_id, subject_id)
        .await?;

    Ok(ScheduleChangeResponse {
        subject_id,
        scheduled: true,
        changed: true,
    })
}

async fn test_unschedule_wrapper(
    ctx: &mut TestContext,
    student_id: Uuid,
    subject_id: Uuid,
) -> Result<ScheduleChangeResponse, AppError> {
    let scheduled = ctx
        .profile_repo
        .schedule_contains(student_id, subject_id)
        .await?;

    if !scheduled {
        return Ok(ScheduleChangeResponse {
            subject_id,
            scheduled: false,
            changed: false,
        });
    }

    ctx.profile_repo
        .remove_schedule_entry(student_id, subject_id)
        .await?;

    Ok(ScheduleChangeResponse {
        subject_id,
        scheduled: false,
        changed: true,
    })
}

#[tokio::test]
async fn test_schedule_subject_success() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let subject_id = Uuid::new_v4();

    ctx.profile_repo
        .expect_schedule_contains()
        .with(predicate::eq(student_id), predicate::eq(subject_id))
        .returning(|_, _| Ok(false));

    ctx.profile_repo
        .expect_add_schedule_entry()
        .with(predicate::eq(student_id), predicate::eq(subject_id))
        .times(1)
        .returning(|_, _| Ok(()));

    let response = test_schedule_wrapper(&mut ctx, student_id, subject_id)
        .await
        .unwrap();

    assert!(response.scheduled);
    assert!(response.changed);
}

#[tokio::test]
async fn test_schedule_subject_already_scheduled_is_noop() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let subject_id = Uuid::new_v4();

    ctx.profile_repo
        .expect_schedule_contains()
        .with(predicate::eq(student_id), predicate::eq(subject_id))
        .returning(|_, _| Ok(true));

    // No membership row may be written for a re-schedule
    ctx.profile_repo
        .expect_add_schedule_entry()
        .times(0)
        .returning(|_, _| Ok(()));

    let response = test_schedule_wrapper(&mut ctx, student_id, subject_id)
        .await
        .unwrap();

    assert!(response.scheduled);
    assert!(!response.changed);
}

#[tokio::test]
async fn test_unschedule_subject_success() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let subject_id = Uuid::new_v4();

    ctx.profile_repo
        .expect_schedule_contains()
        .with(predicate::eq(student_id), predicate::eq(subject_id))
        .returning(|_, _| Ok(true));

    ctx.profile_repo
        .expect_remove_schedule_entry()
        .with(predicate::eq(student_id), predicate::eq(subject_id))
        .times(1)
        .returning(|_, _| Ok(()));

    let response = test_unschedule_wrapper(&mut ctx, student_id, subject_id)
        .await
        .unwrap();

    assert!(!response.scheduled);
    assert!(response.changed);
}

#[tokio::test]
async fn test_unschedule_subject_not_scheduled_is_noop() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let subject_id = Uuid::new_v4();

    ctx.profile_repo
        .expect_schedule_contains()
        .with(predicate::eq(student_id), predicate::eq(subject_id))
        .returning(|_, _| Ok(false));

    ctx.profile_repo
        .expect_remove_schedule_entry()
        .times(0)
        .returning(|_, _| Ok(()));

    let response = test_unschedule_wrapper(&mut ctx, student_id, subject_id)
        .await
        .unwrap();

    assert!(!response.scheduled);
    assert!(!response.changed);
}

#[tokio::test]
async fn test_schedule_then_unschedule_round_trip() {
    let mut ctx = TestContext::new();
    let student_id = Uuid::new_v4();
    let subject_id = Uuid::new_v4();

    // Not scheduled at first, scheduled after the add
    let mut calls = 0;
    ctx.profile_repo
        .expect_schedule_contains()
        .returning(move |_, _| {
            calls += 1;
            Ok(calls > 1)
        });

    ctx.profile_repo
        .expect_add_schedule_entry()
        .times(1)
        .returning(|_, _| Ok(()));

    ctx.profile_repo
        .expect_remove_schedule_entry()
        .times(1)
        .returning(|_, _| Ok(()));

    let scheduled = test_schedule_wrapper(&mut ctx, student_id, subject_id)
        .await
        .unwrap();
    assert!(scheduled.changed);

    let unscheduled = test_unschedule_wrapper(&mut ctx, student_id, subject_id)
        .await
        .unwrap();
    assert!(unscheduled.changed);
    assert!(!unscheduled.scheduled);
}
