//! # Authorization Policy
//!
//! Ownership-based access decisions for subjects and, transitively, their
//! events. The policy is a pair of pure predicates over an [`Actor`] and a
//! [`Subject`] so the rules stay independent of the HTTP framework and the
//! database: the caller assembles the actor once per request and asks
//! questions about specific resources.
//!
//! The rules are deliberately small:
//!
//! - Mutation is owner-only. No roles, no delegation, no admin override at
//!   this layer. A subject with no recorded owner is mutable by nobody.
//! - Viewing extends to students who have the subject in their personal
//!   schedule.
//! - A teacher profile grants nothing. Teachers manage subjects on paper
//!   (`managed_subjects`), but the relation is never consulted here.
//!
//! Events carry no permissions of their own; whoever may mutate the parent
//! subject may mutate its events.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::subject::Subject;

/// Student-specific context for authorization decisions: the profile id and
/// the set of subject ids in the personal schedule.
#[derive(Debug, Clone)]
pub struct StudentContext {
    pub student_id: Uuid,
    pub scheduled_subjects: HashSet<Uuid>,
}

/// The requesting user, as the policy sees them: the opaque user handle and
/// an optional student context. Users without a student profile can own and
/// mutate subjects but never gain schedule-based visibility.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: Uuid,
    pub student: Option<StudentContext>,
}

impl Actor {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            student: None,
        }
    }

    pub fn with_student(
        user_id: Uuid,
        student_id: Uuid,
        scheduled_subjects: impl IntoIterator<Item = Uuid>,
    ) -> Self {
        Self {
            user_id,
            student: Some(StudentContext {
                student_id,
                scheduled_subjects: scheduled_subjects.into_iter().collect(),
            }),
        }
    }

    pub fn is_student(&self) -> bool {
        self.student.is_some()
    }
}

/// True iff the actor owns the subject. Owner-only; `created_by` of `None`
/// denies everyone.
pub fn can_mutate(actor: &Actor, subject: &Subject) -> bool {
    subject.created_by == Some(actor.user_id)
}

/// True iff the actor owns the subject or has it in their personal schedule.
pub fn can_view(actor: &Actor, subject: &Subject) -> bool {
    can_mutate(actor, subject)
        || actor
            .student
            .as_ref()
            .is_some_and(|s| s.scheduled_subjects.contains(&subject.id))
}
