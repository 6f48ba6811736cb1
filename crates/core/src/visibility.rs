//! # Visibility Resolver
//!
//! Computes the set of subjects a user may see: the union of the subjects
//! they own and the subjects their student profile has scheduled. This set
//! is the sole basis for the calendar feed, the subject listing, and the
//! scheduling eligibility check — events are visible exactly when their
//! parent subject is in the set.

use std::collections::HashSet;

use crate::models::subject::Subject;

/// Union of owned and scheduled subjects, deduplicated by id.
///
/// The first occurrence wins, so owned subjects keep their position when the
/// same subject also appears in the scheduled list (a user scheduling their
/// own subject is permitted and sees it once).
pub fn merge_visible(owned: Vec<Subject>, scheduled: Vec<Subject>) -> Vec<Subject> {
    let mut seen = HashSet::new();
    owned
        .into_iter()
        .chain(scheduled)
        .filter(|subject| seen.insert(subject.id))
        .collect()
}
