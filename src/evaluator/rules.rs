//! The two pre-commit change rules every locked type gets.

use super::types::{FieldError, FieldErrors};
use crate::policy::LockPolicy;
use crate::record::LockedRecord;
use std::collections::HashSet;
use tracing::debug;

/// A change-validation rule run before an update is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeRule {
    /// Always-locked and optionally-locked attributes: a change is rejected
    /// when the attribute's lock query is true.
    LockedAttributes,
    /// Companion `<name>_locked` fields: any change is rejected.
    LockingAttributes,
}

impl ChangeRule {
    /// Both rules, in the order they run.
    pub const ALL: [ChangeRule; 2] = [ChangeRule::LockedAttributes, ChangeRule::LockingAttributes];

    /// Attributes this rule looks at, in declaration order, without repeats.
    pub fn attributes<'p>(&self, policy: &'p LockPolicy) -> Vec<&'p str> {
        let names = match self {
            ChangeRule::LockedAttributes => policy.locked_attribute_names(),
            ChangeRule::LockingAttributes => policy.locking_attribute_names(),
        };

        // Unclassified names have no lock query and are never checked.
        let mut seen = HashSet::new();
        names
            .iter()
            .map(String::as_str)
            .filter(|name| {
                *self == ChangeRule::LockingAttributes || policy.lock_query(name).is_some()
            })
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Run the rule, appending a `"<attribute> is locked"` error per rejected change.
    pub fn check<R: LockedRecord + ?Sized>(
        &self,
        policy: &LockPolicy,
        record: &R,
        errors: &mut FieldErrors,
    ) {
        if record.is_new_record() || record.unlock_state().is_unlocked() {
            return;
        }

        for attribute in self.attributes(policy) {
            if !record.attribute_changed(attribute) {
                continue;
            }

            let rejected = match self {
                ChangeRule::LockedAttributes => policy
                    .lock_query(attribute)
                    .is_some_and(|query| query.is_locked(record)),
                ChangeRule::LockingAttributes => true,
            };

            if rejected {
                debug!(
                    type_name = record.type_name(),
                    attribute, "rejected change to locked attribute"
                );
                errors.push(FieldError::locked(attribute));
            }
        }
    }
}
