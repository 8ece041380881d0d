//! Lock queries and update validation for one record type.

use super::rules::ChangeRule;
use super::types::{FieldErrors, LockValidationResult};
use crate::policy::LockPolicy;
use crate::record::LockedRecord;

/// Evaluates a type's [`LockPolicy`] against its instances.
#[derive(Debug, Clone, Copy)]
pub struct LockEvaluator<'p> {
    policy: &'p LockPolicy,
}

impl<'p> LockEvaluator<'p> {
    pub fn new(policy: &'p LockPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &'p LockPolicy {
        self.policy
    }

    /// Whether `attribute` is currently locked on `record`.
    ///
    /// True iff the attribute was declared locked and its lock query returns
    /// true: always for always-locked attributes, the companion's current value
    /// for optionally-locked ones. Accepts any string-like name.
    pub fn is_attribute_locked<R, N>(&self, record: &R, attribute: N) -> bool
    where
        R: LockedRecord + ?Sized,
        N: AsRef<str>,
    {
        let attribute = attribute.as_ref();
        self.policy.is_declared(attribute)
            && self
                .policy
                .lock_query(attribute)
                .is_some_and(|query| query.is_locked(record))
    }

    /// Run both change rules against a pending update of `record`.
    ///
    /// Nothing is rejected for new records or inside an unlock scope.
    pub fn validate_update<R: LockedRecord + ?Sized>(&self, record: &R) -> LockValidationResult {
        let mut errors = FieldErrors::new();
        self.validate_into(record, &mut errors);

        if errors.is_empty() {
            LockValidationResult::pass()
        } else {
            LockValidationResult::fail(errors)
        }
    }

    /// Run both change rules, appending to an existing error list.
    pub fn validate_into<R: LockedRecord + ?Sized>(&self, record: &R, errors: &mut FieldErrors) {
        for rule in ChangeRule::ALL {
            rule.check(self.policy, record, errors);
        }
    }
}
