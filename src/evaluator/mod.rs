//! Lock evaluation for record instances.
//!
//! - [`LockEvaluator::is_attribute_locked`] answers whether an attribute is
//!   locked right now for one instance.
//! - [`LockEvaluator::validate_update`] runs the [`ChangeRule`]s a persistence
//!   layer calls before committing an update. Violations are returned as
//!   field errors, not as `Err`.
//! - [`with_unlocked`] suspends enforcement for one instance for the duration
//!   of a closure. Scopes do not nest.

mod rules;
mod types;
mod unlock;
mod validator;


// Re-export public API
pub use rules::ChangeRule;
pub use types::{FieldError, FieldErrors, LOCKED_MESSAGE, LockValidationResult};
pub use unlock::{UnlockGuard, UnlockState, attributes_unlocked, with_unlocked};
pub use validator::LockEvaluator;
