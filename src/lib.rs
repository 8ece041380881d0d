//! fieldlock: field-level write protection for persistent records.
//!
//! A record type declares some of its attributes as locked. Locked attributes
//! can be set freely while the record is new, but once it is persisted an
//! update that changes them is rejected unless it runs inside an explicit
//! unlock scope.
//!
//! - [`policy`] declares and classifies locked attributes per record type.
//! - [`evaluator`] answers lock queries, validates updates, and provides the
//!   unlock scope.
//! - [`record`] is the contract a persistence layer implements.
//! - [`store`] is an in-memory persistence layer built on that contract.
//!
//! ```
//! use fieldlock::evaluator::{LockEvaluator, with_unlocked};
//! use fieldlock::store::{MemoryStore, TableSchema};
//! use serde_json::json;
//!
//! let mut store = MemoryStore::new();
//! store.create_table(TableSchema::new("accounts", ["owner", "balance", "balance_locked"]));
//! store.declare_locked("accounts", &["owner", "balance"])?;
//!
//! let mut account = store.create(
//!     "accounts",
//!     [("owner", json!("ada")), ("balance_locked", json!(true))],
//! )?;
//! assert!(!store.update_attributes(&mut account, [("owner", json!("bob"))])?);
//! assert_eq!(account.errors().full_messages(), vec!["owner is locked"]);
//!
//! assert!(with_unlocked(&mut account, |a| store.save(a))??);
//!
//! let policy = store.policy("accounts");
//! assert!(LockEvaluator::new(&policy).is_attribute_locked(&account, "balance"));
//! # Ok::<(), fieldlock::error::FieldLockError>(())
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod exit_codes;
pub mod names;
pub mod policy;
pub mod record;
pub mod store;

#[cfg(test)]
mod test_support;
