//! Lock policy declaration and registry.
//!
//! A record type opts into write protection by declaring attribute names as
//! locked. Each declared name is classified against the type's persisted
//! fields:
//!
//! - **Always locked**: no companion field exists. The attribute can only
//!   change inside an unlock scope.
//! - **Optionally locked**: a boolean companion `<name>_locked` exists. The
//!   attribute is locked only while that companion is true, and the companion
//!   itself can only change inside an unlock scope.
//!
//! # Policies
//!
//! Declarations produce an immutable [`LockPolicy`] per type. Declaring again
//! publishes a new policy that extends the previous one; snapshots already
//! handed out never change.
//!
//! # Unprovisioned storage
//!
//! A type may be declared before its table exists (during schema migration).
//! The declared names are still recorded but stay unclassified, and a warning
//! is logged instead of failing the declaration.

mod model;
mod registry;
mod types;


// Re-export public API
pub use model::LockPolicy;
pub use registry::PolicyRegistry;
pub use types::{LockMode, LockQuery};
