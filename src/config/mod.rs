//! Configuration model for fieldlock.
//!
//! This module defines the Config struct that represents `fieldlock.yaml`:
//! the tables to provision and the lock declarations to apply, in order.
//! Unknown fields are ignored and every field has a default.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{LockDeclaration, TableConfig};
