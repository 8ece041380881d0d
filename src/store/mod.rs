//! In-memory persistence layer.
//!
//! A small host for the locking engine: tables with ordered columns, rows
//! keyed by auto-increment id, records with dirty tracking, and a save path
//! that runs the change rules before every update. The CLI and the test
//! suite drive the engine through it.

mod memory;
mod record;
mod schema;


// Re-export public API
pub use memory::MemoryStore;
pub use record::{ChangeSet, MemoryRecord};
pub use schema::{TableDescriptor, TableSchema};
