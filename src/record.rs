//! The contract between the locking engine and a persistence layer.
//!
//! A persistence layer describes its record types through [`RecordSchema`]
//! and its instances through [`LockedRecord`]. Nothing else about storage is
//! visible to the engine.

use crate::error::SchemaError;
use crate::evaluator::UnlockState;

/// Introspection of a record type's persisted fields.
pub trait RecordSchema {
    /// Stable name of the record type. Policies are registered under it.
    fn type_name(&self) -> &str;

    /// Names of the persisted fields.
    ///
    /// Returns [`SchemaError::TableMissing`] when the backing storage has not
    /// been provisioned yet; lock declaration tolerates that case.
    fn column_names(&self) -> Result<Vec<String>, SchemaError>;
}

/// A record instance as seen during lock evaluation.
pub trait LockedRecord {
    /// Name of this record's type; must match the [`RecordSchema`] it was declared with.
    fn type_name(&self) -> &str;

    /// Whether the record has never been persisted.
    fn is_new_record(&self) -> bool;

    /// Whether `attribute` differs from the persisted baseline for the pending save.
    fn attribute_changed(&self, attribute: &str) -> bool;

    /// Current value of a boolean field. `None` when unset.
    fn boolean_attribute(&self, attribute: &str) -> Option<bool>;

    /// The instance's unlock flag.
    fn unlock_state(&self) -> &UnlockState;
}
