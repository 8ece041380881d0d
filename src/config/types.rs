//! Configuration entry types and defaults for fieldlock.

use serde::{Deserialize, Serialize};

/// A provisioned table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TableConfig {
    /// Ordered column names.
    pub columns: Vec<String>,
}

/// One `declare_locked` call, applied in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockDeclaration {
    /// Record type (table) name. The table does not have to be provisioned.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Attribute names to lock.
    pub attributes: Vec<String>,
}

/// Default tracing filter when `FIELDLOCK_LOG` is not set.
pub fn default_log_filter() -> String {
    "warn".to_string()
}
