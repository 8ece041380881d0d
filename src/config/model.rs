//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for fieldlock.
///
/// Describes the tables of an in-memory store and the lock declarations to
/// apply to them. Unknown fields in the YAML are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter directive (e.g. `warn`, `fieldlock=debug`).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Provisioned tables by name.
    #[serde(default)]
    pub tables: BTreeMap<String, TableConfig>,

    /// Lock declarations, in the order they are applied.
    #[serde(default)]
    pub locks: Vec<LockDeclaration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            tables: BTreeMap::new(),
            locks: Vec::new(),
        }
    }
}
