//! Config loading, validation, and store construction.

use super::model::Config;
use crate::error::{FieldLockError, Result};
use crate::names::is_valid_identifier;
use crate::store::{MemoryStore, TableSchema};
use std::collections::HashSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(FieldLockError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FieldLockError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            FieldLockError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FieldLockError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - table, column, and attribute names must be identifiers
    /// - each table must have at least one column, with no duplicates
    /// - each lock declaration must name at least one attribute
    ///
    /// A lock declaration may name a table that is not listed; it is applied
    /// as a declaration on unprovisioned storage.
    pub fn validate(&self) -> Result<()> {
        for (name, table) in &self.tables {
            if !is_valid_identifier(name) {
                return Err(config_error(format!("'{}' is not a valid table name", name)));
            }

            if table.columns.is_empty() {
                return Err(config_error(format!("table '{}' has no columns", name)));
            }

            let mut seen = HashSet::new();
            for column in &table.columns {
                if !is_valid_identifier(column) {
                    return Err(config_error(format!(
                        "'{}' is not a valid column name in table '{}'",
                        column, name
                    )));
                }
                if !seen.insert(column.as_str()) {
                    return Err(config_error(format!(
                        "column '{}' appears twice in table '{}'",
                        column, name
                    )));
                }
            }
        }

        for (index, lock) in self.locks.iter().enumerate() {
            if !is_valid_identifier(&lock.type_name) {
                return Err(config_error(format!(
                    "locks[{}]: '{}' is not a valid type name",
                    index, lock.type_name
                )));
            }

            if lock.attributes.is_empty() {
                return Err(config_error(format!(
                    "locks[{}]: declaration for '{}' has no attributes",
                    index, lock.type_name
                )));
            }

            if let Some(bad) = lock.attributes.iter().find(|a| !is_valid_identifier(a)) {
                return Err(config_error(format!(
                    "locks[{}]: '{}' is not a valid attribute name",
                    index, bad
                )));
            }
        }

        Ok(())
    }

    /// Build a store with every table provisioned and every declaration applied in order.
    pub fn build_store(&self) -> Result<MemoryStore> {
        let mut store = MemoryStore::new();

        for (name, table) in &self.tables {
            store.create_table(TableSchema::new(name.as_str(), table.columns.iter().cloned()));
        }

        for lock in &self.locks {
            store.declare_locked(&lock.type_name, lock.attributes.as_slice())?;
        }

        Ok(store)
    }
}

fn config_error(msg: String) -> FieldLockError {
    FieldLockError::ConfigError(format!("config validation failed: {}", msg))
}
