//! MemoryStore: tables, rows, and the save path.

use super::record::MemoryRecord;
use super::schema::{TableDescriptor, TableSchema};
use crate::error::{FieldLockError, Result, SchemaError};
use crate::evaluator::LockEvaluator;
use crate::policy::{LockPolicy, PolicyRegistry};
use crate::record::LockedRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
struct Table {
    rows: BTreeMap<u64, BTreeMap<String, Value>>,
    next_id: u64,
}

/// An in-memory persistence layer that enforces lock policies on update.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schemas: BTreeMap<String, TableSchema>,
    tables: BTreeMap<String, Table>,
    registry: Arc<PolicyRegistry>,
}

impl MemoryStore {
    /// An empty store with its own policy registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store that declares into and reads from `registry`.
    pub fn with_registry(registry: Arc<PolicyRegistry>) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    // =========================================================================
    // Schema
    // =========================================================================

    /// Provision a table, replacing any existing table of the same name.
    pub fn create_table(&mut self, schema: TableSchema) {
        debug!(table = %schema.name, columns = ?schema.columns, "created table");
        self.tables.insert(
            schema.name.clone(),
            Table {
                rows: BTreeMap::new(),
                next_id: 1,
            },
        );
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Drop a table and its rows. Returns whether it existed.
    pub fn drop_table(&mut self, name: &str) -> bool {
        self.schemas.remove(name);
        self.tables.remove(name).is_some()
    }

    pub fn table_exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.schemas.get(name)
    }

    /// A schema descriptor for `type_name`, whether or not its table exists yet.
    pub fn descriptor<'s>(&'s self, type_name: &'s str) -> TableDescriptor<'s> {
        TableDescriptor {
            type_name,
            tables: &self.schemas,
        }
    }

    /// Declare locked attributes for the records of table `type_name`.
    pub fn declare_locked<N: AsRef<str>>(
        &self,
        type_name: &str,
        attribute_names: &[N],
    ) -> Result<Arc<LockPolicy>> {
        self.registry
            .declare_locked(&self.descriptor(type_name), attribute_names)
    }

    /// The lock policy of `type_name` (empty if undeclared).
    pub fn policy(&self, type_name: &str) -> Arc<LockPolicy> {
        self.registry.policy(type_name)
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// A new, unsaved record for table `type_name`.
    pub fn build(&self, type_name: &str) -> Result<MemoryRecord> {
        let schema = self
            .schemas
            .get(type_name)
            .ok_or_else(|| SchemaError::TableMissing(type_name.to_string()))?;
        Ok(MemoryRecord::new(schema))
    }

    /// Build, assign, and save a new record.
    pub fn create<K, V, I>(&mut self, type_name: &str, values: I) -> Result<MemoryRecord>
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = self.build(type_name)?;
        record.assign(values)?;
        self.save(&mut record)?;
        Ok(record)
    }

    /// Load a stored record by id.
    pub fn find(&self, type_name: &str, id: u64) -> Result<Option<MemoryRecord>> {
        let table = self
            .tables
            .get(type_name)
            .ok_or_else(|| SchemaError::TableMissing(type_name.to_string()))?;
        Ok(table
            .rows
            .get(&id)
            .map(|row| MemoryRecord::loaded(type_name, id, row.clone())))
    }

    /// Persist `record`.
    ///
    /// New records are inserted without lock checks. Updates run both change
    /// rules first; if any attribute is rejected the errors are left on the
    /// record, nothing is written, and `Ok(false)` is returned. Saving a
    /// persisted record whose row was removed fails with `RecordNotFound`.
    pub fn save(&mut self, record: &mut MemoryRecord) -> Result<bool> {
        let type_name = record.type_name().to_string();

        if !record.is_new_record() {
            let policy = self.registry.policy(&type_name);
            let result = LockEvaluator::new(&policy).validate_update(&*record);
            if !result.passed {
                debug!(
                    type_name = %type_name,
                    errors = ?result.errors.full_messages(),
                    "update rejected"
                );
                record.set_errors(result.errors);
                return Ok(false);
            }
        }

        let table = self
            .tables
            .get_mut(&type_name)
            .ok_or_else(|| SchemaError::TableMissing(type_name.clone()))?;

        let id = match record.id() {
            Some(id) if !table.rows.contains_key(&id) => {
                return Err(FieldLockError::RecordNotFound { type_name, id });
            }
            Some(id) => id,
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };

        table.rows.insert(id, record.attributes().clone());
        record.mark_persisted(id);
        Ok(true)
    }

    /// Assign `values` to `record` and save it.
    pub fn update_attributes<K, V, I>(
        &mut self,
        record: &mut MemoryRecord,
        values: I,
    ) -> Result<bool>
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        record.assign(values)?;
        self.save(record)
    }

    /// Number of stored rows in `type_name`.
    pub fn count(&self, type_name: &str) -> usize {
        self.tables
            .get(type_name)
            .map(|table| table.rows.len())
            .unwrap_or(0)
    }
}
