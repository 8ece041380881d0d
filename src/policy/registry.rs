//! Process-wide and local policy registries.

use super::model::LockPolicy;
use crate::error::{FieldLockError, Result, SchemaError};
use crate::names::is_valid_identifier;
use crate::record::RecordSchema;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};
use tracing::{debug, warn};

static GLOBAL_REGISTRY: LazyLock<PolicyRegistry> = LazyLock::new(PolicyRegistry::new);

/// Lock policies keyed by record type name.
///
/// Lookups return `Arc` snapshots. A declaration replaces the stored policy
/// with an extended copy, so readers holding an older snapshot are unaffected.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    policies: RwLock<HashMap<String, Arc<LockPolicy>>>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every record type of the process.
    pub fn global() -> &'static PolicyRegistry {
        &GLOBAL_REGISTRY
    }

    /// Declare `attribute_names` as locked for the type described by `schema`.
    ///
    /// Repeatable: each call appends to the type's policy. Each name is
    /// classified as optionally locked when the schema has a `<name>_locked`
    /// column and as always locked otherwise.
    ///
    /// # Returns
    ///
    /// * `Ok(policy)` - The type's policy after this declaration
    /// * `Err(FieldLockError::InvalidDeclaration)` - A name is not an identifier
    /// * `Err(FieldLockError::Schema)` - Introspection failed for a reason other
    ///   than a missing table
    ///
    /// A missing table is not an error: the names are recorded unclassified
    /// and a warning is logged.
    pub fn declare_locked<S, N>(&self, schema: &S, attribute_names: &[N]) -> Result<Arc<LockPolicy>>
    where
        S: RecordSchema + ?Sized,
        N: AsRef<str>,
    {
        let type_name = schema.type_name();
        let names = attribute_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                if is_valid_identifier(name) {
                    Ok(name.to_string())
                } else {
                    Err(FieldLockError::InvalidDeclaration(format!(
                        "'{}' is not a valid attribute name for '{}'",
                        name, type_name
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let columns = match schema.column_names() {
            Ok(columns) => Some(columns),
            Err(SchemaError::TableMissing(table)) => {
                warn!(
                    type_name,
                    table = %table,
                    attributes = ?names,
                    "type doesn't yet have a defined table; locked attributes left unclassified"
                );
                None
            }
            Err(e) => return Err(e.into()),
        };

        let mut policies = self
            .policies
            .write()
            .unwrap_or_else(|poison| poison.into_inner());

        let current = policies
            .get(type_name)
            .cloned()
            .unwrap_or_else(|| Arc::new(LockPolicy::empty(type_name)));
        let next = Arc::new(current.with_declaration(&names, columns.as_deref()));

        debug!(
            type_name,
            always = ?next.always_locked_attribute_names(),
            optional = ?next.optionally_locked_attribute_names(),
            "declared locked attributes"
        );

        policies.insert(type_name.to_string(), Arc::clone(&next));
        Ok(next)
    }

    /// The policy for `type_name`, or an empty one if it never declared anything.
    pub fn policy(&self, type_name: &str) -> Arc<LockPolicy> {
        self.get(type_name)
            .unwrap_or_else(|| Arc::new(LockPolicy::empty(type_name)))
    }

    /// The policy for `type_name`, if it declared anything.
    pub fn get(&self, type_name: &str) -> Option<Arc<LockPolicy>> {
        self.policies
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .get(type_name)
            .cloned()
    }

    pub fn is_declared(&self, type_name: &str) -> bool {
        self.get(type_name).is_some()
    }

    /// Declared type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let policies = self
            .policies
            .read()
            .unwrap_or_else(|poison| poison.into_inner());
        let mut names: Vec<String> = policies.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn locked_attribute_names(&self, type_name: &str) -> Vec<String> {
        self.policy(type_name).locked_attribute_names().to_vec()
    }

    pub fn always_locked_attribute_names(&self, type_name: &str) -> Vec<String> {
        self.policy(type_name).always_locked_attribute_names().to_vec()
    }

    pub fn optionally_locked_attribute_names(&self, type_name: &str) -> Vec<String> {
        self.policy(type_name)
            .optionally_locked_attribute_names()
            .to_vec()
    }

    pub fn locking_attribute_names(&self, type_name: &str) -> Vec<String> {
        self.policy(type_name).locking_attribute_names().to_vec()
    }
}
