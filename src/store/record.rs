//! In-memory record with dirty tracking.

use super::schema::TableSchema;
use crate::error::{FieldLockError, Result};
use crate::evaluator::{FieldErrors, UnlockState};
use crate::record::LockedRecord;
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute name → (persisted value, pending value).
pub type ChangeSet = BTreeMap<String, (Value, Value)>;

/// A row of a [`MemoryStore`](super::MemoryStore) table.
///
/// Every column starts out `null`. Writes are tracked against the last
/// persisted values until the next successful save.
#[derive(Debug, Clone)]
pub struct MemoryRecord {
    type_name: String,
    id: Option<u64>,
    attributes: BTreeMap<String, Value>,
    persisted: BTreeMap<String, Value>,
    errors: FieldErrors,
    unlock: UnlockState,
}

impl MemoryRecord {
    /// A new, unsaved record with every column of `table` set to `null`.
    pub fn new(table: &TableSchema) -> Self {
        let attributes: BTreeMap<String, Value> = table
            .columns
            .iter()
            .map(|column| (column.clone(), Value::Null))
            .collect();

        Self {
            type_name: table.name.clone(),
            id: None,
            persisted: attributes.clone(),
            attributes,
            errors: FieldErrors::new(),
            unlock: UnlockState::new(),
        }
    }

    /// A record loaded from a stored row.
    pub(super) fn loaded(type_name: &str, id: u64, row: BTreeMap<String, Value>) -> Self {
        Self {
            type_name: type_name.to_string(),
            id: Some(id),
            persisted: row.clone(),
            attributes: row,
            errors: FieldErrors::new(),
            unlock: UnlockState::new(),
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Current value of `attribute` (`None` if the column does not exist).
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Write one attribute. Fails for unknown columns.
    pub fn set(&mut self, attribute: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        let attribute = attribute.as_ref();
        match self.attributes.get_mut(attribute) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FieldLockError::UnknownAttribute {
                type_name: self.type_name.clone(),
                attribute: attribute.to_string(),
            }),
        }
    }

    /// Write several attributes. Stops at the first unknown column.
    pub fn assign<K, V, I>(&mut self, values: I) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (attribute, value) in values {
            self.set(attribute, value)?;
        }
        Ok(())
    }

    /// Attributes whose value differs from the persisted baseline.
    pub fn changes(&self) -> ChangeSet {
        self.attributes
            .iter()
            .filter_map(|(name, value)| {
                let old = self.persisted.get(name).cloned().unwrap_or(Value::Null);
                (old != *value).then(|| (name.clone(), (old, value.clone())))
            })
            .collect()
    }

    /// Whether any attribute differs from the persisted baseline.
    pub fn has_changes(&self) -> bool {
        self.attributes
            .iter()
            .any(|(name, value)| self.persisted.get(name).unwrap_or(&Value::Null) != value)
    }

    /// Errors from the last save attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub(super) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Make the current values the persisted baseline.
    pub(super) fn mark_persisted(&mut self, id: u64) {
        self.id = Some(id);
        self.persisted = self.attributes.clone();
        self.errors.clear();
    }
}

/// String column values that read as false.
const FALSE_STRINGS: [&str; 4] = ["0", "f", "false", "off"];

/// Truthiness of a column value when read as a lock flag.
///
/// Booleans read as themselves and numbers as non-zero. Strings follow the
/// usual boolean column casting: blank is unset, the spellings in
/// [`FALSE_STRINGS`] (any case) are false, and anything else is true.
/// `null` is unset.
fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(!FALSE_STRINGS.iter().any(|f| f.eq_ignore_ascii_case(s)))
            }
        }
        Value::Array(items) => Some(!items.is_empty()),
        Value::Object(map) => Some(!map.is_empty()),
    }
}

impl LockedRecord for MemoryRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn is_new_record(&self) -> bool {
        self.id.is_none()
    }

    fn attribute_changed(&self, attribute: &str) -> bool {
        match self.attributes.get(attribute) {
            Some(value) => self.persisted.get(attribute).unwrap_or(&Value::Null) != value,
            None => false,
        }
    }

    fn boolean_attribute(&self, attribute: &str) -> Option<bool> {
        self.attributes.get(attribute).and_then(truthy)
    }

    fn unlock_state(&self) -> &UnlockState {
        &self.unlock
    }
}
