//! Table definitions and lazy schema introspection.

use crate::error::SchemaError;
use crate::record::RecordSchema;
use std::collections::BTreeMap;

/// A provisioned table: its name and ordered column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<String>,
}

impl TableSchema {
    pub fn new<N: Into<String>>(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = N>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// A type descriptor that introspects the store when asked.
///
/// Borrowing the table map rather than a copied column list is what lets a
/// declaration observe a table that has not been created yet.
#[derive(Debug, Clone, Copy)]
pub struct TableDescriptor<'s> {
    pub(super) type_name: &'s str,
    pub(super) tables: &'s BTreeMap<String, TableSchema>,
}

impl RecordSchema for TableDescriptor<'_> {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn column_names(&self) -> Result<Vec<String>, SchemaError> {
        self.tables
            .get(self.type_name)
            .map(|table| table.columns.clone())
            .ok_or_else(|| SchemaError::TableMissing(self.type_name.to_string()))
    }
}
