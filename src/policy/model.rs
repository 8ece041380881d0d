//! LockPolicy struct definition and classification.

use super::types::{LockMode, LockQuery};
use crate::names::companion_name;
use std::collections::HashMap;

/// The lock declarations of one record type.
///
/// Built by [`PolicyRegistry::declare_locked`](super::PolicyRegistry::declare_locked)
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockPolicy {
    type_name: String,

    /// Every declared name, in declaration order, duplicates preserved.
    locked: Vec<String>,

    always_locked: Vec<String>,
    optionally_locked: Vec<String>,

    /// Companion names, positionally matching `optionally_locked`.
    locking: Vec<String>,

    /// One query per classified name.
    queries: HashMap<String, LockQuery>,
}

impl LockPolicy {
    /// The policy of a type that never declared anything.
    pub fn empty(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// All declared attribute names, in declaration order.
    pub fn locked_attribute_names(&self) -> &[String] {
        &self.locked
    }

    /// Declared attributes without a companion field.
    pub fn always_locked_attribute_names(&self) -> &[String] {
        &self.always_locked
    }

    /// Declared attributes governed by a companion field.
    pub fn optionally_locked_attribute_names(&self) -> &[String] {
        &self.optionally_locked
    }

    /// The companion fields themselves.
    pub fn locking_attribute_names(&self) -> &[String] {
        &self.locking
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    /// Whether `attribute` was declared locked (classified or not).
    pub fn is_declared(&self, attribute: &str) -> bool {
        self.locked.iter().any(|name| name == attribute)
    }

    /// Whether `attribute` is a companion field.
    pub fn is_locking_attribute(&self, attribute: &str) -> bool {
        self.locking.iter().any(|name| name == attribute)
    }

    /// The lock query installed for `attribute`, if it was classified.
    pub fn lock_query(&self, attribute: &str) -> Option<&LockQuery> {
        self.queries.get(attribute)
    }

    pub fn lock_mode(&self, attribute: &str) -> Option<LockMode> {
        self.lock_query(attribute).map(LockQuery::mode)
    }

    /// Declared names that were never classified because the table was
    /// missing when they were declared.
    pub fn unclassified_attribute_names(&self) -> Vec<&str> {
        self.locked
            .iter()
            .filter(|name| !self.queries.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Return a copy extended by one declaration call.
    ///
    /// `columns` is `None` when the table does not exist yet: the names are
    /// recorded but not classified. A name that already has a lock query keeps
    /// it; classification never changes once made.
    pub(super) fn with_declaration(&self, names: &[String], columns: Option<&[String]>) -> Self {
        let mut next = self.clone();
        next.locked.extend(names.iter().cloned());

        let Some(columns) = columns else {
            return next;
        };

        for name in names {
            if next.queries.contains_key(name) {
                continue;
            }

            let companion = companion_name(name);
            if columns.contains(&companion) {
                next.optionally_locked.push(name.clone());
                next.locking.push(companion.clone());
                next.queries.insert(name.clone(), LockQuery::Companion(companion));
            } else {
                next.always_locked.push(name.clone());
                next.queries.insert(name.clone(), LockQuery::Always);
            }
        }

        next
    }
}
