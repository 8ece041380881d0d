//! Lock classification and lock-query dispatch.

use crate::record::LockedRecord;

/// How a declared attribute is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// No companion field; locked unconditionally once persisted.
    Always,
    /// Governed by a `<name>_locked` companion field.
    Optional,
}

impl LockMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockMode::Always => "always",
            LockMode::Optional => "optional",
        }
    }
}

impl std::fmt::Display for LockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `<name>_locked?` query for one locked attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockQuery {
    /// Constant true.
    Always,
    /// Reads the named companion boolean on the instance. Unset reads as false.
    Companion(String),
}

impl LockQuery {
    /// Evaluate the query against a record instance.
    pub fn is_locked<R: LockedRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            LockQuery::Always => true,
            LockQuery::Companion(companion) => record.boolean_attribute(companion).unwrap_or(false),
        }
    }

    pub fn mode(&self) -> LockMode {
        match self {
            LockQuery::Always => LockMode::Always,
            LockQuery::Companion(_) => LockMode::Optional,
        }
    }
}
