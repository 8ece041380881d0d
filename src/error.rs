//! Error types for fieldlock.
//!
//! Uses thiserror for derive macros. Locked-attribute violations are *not*
//! errors here: they accumulate as field errors on the record and surface
//! through the save result. Only misuse and configuration problems are errors.

use crate::exit_codes;
use thiserror::Error;

/// Failure to introspect the persisted fields of a record type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The backing table has not been provisioned yet (e.g. mid-migration).
    #[error("table '{0}' does not exist")]
    TableMissing(String),

    /// Any other introspection failure.
    #[error("schema for '{type_name}' is unavailable: {reason}")]
    Unavailable { type_name: String, reason: String },
}

/// Main error type for fieldlock operations.
#[derive(Error, Debug)]
pub enum FieldLockError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// `with_unlocked` was entered while the same instance was already unlocked.
    #[error("nested unlock scope on a '{type_name}' record")]
    NestedUnlock { type_name: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A lock declaration named something that cannot be an attribute.
    #[error("invalid lock declaration: {0}")]
    InvalidDeclaration(String),

    /// A write targeted a column the record's table does not have.
    #[error("unknown attribute '{attribute}' for '{type_name}'")]
    UnknownAttribute {
        type_name: String,
        attribute: String,
    },

    #[error("unknown record type '{0}'")]
    UnknownRecordType(String),

    /// A persisted record was saved but its row is gone from the table.
    #[error("'{type_name}' record {id} no longer exists")]
    RecordNotFound { type_name: String, id: u64 },

    /// Config could not be read, parsed, or failed validation.
    #[error("{0}")]
    ConfigError(String),

    /// An update was rejected because it changed locked attributes.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl FieldLockError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FieldLockError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            FieldLockError::UserError(_)
            | FieldLockError::NestedUnlock { .. }
            | FieldLockError::Schema(_)
            | FieldLockError::InvalidDeclaration(_)
            | FieldLockError::UnknownAttribute { .. }
            | FieldLockError::UnknownRecordType(_)
            | FieldLockError::RecordNotFound { .. }
            | FieldLockError::ConfigError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for fieldlock operations.
pub type Result<T> = std::result::Result<T, FieldLockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_has_validation_exit_code() {
        let err = FieldLockError::ValidationError("test_always is locked".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn misuse_errors_are_user_errors() {
        let nested = FieldLockError::NestedUnlock {
            type_name: "accounts".to_string(),
        };
        assert_eq!(nested.exit_code(), exit_codes::USER_ERROR);

        let schema: FieldLockError = SchemaError::TableMissing("accounts".to_string()).into();
        assert_eq!(schema.exit_code(), exit_codes::USER_ERROR);

        let config = FieldLockError::ConfigError("bad yaml".to_string());
        assert_eq!(config.exit_code(), exit_codes::USER_ERROR);

        let stale = FieldLockError::RecordNotFound {
            type_name: "accounts".to_string(),
            id: 7,
        };
        assert_eq!(stale.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(stale.to_string(), "'accounts' record 7 no longer exists");
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = FieldLockError::NestedUnlock {
            type_name: "accounts".to_string(),
        };
        assert_eq!(err.to_string(), "nested unlock scope on a 'accounts' record");

        let err = FieldLockError::UnknownAttribute {
            type_name: "accounts".to_string(),
            attribute: "balance".to_string(),
        };
        assert_eq!(err.to_string(), "unknown attribute 'balance' for 'accounts'");

        let err: FieldLockError = SchemaError::TableMissing("accounts".to_string()).into();
        assert_eq!(err.to_string(), "table 'accounts' does not exist");
    }
}
