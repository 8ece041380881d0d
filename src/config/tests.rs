//! Tests for config functionality.

use crate::config::{Config, LockDeclaration};
use crate::error::FieldLockError;
use std::io::Write;
use tempfile::NamedTempFile;

const TESTER_YAML: &str = r#"
log_filter: "fieldlock=debug"
tables:
  unlocked_attribute_testers:
    columns: [test_unlocked]
  locked_attribute_testers:
    columns: [test_unlocked, test_always, test_optional, test_optional_locked]
locks:
  - type: locked_attribute_testers
    attributes: [test_always, test_optional]
"#;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.log_filter, "warn");
    assert!(config.tables.is_empty());
    assert!(config.locks.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.log_filter, "warn");
    assert!(config.tables.is_empty());
}

#[test]
fn test_parse_full_yaml() {
    let config = Config::from_yaml(TESTER_YAML).unwrap();

    assert_eq!(config.log_filter, "fieldlock=debug");
    assert_eq!(config.tables.len(), 2);
    assert_eq!(
        config.tables["locked_attribute_testers"].columns,
        vec!["test_unlocked", "test_always", "test_optional", "test_optional_locked"]
    );
    assert_eq!(
        config.locks,
        vec![LockDeclaration {
            type_name: "locked_attribute_testers".to_string(),
            attributes: vec!["test_always".to_string(), "test_optional".to_string()],
        }]
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
log_filter: info
future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = Config::from_yaml("tables: [not, a, map]");
    assert!(matches!(result, Err(FieldLockError::ConfigError(_))));
}

#[test]
fn test_validate_rejects_bad_names() {
    let yaml = r#"
tables:
  "bad table":
    columns: [id]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("not a valid table name"));

    let yaml = r#"
tables:
  accounts:
    columns: [id, "2fa"]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("not a valid column name"));

    let yaml = r#"
locks:
  - type: accounts
    attributes: ["owner-id"]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("'owner-id' is not a valid attribute name"));
}

#[test]
fn test_validate_rejects_empty_and_duplicate_columns() {
    let yaml = r#"
tables:
  accounts:
    columns: []
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("has no columns"));

    let yaml = r#"
tables:
  accounts:
    columns: [owner, owner]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("appears twice"));
}

#[test]
fn test_validate_rejects_empty_declaration() {
    let yaml = r#"
locks:
  - type: accounts
    attributes: []
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("has no attributes"));
}

#[test]
fn test_declaration_for_missing_table_is_valid() {
    let yaml = r#"
locks:
  - type: missing_table_testers
    attributes: [test_one]
"#;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TESTER_YAML.as_bytes()).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.locks.len(), 1);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.yaml")).unwrap_err();

    assert!(matches!(err, FieldLockError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_yaml_round_trip() {
    let config = Config::from_yaml(TESTER_YAML).unwrap();
    let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();

    assert_eq!(reparsed.tables, config.tables);
    assert_eq!(reparsed.locks, config.locks);
}

#[test]
fn test_build_store_applies_declarations() {
    let store = Config::from_yaml(TESTER_YAML).unwrap().build_store().unwrap();

    assert!(store.table_exists("locked_attribute_testers"));
    assert!(store.table_exists("unlocked_attribute_testers"));

    let policy = store.policy("locked_attribute_testers");
    assert_eq!(policy.always_locked_attribute_names(), ["test_always"]);
    assert_eq!(policy.optionally_locked_attribute_names(), ["test_optional"]);
    assert_eq!(policy.locking_attribute_names(), ["test_optional_locked"]);

    assert!(!store.registry().is_declared("unlocked_attribute_testers"));
}

#[test]
fn test_build_store_tolerates_unprovisioned_table() {
    let yaml = r#"
locks:
  - type: missing_table_testers
    attributes: [test_one]
  - type: missing_table_testers
    attributes: [test_two]
"#;
    let store = Config::from_yaml(yaml).unwrap().build_store().unwrap();
    let policy = store.policy("missing_table_testers");

    assert_eq!(policy.locked_attribute_names(), ["test_one", "test_two"]);
    assert!(policy.always_locked_attribute_names().is_empty());
    assert!(policy.optionally_locked_attribute_names().is_empty());
}
