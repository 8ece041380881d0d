//! Implementation of the `fieldlock check` command.
//!
//! Creates a record, attempts an update, and reports rejected attributes.
//! Exits with the validation failure code when the update is rejected.

use crate::cli::CheckArgs;
use fieldlock::config::Config;
use fieldlock::error::{FieldLockError, Result};
use fieldlock::evaluator::with_unlocked;
use fieldlock::store::MemoryStore;
use serde_json::{Map, Value};

/// Execute the `fieldlock check` command.
pub fn cmd_check(config: &Config, args: CheckArgs) -> Result<()> {
    let mut store = config.build_store()?;
    let summary = run_check(&mut store, &args)?;
    println!("{}", summary);
    Ok(())
}

/// Create from `--before`, update with `--after`, and summarize the outcome.
///
/// # Returns
///
/// * `Ok(summary)` - The update was accepted
/// * `Err(FieldLockError::ValidationError)` - Locked attributes were changed
pub(super) fn run_check(store: &mut MemoryStore, args: &CheckArgs) -> Result<String> {
    let before = parse_object("--before", &args.before)?;
    let after = parse_object("--after", &args.after)?;

    if !store.table_exists(&args.type_name) {
        return Err(FieldLockError::UnknownRecordType(args.type_name.clone()));
    }

    let mut record = store.create(&args.type_name, before)?;
    let changed: Vec<String> = after.keys().cloned().collect();

    let saved = if args.unlocked {
        with_unlocked(&mut record, |r| store.update_attributes(r, after))??
    } else {
        store.update_attributes(&mut record, after)?
    };

    if !saved {
        return Err(FieldLockError::ValidationError(
            record.errors().full_messages().join("; "),
        ));
    }

    if changed.is_empty() {
        Ok(format!("Update to '{}' accepted", args.type_name))
    } else {
        Ok(format!(
            "Update to '{}' accepted ({})",
            args.type_name,
            changed.join(", ")
        ))
    }
}

fn parse_object(flag: &str, raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(FieldLockError::UserError(format!(
            "{} must be a JSON object",
            flag
        ))),
        Err(e) => Err(FieldLockError::UserError(format!(
            "failed to parse {} as JSON: {}",
            flag, e
        ))),
    }
}
