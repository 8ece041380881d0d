//! Implementation of the `fieldlock show` command.
//!
//! Displays the lock classification of one or every declared type.

use crate::cli::ShowArgs;
use fieldlock::config::Config;
use fieldlock::error::{FieldLockError, Result};
use fieldlock::policy::LockPolicy;
use fieldlock::store::MemoryStore;

/// Execute the `fieldlock show` command.
pub fn cmd_show(config: &Config, args: ShowArgs) -> Result<()> {
    let store = config.build_store()?;
    print!("{}", render_show(&store, args.type_name.as_deref())?);
    Ok(())
}

/// Render the classification of `type_name`, or of every declared type.
pub(super) fn render_show(store: &MemoryStore, type_name: Option<&str>) -> Result<String> {
    let type_names = match type_name {
        Some(name) => {
            if !store.registry().is_declared(name) && !store.table_exists(name) {
                return Err(FieldLockError::UnknownRecordType(name.to_string()));
            }
            vec![name.to_string()]
        }
        None => store.registry().type_names(),
    };

    if type_names.is_empty() {
        return Ok("No lock declarations.\n".to_string());
    }

    let mut out = String::new();
    for (i, name) in type_names.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_policy(&store.policy(name), store.table_exists(name)));
    }
    Ok(out)
}

/// Render one policy as an indented block.
pub(super) fn render_policy(policy: &LockPolicy, provisioned: bool) -> String {
    let mut out = format!("{}:\n", policy.type_name());
    if !provisioned {
        out.push_str("  (table not provisioned)\n");
    }

    let rows = [
        ("Locked", policy.locked_attribute_names()),
        ("Always", policy.always_locked_attribute_names()),
        ("Optional", policy.optionally_locked_attribute_names()),
        ("Locking", policy.locking_attribute_names()),
    ];

    for (label, names) in rows {
        let list = if names.is_empty() {
            "-".to_string()
        } else {
            names.join(", ")
        };
        out.push_str(&format!("  {:<10}{}\n", format!("{}:", label), list));
    }

    let unclassified = policy.unclassified_attribute_names();
    if !unclassified.is_empty() {
        out.push_str(&format!("  {:<10}{}\n", "Pending:", unclassified.join(", ")));
    }

    out
}
