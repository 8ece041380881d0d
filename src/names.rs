//! Attribute naming rules shared by declarations, config, and the store.

use regex::Regex;
use std::sync::LazyLock;

/// Suffix of the companion boolean that controls an optionally-locked attribute.
pub const LOCKED_SUFFIX: &str = "_locked";

static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid identifier regex")
});

/// Whether `name` can be used as a table or attribute name.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// The companion field name for `attribute` (`<attribute>_locked`).
pub fn companion_name(attribute: &str) -> String {
    format!("{attribute}{LOCKED_SUFFIX}")
}
