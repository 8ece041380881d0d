//! Field errors and validation results.

/// Message recorded against a rejected attribute.
pub const LOCKED_MESSAGE: &str = "is locked";

/// A single rejected attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub attribute: String,
    pub message: String,
}

impl FieldError {
    pub fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// The `"<attribute> is locked"` error.
    pub fn locked(attribute: impl Into<String>) -> Self {
        Self::new(attribute, LOCKED_MESSAGE)
    }

    /// `"<attribute> <message>"`.
    pub fn full_message(&self) -> String {
        format!("{} {}", self.attribute, self.message)
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.attribute, self.message)
    }
}

/// Errors accumulated on a record during a save attempt, in the order found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(attribute, message));
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Messages recorded against `attribute`.
    pub fn on(&self, attribute: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.attribute == attribute)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::full_message).collect()
    }

    /// `(attribute, message)` pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .map(|e| (e.attribute.clone(), e.message.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Result of checking one update attempt.
#[derive(Debug, Clone)]
pub struct LockValidationResult {
    /// Whether the update may proceed.
    pub passed: bool,
    /// Rejected attributes (empty if passed).
    pub errors: FieldErrors,
}

impl LockValidationResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            errors: FieldErrors::new(),
        }
    }

    pub fn fail(errors: FieldErrors) -> Self {
        Self {
            passed: false,
            errors,
        }
    }

    /// Format the result as a user-friendly error message.
    ///
    /// ```text
    /// Locked attributes changed
    ///
    /// test_always is locked
    /// test_optional is locked
    /// ```
    pub fn format_error(&self) -> String {
        if self.passed {
            return String::new();
        }

        let mut msg = String::from("Locked attributes changed\n\n");
        for error in &self.errors {
            msg.push_str(&format!("{}\n", error.full_message()));
        }
        msg
    }
}
