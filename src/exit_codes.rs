//! Exit code constants for the fieldlock CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unknown type or attribute)
//! - 2: Validation failure (a locked attribute was changed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or misuse of an unlock scope.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the attempted update changed one or more locked attributes.
pub const VALIDATION_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
