//! Stable string codes for every precond error.

pub const NULL_VIOLATION: &str = "NULL_VIOLATION";
pub const EMPTINESS_VIOLATION: &str = "EMPTINESS_VIOLATION";
pub const BLANK_VIOLATION: &str = "BLANK_VIOLATION";
pub const DEFAULT_VALUE_VIOLATION: &str = "DEFAULT_VALUE_VIOLATION";
pub const CONDITION_VIOLATION: &str = "CONDITION_VIOLATION";
pub const RANGE_VIOLATION: &str = "RANGE_VIOLATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a code that stays stable across message wording changes.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
