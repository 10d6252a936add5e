/// precond version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Substituted for the argument name when a check is called without one.
pub const UNKNOWN_ARGUMENT_NAME: &str = "[Unknown Argument Name]";

/// Default message for `is_required_that`.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "The required argument expectation was not met.";

/// Default message for `is_true`.
pub const DEFAULT_TRUE_MESSAGE: &str = "Condition must be true.";

/// Default message for `is_false`.
pub const DEFAULT_FALSE_MESSAGE: &str = "Condition must be false.";

/// Default message older releases reported for `is_false`.
/// Only used when `GuardConfig::legacy_is_false_message` is on.
pub const LEGACY_FALSE_MESSAGE: &str = "Condition must be true.";

/// Environment overrides read by `GuardConfig::load` and `GuardConfig::from_env`.
pub const ENV_TRACE_VIOLATIONS: &str = "PRECOND_TRACE_VIOLATIONS";
pub const ENV_LEGACY_IS_FALSE_MESSAGE: &str = "PRECOND_LEGACY_IS_FALSE_MESSAGE";
