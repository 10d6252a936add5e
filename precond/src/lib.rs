//! # precond
//!
//! Fail-fast argument guards. Each check takes a value plus an optional
//! argument name and returns the value unchanged, or a `GuardError`
//! describing the violated precondition.
//!
//! ## Checks
//! - **Existence**: `is_not_null`, `is_not_empty`, `is_not_empty_iter`,
//!   `is_not_null_or_empty`, `is_not_null_or_empty_iter`,
//!   `is_not_null_or_whitespace`, `is_not_default`
//! - **Condition**: `is_required_that`, `is_true`, `is_false`
//! - **Comparison**: `is_greater_than`, `is_greater_than_or_equal_to`,
//!   `is_less_than`, `is_less_than_or_equal_to`, `is_equal_to`, `is_not_equal_to`
//! - **Range**: `is_in_range`, `is_in_range_exclusive`, `is_not_in_range`,
//!   `is_not_in_range_exclusive`
//!
//! The free functions are pure. `Guard` wraps the same checks with
//! configuration and violation tracing.
//!
//! ```
//! use precond::{guard, is_in_range};
//!
//! fn set_volume(level: u8) -> precond::GuardResult<u8> {
//!     let level = guard!(is_in_range(level, 0, 11))?;
//!     Ok(level)
//! }
//!
//! assert_eq!(set_volume(7), Ok(7));
//! assert_eq!(
//!     is_in_range(12, 1, 3, Some("v")).unwrap_err().to_string(),
//!     "Argument 'v' must be less than or equal to '3' but was '12'."
//! );
//! ```

pub mod checks;
pub mod guard;
mod macros;

pub use checks::*;
pub use guard::Guard;
pub use precond_core::{
    argument_name, BlankReason, ConfigError, ErrorCode, Expectation, GuardConfig, GuardError,
    GuardResult, Sequence, ViolationKind,
};
