//! Error handling for precond.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod expectation;
pub mod guard_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use expectation::Expectation;
pub use guard_error::{argument_name, BlankReason, GuardError, GuardResult, ViolationKind};
