//! # precond-core
//!
//! Foundation crate for precond argument guards.
//! Defines the failure taxonomy, error codes, constants, the `Sequence`
//! capability and guard configuration. The `precond` crate builds the
//! checks on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GuardConfig;
pub use errors::{
    argument_name, BlankReason, ConfigError, ErrorCode, Expectation, GuardError, GuardResult,
    ViolationKind,
};
pub use traits::Sequence;
