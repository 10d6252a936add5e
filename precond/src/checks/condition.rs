//! Boolean condition checks. These carry a message instead of an argument name.

use precond_core::constants::{
    DEFAULT_FALSE_MESSAGE, DEFAULT_REQUIRED_MESSAGE, DEFAULT_TRUE_MESSAGE,
};
use precond_core::{GuardError, GuardResult};

/// Fails with `message`, or the generic required-expectation message, when
/// `condition` is false.
pub fn is_required_that(condition: bool, message: Option<&str>) -> GuardResult<()> {
    if condition {
        return Ok(());
    }
    Err(GuardError::condition(message.unwrap_or(DEFAULT_REQUIRED_MESSAGE)))
}

pub fn is_true(condition: bool, message: Option<&str>) -> GuardResult<()> {
    is_required_that(condition, Some(message.unwrap_or(DEFAULT_TRUE_MESSAGE)))
}

pub fn is_false(condition: bool, message: Option<&str>) -> GuardResult<()> {
    is_required_that(!condition, Some(message.unwrap_or(DEFAULT_FALSE_MESSAGE)))
}
