//! Single-bound ordering and equality checks.
//!
//! Each predicate is written as its pass condition, so values that are
//! unordered against the bound (`f64::NAN`) fail.

use std::fmt::Display;

use precond_core::{Expectation, GuardError, GuardResult};

/// Returns a range violation built by `expectation` unless `passes`.
pub(crate) fn ensure<T: Display + ?Sized>(
    passes: bool,
    value: &T,
    name: Option<&str>,
    expectation: impl FnOnce() -> Expectation,
) -> GuardResult<()> {
    if passes {
        return Ok(());
    }
    Err(GuardError::range(name, expectation(), value))
}

pub(crate) fn check_greater_than<T: PartialOrd + Display>(
    value: &T,
    bound: &T,
    name: Option<&str>,
) -> GuardResult<()> {
    ensure(value > bound, value, name, || Expectation::GreaterThan {
        bound: bound.to_string(),
    })
}

pub(crate) fn check_greater_than_or_equal_to<T: PartialOrd + Display>(
    value: &T,
    bound: &T,
    name: Option<&str>,
) -> GuardResult<()> {
    ensure(value >= bound, value, name, || {
        Expectation::GreaterThanOrEqualTo {
            bound: bound.to_string(),
        }
    })
}

pub(crate) fn check_less_than<T: PartialOrd + Display>(
    value: &T,
    bound: &T,
    name: Option<&str>,
) -> GuardResult<()> {
    ensure(value < bound, value, name, || Expectation::LessThan {
        bound: bound.to_string(),
    })
}

pub(crate) fn check_less_than_or_equal_to<T: PartialOrd + Display>(
    value: &T,
    bound: &T,
    name: Option<&str>,
) -> GuardResult<()> {
    ensure(value <= bound, value, name, || Expectation::LessThanOrEqualTo {
        bound: bound.to_string(),
    })
}

/// Passes iff `value > bound`.
pub fn is_greater_than<T: PartialOrd + Display>(
    value: T,
    bound: T,
    name: Option<&str>,
) -> GuardResult<T> {
    check_greater_than(&value, &bound, name)?;
    Ok(value)
}

/// Passes iff `value >= bound`.
pub fn is_greater_than_or_equal_to<T: PartialOrd + Display>(
    value: T,
    bound: T,
    name: Option<&str>,
) -> GuardResult<T> {
    check_greater_than_or_equal_to(&value, &bound, name)?;
    Ok(value)
}

/// Passes iff `value < bound`.
pub fn is_less_than<T: PartialOrd + Display>(
    value: T,
    bound: T,
    name: Option<&str>,
) -> GuardResult<T> {
    check_less_than(&value, &bound, name)?;
    Ok(value)
}

/// Passes iff `value <= bound`.
pub fn is_less_than_or_equal_to<T: PartialOrd + Display>(
    value: T,
    bound: T,
    name: Option<&str>,
) -> GuardResult<T> {
    check_less_than_or_equal_to(&value, &bound, name)?;
    Ok(value)
}

/// Passes iff `value == expected`.
pub fn is_equal_to<T: PartialEq + Display>(
    value: T,
    expected: T,
    name: Option<&str>,
) -> GuardResult<T> {
    ensure(value == expected, &value, name, || Expectation::EqualTo {
        bound: expected.to_string(),
    })?;
    Ok(value)
}

/// Passes iff `value != expected`.
pub fn is_not_equal_to<T: PartialEq + Display>(
    value: T,
    expected: T,
    name: Option<&str>,
) -> GuardResult<T> {
    ensure(value != expected, &value, name, || Expectation::NotEqualTo {
        bound: expected.to_string(),
    })?;
    Ok(value)
}
