//! Two-bound range checks. Bounds are not validated: with `start > end`,
//! the inclusive and exclusive "in range" checks always fail and the
//! "not in range" checks always pass.

use std::fmt::Display;

use precond_core::{Expectation, GuardResult};

use super::comparison::{
    check_greater_than, check_greater_than_or_equal_to, check_less_than,
    check_less_than_or_equal_to, ensure,
};

/// Passes iff `start <= value <= end`. The lower bound is checked first, so
/// it decides the message when both fail.
pub fn is_in_range<T: PartialOrd + Display>(
    value: T,
    start: T,
    end: T,
    name: Option<&str>,
) -> GuardResult<T> {
    check_greater_than_or_equal_to(&value, &start, name)?;
    check_less_than_or_equal_to(&value, &end, name)?;
    Ok(value)
}

/// Passes iff `start < value < end`.
pub fn is_in_range_exclusive<T: PartialOrd + Display>(
    value: T,
    start: T,
    end: T,
    name: Option<&str>,
) -> GuardResult<T> {
    check_greater_than(&value, &start, name)?;
    check_less_than(&value, &end, name)?;
    Ok(value)
}

/// Passes iff `value < start || value > end`.
pub fn is_not_in_range<T: PartialOrd + Display>(
    value: T,
    start: T,
    end: T,
    name: Option<&str>,
) -> GuardResult<T> {
    ensure(value < start || value > end, &value, name, || {
        Expectation::NotInRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    })?;
    Ok(value)
}

/// Passes iff `value <= start || value >= end`. The endpoints themselves are
/// allowed.
pub fn is_not_in_range_exclusive<T: PartialOrd + Display>(
    value: T,
    start: T,
    end: T,
    name: Option<&str>,
) -> GuardResult<T> {
    ensure(value <= start || value >= end, &value, name, || {
        Expectation::NotInRangeExclusive {
            start: start.to_string(),
            end: end.to_string(),
        }
    })?;
    Ok(value)
}
