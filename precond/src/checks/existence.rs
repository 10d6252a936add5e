//! Presence and shape checks.

use std::iter::Peekable;

use precond_core::{BlankReason, GuardError, GuardResult, Sequence};

/// Unwraps a present value, failing with `GuardError::Null` on `None`.
pub fn is_not_null<T>(value: Option<T>, name: Option<&str>) -> GuardResult<T> {
    value.ok_or_else(|| GuardError::null(name))
}

/// Returns the sequence if it holds at least one element.
pub fn is_not_empty<S: Sequence>(sequence: S, name: Option<&str>) -> GuardResult<S> {
    if sequence.has_no_elements() {
        return Err(GuardError::empty(name));
    }
    Ok(sequence)
}

/// Lazy form of `is_not_empty`.
///
/// Pulls at most one element, which stays buffered in the returned
/// `Peekable`. Safe on unbounded iterators.
pub fn is_not_empty_iter<I: IntoIterator>(
    iter: I,
    name: Option<&str>,
) -> GuardResult<Peekable<I::IntoIter>> {
    let mut iter = iter.into_iter().peekable();
    if iter.peek().is_none() {
        return Err(GuardError::empty(name));
    }
    Ok(iter)
}

/// `is_not_null` then `is_not_empty`. An absent sequence reports a null
/// violation, never an emptiness one.
pub fn is_not_null_or_empty<S: Sequence>(
    sequence: Option<S>,
    name: Option<&str>,
) -> GuardResult<S> {
    let sequence = is_not_null(sequence, name)?;
    is_not_empty(sequence, name)
}

/// Lazy form of `is_not_null_or_empty`. Pulls at most one element.
pub fn is_not_null_or_empty_iter<I: IntoIterator>(
    iter: Option<I>,
    name: Option<&str>,
) -> GuardResult<Peekable<I::IntoIter>> {
    let iter = is_not_null(iter, name)?;
    is_not_empty_iter(iter, name)
}

/// Rejects absent, empty and whitespace-only text. Whitespace is Unicode
/// `White_Space`.
pub fn is_not_null_or_whitespace<S: AsRef<str>>(
    text: Option<S>,
    name: Option<&str>,
) -> GuardResult<S> {
    let Some(text) = text else {
        return Err(GuardError::blank(name, BlankReason::Null));
    };
    match BlankReason::classify(text.as_ref()) {
        Some(reason) => Err(GuardError::blank(name, reason)),
        None => Ok(text),
    }
}

/// Rejects the default value of `T` (zero, empty string, `None`, epoch, ...).
pub fn is_not_default<T: Default + PartialEq>(value: T, name: Option<&str>) -> GuardResult<T> {
    if value == T::default() {
        return Err(GuardError::default_value(name));
    }
    Ok(value)
}
