//! Guard: the configured face of the checks.
//!
//! Delegates every operation to the free functions, traces violations and
//! applies the configured `is_false` message policy. Holds no mutable state,
//! so one instance can be shared freely.

use std::fmt::Display;
use std::iter::Peekable;

use precond_core::constants::{DEFAULT_FALSE_MESSAGE, LEGACY_FALSE_MESSAGE};
use precond_core::{ErrorCode, GuardConfig, GuardResult, Sequence};
use tracing::debug;

use crate::checks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    trace_violations: bool,
    legacy_is_false_message: bool,
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(&GuardConfig::default())
    }
}

impl Guard {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            trace_violations: config.effective_trace_violations(),
            legacy_is_false_message: config.effective_legacy_is_false_message(),
        }
    }

    pub fn traces_violations(&self) -> bool {
        self.trace_violations
    }

    /// Message reported by `is_false` when the caller supplies none.
    pub fn is_false_default_message(&self) -> &'static str {
        if self.legacy_is_false_message {
            LEGACY_FALSE_MESSAGE
        } else {
            DEFAULT_FALSE_MESSAGE
        }
    }

    fn observe<T>(&self, result: GuardResult<T>) -> GuardResult<T> {
        if self.trace_violations {
            if let Err(ref e) = result {
                debug!(
                    kind = %e.kind(),
                    code = e.error_code(),
                    argument = ?e.name(),
                    error = %e,
                    "precondition violated"
                );
            }
        }
        result
    }

    // --- Existence ---

    pub fn is_not_null<T>(&self, value: Option<T>, name: Option<&str>) -> GuardResult<T> {
        self.observe(checks::is_not_null(value, name))
    }

    pub fn is_not_empty<S: Sequence>(&self, sequence: S, name: Option<&str>) -> GuardResult<S> {
        self.observe(checks::is_not_empty(sequence, name))
    }

    pub fn is_not_empty_iter<I: IntoIterator>(
        &self,
        iter: I,
        name: Option<&str>,
    ) -> GuardResult<Peekable<I::IntoIter>> {
        self.observe(checks::is_not_empty_iter(iter, name))
    }

    pub fn is_not_null_or_empty<S: Sequence>(
        &self,
        sequence: Option<S>,
        name: Option<&str>,
    ) -> GuardResult<S> {
        self.observe(checks::is_not_null_or_empty(sequence, name))
    }

    pub fn is_not_null_or_empty_iter<I: IntoIterator>(
        &self,
        iter: Option<I>,
        name: Option<&str>,
    ) -> GuardResult<Peekable<I::IntoIter>> {
        self.observe(checks::is_not_null_or_empty_iter(iter, name))
    }

    pub fn is_not_null_or_whitespace<S: AsRef<str>>(
        &self,
        text: Option<S>,
        name: Option<&str>,
    ) -> GuardResult<S> {
        self.observe(checks::is_not_null_or_whitespace(text, name))
    }

    pub fn is_not_default<T: Default + PartialEq>(
        &self,
        value: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_not_default(value, name))
    }

    // --- Conditions ---

    pub fn is_required_that(&self, condition: bool, message: Option<&str>) -> GuardResult<()> {
        self.observe(checks::is_required_that(condition, message))
    }

    pub fn is_true(&self, condition: bool, message: Option<&str>) -> GuardResult<()> {
        self.observe(checks::is_true(condition, message))
    }

    pub fn is_false(&self, condition: bool, message: Option<&str>) -> GuardResult<()> {
        let message = message.unwrap_or(self.is_false_default_message());
        self.observe(checks::is_false(condition, Some(message)))
    }

    // --- Comparison ---

    pub fn is_greater_than<T: PartialOrd + Display>(
        &self,
        value: T,
        bound: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_greater_than(value, bound, name))
    }

    pub fn is_greater_than_or_equal_to<T: PartialOrd + Display>(
        &self,
        value: T,
        bound: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_greater_than_or_equal_to(value, bound, name))
    }

    pub fn is_less_than<T: PartialOrd + Display>(
        &self,
        value: T,
        bound: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_less_than(value, bound, name))
    }

    pub fn is_less_than_or_equal_to<T: PartialOrd + Display>(
        &self,
        value: T,
        bound: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_less_than_or_equal_to(value, bound, name))
    }

    pub fn is_equal_to<T: PartialEq + Display>(
        &self,
        value: T,
        expected: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_equal_to(value, expected, name))
    }

    pub fn is_not_equal_to<T: PartialEq + Display>(
        &self,
        value: T,
        expected: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_not_equal_to(value, expected, name))
    }

    // --- Range ---

    pub fn is_in_range<T: PartialOrd + Display>(
        &self,
        value: T,
        start: T,
        end: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_in_range(value, start, end, name))
    }

    pub fn is_in_range_exclusive<T: PartialOrd + Display>(
        &self,
        value: T,
        start: T,
        end: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_in_range_exclusive(value, start, end, name))
    }

    pub fn is_not_in_range<T: PartialOrd + Display>(
        &self,
        value: T,
        start: T,
        end: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_not_in_range(value, start, end, name))
    }

    pub fn is_not_in_range_exclusive<T: PartialOrd + Display>(
        &self,
        value: T,
        start: T,
        end: T,
        name: Option<&str>,
    ) -> GuardResult<T> {
        self.observe(checks::is_not_in_range_exclusive(value, start, end, name))
    }
}
