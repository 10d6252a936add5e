//! Precondition violations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error_code::{self, ErrorCode};
use super::expectation::Expectation;
use crate::constants::UNKNOWN_ARGUMENT_NAME;

/// Convenience alias used by every check.
pub type GuardResult<T> = Result<T, GuardError>;

/// Resolves an optional argument name for diagnostics.
/// `None` and `Some("")` both become `[Unknown Argument Name]`.
pub fn argument_name(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_ARGUMENT_NAME,
    }
}

/// Which blank condition rejected a text argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankReason {
    Null,
    Empty,
    WhitespaceOnly,
}

impl BlankReason {
    /// Tag embedded in the failure message.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Null => "[NULL]",
            Self::Empty => "[EMPTY]",
            Self::WhitespaceOnly => "[WHITESPACE-ONLY]",
        }
    }

    /// Classifies present text. Returns `None` when the text holds at least one
    /// non-whitespace character.
    pub fn classify(text: &str) -> Option<Self> {
        if text.is_empty() {
            Some(Self::Empty)
        } else if text.chars().all(char::is_whitespace) {
            Some(Self::WhitespaceOnly)
        } else {
            None
        }
    }
}

impl fmt::Display for BlankReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Failure category, independent of the message details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Null,
    Emptiness,
    Blank,
    DefaultValue,
    Condition,
    Range,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Null => "null",
            Self::Emptiness => "emptiness",
            Self::Blank => "blank",
            Self::DefaultValue => "default_value",
            Self::Condition => "condition",
            Self::Range => "range",
        };
        f.write_str(s)
    }
}

/// A violated precondition.
///
/// Names are resolved when the error is built, so the stored `name` is never
/// empty. Use the constructors rather than building variants by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardError {
    /// Value was absent.
    #[error("Value cannot be null. (Parameter '{name}')")]
    Null { name: String },

    /// Sequence had no elements.
    #[error("Parameter '{name}' cannot be empty.")]
    Empty { name: String },

    /// Text was absent, empty or whitespace only.
    #[error("Parameter '{name}' cannot be empty or whitespace only, but was '{reason}'.")]
    Blank { name: String, reason: BlankReason },

    /// Value equalled its type's default.
    #[error("Specified argument was out of the range of valid values. (Parameter '{name}')")]
    DefaultValue { name: String },

    /// Boolean condition did not hold.
    #[error("{message}")]
    Condition { message: String },

    /// Comparison or range check failed.
    #[error("Argument '{name}' must {expectation} but was '{actual}'.")]
    Range {
        name: String,
        expectation: Expectation,
        actual: String,
    },
}

impl GuardError {
    pub fn null(name: Option<&str>) -> Self {
        Self::Null {
            name: argument_name(name).to_string(),
        }
    }

    pub fn empty(name: Option<&str>) -> Self {
        Self::Empty {
            name: argument_name(name).to_string(),
        }
    }

    pub fn blank(name: Option<&str>, reason: BlankReason) -> Self {
        Self::Blank {
            name: argument_name(name).to_string(),
            reason,
        }
    }

    pub fn default_value(name: Option<&str>) -> Self {
        Self::DefaultValue {
            name: argument_name(name).to_string(),
        }
    }

    pub fn condition(message: impl Into<String>) -> Self {
        Self::Condition {
            message: message.into(),
        }
    }

    /// Builds a range violation, rendering `actual` with `Display`.
    pub fn range<T: fmt::Display + ?Sized>(
        name: Option<&str>,
        expectation: Expectation,
        actual: &T,
    ) -> Self {
        Self::Range {
            name: argument_name(name).to_string(),
            expectation,
            actual: actual.to_string(),
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::Null { .. } => ViolationKind::Null,
            Self::Empty { .. } => ViolationKind::Emptiness,
            Self::Blank { .. } => ViolationKind::Blank,
            Self::DefaultValue { .. } => ViolationKind::DefaultValue,
            Self::Condition { .. } => ViolationKind::Condition,
            Self::Range { .. } => ViolationKind::Range,
        }
    }

    /// The argument name carried by the error. Condition failures carry none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Null { name }
            | Self::Empty { name }
            | Self::Blank { name, .. }
            | Self::DefaultValue { name }
            | Self::Range { name, .. } => Some(name.as_str()),
            Self::Condition { .. } => None,
        }
    }
}

impl ErrorCode for GuardError {
    fn error_code(&self) -> &'static str {
        match self.kind() {
            ViolationKind::Null => error_code::NULL_VIOLATION,
            ViolationKind::Emptiness => error_code::EMPTINESS_VIOLATION,
            ViolationKind::Blank => error_code::BLANK_VIOLATION,
            ViolationKind::DefaultValue => error_code::DEFAULT_VALUE_VIOLATION,
            ViolationKind::Condition => error_code::CONDITION_VIOLATION,
            ViolationKind::Range => error_code::RANGE_VIOLATION,
        }
    }
}
