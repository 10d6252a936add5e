//! The relation a comparison check expected to hold.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected relation between the checked value and its bound(s).
///
/// Bounds are stored already rendered, so a `GuardError` stays independent of
/// the type that was compared. `Display` yields the part of the message that
/// follows "must", e.g. `be less than '3'` or
/// `not be in the range '1' - '3' (exclusive)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "relation", rename_all = "snake_case")]
pub enum Expectation {
    GreaterThan { bound: String },
    GreaterThanOrEqualTo { bound: String },
    LessThan { bound: String },
    LessThanOrEqualTo { bound: String },
    EqualTo { bound: String },
    NotEqualTo { bound: String },
    NotInRange { start: String, end: String },
    NotInRangeExclusive { start: String, end: String },
}

impl Expectation {
    /// The relation phrase, without bounds.
    pub fn relation(&self) -> &'static str {
        match self {
            Self::GreaterThan { .. } => "be greater than",
            Self::GreaterThanOrEqualTo { .. } => "be greater than or equal to",
            Self::LessThan { .. } => "be less than",
            Self::LessThanOrEqualTo { .. } => "be less than or equal to",
            Self::EqualTo { .. } => "be equal to",
            Self::NotEqualTo { .. } => "not be equal to",
            Self::NotInRange { .. } | Self::NotInRangeExclusive { .. } => "not be in the range",
        }
    }

    /// Rendered bounds, in the order they appear in the message.
    pub fn bounds(&self) -> Vec<&str> {
        match self {
            Self::GreaterThan { bound }
            | Self::GreaterThanOrEqualTo { bound }
            | Self::LessThan { bound }
            | Self::LessThanOrEqualTo { bound }
            | Self::EqualTo { bound }
            | Self::NotEqualTo { bound } => vec![bound.as_str()],
            Self::NotInRange { start, end } | Self::NotInRangeExclusive { start, end } => {
                vec![start.as_str(), end.as_str()]
            }
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInRange { start, end } => {
                write!(f, "{} '{}' - '{}'", self.relation(), start, end)
            }
            Self::NotInRangeExclusive { start, end } => {
                write!(f, "{} '{}' - '{}' (exclusive)", self.relation(), start, end)
            }
            Self::GreaterThan { bound }
            | Self::GreaterThanOrEqualTo { bound }
            | Self::LessThan { bound }
            | Self::LessThanOrEqualTo { bound }
            | Self::EqualTo { bound }
            | Self::NotEqualTo { bound } => write!(f, "{} '{}'", self.relation(), bound),
        }
    }
}
