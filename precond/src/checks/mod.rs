//! The pure check functions, grouped by precondition family.

pub mod comparison;
pub mod condition;
pub mod existence;
pub mod range;

pub use comparison::{
    is_equal_to, is_greater_than, is_greater_than_or_equal_to, is_less_than,
    is_less_than_or_equal_to, is_not_equal_to,
};
pub use condition::{is_false, is_required_that, is_true};
pub use existence::{
    is_not_default, is_not_empty, is_not_empty_iter, is_not_null, is_not_null_or_empty,
    is_not_null_or_empty_iter, is_not_null_or_whitespace,
};
pub use range::{is_in_range, is_in_range_exclusive, is_not_in_range, is_not_in_range_exclusive};
