//! Setting value parse errors.

use thiserror::Error;

/// A user-supplied setting value outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} value '{value}' (expected one of: {expected})")]
pub struct ParseSettingError {
    field: &'static str,
    value: String,
    expected: String,
}

impl ParseSettingError {
    pub(crate) fn new(field: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
