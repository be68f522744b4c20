// SPDX-License-Identifier: MPL-2.0
//! Errors raised while coercing form input into style values.

use std::fmt;

/// Reasons a form field's text was rejected.
///
/// A rejected value never reaches the style store; the previous value stays
/// in effect and the form shows the localized hint from [`InputError::i18n_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The field is empty (or whitespace only).
    Empty,
    /// The text is not an integer.
    NotANumber,
    /// The integer is below zero.
    Negative,
    /// The integer does not fit in the supported range.
    TooLarge,
    /// The text is not a `#rgb` / `#rrggbb` color.
    InvalidColor,
}

impl InputError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            InputError::Empty => "input-error-empty",
            InputError::NotANumber => "input-error-not-a-number",
            InputError::Negative => "input-error-negative",
            InputError::TooLarge => "input-error-too-large",
            InputError::InvalidColor => "input-error-invalid-color",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "value is empty"),
            InputError::NotANumber => write!(f, "value is not a number"),
            InputError::Negative => write!(f, "value is negative"),
            InputError::TooLarge => write!(f, "value is too large"),
            InputError::InvalidColor => write!(f, "value is not a hex color"),
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            InputError::Empty.i18n_key(),
            InputError::NotANumber.i18n_key(),
            InputError::Negative.i18n_key(),
            InputError::TooLarge.i18n_key(),
            InputError::InvalidColor.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(InputError::Negative.to_string(), "value is negative");
    }
}
