//! Normalization of raw footstep text.
//!
//! Mirrors the dashboard's input box: leading zeros are dropped and an
//! empty field counts as zero.

use thiserror::Error;

/// Raw footstep text that cannot be turned into a count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Contains something other than ASCII digits
    #[error("footsteps must be a whole number, got '{0}'")]
    NotANumber(String),

    /// Larger than the predictor accepts
    #[error("footsteps value '{0}' is too large")]
    TooLarge(String),
}

/// Turn user-entered text into a footstep count.
pub fn normalize_footsteps(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(raw.to_string()));
    }

    let digits = trimmed.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }

    digits
        .parse::<i64>()
        .map_err(|_| InputError::TooLarge(raw.to_string()))
}
