//! Reusable field-level validation rules
//!
//! Each rule either accepts the value or returns a [`ValidationError`] naming
//! the field. Lengths are counted in characters, not bytes.

use super::error::ValidationError;

/// Reject a missing value, returning the inner value otherwise
pub fn not_null<T>(value: Option<T>, field_name: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::null(field_name))
}

/// Reject a missing, empty or whitespace-only string
pub fn not_null_or_empty<'a>(
    value: Option<&'a str>,
    field_name: &str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::null_or_empty(field_name)),
    }
}

/// Reject a string shorter than `min_length` characters
pub fn min_length(value: &str, min_length: usize, field_name: &str) -> Result<(), ValidationError> {
    if value.chars().count() < min_length {
        return Err(ValidationError::too_short(field_name, min_length));
    }

    Ok(())
}

/// Reject a string longer than `max_length` characters
pub fn max_length(value: &str, max_length: usize, field_name: &str) -> Result<(), ValidationError> {
    if value.chars().count() > max_length {
        return Err(ValidationError::too_long(field_name, max_length));
    }

    Ok(())
}
