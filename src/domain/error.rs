use thiserror::Error;

/// Errors raised when a field fails a domain validation rule
///
/// The `Display` output of each variant is the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} should not be null")]
    Null { field: String },

    #[error("{field} should not be empty or null")]
    NullOrEmpty { field: String },

    #[error("{field} should be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("{field} should be less or equal {max} characters long")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    pub fn null(field: impl Into<String>) -> Self {
        Self::Null {
            field: field.into(),
        }
    }

    pub fn null_or_empty(field: impl Into<String>) -> Self {
        Self::NullOrEmpty {
            field: field.into(),
        }
    }

    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        Self::TooShort {
            field: field.into(),
            min,
        }
    }

    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::Null { field }
            | Self::NullOrEmpty { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. } => field,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
