//! Validation error types

use std::fmt;

/// Validation error for form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent, empty or whitespace only
    Missing { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Presence check for a submitted form field.
///
/// Returns the value unchanged when it has any non-whitespace content.
pub fn required(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_owned()),
        _ => Err(ValidationError::Missing { field }),
    }
}
