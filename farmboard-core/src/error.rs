/// Structured error types for farmboard-core.
///
/// Library crates get `thiserror` enums; the binary wraps them with `anyhow`.
use thiserror::Error;

/// Main error type for farmboard-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A caller-supplied parameter is outside its allowed range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Result type alias for farmboard-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
