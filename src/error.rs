use thiserror::Error;

/// Errors raised while building a [`CorsPolicy`](crate::CorsPolicy).
///
/// All of them are fatal: an engine is never constructed from a policy that failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_age must be a positive number or zero, got {value}")]
    NegativeMaxAge { value: i64 },

    #[error("{field} entries must be non-empty")]
    EmptyEntry { field: &'static str },

    #[error("{field} entry '{value}' is not a valid HTTP token")]
    InvalidToken { field: &'static str, value: String },

    #[error("origin pattern '{pattern}' could not be compiled: {reason}")]
    InvalidOriginPattern { pattern: String, reason: String },

    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    PatternTooLong { length: usize, max: usize },
}
