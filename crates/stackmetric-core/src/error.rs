//! Shared error type across stackmetric crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Unified error type used by core and client.
///
/// Only construction and configuration can fail. Submitting values never
/// returns an error.
#[derive(Debug, Error)]
pub enum MetricError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricError {
    /// Stable short code, handy for log fields and assertions.
    pub fn code(&self) -> &'static str {
        match self {
            MetricError::InvalidArgument(_) => "INVALID_ARGUMENT",
            MetricError::InvalidConfig(_) => "INVALID_CONFIG",
            MetricError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            MetricError::Internal(_) => "INTERNAL",
        }
    }
}
