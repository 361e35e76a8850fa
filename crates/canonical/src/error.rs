use thiserror::Error;

/// Errors that can occur when configuring canonicalization.
///
/// Canonicalization itself is total; only an invalid configuration is
/// rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
