//! Configuration types for the business-name canonicalization pipeline.
//!
//! [`CanonicalizeConfig`] selects which stages of
//! [`canonicalize_name`](crate::canonicalize_name) run. Width normalization
//! and whitespace removal always run; corporate-suffix stripping, symbol
//! stripping and uppercasing can be switched off for callers that want a
//! looser canonical form (for example when displaying the normalized name).
//!
//! # Versioning
//!
//! The `version` field is folded into every canonical hash. Any change to
//! canonicalization behavior, including additions to the corporate-suffix
//! table, must bump it so that stored canonical keys from different versions
//! never collide.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.strip_corporate_suffix);
//! assert!(config.strip_symbols);
//! assert!(config.uppercase);
//!
//! let keep_suffix = CanonicalizeConfig {
//!     strip_corporate_suffix: false,
//!     ..Default::default()
//! };
//! assert!(!keep_suffix.strip_corporate_suffix);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the canonicalization pipeline.
///
/// Cheap to clone and serde-friendly so it can live inside a host service's
/// configuration file:
///
/// ```json
/// {
///   "version": 1,
///   "strip_corporate_suffix": true,
///   "strip_symbols": true,
///   "uppercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the canonicalization behavior. Must be >= 1.
    pub version: u32,

    /// Remove corporate-form notations (`株式会社`, `(株)`, `ｶ)`, ...).
    pub strip_corporate_suffix: bool,

    /// Remove decorative symbols (brackets, dashes, currency marks, ...).
    pub strip_symbols: bool,

    /// Uppercase Latin letters so `abc` and `ABC` compare equal.
    pub uppercase: bool,
}

impl CanonicalizeConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_corporate_suffix: true,
            strip_symbols: true,
            uppercase: true,
        }
    }
}
