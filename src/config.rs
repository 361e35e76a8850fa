//! YAML configuration file support for meigi.
//!
//! Host services keep canonicalization and matching policy next to their
//! other settings and load both stages from a single YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1"
//! name: "bank-import"
//!
//! canonical:
//!   version: 1
//!   strip_corporate_suffix: true
//!   strip_symbols: true
//!   uppercase: true
//!
//! matcher:
//!   threshold: 0.7
//!   bands:
//!     high: 0.9
//!     medium: 0.7
//!     low: 0.5
//!   max_results: 10
//!   min_score: 0.0
//!   use_parallel: false
//!   parallel_min_candidates: 256
//! ```
//!
//! Every section and field is optional; missing values take the library
//! defaults.

use std::fs;
use std::path::Path;

use canonical::CanonicalizeConfig;
use matcher::{MatchConfig, MatchError, NameMatcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

impl From<MatchError> for ConfigLoadError {
    fn from(err: MatchError) -> Self {
        ConfigLoadError::Validation(err.to_string())
    }
}

/// Top-level YAML configuration for canonicalization and matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MeigiConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Canonicalization stage configuration
    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    /// Matcher configuration
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl MeigiConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!(path = %path.display(), name = ?config.name, "meigi_config_loaded");
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: MeigiConfig = serde_yaml::from_str(yaml)?;
        if let Err(err) = config.validate() {
            warn!(error = %err, "meigi_config_rejected");
            return Err(err);
        }
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;

        Ok(())
    }

    /// Build a [`NameMatcher`] from the loaded policy.
    pub fn build_matcher(&self) -> Result<NameMatcher, ConfigLoadError> {
        Ok(NameMatcher::new(self.canonical.clone(), self.matcher.clone())?)
    }
}

impl Default for MeigiConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1"
name: "bank-import"
canonical:
  version: 1
  uppercase: true
matcher:
  threshold: 0.8
"#;

        let config = MeigiConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.name, Some("bank-import".to_string()));
        assert!(config.canonical.uppercase);
        assert_eq!(config.matcher.threshold, 0.8);
        assert_eq!(config.matcher.max_results, 10);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
matcher:
  use_parallel: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = MeigiConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1.0");
        assert!(config.matcher.use_parallel);
    }

    #[test]
    fn test_missing_file() {
        let result = MeigiConfig::from_file("/nonexistent/meigi.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = MeigiConfig::default();
        assert_eq!(config.version, "1");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_version() {
        let result = MeigiConfig::from_yaml("version: \"2\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1"
matcher:
  threshold: 1.5
"#;

        let result = MeigiConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("threshold"));
    }

    #[test]
    fn test_canonical_validation() {
        let yaml = r#"
version: "1"
canonical:
  version: 0
"#;

        let result = MeigiConfig::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(ConfigLoadError::Validation(msg)) if msg.starts_with("canonical")
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = MeigiConfig {
            name: Some("roundtrip".into()),
            ..MeigiConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(MeigiConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_build_matcher_uses_policy() {
        let yaml = r#"
version: "1"
matcher:
  threshold: 0.95
"#;

        let matcher = MeigiConfig::from_yaml(yaml).unwrap().build_matcher().unwrap();
        assert_eq!(matcher.match_config().threshold, 0.95);
        assert!(!matcher.is_match("ヤマダショウジ", "ヤマダショウシ"));
    }
}
