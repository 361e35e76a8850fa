use canonical::CanonicalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default acceptance threshold for [`is_match`](crate::is_match), tuned to
/// Japanese bank-statement noise.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

/// Coarse confidence band for a similarity score.
///
/// Reconciliation screens and import summaries report matches in these four
/// buckets; `None` is also what an empty canonical form lands in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
    None,
}

/// Score cut-offs for [`MatchConfidence`]. Each bound is inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfidenceBands {
    pub high: f32,
    pub medium: f32,
    pub low: f32,
}

impl ConfidenceBands {
    /// Classify a score.
    pub fn classify(&self, score: f32) -> MatchConfidence {
        if score >= self.high {
            MatchConfidence::High
        } else if score >= self.medium {
            MatchConfidence::Medium
        } else if score >= self.low && score > 0.0 {
            MatchConfidence::Low
        } else {
            MatchConfidence::None
        }
    }

    fn validate(&self) -> Result<(), MatchError> {
        for (name, value) in [("high", self.high), ("medium", self.medium), ("low", self.low)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "bands.{name} must be between 0.0 and 1.0"
                )));
            }
        }
        if !(self.high >= self.medium && self.medium >= self.low) {
            return Err(MatchError::InvalidConfig(
                "bands must satisfy high >= medium >= low".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfidenceBands {
    fn default() -> Self {
        Self {
            high: 0.9,
            medium: DEFAULT_THRESHOLD,
            low: 0.5,
        }
    }
}

/// Configuration for a [`NameMatcher`](crate::NameMatcher).
///
/// Cheap to clone and serde-friendly so it can be embedded in host configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Minimum similarity accepted by [`NameMatcher::is_match`](crate::NameMatcher::is_match).
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f32,
    /// Cut-offs for confidence classification.
    #[serde(default)]
    pub bands: ConfidenceBands,
    /// Maximum number of hits returned by [`NameMatcher::rank`](crate::NameMatcher::rank).
    #[serde(default = "MatchConfig::default_max_results")]
    pub max_results: usize,
    /// Hits scoring below this are dropped from ranked results.
    #[serde(default)]
    pub min_score: f32,
    /// Score candidates on the rayon pool when the list is large enough.
    #[serde(default)]
    pub use_parallel: bool,
    /// Smallest candidate list scored in parallel when `use_parallel` is set.
    #[serde(default = "MatchConfig::default_parallel_min_candidates")]
    pub parallel_min_candidates: usize,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> f32 {
        DEFAULT_THRESHOLD
    }

    pub(crate) fn default_max_results() -> usize {
        10
    }

    pub(crate) fn default_parallel_min_candidates() -> usize {
        256
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidConfig(
                "threshold must be between 0.0 and 1.0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(MatchError::InvalidConfig(
                "min_score must be between 0.0 and 1.0".into(),
            ));
        }
        if self.max_results == 0 {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        self.bands.validate()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            bands: ConfidenceBands::default(),
            max_results: Self::default_max_results(),
            min_score: 0.0,
            use_parallel: false,
            parallel_min_candidates: Self::default_parallel_min_candidates(),
        }
    }
}

/// One scored candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchHit {
    /// Position of the candidate in the caller's list.
    pub index: usize,
    /// The candidate as given.
    pub candidate: String,
    /// Canonical form the score was computed on.
    pub canonical: String,
    /// Similarity in [0, 1].
    pub score: f32,
    pub confidence: MatchConfidence,
}

/// Errors produced by the matching layer.
///
/// Scoring itself never fails; only configuration is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
}
