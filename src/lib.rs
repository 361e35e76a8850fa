//! Workspace umbrella crate for meigi, Japanese business-name
//! canonicalization and fuzzy matching.
//!
//! This crate stitches the canonicalizer and the matcher together so callers
//! reconciling bank-statement lines against registered counterparties can
//! work from a single API entry point and a single YAML config.

pub mod config;

pub use crate::config::{ConfigLoadError, MeigiConfig};
pub use canonical::{
    CanonicalError, CanonicalName, CanonicalizeConfig, CorporateForm, canonicalize,
    canonicalize_name, canonicalize_with, detect_corporate_forms, hash_canonical_bytes,
    hash_name, normalize_characters,
};
pub use matcher::{
    ConfidenceBands, MatchConfidence, MatchConfig, MatchError, MatchHit, MatchMetrics,
    MatchOperation, NameMatcher, DEFAULT_THRESHOLD, find_best_match, is_match, set_match_metrics,
    similarity,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Best match for one statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMatch {
    /// Position of the line in the batch.
    pub line_index: usize,
    /// The statement name as given.
    pub line: String,
    /// SHA-256 of the raw line; equal lines in one import share a key, and
    /// logs carry the key instead of the name.
    pub line_key: String,
    /// Winning candidate, or `None` when the line or candidate list was empty.
    pub hit: Option<MatchHit>,
}

impl LineMatch {
    pub fn confidence(&self) -> MatchConfidence {
        self.hit
            .as_ref()
            .map_or(MatchConfidence::None, |hit| hit.confidence)
    }
}

/// Per-band counts for a reconciliation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
}

impl ConfidenceSummary {
    fn add(&mut self, confidence: MatchConfidence) {
        match confidence {
            MatchConfidence::High => self.high += 1,
            MatchConfidence::Medium => self.medium += 1,
            MatchConfidence::Low => self.low += 1,
            MatchConfidence::None => self.none += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.none
    }
}

/// Outcome of matching a batch of statement lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub matches: Vec<LineMatch>,
    pub summary: ConfidenceSummary,
}

impl Reconciliation {
    /// Lines safe to confirm without review: `high` only, or `high` and
    /// `medium` when `only_high_confidence` is false.
    pub fn confirmable(&self, only_high_confidence: bool) -> impl Iterator<Item = &LineMatch> {
        self.matches.iter().filter(move |m| match m.confidence() {
            MatchConfidence::High => true,
            MatchConfidence::Medium => !only_high_confidence,
            MatchConfidence::Low | MatchConfidence::None => false,
        })
    }
}

/// Match every statement line against `candidates` and summarize the
/// confidence bands.
///
/// ```rust
/// use meigi::{NameMatcher, reconcile};
///
/// let matcher = NameMatcher::default();
/// let registered = ["(株)フヤケレウ", "ヤマダショウジ株式会社"];
/// let result = reconcile(&matcher, &["ｶ)ﾌﾔｹﾚｳ", ""], &registered);
///
/// assert_eq!(result.summary.high, 1);
/// assert_eq!(result.summary.none, 1);
/// assert_eq!(result.confirmable(true).count(), 1);
/// ```
pub fn reconcile<L, S>(matcher: &NameMatcher, lines: &[L], candidates: &[S]) -> Reconciliation
where
    L: AsRef<str>,
    S: AsRef<str> + Sync,
{
    let mut summary = ConfidenceSummary::default();
    let matches: Vec<LineMatch> = lines
        .iter()
        .enumerate()
        .map(|(line_index, line)| {
            let line = line.as_ref();
            let found = LineMatch {
                line_index,
                line: line.to_string(),
                line_key: hash_name(line),
                hit: matcher.best_hit(line, candidates),
            };
            debug!(
                line_index,
                line_key = %found.line_key,
                confidence = ?found.confidence(),
                "reconcile_line_matched"
            );
            summary.add(found.confidence());
            found
        })
        .collect();

    info!(
        lines = lines.len(),
        candidates = candidates.len(),
        high = summary.high,
        medium = summary.medium,
        low = summary.low,
        none = summary.none,
        "reconcile_completed"
    );

    Reconciliation { matches, summary }
}
