//! # Meigi Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of `canonical` and answers the reconciliation
//! questions: how alike are two raw business names, do they refer to the
//! same counterparty, and which entry of a candidate list is the best fit
//! for a bank-statement name.
//!
//! Every entry point canonicalizes both sides first, so `ｶ)ﾌﾔｹﾚｳ` and
//! `(株)フヤケレウ` compare as identical.
//!
//! ## Core Types
//!
//! - [`NameMatcher`]: holds a [`CanonicalizeConfig`](canonical::CanonicalizeConfig)
//!   and a [`MatchConfig`]; immutable and shareable across threads.
//! - [`MatchConfig`]: acceptance threshold, confidence bands, ranking limits
//!   and the rayon switch for large candidate lists.
//! - [`MatchHit`]: index, candidate, canonical form, score and confidence.
//! - [`MatchConfidence`]: `high`, `medium`, `low` or `none`.
//!
//! ## Scoring
//!
//! Scores live in [0, 1]. Equal non-empty canonical forms score 1.0, an
//! empty canonical form scores 0.0, containment scores
//! `min_len / max_len * 0.9`, and everything else scores
//! `1 - levenshtein / max_len`.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::{MatchConfidence, NameMatcher};
//!
//! let matcher = NameMatcher::default();
//! let candidates = ["サトウショウテン", "(株)フヤケレウ", "フヤケ"];
//!
//! let (best, score) = matcher.find_best_match("ｶ)ﾌﾔｹﾚｳ", &candidates);
//! assert_eq!(best, Some("(株)フヤケレウ"));
//! assert_eq!(score, 1.0);
//! assert_eq!(matcher.confidence(score), MatchConfidence::High);
//!
//! let ranked = matcher.rank("ﾌﾔｹﾚｳ", &candidates);
//! assert_eq!(ranked[0].index, 1);
//! ```
//!
//! ## Observability
//!
//! `find_best_match` and `rank` run inside `matcher.find_best_match` and
//! `matcher.rank` tracing spans. Install a [`MatchMetrics`] implementation via
//! [`set_match_metrics`] to record latency, candidate counts and top scores.

pub mod engine;
pub mod metrics;
pub mod similarity;
pub mod types;

pub use crate::engine::{find_best_match, is_match, NameMatcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics, MatchOperation};
pub use crate::similarity::{levenshtein, similarity, similarity_canonical, CONTAINMENT_WEIGHT};
pub use crate::types::{
    ConfidenceBands, MatchConfidence, MatchConfig, MatchError, MatchHit, DEFAULT_THRESHOLD,
};
