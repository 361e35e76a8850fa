use std::cmp::Ordering;
use std::time::Instant;

use canonical::{canonicalize_with, CanonicalizeConfig};
use rayon::prelude::*;
use tracing::debug;

use crate::metrics::{metrics_recorder, MatchOperation};
use crate::similarity::similarity_canonical;
use crate::types::{MatchConfidence, MatchConfig, MatchError, MatchHit};


/// Matches raw counterparty names against candidate lists.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and reconciliation batches.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    canonical_cfg: CanonicalizeConfig,
    match_cfg: MatchConfig,
}

impl NameMatcher {
    /// Construct a matcher from explicit configs, validating both.
    pub fn new(
        canonical_cfg: CanonicalizeConfig,
        match_cfg: MatchConfig,
    ) -> Result<Self, MatchError> {
        canonical_cfg.validate()?;
        match_cfg.validate()?;
        Ok(Self {
            canonical_cfg,
            match_cfg,
        })
    }

    pub fn canonical_config(&self) -> &CanonicalizeConfig {
        &self.canonical_cfg
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.match_cfg
    }

    /// Canonical form of `text` under this matcher's config.
    pub fn canonicalize(&self, text: &str) -> String {
        canonicalize_with(text, &self.canonical_cfg)
    }

    /// Similarity of two raw names in [0, 1].
    pub fn similarity(&self, a: &str, b: &str) -> f32 {
        similarity_canonical(&self.canonicalize(a), &self.canonicalize(b))
    }

    /// Whether two raw names match at the configured threshold.
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.is_match_at(a, b, self.match_cfg.threshold)
    }

    /// Whether two raw names match at `threshold`.
    ///
    /// A name with an empty canonical form never matches, whatever the
    /// threshold.
    pub fn is_match_at(&self, a: &str, b: &str, threshold: f32) -> bool {
        let a = self.canonicalize(a);
        let b = self.canonicalize(b);
        if a.is_empty() || b.is_empty() {
            return false;
        }
        similarity_canonical(&a, &b) >= threshold
    }

    /// Confidence band of `score` under the configured cut-offs.
    pub fn confidence(&self, score: f32) -> MatchConfidence {
        self.match_cfg.bands.classify(score)
    }

    /// Best candidate for `query` and its score.
    ///
    /// The strictly greatest score wins and the first candidate wins ties.
    /// Returns `(None, 0.0)` for an empty list or a query with an empty
    /// canonical form.
    pub fn find_best_match<'a, S>(
        &self,
        query: &str,
        candidates: &'a [S],
    ) -> (Option<&'a str>, f32)
    where
        S: AsRef<str> + Sync,
    {
        match self.best_hit(query, candidates) {
            Some(hit) => (Some(candidates[hit.index].as_ref()), hit.score),
            None => (None, 0.0),
        }
    }

    /// Like [`find_best_match`](Self::find_best_match) but returns the full hit.
    pub fn best_hit<S>(&self, query: &str, candidates: &[S]) -> Option<MatchHit>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let span = tracing::debug_span!("matcher.find_best_match", candidates = candidates.len());
        let _guard = span.enter();

        let best = self.select_best(query, candidates);
        match &best {
            Some(hit) => debug!(
                index = hit.index,
                score = hit.score,
                confidence = ?hit.confidence,
                "best_match_selected"
            ),
            None => debug!("best_match_none"),
        }

        record(
            MatchOperation::FindBestMatch,
            start,
            candidates.len(),
            best.as_ref().map(|hit| hit.score),
        );
        best
    }

    /// Candidates ordered by descending score, ties in input order.
    ///
    /// Candidates whose canonical form is empty or whose score is below
    /// `min_score` are dropped; at most `max_results` hits are returned.
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Vec<MatchHit>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let span = tracing::debug_span!("matcher.rank", candidates = candidates.len());
        let _guard = span.enter();

        let query = self.canonicalize(query);
        let mut hits: Vec<MatchHit> = if query.is_empty() {
            Vec::new()
        } else {
            self.score_all(&query, candidates)
                .into_iter()
                .zip(candidates)
                .enumerate()
                .filter(|(_, ((canonical, score), _))| {
                    !canonical.is_empty() && *score >= self.match_cfg.min_score
                })
                .map(|(index, ((canonical, score), candidate))| {
                    self.hit(index, candidate.as_ref(), canonical, score)
                })
                .collect()
        };

        // `sort_by` is stable, which keeps first-seen order among equal scores.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(self.match_cfg.max_results);

        debug!(
            hits = hits.len(),
            top_score = hits.first().map(|hit| hit.score),
            "rank_complete"
        );
        record(
            MatchOperation::Rank,
            start,
            candidates.len(),
            hits.first().map(|hit| hit.score),
        );
        hits
    }

    fn select_best<S>(&self, query: &str, candidates: &[S]) -> Option<MatchHit>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.is_empty() {
            return None;
        }
        let query = self.canonicalize(query);
        if query.is_empty() {
            return None;
        }

        let mut scored = self.score_all(&query, candidates);

        let mut best: Option<usize> = None;
        for (idx, (_, score)) in scored.iter().enumerate() {
            if best.map_or(true, |b| *score > scored[b].1) {
                best = Some(idx);
            }
        }

        let index = best?;
        let (canonical, score) = scored.swap_remove(index);
        Some(self.hit(index, candidates[index].as_ref(), canonical, score))
    }

    /// Canonical form and score of every candidate, in input order.
    fn score_all<S>(&self, query: &str, candidates: &[S]) -> Vec<(String, f32)>
    where
        S: AsRef<str> + Sync,
    {
        let score = |candidate: &S| {
            let canonical = self.canonicalize(candidate.as_ref());
            let score = similarity_canonical(query, &canonical);
            (canonical, score)
        };

        if self.match_cfg.use_parallel
            && candidates.len() >= self.match_cfg.parallel_min_candidates
        {
            candidates.par_iter().map(score).collect()
        } else {
            candidates.iter().map(score).collect()
        }
    }

    fn hit(&self, index: usize, candidate: &str, canonical: String, score: f32) -> MatchHit {
        MatchHit {
            index,
            candidate: candidate.to_string(),
            canonical,
            score,
            confidence: self.confidence(score),
        }
    }
}

fn record(
    operation: MatchOperation,
    start: Instant,
    candidate_count: usize,
    best_score: Option<f32>,
) {
    let latency = start.elapsed();
    debug!(
        operation = operation.as_str(),
        latency_micros = latency.as_micros() as u64,
        candidate_count,
        best_score,
        "match_operation_finished"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_match(operation, latency, candidate_count, best_score);
    }
}

/// Whether two raw names match at `threshold`, using the default
/// canonicalization. An empty canonical form on either side never matches.
///
/// ```rust
/// use matcher::{is_match, DEFAULT_THRESHOLD};
///
/// assert!(is_match("ｶ)ﾌﾔｹﾚｳ", "(株)フヤケレウ", DEFAULT_THRESHOLD));
/// assert!(!is_match("", "ABC", 0.0));
/// ```
pub fn is_match(a: &str, b: &str, threshold: f32) -> bool {
    NameMatcher::default().is_match_at(a, b, threshold)
}

/// Best candidate for `query` using the default configuration.
///
/// ```rust
/// use matcher::find_best_match;
///
/// assert_eq!(find_best_match("ABC", &["ABC", "ABD"]), (Some("ABC"), 1.0));
/// assert_eq!(find_best_match("effect", &[] as &[&str]), (None, 0.0));
/// ```
pub fn find_best_match<'a, S>(query: &str, candidates: &'a [S]) -> (Option<&'a str>, f32)
where
    S: AsRef<str> + Sync,
{
    NameMatcher::default().find_best_match(query, candidates)
}
