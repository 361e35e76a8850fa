// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then `NameMatcher` reports latency, candidate count and winning score for each
// best-match and ranking call. This keeps instrumentation decoupled from any
// specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Which matcher entry point produced a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperation {
    FindBestMatch,
    Rank,
}

impl MatchOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchOperation::FindBestMatch => "find_best_match",
            MatchOperation::Rank => "rank",
        }
    }
}

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one call.
    ///
    /// `candidate_count` is the length of the caller's list and `best_score`
    /// the top score, or `None` when nothing was selected.
    fn record_match(
        &self,
        operation: MatchOperation,
        latency: Duration,
        candidate_count: usize,
        best_score: Option<f32>,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during service startup so all `NameMatcher`
/// instances share the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
