//! Observer hooks for comparison stages.

use std::sync::Arc;
use std::time::{Duration, Instant};

use matcher::MatchMode;

use crate::report::ComparisonSummary;

/// Metrics observer for a [`Comparator`](crate::Comparator).
///
/// Installed per comparator with
/// [`Comparator::with_metrics`](crate::Comparator::with_metrics); there is
/// no process-wide recorder.
pub trait ComparisonMetrics: Send + Sync {
    /// Called once the matcher has produced its records.
    fn record_matching(&self, mode: MatchMode, latency: Duration, records: usize);
    /// Called once diffs are attached and the summary is final.
    fn record_assembly(&self, latency: Duration, summary: &ComparisonSummary);
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn ComparisonMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start(recorder: Option<&Arc<dyn ComparisonMetrics>>) -> Option<Self> {
        recorder.map(|recorder| Self {
            recorder: Arc::clone(recorder),
            start: Instant::now(),
        })
    }

    pub(crate) fn record_matching(self, mode: MatchMode, records: usize) {
        self.recorder
            .record_matching(mode, self.start.elapsed(), records);
    }

    pub(crate) fn record_assembly(self, summary: &ComparisonSummary) {
        self.recorder.record_assembly(self.start.elapsed(), summary);
    }
}
