//! Workspace umbrella crate for revcmp, the revision comparison engine.
//!
//! This crate stitches block matching, token diffing and report assembly
//! together so callers can compare two extracted renditions of a document
//! with a single API entry point:
//!
//! ```rust
//! use revcmp::{blocks_from_strings, compare_blocks, ComparisonConfig, EntryDiff};
//!
//! let old = blocks_from_strings(["Alpha", "Payment due in 30 days"]);
//! let new = blocks_from_strings(["Payment due in 45 days", "Alpha"]);
//!
//! let result = compare_blocks(&old, &new, &ComparisonConfig::default()).expect("valid config");
//! assert_eq!(result.summary().exact, 1);
//! assert_eq!(result.summary().similar, 1);
//! let expected = "Payment due in [REMOVED: 30] [ADDED: 45] days";
//! assert!(matches!(
//!     &result.entries()[1].diff,
//!     EntryDiff::Changed { rendered, .. } if rendered == expected
//! ));
//! ```
//!
//! Reading source documents and laying out the final report are left to the
//! caller; [`ComparisonResult`] carries only the logical content.

pub use canonical::{
    Fingerprint, NormalizeConfig, TextBlock, blocks_from_lines, blocks_from_strings,
    collapse_whitespace, fingerprint, fingerprint_with, normalize, normalize_with, tokenize,
};
pub use matcher::{
    MatchConfig, MatchError, MatchKind, MatchMode, Matcher, PairingRecord, similarity,
};
pub use tokendiff::{
    DiffMarkers, EditToken, diff, diff_rendered, reconstruct_new, reconstruct_old, render,
};

mod config;
mod error;
mod metrics;
mod report;

pub use crate::config::ComparisonConfig;
pub use crate::error::ComparisonError;
pub use crate::metrics::ComparisonMetrics;
pub use crate::report::{
    ComparisonResult, ComparisonSummary, EntryDiff, ReportEntry, ReportLabels, assemble,
};

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{Level, info};

use crate::metrics::MetricsSpan;

/// Validated, reusable comparison pipeline.
///
/// Holds no per-run state, so one comparator can serve any number of
/// concurrent [`compare`](Comparator::compare) calls.
#[derive(Clone)]
pub struct Comparator {
    matcher: Matcher,
    markers: DiffMarkers,
    labels: ReportLabels,
    metrics: Option<Arc<dyn ComparisonMetrics>>,
}

impl Comparator {
    /// Validate `cfg` and build the pipeline.
    pub fn new(cfg: ComparisonConfig) -> Result<Self, ComparisonError> {
        cfg.validate()?;
        let ComparisonConfig {
            matcher,
            markers,
            labels,
            ..
        } = cfg;
        Ok(Self {
            matcher: Matcher::new(matcher)?,
            markers,
            labels,
            metrics: None,
        })
    }

    /// Attach a metrics observer.
    pub fn with_metrics(mut self, recorder: Arc<dyn ComparisonMetrics>) -> Self {
        self.metrics = Some(recorder);
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Pair `a` against `b`, diff every pair with both sides present and
    /// assemble the report.
    pub fn compare<'a>(&self, a: &'a [TextBlock], b: &'a [TextBlock]) -> ComparisonResult<'a> {
        let mode = self.matcher.config().mode;
        let span = tracing::span!(
            Level::INFO,
            "revcmp.compare",
            mode = mode.as_str(),
            blocks_a = a.len(),
            blocks_b = b.len()
        );
        let _guard = span.enter();
        let start = Instant::now();

        let matching = MetricsSpan::start(self.metrics.as_ref());
        let records = self.matcher.pair(a, b);
        if let Some(timer) = matching {
            timer.record_matching(mode, records.len());
        }

        let assembly = MetricsSpan::start(self.metrics.as_ref());
        let result = assemble(records, &self.markers, &self.labels);
        if let Some(timer) = assembly {
            timer.record_assembly(result.summary());
        }

        let summary = result.summary();
        info!(
            exact = summary.exact,
            similar = summary.similar,
            removed = summary.removed,
            added = summary.added,
            aligned = summary.aligned,
            changed = summary.changed,
            elapsed_micros = start.elapsed().as_micros(),
            "compare_complete"
        );
        result
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("matcher", &self.matcher)
            .field("markers", &self.markers)
            .field("labels", &self.labels)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

/// Validate `cfg` and compare in one call.
pub fn compare_blocks<'a>(
    a: &'a [TextBlock],
    b: &'a [TextBlock],
    cfg: &ComparisonConfig,
) -> Result<ComparisonResult<'a>, ComparisonError> {
    Ok(Comparator::new(cfg.clone())?.compare(a, b))
}
