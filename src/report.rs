//! Report assembly: attach a diff (or a status) to every pairing record.

use canonical::TextBlock;
use matcher::{MatchKind, PairingRecord};
use serde::{Deserialize, Serialize};
use tokendiff::{DiffMarkers, EditToken, diff, render};

/// Fixed strings the report-writer prints for identical pairs and missing
/// sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLabels {
    #[serde(default = "ReportLabels::default_no_difference")]
    pub no_difference: String,
    #[serde(default = "ReportLabels::default_empty_placeholder")]
    pub empty_placeholder: String,
}

impl ReportLabels {
    fn default_no_difference() -> String {
        "No differences.".to_string()
    }

    fn default_empty_placeholder() -> String {
        "[EMPTY]".to_string()
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            no_difference: Self::default_no_difference(),
            empty_placeholder: Self::default_empty_placeholder(),
        }
    }
}

/// What the report shows next to a pairing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryDiff {
    /// Both sides present with identical raw text.
    NoDifference,
    /// Both sides present, raw texts differ.
    Changed {
        tokens: Vec<EditToken>,
        rendered: String,
    },
    /// Only one side present; nothing to diff.
    OneSided,
}

impl EntryDiff {
    pub fn is_changed(&self) -> bool {
        matches!(self, EntryDiff::Changed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry<'a> {
    pub record: PairingRecord<'a>,
    pub diff: EntryDiff,
}

impl<'a> ReportEntry<'a> {
    /// Text of the A side, or the placeholder when absent.
    pub fn a_text<'s>(&'s self, labels: &'s ReportLabels) -> &'s str {
        side_text(self.record.a_side(), labels)
    }

    /// Text of the B side, or the placeholder when absent.
    pub fn b_text<'s>(&'s self, labels: &'s ReportLabels) -> &'s str {
        side_text(self.record.b_side(), labels)
    }

    /// Diff line to print, if the entry has one.
    pub fn diff_text<'s>(&'s self, labels: &'s ReportLabels) -> Option<&'s str> {
        match &self.diff {
            EntryDiff::NoDifference => Some(labels.no_difference.as_str()),
            EntryDiff::Changed { rendered, .. } => Some(rendered.as_str()),
            EntryDiff::OneSided => None,
        }
    }
}

fn side_text<'s>(block: Option<&'s TextBlock>, labels: &'s ReportLabels) -> &'s str {
    block
        .map(TextBlock::text)
        .unwrap_or(labels.empty_placeholder.as_str())
}

/// Per-status counts of a comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub exact: usize,
    pub similar: usize,
    pub removed: usize,
    pub added: usize,
    pub aligned: usize,
    /// Entries carrying a rendered diff.
    pub changed: usize,
}

impl ComparisonSummary {
    fn count(&mut self, entry: &ReportEntry<'_>) {
        match entry.record {
            PairingRecord::Matched {
                kind: MatchKind::Exact,
                ..
            } => self.exact += 1,
            PairingRecord::Matched {
                kind: MatchKind::Similar { .. },
                ..
            } => self.similar += 1,
            PairingRecord::RemovedOnly { .. } => self.removed += 1,
            PairingRecord::AddedOnly { .. } => self.added += 1,
            PairingRecord::Aligned { .. } => self.aligned += 1,
        }
        if entry.diff.is_changed() {
            self.changed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.exact + self.similar + self.removed + self.added + self.aligned
    }
}

/// Final artifact of one comparison run, in matcher output order.
///
/// Borrows the blocks it was built from and is never mutated after
/// assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult<'a> {
    entries: Vec<ReportEntry<'a>>,
    summary: ComparisonSummary,
    labels: ReportLabels,
}

impl<'a> ComparisonResult<'a> {
    pub fn entries(&self) -> &[ReportEntry<'a>] {
        &self.entries
    }

    pub fn summary(&self) -> &ComparisonSummary {
        &self.summary
    }

    pub fn labels(&self) -> &ReportLabels {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries re-sorted by anchor index (A index when present, else B
    /// index). The sort is stable, so ties keep matcher order.
    pub fn in_document_order(&self) -> Vec<&ReportEntry<'a>> {
        let mut ordered: Vec<&ReportEntry<'a>> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.record.anchor_index());
        ordered
    }

    /// JSON rendering for report-writers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the result for a matcher run.
///
/// Pairs with both sides present are diffed on their raw text, so case and
/// spacing differences hidden from the fingerprint still show up.
pub fn assemble<'a>(
    records: Vec<PairingRecord<'a>>,
    markers: &DiffMarkers,
    labels: &ReportLabels,
) -> ComparisonResult<'a> {
    let mut summary = ComparisonSummary::default();
    let entries: Vec<ReportEntry<'a>> = records
        .into_iter()
        .map(|record| {
            let diff = match record.both_sides() {
                Some((a, b)) if a.text() == b.text() => EntryDiff::NoDifference,
                Some((a, b)) => {
                    let tokens = diff(a.text(), b.text());
                    let rendered = render(&tokens, markers);
                    EntryDiff::Changed { tokens, rendered }
                }
                None => EntryDiff::OneSided,
            };
            let entry = ReportEntry { record, diff };
            summary.count(&entry);
            entry
        })
        .collect();

    ComparisonResult {
        entries,
        summary,
        labels: labels.clone(),
    }
}
