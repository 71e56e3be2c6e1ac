use std::collections::{HashMap, VecDeque};

use canonical::{fingerprint_with, Fingerprint, TextBlock};
use rayon::prelude::*;
use tracing::debug;

use crate::similarity::{similarity, similarity_upper_bound};
use crate::types::{MatchConfig, MatchError, MatchKind, MatchMode, PairingRecord};

#[cfg(test)]
mod tests;

/// Pairs the blocks of two document renditions.
#[derive(Debug, Clone)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher, rejecting invalid configuration up front.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Pair `a` against `b` using the configured mode.
    ///
    /// Never fails: empty inputs give an empty or fully one-sided result.
    pub fn pair<'a>(&self, a: &'a [TextBlock], b: &'a [TextBlock]) -> Vec<PairingRecord<'a>> {
        match self.cfg.mode {
            MatchMode::Positional => pair_positional(a, b),
            MatchMode::Content => self.pair_by_content(a, b),
        }
    }

    /// Exact pass, similarity pass, then leftovers.
    ///
    /// Output order: matches in discovery order, then removals, then
    /// additions. Consumption is tracked by list position, so duplicate
    /// texts on either side are each paired at most once.
    fn pair_by_content<'a>(
        &self,
        a: &'a [TextBlock],
        b: &'a [TextBlock],
    ) -> Vec<PairingRecord<'a>> {
        let mut records = Vec::with_capacity(a.len().max(b.len()));
        let mut a_used = vec![false; a.len()];
        let mut b_used = vec![false; b.len()];

        // Exact pass: per fingerprint, B positions in ascending order.
        let mut b_by_fingerprint: HashMap<Fingerprint, VecDeque<usize>> = HashMap::new();
        for (j, block) in b.iter().enumerate() {
            b_by_fingerprint
                .entry(fingerprint_with(block.text(), &self.cfg.normalization))
                .or_default()
                .push_back(j);
        }
        for (i, block) in a.iter().enumerate() {
            let fp = fingerprint_with(block.text(), &self.cfg.normalization);
            if let Some(j) = b_by_fingerprint.get_mut(&fp).and_then(VecDeque::pop_front) {
                a_used[i] = true;
                b_used[j] = true;
                records.push(PairingRecord::Matched {
                    a: &a[i],
                    b: &b[j],
                    kind: MatchKind::Exact,
                });
            }
        }
        let exact = records.len();

        // Similarity pass: first-fit in B order.
        let pending_a: Vec<usize> = (0..a.len()).filter(|&i| !a_used[i]).collect();
        let pool_b: Vec<usize> = (0..b.len()).filter(|&j| !b_used[j]).collect();
        let hits = if pending_a.is_empty() || pool_b.is_empty() {
            Vec::new()
        } else if self.cfg.use_parallel {
            self.similar_pass_parallel(a, b, &pending_a, &pool_b)
        } else {
            self.similar_pass(a, b, &pending_a, &pool_b)
        };
        for (i, j, ratio) in hits {
            a_used[i] = true;
            b_used[j] = true;
            records.push(PairingRecord::Matched {
                a: &a[i],
                b: &b[j],
                kind: MatchKind::Similar { ratio },
            });
        }
        let similar = records.len() - exact;

        records.extend(
            a.iter()
                .zip(&a_used)
                .filter(|(_, used)| !**used)
                .map(|(block, _)| PairingRecord::RemovedOnly { a: block }),
        );
        let removed = records.len() - exact - similar;
        records.extend(
            b.iter()
                .zip(&b_used)
                .filter(|(_, used)| !**used)
                .map(|(block, _)| PairingRecord::AddedOnly { b: block }),
        );
        let added = records.len() - exact - similar - removed;

        debug!(
            blocks_a = a.len(),
            blocks_b = b.len(),
            exact,
            similar,
            removed,
            added,
            parallel = self.cfg.use_parallel,
            "content_pairing"
        );
        records
    }

    /// Returns `(a_index, b_index, ratio)` commits in A order. `pool_b` is
    /// the ascending list of B positions left after the exact pass.
    fn similar_pass(
        &self,
        a: &[TextBlock],
        b: &[TextBlock],
        pending_a: &[usize],
        pool_b: &[usize],
    ) -> Vec<(usize, usize, f64)> {
        let mut taken = vec![false; pool_b.len()];
        let mut hits = Vec::new();
        for &i in pending_a {
            let hit = pool_b
                .iter()
                .enumerate()
                .filter(|(slot, _)| !taken[*slot])
                .find_map(|(slot, &j)| self.score(&a[i], &b[j]).map(|ratio| (slot, j, ratio)));
            if let Some((slot, j, ratio)) = hit {
                taken[slot] = true;
                hits.push((i, j, ratio));
            }
        }
        hits
    }

    /// Scores every pending A block against the whole pool in parallel, then
    /// commits in A order, taking each block's first candidate not already
    /// consumed. Same output as [`Self::similar_pass`].
    fn similar_pass_parallel(
        &self,
        a: &[TextBlock],
        b: &[TextBlock],
        pending_a: &[usize],
        pool_b: &[usize],
    ) -> Vec<(usize, usize, f64)> {
        let candidates: Vec<Vec<(usize, f64)>> = pending_a
            .par_iter()
            .map(|&i| {
                pool_b
                    .iter()
                    .enumerate()
                    .filter_map(|(slot, &j)| self.score(&a[i], &b[j]).map(|ratio| (slot, ratio)))
                    .collect()
            })
            .collect();

        let mut taken = vec![false; pool_b.len()];
        let mut hits = Vec::new();
        for (&i, candidates_for_i) in pending_a.iter().zip(candidates) {
            if let Some((slot, ratio)) = candidates_for_i
                .into_iter()
                .find(|(slot, _)| !taken[*slot])
            {
                taken[slot] = true;
                hits.push((i, pool_b[slot], ratio));
            }
        }
        hits
    }

    /// Ratio of the raw texts when it reaches the threshold.
    fn score(&self, a: &TextBlock, b: &TextBlock) -> Option<f64> {
        let threshold = self.cfg.similarity_threshold;
        if similarity_upper_bound(a.text(), b.text()) < threshold {
            return None;
        }
        let ratio = similarity(a.text(), b.text());
        (ratio >= threshold).then_some(ratio)
    }
}

/// Index-by-index alignment, padding the shorter list with `None`.
pub fn pair_positional<'a>(a: &'a [TextBlock], b: &'a [TextBlock]) -> Vec<PairingRecord<'a>> {
    let records: Vec<PairingRecord<'a>> = (0..a.len().max(b.len()))
        .map(|i| PairingRecord::Aligned {
            a: a.get(i),
            b: b.get(i),
        })
        .collect();
    debug!(
        blocks_a = a.len(),
        blocks_b = b.len(),
        aligned = records.len(),
        "positional_pairing"
    );
    records
}
