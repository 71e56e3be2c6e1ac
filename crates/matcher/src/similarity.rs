//! Character-level similarity ratio.
//!
//! The score is the Ratcliff/Obershelp ratio: find the longest common run of
//! characters, recurse on the pieces to its left and right, and sum the
//! lengths of all runs found. With `M` matched characters,
//!
//! ```text
//! ratio = 2 * M / (len(a) + len(b))
//! ```
//!
//! Lengths are counted in Unicode scalar values. Two empty strings score 1.0.
//!
//! On equal-length ties the longest-match search prefers the earliest run in
//! its first argument, which makes the raw recursion order-dependent. The
//! pair is therefore always scored with the lexicographically smaller string
//! first, so `similarity(a, b) == similarity(b, a)` holds exactly.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Similarity ratio in `[0, 1]` between two strings.
///
/// ```rust
/// use matcher::similarity;
///
/// assert_eq!(similarity("abc", "abc"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// assert_eq!(similarity("", ""), 1.0);
///
/// let r = similarity("Hello world", "Hello brave world");
/// assert!((r - 22.0 / 28.0).abs() < 1e-12);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let (first, second) = match a.cmp(b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();

    let total = first.len() + second.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_char_count(&first, &second);
    (2 * matched) as f64 / total as f64
}

/// Upper bound on [`similarity`] that only looks at lengths.
///
/// `M` can never exceed the shorter length, so
/// `similarity(a, b) <= 2 * min / (len(a) + len(b))`. The matcher uses this
/// to skip candidates that cannot reach its threshold.
pub fn similarity_upper_bound(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    let total = la + lb;
    if total == 0 {
        return 1.0;
    }
    (2 * la.min(lb)) as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matched_char_count(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b_positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b_positions, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)` with the earliest `i`, then earliest `j`, among
/// runs of maximal size. `b_positions` maps every character of `b` to its
/// ascending positions.
fn longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_ending_at[j] = length of the common run ending at a[i - 1], b[j]
    let mut run_ending_at: HashMap<usize, usize> = HashMap::new();

    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let previous = match j.checked_sub(1) {
                    Some(prev_j) => run_ending_at.get(&prev_j).copied().unwrap_or(0),
                    None => 0,
                };
                let size = previous + 1;
                next_runs.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_ending_at = next_runs;
    }

    (best_i, best_j, best_size)
}
