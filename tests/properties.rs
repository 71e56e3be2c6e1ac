//! Property tests over the matching and diffing primitives.

use proptest::prelude::*;
use revcmp::{
    EditToken, MatchConfig, Matcher, TextBlock, blocks_from_strings, diff, fingerprint,
    normalize, reconstruct_new, reconstruct_old, similarity,
};

/// Short paragraphs over a tiny alphabet so duplicates and near-matches are
/// common.
fn paragraphs() -> impl Strategy<Value = Vec<TextBlock>> {
    prop::collection::vec("[a-c]{1,4}( [a-c]{1,4}){0,3}", 0..10).prop_map(blocks_from_strings)
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,3}", 0..12)
}

/// Length of a longest common subsequence, by dynamic programming.
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for x in a {
        let mut diagonal = 0;
        for (j, y) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

fn assert_partition(
    a: &[TextBlock],
    b: &[TextBlock],
    cfg: MatchConfig,
) -> Result<(), TestCaseError> {
    let matcher = Matcher::new(cfg).expect("valid config");
    let records = matcher.pair(a, b);
    let mut seen_a = vec![0usize; a.len()];
    let mut seen_b = vec![0usize; b.len()];
    for record in &records {
        if let Some(block) = record.a_side() {
            seen_a[block.index()] += 1;
        }
        if let Some(block) = record.b_side() {
            seen_b[block.index()] += 1;
        }
    }
    prop_assert!(seen_a.iter().all(|&n| n == 1), "A coverage {:?}", seen_a);
    prop_assert!(seen_b.iter().all(|&n| n == 1), "B coverage {:?}", seen_b);
    Ok(())
}

proptest! {
    #[test]
    fn content_pairing_partitions_both_lists(
        a in paragraphs(),
        b in paragraphs(),
        threshold in 0.3f64..=1.0,
    ) {
        assert_partition(&a, &b, MatchConfig::content(threshold))?;
    }

    #[test]
    fn positional_pairing_partitions_both_lists(a in paragraphs(), b in paragraphs()) {
        assert_partition(&a, &b, MatchConfig::positional())?;
    }

    #[test]
    fn parallel_pairing_equals_sequential(
        a in paragraphs(),
        b in paragraphs(),
        threshold in 0.3f64..=1.0,
    ) {
        let sequential = Matcher::new(MatchConfig::content(threshold)).expect("valid config");
        let parallel = Matcher::new(MatchConfig::content(threshold).with_parallel(true))
            .expect("valid config");
        prop_assert_eq!(sequential.pair(&a, &b), parallel.pair(&a, &b));
    }

    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,40}[ \t\n]{0,3}\\PC{0,10}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn fingerprint_ignores_case_and_spacing(
        tokens in prop::collection::vec("[a-zA-Z]{1,6}", 1..8),
    ) {
        let spaced = tokens.join(" ");
        let messy = format!("  {}\n", tokens.join(" \t ").to_uppercase());
        prop_assert_eq!(fingerprint(&spaced), fingerprint(&spaced));
        prop_assert_eq!(normalize(&spaced), normalize(&messy));
        prop_assert_eq!(fingerprint(&spaced), fingerprint(&messy));
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in "[abc ]{0,12}", b in "[abc ]{0,12}") {
        let forward = similarity(&a, &b);
        prop_assert_eq!(forward, similarity(&b, &a));
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn diff_reconstructs_both_sides(old in words(), new in words()) {
        let script = diff(&old.join(" "), &new.join(" "));
        let old_words: Vec<&str> = old.iter().map(String::as_str).collect();
        let new_words: Vec<&str> = new.iter().map(String::as_str).collect();
        prop_assert_eq!(reconstruct_old(&script), old_words);
        prop_assert_eq!(reconstruct_new(&script), new_words);
        // No two neighbouring runs share a kind.
        for pair in script.windows(2) {
            prop_assert!(std::mem::discriminant(&pair[0]) != std::mem::discriminant(&pair[1]));
        }
    }

    #[test]
    fn diff_keeps_a_longest_common_subsequence(old in words(), new in words()) {
        let script = diff(&old.join(" "), &new.join(" "));
        let kept: usize = script
            .iter()
            .filter(|t| t.is_equal())
            .map(|t| t.text().split_whitespace().count())
            .sum();
        prop_assert_eq!(kept, lcs_len(&old, &new));
    }

    #[test]
    fn diff_of_identical_text_is_all_equal(text in words()) {
        let joined = text.join(" ");
        let script = diff(&joined, &joined);
        prop_assert!(script.iter().all(EditToken::is_equal));
        let rebuilt: Vec<&str> = script.iter().flat_map(|t| t.text().split_whitespace()).collect();
        let expected: Vec<&str> = text.iter().map(String::as_str).collect();
        prop_assert_eq!(rebuilt, expected);
    }
}
