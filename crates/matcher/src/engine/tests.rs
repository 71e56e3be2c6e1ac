use super::*;
use canonical::blocks_from_strings;

fn content_matcher(threshold: f64) -> Matcher {
    Matcher::new(MatchConfig::content(threshold)).expect("valid config")
}

fn texts<'a>(records: &[PairingRecord<'a>]) -> Vec<(Option<&'a str>, Option<&'a str>)> {
    records
        .iter()
        .map(|r| (r.a_side().map(TextBlock::text), r.b_side().map(TextBlock::text)))
        .collect()
}

/// Every block of both lists appears exactly once on its own side.
fn assert_partition(a: &[TextBlock], b: &[TextBlock], records: &[PairingRecord<'_>]) {
    let mut seen_a = vec![0usize; a.len()];
    let mut seen_b = vec![0usize; b.len()];
    for record in records {
        if let Some(block) = record.a_side() {
            seen_a[block.index()] += 1;
        }
        if let Some(block) = record.b_side() {
            seen_b[block.index()] += 1;
        }
    }
    assert!(seen_a.iter().all(|&n| n == 1), "A coverage: {seen_a:?}");
    assert!(seen_b.iter().all(|&n| n == 1), "B coverage: {seen_b:?}");
}

#[test]
fn invalid_threshold_rejected_at_construction() {
    let err = Matcher::new(MatchConfig::content(0.0)).expect_err("zero threshold");
    assert!(matches!(err, MatchError::InvalidThreshold { .. }));
}

#[test]
fn identical_block_is_exact_match() {
    let a = blocks_from_strings(["The quick fox"]);
    let b = blocks_from_strings(["The quick fox"]);
    let records = content_matcher(0.8).pair(&a, &b);

    assert_eq!(records.len(), 1);
    assert!(matches!(
        records[0],
        PairingRecord::Matched {
            kind: MatchKind::Exact,
            ..
        }
    ));
}

#[test]
fn case_and_spacing_variants_match_exactly() {
    let a = blocks_from_strings(["The  QUICK fox"]);
    let b = blocks_from_strings(["the quick\tfox"]);
    let records = content_matcher(0.8).pair(&a, &b);
    assert!(matches!(
        records[0],
        PairingRecord::Matched {
            kind: MatchKind::Exact,
            ..
        }
    ));
}

#[test]
fn similar_block_pairs_above_threshold() {
    let a = blocks_from_strings(["Hello world"]);
    let b = blocks_from_strings(["Hello brave world"]);

    let records = content_matcher(0.7).pair(&a, &b);
    assert_eq!(records.len(), 1);
    match records[0] {
        PairingRecord::Matched {
            kind: MatchKind::Similar { ratio },
            ..
        } => assert!((ratio - 22.0 / 28.0).abs() < 1e-12),
        other => panic!("expected similar match, got {other:?}"),
    }

    // The same pair stays unmatched at the default threshold.
    let records = content_matcher(0.8).pair(&a, &b);
    assert_eq!(
        texts(&records),
        vec![(Some("Hello world"), None), (None, Some("Hello brave world"))]
    );
}

#[test]
fn reordered_blocks_and_leftovers() {
    let a = blocks_from_strings(["Alpha", "Beta"]);
    let b = blocks_from_strings(["Beta", "Gamma"]);
    let records = content_matcher(0.8).pair(&a, &b);

    assert_eq!(
        texts(&records),
        vec![
            (Some("Beta"), Some("Beta")),
            (Some("Alpha"), None),
            (None, Some("Gamma")),
        ]
    );
    assert_partition(&a, &b, &records);
}

#[test]
fn empty_old_side_is_all_added() {
    let a: Vec<TextBlock> = Vec::new();
    let b = blocks_from_strings(["New paragraph"]);
    let records = content_matcher(0.8).pair(&a, &b);
    assert_eq!(records, vec![PairingRecord::AddedOnly { b: &b[0] }]);
}

#[test]
fn empty_new_side_is_all_removed() {
    let a = blocks_from_strings(["Gone", "Also gone"]);
    let b: Vec<TextBlock> = Vec::new();
    let records = content_matcher(0.8).pair(&a, &b);
    assert!(records
        .iter()
        .all(|r| matches!(r, PairingRecord::RemovedOnly { .. })));
    assert_eq!(records.len(), 2);
}

#[test]
fn both_empty_is_empty() {
    let empty: Vec<TextBlock> = Vec::new();
    assert!(content_matcher(0.8).pair(&empty, &empty).is_empty());
    let positional = Matcher::new(MatchConfig::positional()).expect("valid config");
    assert!(positional.pair(&empty, &empty).is_empty());
}

#[test]
fn duplicates_pair_in_index_order_and_excess_stays_unmatched() {
    let a = blocks_from_strings(["Note", "Body", "Note", "Note"]);
    let b = blocks_from_strings(["Note", "Note", "Body"]);
    let records = content_matcher(0.8).pair(&a, &b);

    let exact: Vec<(usize, usize)> = records
        .iter()
        .filter_map(|r| match r {
            PairingRecord::Matched {
                a,
                b,
                kind: MatchKind::Exact,
            } => Some((a.index(), b.index())),
            _ => None,
        })
        .collect();
    assert_eq!(exact, vec![(0, 0), (1, 2), (2, 1)]);
    assert_eq!(records.last(), Some(&PairingRecord::RemovedOnly { a: &a[3] }));
    assert_partition(&a, &b, &records);
}

#[test]
fn first_fit_takes_earliest_qualifying_candidate_not_best() {
    // Both B blocks clear 0.6; the second is the closer match, but B order wins.
    let a = blocks_from_strings(["The contract term is twelve months"]);
    let b = blocks_from_strings([
        "The contract term is twenty months long",
        "The contract term is twelve months.",
    ]);
    let first = similarity(a[0].text(), b[0].text());
    let second = similarity(a[0].text(), b[1].text());
    assert!(first >= 0.6 && second > first, "fixture ratios: {first} {second}");

    let records = content_matcher(0.6).pair(&a, &b);
    assert_eq!(
        texts(&records),
        vec![
            (
                Some("The contract term is twelve months"),
                Some("The contract term is twenty months long")
            ),
            (None, Some("The contract term is twelve months.")),
        ]
    );
}

#[test]
fn consumed_candidate_is_skipped_by_later_blocks() {
    let a = blocks_from_strings(["Payment due in 30 days", "Payment due in 31 days"]);
    let b = blocks_from_strings(["Payment due in 45 days", "Payment due in 60 days"]);
    let records = content_matcher(0.8).pair(&a, &b);
    assert_eq!(
        texts(&records),
        vec![
            (Some("Payment due in 30 days"), Some("Payment due in 45 days")),
            (Some("Payment due in 31 days"), Some("Payment due in 60 days")),
        ]
    );
}

#[test]
fn exact_matches_are_claimed_before_similarity() {
    // A[0] would similarity-match B[0], but B[0] is an exact match for A[1].
    let a = blocks_from_strings(["Section one applies", "Section one applied"]);
    let b = blocks_from_strings(["Section one applied"]);
    let records = content_matcher(0.8).pair(&a, &b);
    assert_eq!(
        texts(&records),
        vec![
            (Some("Section one applied"), Some("Section one applied")),
            (Some("Section one applies"), None),
        ]
    );
}

#[test]
fn parallel_pass_matches_sequential_pass() {
    let a = blocks_from_strings([
        "Payment due in 30 days",
        "Payment due in 31 days",
        "Deliverables listed in annex A",
        "Unrelated closing remark",
        "Governing law is Portugal",
    ]);
    let b = blocks_from_strings([
        "Governing law is Portugal.",
        "Payment due in 45 days",
        "Deliverables are listed in annex B",
        "Payment due in 60 days",
        "Brand new clause",
    ]);

    let sequential = content_matcher(0.75).pair(&a, &b);
    let parallel = Matcher::new(MatchConfig::content(0.75).with_parallel(true))
        .expect("valid config")
        .pair(&a, &b);

    assert_eq!(sequential, parallel);
    assert_partition(&a, &b, &sequential);
}

#[test]
fn positional_pads_shorter_side() {
    let a = blocks_from_strings(["X"]);
    let b = blocks_from_strings(["X", "Y"]);
    let matcher = Matcher::new(MatchConfig::positional()).expect("valid config");
    let records = matcher.pair(&a, &b);

    assert_eq!(
        records,
        vec![
            PairingRecord::Aligned {
                a: Some(&a[0]),
                b: Some(&b[0])
            },
            PairingRecord::Aligned {
                a: None,
                b: Some(&b[1])
            },
        ]
    );
}

#[test]
fn positional_ignores_content() {
    let a = blocks_from_strings(["One", "Two"]);
    let b = blocks_from_strings(["Two", "One", "Three"]);
    let records = pair_positional(&a, &b);
    assert_eq!(
        texts(&records),
        vec![
            (Some("One"), Some("Two")),
            (Some("Two"), Some("One")),
            (None, Some("Three")),
        ]
    );
}
