use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use revcmp::{
    ComparisonConfig, Comparator, MatchConfig, TextBlock, blocks_from_strings, diff, similarity,
};

/// Synthetic revision pair: `count` paragraphs, every third edited, every
/// fifth moved to the end, a few appended.
fn revision_pair(count: usize) -> (Vec<TextBlock>, Vec<TextBlock>) {
    let old: Vec<String> = (0..count)
        .map(|i| {
            let days = 10 + i % 30;
            format!("Clause {i}: the supplier shall deliver item {i} within {days} days of order")
        })
        .collect();
    let mut moved = Vec::new();
    let mut new = Vec::new();
    for (i, text) in old.iter().enumerate() {
        let revised = if i % 3 == 0 {
            text.replace("shall deliver", "must ship")
        } else {
            text.clone()
        };
        if i % 5 == 0 {
            moved.push(revised);
        } else {
            new.push(revised);
        }
    }
    new.extend(moved);
    new.extend((0..count / 10).map(|i| format!("Appendix note {i} added in this revision")));
    (blocks_from_strings(old), blocks_from_strings(new))
}

fn bench_compare_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_content");

    for count in [50usize, 200, 800] {
        let (old, new) = revision_pair(count);
        group.throughput(Throughput::Elements(count as u64));
        for parallel in [false, true] {
            let matcher = MatchConfig::default().with_parallel(parallel);
            let cfg = ComparisonConfig::with_matcher(matcher);
            let comparator = Comparator::new(cfg).expect("valid config");
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, count), &count, |b, _| {
                b.iter(|| comparator.compare(black_box(&old), black_box(&new)))
            });
        }
    }

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let (old, new) = revision_pair(800);
    let cfg = ComparisonConfig::with_matcher(MatchConfig::positional());
    let comparator = Comparator::new(cfg).expect("valid config");
    c.bench_function("compare_positional_800", |b| {
        b.iter(|| comparator.compare(black_box(&old), black_box(&new)))
    });
}

fn bench_primitives(c: &mut Criterion) {
    let a = "The supplier shall deliver the goods within thirty days of the purchase order date";
    let b = "The supplier must ship the goods within forty five days of the purchase order";
    c.bench_function("similarity_paragraph", |bench| {
        bench.iter(|| similarity(black_box(a), black_box(b)))
    });
    c.bench_function("diff_paragraph", |bench| {
        bench.iter(|| diff(black_box(a), black_box(b)))
    });
}

criterion_group!(benches, bench_compare_scale, bench_positional, bench_primitives);
criterion_main!(benches);
