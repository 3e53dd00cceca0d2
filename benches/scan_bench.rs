use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scour::{AcAutomaton, MatchMode, WildcardPattern};
use std::hint::black_box;

/// Deterministic haystack over a small alphabet so failure links and
/// output chains actually fire.
fn random_text(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'd') as char)
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let patterns: Vec<String> = (0..200).map(|i| random_text(8, i)).collect();

    c.bench_function("build_200_patterns", |b| {
        b.iter(|| black_box(AcAutomaton::build(&patterns, MatchMode::CaseSensitive)));
    });
}

fn bench_scan(c: &mut Criterion) {
    let patterns = vec!["abca", "bcd", "cab", "dddd", "abcd"];
    let automaton = AcAutomaton::build(&patterns, MatchMode::CaseSensitive);

    let mut group = c.benchmark_group("scan");
    for size in [1_000usize, 10_000, 100_000] {
        let text = random_text(size, 42);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(automaton.find_matches(text)));
        });
    }
    group.finish();
}

fn bench_nested_reporting(c: &mut Criterion) {
    // Worst case for the output-link chain: every prefix of "aaaa..."
    // is its own pattern, so each position reports the whole chain.
    let patterns: Vec<String> = (1..=16).map(|n| "a".repeat(n)).collect();
    let automaton = AcAutomaton::build(&patterns, MatchMode::CaseSensitive);
    let text = "a".repeat(10_000);

    c.benchmark_group("nested_reporting")
        .throughput(Throughput::Bytes(text.len() as u64))
        .bench_function("16_nested_patterns", |b| {
            b.iter(|| black_box(automaton.find_matches(&text)));
        });
}

fn bench_wildcard(c: &mut Criterion) {
    let text = random_text(10_000, 7);
    let pattern = WildcardPattern::new("ab?d?a", '?', MatchMode::CaseSensitive).unwrap();

    c.benchmark_group("wildcard")
        .throughput(Throughput::Bytes(text.len() as u64))
        .bench_function("two_gap_pattern", |b| {
            b.iter(|| black_box(pattern.find_starts(&text)));
        });
}

criterion_group!(
    benches,
    bench_build,
    bench_scan,
    bench_nested_reporting,
    bench_wildcard
);
criterion_main!(benches);
