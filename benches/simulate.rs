use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfa_lab::prelude::*;

/// Counts the `a`s modulo `n`, accepting when the count is zero.
fn counter(n: usize) -> Dfa {
    let states = (0..n).map(|i| format!("q{i}")).collect::<Vec<_>>();
    let transitions = (0..n).flat_map(|i| {
        [
            (format!("q{i}"), "a".to_string(), format!("q{}", (i + 1) % n)),
            (format!("q{i}"), "b".to_string(), format!("q{i}")),
        ]
    });
    Dfa::builder()
        .with_alphabet(["a", "b"])
        .with_states(states)
        .with_initial("q0")
        .with_accepting(["q0"])
        .with_transitions(transitions)
        .build_unchecked()
}

fn bench_simulate(c: &mut Criterion) {
    let dfa = counter(64);
    let input = "ab".repeat(512);
    c.bench_function("simulate 1024 symbols", |b| {
        b.iter(|| simulate(black_box(&dfa), black_box(&input)))
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let dfa = counter(256);
    c.bench_function("shortest path across 256 states", |b| {
        b.iter(|| shortest_path(black_box(&dfa), "q1", "q0"))
    });
}

fn bench_oracle(c: &mut Criterion) {
    let dfa = counter(64);
    c.bench_function("generate accepted and rejected", |b| {
        let mut oracle = Oracle::with_seed(&dfa, 17);
        b.iter(|| (oracle.accepted(), oracle.rejected()))
    });
}

criterion_group!(benches, bench_simulate, bench_shortest_path, bench_oracle);
criterion_main!(benches);
