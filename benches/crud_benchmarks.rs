use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use osrb_tree::OSRBTreeSet;
use std::collections::BTreeSet;

const N: usize = 10_000;

/// Order-statistic probes per iteration; `BTreeSet` answers them by linear scans.
const PROBES: usize = 100;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_sequences() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── CRUD Benchmarks ────────────────────────────────────────────────────────

fn bench_set_insert(c: &mut Criterion) {
    for (order, keys) in key_sequences() {
        let mut group = c.benchmark_group(format!("set_insert_{order}"));

        group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
            b.iter(|| {
                let mut set = OSRBTreeSet::new();
                for &k in &keys {
                    set.insert(k);
                }
                set
            });
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &k in &keys {
                    set.insert(k);
                }
                set
            });
        });

        group.finish();
    }
}

fn bench_set_contains(c: &mut Criterion) {
    for (order, keys) in key_sequences() {
        let os_set: OSRBTreeSet<i64> = keys.iter().copied().collect();
        let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

        let mut group = c.benchmark_group(format!("set_contains_{order}"));

        group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|k| os_set.contains(k)).count());
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|k| bt_set.contains(k)).count());
        });

        group.finish();
    }
}

fn bench_set_remove(c: &mut Criterion) {
    for (order, keys) in key_sequences() {
        let mut group = c.benchmark_group(format!("set_remove_{order}"));

        group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<OSRBTreeSet<i64>>(),
                |mut set| {
                    for &k in &keys {
                        set.remove(&k);
                    }
                    set
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<BTreeSet<i64>>(),
                |mut set| {
                    for &k in &keys {
                        set.remove(&k);
                    }
                    set
                },
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// ─── Order-Statistic Benchmarks ─────────────────────────────────────────────

fn bench_set_get_by_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_set: OSRBTreeSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let ranks: Vec<usize> = (0..PROBES).map(|i| i * os_set.len() / PROBES).collect();

    let mut group = c.benchmark_group("set_get_by_rank");

    group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
        b.iter(|| ranks.iter().filter_map(|&r| os_set.get_by_rank(r)).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| ranks.iter().filter_map(|&r| bt_set.iter().nth(r)).sum::<i64>());
    });

    group.finish();
}

fn bench_set_lower_bound(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_set: OSRBTreeSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let bounds: Vec<i64> = random_keys(PROBES);

    let mut group = c.benchmark_group("set_lower_bound");

    group.bench_function(BenchmarkId::new("OSRBTreeSet", N), |b| {
        b.iter(|| bounds.iter().map(|bound| os_set.lower_bound(bound).1).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bounds.iter().map(|bound| bt_set.range(..*bound).count()).sum::<usize>());
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(crud_benches, bench_set_insert, bench_set_contains, bench_set_remove);

criterion_group!(order_statistic_benches, bench_set_get_by_rank, bench_set_lower_bound);

criterion_main!(crud_benches, order_statistic_benches);
