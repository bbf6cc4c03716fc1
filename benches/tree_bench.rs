//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use avl_core::{AvlTree, TreeConfig};

fn scrambled(n: u32) -> Vec<u32> {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761)).collect()
}

fn build(keys: &[u32]) -> AvlTree<u32> {
    let mut tree = AvlTree::with_config(TreeConfig::release());
    tree.extend(keys.iter().copied());
    tree
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [1_000u32, 10_000, 100_000] {
        let sequential: Vec<u32> = (0..n).collect();
        let random = scrambled(n);

        group.bench_with_input(BenchmarkId::new("sequential", n), &sequential, |b, keys| {
            b.iter(|| black_box(build(keys)));
        });
        group.bench_with_input(BenchmarkId::new("scrambled", n), &random, |b, keys| {
            b.iter(|| black_box(build(keys)));
        });
    }
    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let keys = scrambled(100_000);
    let tree = build(&keys);

    c.bench_function("search_hit_100k", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(tree.contains(&keys[i]))
        });
    });
}

fn benchmark_remove(c: &mut Criterion) {
    let keys = scrambled(10_000);

    c.bench_function("build_then_drain_10k", |b| {
        b.iter(|| {
            let mut tree = build(&keys);
            for key in &keys {
                tree.remove(key);
            }
            black_box(tree.is_empty())
        });
    });
}

criterion_group!(benches, benchmark_insert, benchmark_search, benchmark_remove);
criterion_main!(benches);
