//! Benchmarks for tripcheck core operations.
//!
//! Run with: cargo bench
//!
//! Results include 95% confidence intervals via Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tripcheck::core::store;
use tripcheck::core::types::Snapshot;
use tripcheck::tripwire::{diff, hasher, scanner};

fn bench_sha256_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_bytes");
    for size in [64, 256, 1024, 4096] {
        let input = vec![b'x'; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(hasher::hash_bytes(black_box(input))));
        });
    }
    group.finish();
}

fn bench_sha256_file(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let mut group = c.benchmark_group("sha256_file");
    for size_kb in [1, 64, 1024] {
        let path = dir.path().join(format!("bench_{size_kb}k.bin"));
        std::fs::write(&path, vec![0xABu8; size_kb * 1024]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size_kb), &path, |b, path| {
            b.iter(|| black_box(hasher::hash_file(black_box(path)).unwrap()));
        });
    }
    group.finish();
}

fn bench_scan_tree(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    for d in 0..10 {
        let sub = dir.path().join(format!("dir-{d:02}"));
        std::fs::create_dir(&sub).unwrap();
        for f in 0..20 {
            std::fs::write(sub.join(format!("file-{f:02}.txt")), format!("{d}/{f}")).unwrap();
        }
    }

    c.bench_function("scan_200_files", |b| {
        b.iter(|| black_box(scanner::snapshot_of(black_box(dir.path())).unwrap()));
    });
}

fn synthetic_snapshot(n: usize, salt: &str) -> Snapshot {
    (0..n)
        .map(|i| {
            let content = if i % 10 == 0 { format!("{i}{salt}") } else { i.to_string() };
            (format!("/srv/data/file-{i:06}"), hasher::hash_bytes(content.as_bytes()))
        })
        .collect()
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_snapshots");
    for n in [100, 1_000, 10_000] {
        let stored = synthetic_snapshot(n, "");
        let fresh = synthetic_snapshot(n + n / 20, "*");
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(diff::diff_snapshots(black_box(&stored), black_box(&fresh))));
        });
    }
    group.finish();
}

fn bench_store_serialize(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(1_000, "");
    c.bench_function("store_json_1000", |b| {
        b.iter(|| black_box(store::to_store_json(black_box(&snapshot)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_sha256_bytes,
    bench_sha256_file,
    bench_scan_tree,
    bench_diff,
    bench_store_serialize
);
criterion_main!(benches);
