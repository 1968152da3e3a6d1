//! Repository operation benchmarks.

use articlerep_bench::wide_article;
use articlerep_core::{Article, ArticleId, Config, Repository};
use articlerep_testkit::{stress_concurrent_inserts, StressConfig};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Benchmark an insert/remove round trip against key-list width.
fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove");

    for width in [1usize, 2, 4, 8].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, &width| {
            let repo = Repository::with_config(
                Config::new().capacity(1024).table_capacity(1024),
            )
            .unwrap();

            b.iter_batched(
                || wide_article(7, width),
                |article| {
                    let id = article.id();
                    repo.insert_article(black_box(article)).unwrap();
                    repo.remove_article(id).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark single-key lookup against bucket depth.
fn bench_find_by_author(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_author");

    for depth in [1u32, 16, 256].iter() {
        group.throughput(Throughput::Elements(u64::from(*depth)));
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            let repo = Repository::new(depth as usize).unwrap();
            for id in 0..depth {
                repo.insert_article(Article::new(ArticleId::new(id), ["hot"], ["shared"]))
                    .unwrap();
            }

            b.iter(|| black_box(repo.find_article_by_author(&["hot"])));
        });
    }
    group.finish();
}

/// Benchmark contended concurrent inserts across thread counts.
fn bench_concurrent_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_inserts");
    group.sample_size(10);

    for threads in [1usize, 2, 4, 8].iter() {
        let config = StressConfig {
            threads: *threads,
            articles_per_thread: 2_000,
            ..StressConfig::default()
        };
        group.throughput(Throughput::Elements(config.required_capacity() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &config,
            |b, config| {
                b.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let repo = Arc::new(
                            Repository::with_config(
                                Config::new()
                                    .capacity(config.required_capacity())
                                    .table_capacity(256),
                            )
                            .unwrap(),
                        );
                        let start = Instant::now();
                        stress_concurrent_inserts(&repo, config);
                        total += start.elapsed();
                    }
                    total
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_remove,
    bench_find_by_author,
    bench_concurrent_inserts
);
criterion_main!(benches);
