//! 工具函数与解析性能基准测试

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linkshelf::services::{Route, resolve};
use linkshelf::storage::{Entry, HISTORY_CAPACITY};
use linkshelf::utils::generate_random_code;
use linkshelf::utils::url_validator::validate_url;

// ============== generate_random_code 基准测试 ==============

fn bench_generate_random_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_random_code");

    for length in [6, 8, 12, 20] {
        group.bench_with_input(BenchmarkId::new("length", length), &length, |b, &length| {
            b.iter(|| {
                let code = generate_random_code(length);
                assert_eq!(code.len(), length);
            });
        });
    }

    group.finish();
}

// ============== validate_url 基准测试 ==============

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    group.bench_function("valid_https", |b| {
        b.iter(|| {
            assert!(validate_url("https://example.com/path?query=1").is_ok());
        });
    });

    group.bench_function("invalid_dangerous_protocol", |b| {
        b.iter(|| {
            assert!(validate_url("javascript:alert(1)").is_err());
        });
    });

    group.bench_function("invalid_not_a_url", |b| {
        b.iter(|| {
            assert!(validate_url("not a url").is_err());
        });
    });

    group.finish();
}

// ============== resolve 基准测试 ==============

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("services/resolve");

    let history: Vec<Entry> = (0..HISTORY_CAPACITY as i64)
        .map(|i| {
            Entry::new(
                i,
                format!("https://example.com/{}", i),
                format!("http://localhost:8080/{}", generate_random_code(6)),
                Utc::now(),
                None,
            )
        })
        .collect();
    let last_code = history[HISTORY_CAPACITY - 1].short_code().to_string();

    group.bench_function("hit_oldest", |b| {
        b.iter(|| {
            assert!(resolve(&last_code, &history).is_ok());
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            assert!(resolve("does-not-exist", &history).is_err());
        });
    });

    group.bench_function("route_parse", |b| {
        b.iter(|| {
            assert!(matches!(
                Route::parse("http://localhost:8080/abc123?utm=1"),
                Route::Lookup(_)
            ));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_random_code,
    bench_validate_url,
    bench_resolve,
);
criterion_main!(benches);
