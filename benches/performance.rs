//! Performance benchmarks for Police
//!
//! These benchmarks measure the performance of key operations:
//! - File discovery with the default vendor exclusions
//! - Violation collection over the builtin catalog on different file sizes
//! - Per-file inspection in normal and strict mode
//! - Full check workflow end-to-end
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench collection
//! ```
//!
//! ## Expected Performance Characteristics
//!
//! ### Collection
//! - Patterns are compiled once, when the catalog is built
//! - Matching is linear in file size for every rule
//! - Strict mode stops at the first matching rule
//!
//! ### Parallel Execution
//! - Files are inspected on the rayon thread pool
//! - Should scale well up to number of CPU cores

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use police::cli::check::check_paths;
use police::config::Config;
use police::engine::file_walker::FileWalker;
use police::engine::{ReportSink, SourceFilter, collect};
use police::{EnforcementOptions, Inspector, RuleCatalog};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Sink that drops reports so repeated iterations do not accumulate memory
struct NullSink;

impl ReportSink for NullSink {
    fn emit(&self, report: &str) {
        black_box(report);
    }
}

/// Roughly `size` bytes of component code with a sprinkling of violations
fn component_source(size: usize) -> String {
    let block = "export function total(items) {\n  let sum = 0;\n  for (const item of items) {\n    if (item.price === 0) continue;\n    sum += item.price;\n  }\n  return sum;\n}\n";
    let mut out = String::with_capacity(size + 64);
    while out.len() < size {
        out.push_str(block);
    }
    out.push_str("var legacy = 1;\nconsole.log(legacy);\n");
    out
}

/// Create a temporary project with source files and a vendored dependency
fn create_test_project(count: usize, size: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    let vendor = temp_dir.path().join("node_modules").join("dep");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&vendor).unwrap();

    let content = component_source(size);
    for i in 0..count {
        let ext = if i % 2 == 0 { "ts" } else { "js" };
        fs::write(src.join(format!("file{}.{}", i, ext)), &content).unwrap();
        fs::write(vendor.join(format!("dep{}.js", i)), &content).unwrap();
    }

    temp_dir
}

// ============================================================================
// File Discovery Benchmarks
// ============================================================================

/// Benchmark discovery of candidate files, pruning `node_modules`
fn bench_file_walking(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_walking");
    let filter = SourceFilter::default();

    for file_count in [10, 100].iter() {
        let temp_dir = create_test_project(*file_count, 500);
        group.throughput(Throughput::Elements(*file_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    let walker = FileWalker::new(temp_dir.path(), &filter).unwrap();
                    let files: Vec<_> = walker.walk().collect();
                    black_box(files)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Collection Benchmarks
// ============================================================================

/// Benchmark collecting every violation of the builtin catalog
fn bench_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    let catalog = RuleCatalog::builtin().unwrap();

    for size in [500, 5_000, 50_000].iter() {
        let content = component_source(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(collect(&catalog, "src/cart.ts", content).len()));
        });
    }

    group.finish();
}

/// Benchmark the per-file entry point in both modes
fn bench_inspection(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspection");
    let catalog = Arc::new(RuleCatalog::builtin().unwrap());
    let content = component_source(5_000);

    let normal = Inspector::new(
        Arc::clone(&catalog),
        EnforcementOptions::normal(),
        NullSink,
    );
    group.bench_function("normal", |b| {
        b.iter(|| black_box(normal.on_file("src/cart.ts", &content)));
    });

    let strict = Inspector::new(
        Arc::clone(&catalog),
        EnforcementOptions::strict(),
        NullSink,
    );
    group.bench_function("strict", |b| {
        b.iter(|| black_box(strict.on_file("src/cart.ts", &content)));
    });

    group.bench_function("skipped_vendor", |b| {
        b.iter(|| black_box(strict.on_file("node_modules/dep/cart.js", &content)));
    });

    group.finish();
}

// ============================================================================
// End-to-End Workflow Benchmarks
// ============================================================================

/// Benchmark the complete check workflow: discovery, parallel inspection, reports
fn bench_full_workflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_workflow");
    group.sample_size(10);

    let catalog = Arc::new(RuleCatalog::builtin().unwrap());
    let config = Config::default();

    for file_count in [10, 100].iter() {
        let temp_dir = create_test_project(*file_count, 2_000);
        let paths = vec![temp_dir.path().to_path_buf()];
        group.throughput(Throughput::Elements(*file_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    let summary =
                        check_paths(&paths, &config, Arc::clone(&catalog), NullSink)
                            .unwrap();
                    black_box(summary.violations)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark Registration
// ============================================================================

criterion_group!(file_benches, bench_file_walking);
criterion_group!(rule_benches, bench_collection, bench_inspection);
criterion_group!(workflow_benches, bench_full_workflow);
criterion_main!(file_benches, rule_benches, workflow_benches);
