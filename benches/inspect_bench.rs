/// Benchmarks for the dprobe lookup pipeline.
///
/// Run with: `cargo bench`
///
/// Each invocation re-parses the caller's file, so cost grows with file size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dprobe::{CallSite, Config, Inspector};
use std::fmt::Write as _;
use std::fs;
use tempfile::tempdir;

/// A source file with `functions` functions, each holding one `d!` call.
fn synthetic_source(functions: usize) -> String {
    let mut src = String::new();
    for i in 0..functions {
        writeln!(src, "fn func_{}(cfg: &Config, items: &[u32]) {{", i).unwrap();
        writeln!(src, "    let total = items.iter().sum::<u32>();").unwrap();
        writeln!(src, "    d!(total, cfg.port + {}, items[0], \"literal\");", i).unwrap();
        writeln!(src, "}}").unwrap();
    }
    src
}

fn bench_argument_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("argument_names");

    for functions in [10usize, 100, 1000] {
        let dir = tempdir().unwrap();
        let path = dir.path().join("synthetic.rs");
        let src = synthetic_source(functions);
        fs::write(&path, &src).unwrap();

        // The last call in the file: worst case for the traversal.
        let site = CallSite::new("bench::func", &path, functions * 4 - 1);
        let inspector = Inspector::new(Config::plain());

        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(functions), &site, |b, site| {
            b.iter(|| black_box(inspector.argument_names(black_box(site))))
        });
    }

    group.finish();
}

fn bench_full_line(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("synthetic.rs");
    fs::write(&path, synthetic_source(50)).unwrap();

    let site = CallSite::new("bench::func", &path, 3);
    let inspector = Inspector::new(Config::default());
    let items = vec![1u32, 2, 3];

    c.bench_function("line_with_values", |b| {
        b.iter(|| black_box(inspector.line(&site, &[&6u32, &8080u16, &items[0], &"literal"])))
    });
}

criterion_group!(benches, bench_argument_names, bench_full_line);
criterion_main!(benches);
