//! Benchmarks for the override merge paths.
//!
//! The interesting cases are the YAML short-circuit (no override, input returned as
//! is) against a full re-serialization, and the always-reserializing properties path.

use bundled_config::core::Overrides;
use bundled_config::format::{merge_properties, merge_yaml};
use bundled_config::sources::MapSource;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn yaml_document(sections: usize) -> String {
    let mut doc = String::from("# generated\n");
    for i in 0..sections {
        doc.push_str(&format!(
            "section{i}:\n  host: host{i}.local\n  port: {port}\n  user: svc{i}\n",
            port = 8000 + i
        ));
    }
    doc
}

fn properties_document(sections: usize) -> String {
    (0..sections)
        .map(|i| format!("section{i}.host=host{i}.local\nsection{i}.user=svc{i}\n"))
        .collect()
}

/// Benchmark YAML merging with and without a matching override
fn benchmark_yaml(c: &mut Criterion) {
    let no_match = Overrides::empty().with_source(MapSource::new("bench"));
    let one_match = Overrides::empty()
        .with_source(MapSource::new("bench").with_value("SECTION0_HOST", "prod.example.com"));

    let mut group = c.benchmark_group("merge_yaml");
    for sections in [10, 100] {
        let doc = yaml_document(sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));

        group.bench_with_input(BenchmarkId::new("no_override", sections), &doc, |b, doc| {
            b.iter(|| black_box(merge_yaml(doc.as_bytes(), &no_match)));
        });
        group.bench_with_input(BenchmarkId::new("one_override", sections), &doc, |b, doc| {
            b.iter(|| black_box(merge_yaml(doc.as_bytes(), &one_match)));
        });
    }
    group.finish();
}

/// Benchmark properties parsing, merging and re-serialization
fn benchmark_properties(c: &mut Criterion) {
    let overrides = Overrides::empty()
        .with_source(MapSource::new("bench").with_value("SECTION0_HOST", "prod.example.com"));

    let mut group = c.benchmark_group("merge_properties");
    for sections in [10, 100] {
        let doc = properties_document(sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| black_box(merge_properties(doc.as_bytes(), &overrides)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_yaml, benchmark_properties);
criterion_main!(benches);
