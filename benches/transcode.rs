use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_zson::{parse, transcode};

fn synthetic_document(entries: usize) -> String {
    let mut doc = String::from("// generated fixture\n{\n");
    for i in 0..entries {
        if i > 0 {
            doc.push_str(",\n");
        }
        doc.push_str(&format!(
            "  \"entry_{i}\": {{ /* record {i} */\n    \"count\": 1_000_{i:03},\n    \"note\": \"\"\"line one\nline two\"\"\" // folded\n  }}"
        ));
    }
    doc.push_str("\n}\n");
    doc
}

fn benchmark_transcode_plain(c: &mut Criterion) {
    // Plain JSON is the fast path: every character flows straight through.
    let doc = serde_json::to_string_pretty(&serde_json::json!({
        "name": "Alice",
        "scores": [1, 2, 3, 4, 5],
        "active": true
    }))
    .unwrap();

    c.bench_function("transcode_plain_json", |b| {
        b.iter(|| transcode(black_box(&doc)))
    });
}

fn benchmark_transcode_commented(c: &mut Criterion) {
    let doc = synthetic_document(50);

    c.bench_function("transcode_commented_document", |b| {
        b.iter(|| transcode(black_box(&doc)))
    });
}

fn benchmark_parse_commented(c: &mut Criterion) {
    let doc = synthetic_document(50);

    c.bench_function("parse_commented_document", |b| {
        b.iter(|| parse(black_box(&doc)))
    });
}

fn benchmark_transcode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode_by_size");

    for size in [10, 50, 100, 500].iter() {
        let doc = synthetic_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| transcode(black_box(doc)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_transcode_plain,
    benchmark_transcode_commented,
    benchmark_parse_commented,
    benchmark_transcode_sizes
);
criterion_main!(benches);
