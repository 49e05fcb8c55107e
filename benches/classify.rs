//! Benchmarks for the line classifier.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scrawl::highlight::{RuleSet, classify};

fn rules() -> RuleSet {
    RuleSet {
        keywords: ["if", "else", "while", "for", "return", "int", "char"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        comment_markers: vec!["//".to_string(), "#".to_string()],
    }
}

fn bench_classify_code_line(c: &mut Criterion) {
    let ruleset = rules();
    let line = r#"if (count < 42) return "done"; // trailing note"#;
    c.bench_function("classify_code_line", |b| {
        b.iter(|| classify(black_box(line), Some(&ruleset)).count())
    });
}

fn bench_classify_long_plain_line(c: &mut Criterion) {
    let ruleset = rules();
    let line = "lorem ipsum dolor sit amet ".repeat(40);
    c.bench_function("classify_long_plain_line", |b| {
        b.iter(|| classify(black_box(&line), Some(&ruleset)).count())
    });
}

fn bench_classify_disabled(c: &mut Criterion) {
    let line = "no highlighting configured for this line at all";
    c.bench_function("classify_disabled", |b| {
        b.iter(|| classify(black_box(line), None).count())
    });
}

criterion_group!(
    benches,
    bench_classify_code_line,
    bench_classify_long_plain_line,
    bench_classify_disabled
);
criterion_main!(benches);
