use criterion::{Criterion, criterion_group, criterion_main};
use markdown_limelight_engine::{CancelFlag, Document, FeatureToggles, scan};

/// Builds a document of `sections` heading-led blocks mixing the constructs
/// the scanner has to classify: paragraphs with inline code and
/// strikethrough, fenced and indented code, quotes, lists, and rules.
fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("# Section {i}\n\n"));
        content.push_str("Paragraph with `inline code` and ~~struck text~~ inside.  \n\n");
        content.push_str("```rust\nfn demo() {}\n```\n\n");
        content.push_str("> quoted line\n> another quoted line\nlazy continuation\n\n");
        content.push_str("- item one\n- item two\n  continuation text\n\n");
        content.push_str("    indented code line\n\n---\n\n");
    }
    content
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    let doc = Document::from(content.as_str());
    let toggles = FeatureToggles::default();

    group.bench_function("full_document", |b| {
        b.iter(|| {
            let ranges = scan(
                std::hint::black_box(&doc),
                Some(doc.line_count() / 2),
                &toggles,
                &CancelFlag::new(),
            );
            std::hint::black_box(ranges);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
