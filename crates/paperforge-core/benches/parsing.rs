use criterion::{black_box, criterion_group, criterion_main, Criterion};

use paperforge_markup::parse;

fn bench_markup_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_parse");

    let simple = "<p>I <code>love</code> cats and <code>fear</code> dogs.</p>";

    let nested = r#"<div class="passage">
<p>He <b>really</b> <code>enjoys</code> reading &amp; writing.</p>
<p>She <i>also <code>likes</code> it</i>, most days.</p>
</div>"#;

    let malformed = "<p>left open <b>bold</i> 3 < 5 &bogus; </nothing><code>gap";

    let large = {
        let mut s = String::new();
        for i in 0..200 {
            s.push_str(&format!(
                "<p>Sentence {i} has a <code>blank-{i}</code> in the middle.</p>\n"
            ));
        }
        s
    };

    group.bench_function("simple", |b| b.iter(|| parse(black_box(simple))));

    group.bench_function("nested", |b| b.iter(|| parse(black_box(nested))));

    group.bench_function("malformed", |b| b.iter(|| parse(black_box(malformed))));

    group.bench_function("200_paragraphs", |b| b.iter(|| parse(black_box(&large))));

    group.finish();
}

fn bench_quiz_file_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_file_parsing");

    let small_toml = generate_quiz_toml(5);
    let medium_toml = generate_quiz_toml(50);
    let large_toml = generate_quiz_toml(200);

    group.bench_function("5_blocks", |b| {
        b.iter(|| {
            paperforge_core::loader::parse_quiz_toml_str(
                black_box(&small_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("50_blocks", |b| {
        b.iter(|| {
            paperforge_core::loader::parse_quiz_toml_str(
                black_box(&medium_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("200_blocks", |b| {
        b.iter(|| {
            paperforge_core::loader::parse_quiz_toml_str(
                black_box(&large_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.finish();
}

fn generate_quiz_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[paper]
name = "Benchmark"
start_number = 1
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[blocks]]
type = "fishing"
id = "block_{i}"
text = "<p>Item {i} is <code>word-{i}</code> here.</p>"
distractors = ["alt-a-{i}", "alt-b-{i}"]
"#
        ));
    }
    s
}

criterion_group!(benches, bench_markup_parse, bench_quiz_file_parsing);
criterion_main!(benches);
