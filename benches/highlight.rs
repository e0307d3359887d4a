use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kedit::syntax::{highlight, select_for};
use kedit::TextBuffer;

fn c_source(lines: usize) -> Vec<Vec<u8>> {
    let templates: [&str; 6] = [
        "static int counter_{} = {};",
        "\tif (value > {}) return \"limit {}\";",
        "/* block {} opens",
        "   still inside {} */ double ratio = {}.5;",
        "// note {} about {}",
        "\tfor (long i = 0; i < {}; i++) total += i * {};",
    ];
    (0..lines)
        .map(|i| {
            templates[i % templates.len()]
                .replacen("{}", &i.to_string(), 1)
                .replacen("{}", &(i * 7).to_string(), 1)
                .into_bytes()
        })
        .collect()
}

fn bench_highlight_row(c: &mut Criterion) {
    let syntax = select_for("bench.c");
    let mut group = c.benchmark_group("highlight_row");
    for line in c_source(6) {
        let label = String::from_utf8_lossy(&line[..line.len().min(12)]).into_owned();
        group.bench_with_input(BenchmarkId::from_parameter(label), &line, |b, line| {
            b.iter(|| highlight(black_box(line), syntax, false))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let syntax = select_for("bench.c");
    let mut group = c.benchmark_group("load_and_highlight");
    for lines in [1_000usize, 10_000] {
        let source = c_source(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &source, |b, source| {
            b.iter(|| TextBuffer::from_lines(black_box(source.clone()), 8, syntax))
        });
    }
    group.finish();
}

fn bench_comment_cascade(c: &mut Criterion) {
    let syntax = select_for("bench.c");
    let mut group = c.benchmark_group("comment_cascade");
    for lines in [100usize, 1_000, 10_000] {
        // no closing marker anywhere: opening a comment on row 0 recolors every row
        let source: Vec<Vec<u8>> = (0..lines)
            .map(|i| format!("int value_{i} = {i};").into_bytes())
            .collect();
        let buffer = TextBuffer::from_lines(source, 8, syntax);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &buffer, |b, buffer| {
            b.iter(|| {
                let mut buffer = buffer.clone();
                buffer.insert_char(0, 0, b'*');
                buffer.insert_char(0, 0, b'/');
                black_box(buffer.row(lines - 1).map(|row| row.open_comment()))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_highlight_row, bench_load, bench_comment_cascade);
criterion_main!(benches);
