use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mbox_lexer_engine::{MboxLexer, Style};
use xi_rope::Rope;
mod common;

fn bench_lex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_all");
    group.sample_size(10);

    for messages in [10, 100, 1000] {
        let rope = Rope::from(common::generate_archive(messages).as_str());
        group.bench_with_input(BenchmarkId::new("rope", messages), &rope, |b, rope| {
            b.iter(|| MboxLexer::new().lex_all(std::hint::black_box(rope)));
        });
    }

    let broken = Rope::from(common::generate_broken_archive(100).as_str());
    group.bench_function("broken_100", |b| {
        b.iter(|| MboxLexer::new().lex_all(std::hint::black_box(&broken)));
    });

    group.finish();
}

fn bench_visible_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_window");
    group.sample_size(10);

    let rope = Rope::from(common::generate_archive(1000).as_str());
    let start = rope.len() / 2;
    group.bench_function("4k_from_middle", |b| {
        b.iter(|| {
            MboxLexer::new().lex(
                std::hint::black_box(&rope),
                start,
                4096,
                Style::Default,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lex_all, bench_visible_window);
criterion_main!(benches);
