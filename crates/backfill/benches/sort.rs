use backfill::{flatten, sort, sort_by, Container, Depth, Nested};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn reversed(length: i64) -> Container<i64> {
    Container::from_values((0..length).rev())
}

fn nested(depth: usize) -> Vec<Nested<usize>> {
    (0..depth).fold(vec![Nested::Item(0)], |inner, level| {
        vec![Nested::Item(level), Nested::List(inner), Nested::Item(level)]
    })
}

fn criterion_benchmark(c: &mut Criterion) {
    for length in [16, 128] {
        let data = reversed(length);

        c.bench_with_input(BenchmarkId::new("sort reversed", length), &data, |b, data| {
            b.iter(|| sort(data))
        });

        c.bench_with_input(
            BenchmarkId::new("sort_by descending", length),
            &data,
            |b, data| b.iter(|| sort_by(data, |a, b| b.cmp(a))),
        );
    }

    let data = nested(64);
    c.bench_with_input(
        BenchmarkId::new("flatten unbounded", 64),
        &data,
        |b, data| b.iter(|| flatten(data.clone(), Depth::Unbounded)),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
