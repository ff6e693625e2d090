//! Benchmarks for a full calculation and its individual stages.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tieban::prelude::*;
use tieban::stage;

fn sample() -> FourPillars {
    FourPillars::new(
        Pillar::new(Stem::Ren, Branch::Zi),
        Pillar::new(Stem::Bing, Branch::Wu),
        Pillar::new(Stem::Geng, Branch::Wu),
        Pillar::new(Stem::Ren, Branch::Wu),
    )
}

fn bench_stages(c: &mut Criterion) {
    let pillars = sample();
    let base = HexagramPair::new(Trigram::ZHEN, Trigram::DUI);
    let mut group = c.benchmark_group("stage");

    group.bench_function("time_slice", |b| {
        b.iter(|| stage::time_slice(black_box(&pillars)))
    });
    group.bench_function("body_life", |b| {
        b.iter(|| stage::body_life(black_box(&pillars)))
    });
    group.bench_function("eight_hexagram", |b| {
        b.iter(|| {
            stage::eight_hexagram(
                black_box(base),
                pillars.year(),
                2790,
                Gender::Male,
                YearStep::default(),
            )
        })
    });
    group.bench_function("eight_corner", |b| {
        b.iter(|| stage::eight_corner(black_box(base)))
    });

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let engine = Engine::default();
    let mut group = c.benchmark_group("engine");

    let request = Request::new(sample(), Gender::Male);
    group.throughput(Throughput::Elements(1));
    group.bench_function("calculate", |b| {
        b.iter(|| engine.calculate(black_box(&request)))
    });

    // all sixty day pillars, fixed year/month/hour
    let requests: Vec<Request> = (0..60)
        .map(|i| {
            let day = Pillar::new(Stem::ALL[i % 10], Branch::ALL[i % 12]);
            let p = sample();
            Request::new(FourPillars::new(p.year(), p.month(), day, p.hour()), Gender::Male)
        })
        .collect();
    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("calculate_sexagenary_cycle", |b| {
        b.iter(|| {
            for request in &requests {
                let _ = black_box(engine.calculate(request));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stages, bench_engine);
criterion_main!(benches);
