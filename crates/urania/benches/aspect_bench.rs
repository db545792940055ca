use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{separation, AspectCalculator, OrbProfile};
use urania::chart::BodyPlacement;
use urania::configurations::{detect_configurations, PatternOrbs};
use urania::zodiac::resolve_sign;

fn placements() -> Vec<BodyPlacement> {
    (0..12)
        .map(|i| BodyPlacement {
            id: format!("body_{}", i),
            lon: (i as f64) * 30.0,
            lat: 0.0,
            distance: 1.0,
            speed_lon: 1.0,
            retrograde: false,
            is_node: i >= 10,
            sign: resolve_sign((i as f64) * 30.0),
            house: (i + 1) as u8,
            ruled_houses: vec![],
        })
        .collect()
}

fn bench_separation(c: &mut Criterion) {
    c.bench_function("separation", |b| {
        b.iter(|| separation(black_box(100.0), black_box(278.0)))
    });
}

fn bench_detect_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let bodies = placements();
    let orbs = OrbProfile::natal();

    c.bench_function("detect_aspects", |b| {
        b.iter(|| calculator.detect_aspects(black_box(&bodies), black_box(&orbs)))
    });
}

fn bench_detect_configurations(c: &mut Criterion) {
    let bodies = placements();
    let orbs = PatternOrbs::default();

    c.bench_function("detect_configurations", |b| {
        b.iter(|| detect_configurations(black_box(&bodies), black_box(&orbs)))
    });
}

criterion_group!(
    benches,
    bench_separation,
    bench_detect_aspects,
    bench_detect_configurations
);
criterion_main!(benches);
