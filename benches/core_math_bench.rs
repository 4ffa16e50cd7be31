use criterion::{criterion_group, criterion_main, Criterion};
use lhp_chart::core::{compute_axes, project_pairs, ValidatedRecord, Viewport};
use lhp_chart::interaction::HighlightState;
use lhp_chart::render::build_scene;
use std::hint::black_box;

fn synthetic_records(count: usize) -> Vec<ValidatedRecord> {
    (0..count)
        .map(|i| ValidatedRecord {
            id: format!("entity-{i}"),
            habit_first: format!("{}", 20 + (i % 60)),
            trust_first: format!("{}", 30 + (i % 50)),
            date_first: "2023-01-01".to_owned(),
            habit_latest: format!("{}", 35 + (i % 60)),
            trust_latest: format!("{}", 40 + (i % 50)),
            date_latest: "2023-06-01".to_owned(),
        })
        .collect()
}

fn bench_pair_projection_10k(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("pair_projection_10k", |b| {
        b.iter(|| {
            let pairs = project_pairs(black_box(&records));
            black_box(pairs)
        })
    });
}

fn bench_axis_computation_10k(c: &mut Criterion) {
    let pairs = project_pairs(&synthetic_records(10_000));

    c.bench_function("axis_computation_10k", |b| {
        b.iter(|| black_box(compute_axes(black_box(&pairs))))
    });
}

fn bench_scene_build_2k(c: &mut Criterion) {
    let pairs = project_pairs(&synthetic_records(2_000));
    let axes = compute_axes(&pairs);
    let highlight = HighlightState::default();
    let viewport = Viewport::new(1600, 900);

    c.bench_function("scene_build_2k", |b| {
        b.iter(|| {
            let scene = build_scene(
                black_box(&pairs),
                black_box(&axes),
                black_box(&highlight),
                black_box(viewport),
            )
            .expect("scene should build");
            black_box(scene)
        })
    });
}

criterion_group!(
    benches,
    bench_pair_projection_10k,
    bench_axis_computation_10k,
    bench_scene_build_2k
);
criterion_main!(benches);
