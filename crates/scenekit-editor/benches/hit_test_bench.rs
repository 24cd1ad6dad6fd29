use criterion::{criterion_group, criterion_main, Criterion};
use scenekit_core::Point;
use scenekit_editor::{Scene, ShapeRegistry};

fn build_scene(count: usize) -> Scene {
    let registry = ShapeRegistry::with_builtin_kinds();
    let tags = ["rect", "ellipse", "line"];
    let mut scene = Scene::new();
    for i in 0..count {
        let tag = tags[i % tags.len()];
        let pos = Point::new((i % 40) as f64 * 25.0, (i / 40) as f64 * 25.0);
        scene.spawn(&registry, tag, pos).unwrap();
    }
    scene
}

fn bench_hit_resolution(c: &mut Criterion) {
    let scene = build_scene(1000);
    c.bench_function("hit_test_top_1000_shapes", |b| {
        b.iter(|| {
            let mut hits = 0;
            for x in (0..1000).step_by(50) {
                for y in (0..600).step_by(50) {
                    if scene.hit_test_top(Point::new(x as f64, y as f64)).is_some() {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

fn bench_bounding_boxes(c: &mut Criterion) {
    let scene = build_scene(1000);
    c.bench_function("bounding_box_1000_shapes", |b| {
        b.iter(|| {
            scene
                .iter()
                .map(|s| s.bounding_box().width())
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_hit_resolution, bench_bounding_boxes);
criterion_main!(benches);
