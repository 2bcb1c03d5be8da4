use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gooey_graphics::{Point, Size};
use gooey_view::{GooConfig, GooEngine};

const ROOT_SIZE: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn scene_assembly(c: &mut Criterion) {
    let mut engine = GooEngine::new(GooConfig::default());
    engine.set_size(ROOT_SIZE);
    engine.press(Point::new(540.0, 960.0));
    engine.drag(Point::new(620.0, 1100.0));

    c.bench_function("scene_normal", |b| b.iter(|| black_box(engine.scene())));
}

fn drag_and_scene(c: &mut Criterion) {
    let mut engine = GooEngine::new(GooConfig::default());
    engine.set_size(ROOT_SIZE);
    engine.press(Point::new(540.0, 960.0));

    c.bench_function("drag_move_frame", |b| {
        let mut step = 0u32;
        b.iter(|| {
            // Wander around the anchor so every iteration solves a fresh slope.
            step = step.wrapping_add(1);
            let angle = step as f32 * 0.1;
            let position = Point::new(
                540.0 + 150.0 * angle.cos(),
                960.0 + 150.0 * angle.sin(),
            );
            engine.drag(position);
            engine.take_redraw_request();
            black_box(engine.scene())
        });
    });
}

criterion_group!(benches, scene_assembly, drag_and_scene);
criterion_main!(benches);
