use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pole_position::core::{render_frame, DistanceMode, GameState, RecordingSurface};
use pole_position::term::{Canvas, FrameBuffer, SpriteSheet, Viewport};
use pole_position::types::{InputEvent, MAX_SPEED};

fn racing() -> GameState {
    let mut game = GameState::new(12345, DistanceMode::Scaled).unwrap();
    game.apply_input(InputEvent::AccelerateOn);
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = racing();

    c.bench_function("race_tick", |b| {
        b.iter(|| {
            game.player_mut().set_speed(black_box(MAX_SPEED));
            game.tick();
        })
    });
}

fn bench_road_sweep(c: &mut Criterion) {
    let game = racing();
    let mut surface = RecordingSurface::new();

    c.bench_function("road_sweep_200_scanlines", |b| {
        b.iter(|| {
            surface.clear();
            game.road().render(black_box(&mut surface));
        })
    });
}

fn bench_scanline(c: &mut Criterion) {
    let game = racing();

    c.bench_function("road_scanline", |b| {
        b.iter(|| game.road().scanline(black_box(150)))
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let game = racing();
    let mut canvas = Canvas::new(SpriteSheet::builtin(), Viewport::new(160, 48));
    let assets = canvas.sheet().catalog();
    let mut fb = FrameBuffer::new(160, 48);

    c.bench_function("full_frame_160x48", |b| {
        b.iter(|| {
            canvas.begin_frame();
            render_frame(&game, &assets, &mut canvas);
            canvas.present(black_box(&mut fb));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_road_sweep,
    bench_scanline,
    bench_full_frame
);
criterion_main!(benches);
