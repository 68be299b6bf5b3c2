use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent};

use pole_position::core::{render_frame, DistanceMode, GameState, RaceSnapshot};
use pole_position::input::InputHandler;
use pole_position::term::{Canvas, FrameBuffer, SpriteSheet, Viewport};
use pole_position::types::{InputEvent, MAX_SPEED};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is global, so parallel tests would race.
#[test]
fn race_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = GameState::new(1, DistanceMode::Scaled).unwrap();
    let mut canvas = Canvas::new(SpriteSheet::builtin(), Viewport::new(120, 40));
    let assets = canvas.sheet().catalog();
    game.use_assets(&assets);
    let mut fb = FrameBuffer::new(120, 40);
    let mut snap = RaceSnapshot::default();
    let mut input = InputHandler::new().with_key_release_timeout_ms(100);

    // Warm-up.
    game.apply_input(InputEvent::AccelerateOn);
    game.tick();
    canvas.begin_frame();
    render_frame(&game, &assets, &mut canvas);
    canvas.present(&mut fb);

    let allocs = with_alloc_counting(|| {
        // Cover both banner windows and a lap wrap.
        for i in 0..600 {
            game.player_mut().set_speed(MAX_SPEED);
            if i % 50 == 0 {
                game.apply_input(InputEvent::SteerLeft);
            } else if i % 50 == 25 {
                game.apply_input(InputEvent::SteerRight);
            }
            game.tick();
            game.snapshot_into(&mut snap);

            if let Some(ev) = input.handle_key_event(KeyEvent::from(KeyCode::Char('z'))) {
                game.apply_input(ev);
            }
            for ev in input.update(40) {
                game.apply_input(ev);
            }

            canvas.begin_frame();
            render_frame(&game, &assets, &mut canvas);
            canvas.present(&mut fb);
        }
        let _ = game.step(1_000);
    });

    assert_eq!(allocs, 0);
}
