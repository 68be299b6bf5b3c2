//! Rendering the race through the terminal canvas.

use pole_position::core::{render_frame, DistanceMode, GameState};
use pole_position::term::{Canvas, FrameBuffer, SpriteSheet, Viewport, HALF_BLOCK};
use pole_position::types::{palette, APP_WIDTH, InputEvent};

fn one_pixel_per_unit() -> Canvas {
    Canvas::new(SpriteSheet::builtin(), Viewport::new(640, 240))
}

fn draw(game: &GameState, canvas: &mut Canvas) {
    let assets = canvas.sheet().catalog();
    canvas.begin_frame();
    render_frame(game, &assets, canvas);
}

#[test]
fn sky_road_and_grass_land_where_expected() {
    let game = GameState::new(1, DistanceMode::Literal).unwrap();
    let mut canvas = one_pixel_per_unit();
    draw(&game, &mut canvas);

    let px = canvas.pixels();
    assert_eq!(px.get(320, 100), Some(palette::SKY));
    // Far scanline is only 40px wide, so x = 10 just below the horizon is grass.
    assert_eq!(px.get(10, 285), Some(palette::GRASS));
    // Road surface between the border and division stripes, mid-distance.
    assert_eq!(px.get(200, 400), Some(palette::ROAD));
    // Nearest scanline starts with a white border.
    assert_eq!(px.get(2, 479), Some(palette::WHITE));
}

#[test]
fn hud_text_is_overlaid() {
    let game = GameState::new(1, DistanceMode::Literal).unwrap();
    let mut canvas = one_pixel_per_unit();
    draw(&game, &mut canvas);

    // "TIME LEFT" at x = APP_WIDTH / 2 - 40, baseline 30.
    let col = (APP_WIDTH / 2 - 40) as u16;
    assert_eq!(canvas.glyph_at(col, 14).map(|g| g.ch), Some('T'));
    assert_eq!(canvas.glyph_at(col + 5, 14).map(|g| g.ch), Some('L'));
}

#[test]
fn frames_change_as_the_race_moves() {
    let mut game = GameState::new(1, DistanceMode::Literal).unwrap();
    let mut canvas = Canvas::new(SpriteSheet::builtin(), Viewport::new(80, 24));
    let mut a = FrameBuffer::new(80, 24);
    let mut b = FrameBuffer::new(80, 24);

    draw(&game, &mut canvas);
    canvas.present(&mut a);

    game.apply_input(InputEvent::AccelerateOn);
    for _ in 0..40 {
        game.tick();
    }
    draw(&game, &mut canvas);
    canvas.present(&mut b);

    assert_ne!(a, b, "stripes should have moved");
    assert!(b.cells().iter().any(|c| c.ch == HALF_BLOCK));
}
