//! End-to-end race behaviour through the facade crate.

use pole_position::core::{DistanceMode, GameState, Player, RaceSnapshot};
use pole_position::types::{CarFrame, InputEvent, MAX_SPEED, ROAD_LENGTH};
use pole_position::InputScript;

fn race(seed: u32) -> GameState {
    GameState::new(seed, DistanceMode::Literal).expect("builtin circuit is valid")
}

#[test]
fn test_full_throttle_reaches_top_speed_in_sixty_ticks() {
    let mut game = race(1);
    game.apply_input(InputEvent::AccelerateOn);
    for tick in 1..=60 {
        game.tick();
        if tick < 60 {
            assert!(game.player().speed() < MAX_SPEED);
        }
    }
    assert_eq!(game.player().speed(), MAX_SPEED);
}

#[test]
fn test_releasing_throttle_coasts_to_a_stop() {
    let mut game = race(1);
    game.player_mut().set_speed(100);
    for _ in 0..20 {
        game.tick();
    }
    assert_eq!(game.player().speed(), 0);
    assert_eq!(game.player().car_frame(), CarFrame::SteerNone);
}

#[test]
fn test_braking_shows_brake_frame_and_slows_hard() {
    let mut game = race(1);
    game.player_mut().set_speed(100);
    game.apply_input(InputEvent::SteerLeft);
    game.apply_input(InputEvent::BrakeOn);
    game.tick();
    assert_eq!(game.player().speed(), 65);
    assert_eq!(game.player().car_frame(), CarFrame::BrakeLeft);
}

#[test]
fn test_steering_into_the_grass_costs_speed() {
    let mut game = race(1);
    game.player_mut().set_speed(200);
    game.apply_input(InputEvent::AccelerateOn);
    game.apply_input(InputEvent::SteerLeft);

    let mut snap = RaceSnapshot::default();
    let mut saw_off_road = false;
    for _ in 0..40 {
        game.tick();
        game.snapshot_into(&mut snap);
        if snap.off_road {
            saw_off_road = true;
            assert!(Player::is_off_road(snap.scroll));
        }
    }
    assert!(saw_off_road, "steering left for 40 ticks should leave the road");
    assert!(game.player().speed() < MAX_SPEED);
}

#[test]
fn test_banner_appears_in_first_window() {
    let mut game = race(3);
    let mut first_spawn = None;
    for tick in 0..ROAD_LENGTH as u64 * 2 {
        // Hold top speed so distance advances one km per tick.
        game.player_mut().set_speed(MAX_SPEED);
        game.tick();
        if first_spawn.is_none() && game.banner().active() {
            first_spawn = Some((tick, game.road().distance()));
        }
    }
    let (_, km) = first_spawn.expect("banner never spawned");
    assert!((50..=61).contains(&km), "spawned at km {km}");
}

#[test]
fn test_scripted_runs_are_reproducible() {
    let run = |seed: u32| {
        let mut script =
            InputScript::parse("accelerateOn@0,steerRight@50,steerNone@70,brakeOn@200,brakeOff@210")
                .unwrap();
        let mut game = GameState::new(seed, DistanceMode::Scaled).unwrap();
        let mut trace = Vec::new();
        for tick in 0..400 {
            for ev in script.due(tick) {
                game.apply_input(ev);
            }
            game.tick();
            trace.push(game.snapshot());
        }
        trace
    };
    assert_eq!(run(9), run(9));
}

#[test]
fn test_scaled_mode_travels_at_partial_speed() {
    let mut literal = race(1);
    let mut scaled = GameState::new(1, DistanceMode::Scaled).unwrap();
    for game in [&mut literal, &mut scaled] {
        for _ in 0..30 {
            game.player_mut().set_speed(MAX_SPEED / 2);
            game.tick();
        }
    }
    assert_eq!(literal.road().distance(), 0);
    assert_eq!(scaled.road().distance(), 15);
}

#[test]
fn test_step_converts_wall_time_into_ticks() {
    let mut game = race(1);
    game.apply_input(InputEvent::AccelerateOn);
    let mut ticks = 0;
    for _ in 0..100 {
        ticks += game.step(16);
    }
    // 1600ms at 40ms per tick.
    assert_eq!(ticks, 40);
    assert_eq!(game.player().speed(), 200);
}
