//! Property tests for simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use heart_catch::Tuning;
use heart_catch::consts::*;
use heart_catch::sim::{
    Aabb, GameEvent, GamePhase, GameWorld, Heart, InputState, Playfield, catch_box, heart_box,
    is_caught, is_missed, tick,
};

fn playing(width: f32, height: f32, seed: u64) -> GameWorld {
    let mut world = GameWorld::new(Playfield::new(width, height), Tuning::default(), seed);
    world.start_or_restart();
    world
}

fn still_heart(world: &mut GameWorld, pos: Vec2, size: f32) {
    let id = world.next_entity_id();
    world.hearts.push(Heart {
        id,
        pos,
        size,
        speed: 0.0,
        sway_phase: 0.0,
        sway_rate: 0.0,
    });
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Catch,
    Miss,
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![Just(Outcome::Catch), Just(Outcome::Miss)]
}

proptest! {
    #[test]
    fn player_stays_in_bounds(
        width in 10.0f32..2000.0,
        start_x in -5000.0f32..5000.0,
        frames in prop::collection::vec(
            (any::<bool>(), any::<bool>(), prop::option::of(-10_000.0f32..10_000.0)),
            1..40,
        ),
    ) {
        let mut world = playing(width, 600.0, 1);
        world.next_spawn_ms = f64::MAX;
        world.player.pos.x = start_x;
        for (left, right, pointer_x) in frames {
            let input = InputState { left, right, pointer_x };
            tick(&mut world, &input, FRAME_MS);
            let max_x = (width - PLAYER_WIDTH).max(0.0);
            prop_assert!(world.player.pos.x >= 0.0);
            prop_assert!(world.player.pos.x <= max_x);
        }
    }

    #[test]
    fn lives_and_love_meter_stay_bounded(
        outcomes in prop::collection::vec(outcome(), 1..60),
    ) {
        let mut world = playing(800.0, 600.0, 2);
        world.next_spawn_ms = f64::MAX;
        let mut events = Vec::new();

        for o in outcomes {
            match o {
                Outcome::Catch => {
                    let pos = world.player.pos + Vec2::new(20.0, 30.0);
                    still_heart(&mut world, pos, 30.0);
                }
                Outcome::Miss => still_heart(&mut world, Vec2::new(0.0, 601.0), 30.0),
            }
            tick(&mut world, &InputState::default(), FRAME_MS);
            events.extend(world.drain_events());

            prop_assert!(world.lives <= STARTING_LIVES);
            prop_assert!(world.love_meter <= WIN_THRESHOLD);
        }

        let wins = events.iter().filter(|e| matches!(e, GameEvent::Won { .. })).count();
        let losses = events.iter().filter(|e| matches!(e, GameEvent::GameOver { .. })).count();
        prop_assert!(wins + losses <= 1);
        prop_assert_eq!(wins == 1, world.phase == GamePhase::Win);
        prop_assert_eq!(losses == 1, world.phase == GamePhase::GameOver);
        prop_assert_eq!(world.phase == GamePhase::GameOver, world.lives == 0);
        prop_assert_eq!(world.phase == GamePhase::Win, world.love_meter == WIN_THRESHOLD);
    }

    #[test]
    fn catch_matches_box_projection_overlap(
        hx in 250.0f32..550.0,
        hy in 400.0f32..650.0,
        size in 30.0f32..50.0,
    ) {
        let world = playing(800.0, 600.0, 3);
        let heart = Heart {
            id: 1,
            pos: Vec2::new(hx, hy),
            size,
            speed: 0.0,
            sway_phase: 0.0,
            sway_rate: 0.0,
        };
        let p: Aabb = catch_box(&world.player, CATCH_OFFSET);
        let h: Aabb = heart_box(&heart);
        let x_overlap = h.min.x < p.max.x && h.max.x > p.min.x;
        let y_overlap = h.min.y < p.max.y && h.max.y > p.min.y;

        let caught = is_caught(&heart, &world.player, CATCH_OFFSET);
        prop_assert_eq!(caught, x_overlap && y_overlap);
        prop_assert!(!(caught && is_missed(&heart, 600.0)));
    }
}

#[test]
fn restart_resets_after_random_play() {
    let mut world = playing(800.0, 600.0, 9);
    let input = InputState::default();
    while world.phase == GamePhase::Playing {
        tick(&mut world, &input, FRAME_MS);
    }
    assert!(world.phase.is_terminal());

    world.start_or_restart();
    assert_eq!(world.phase, GamePhase::Playing);
    assert_eq!(world.lives, STARTING_LIVES);
    assert_eq!(world.love_meter, 0);
    assert!(world.hearts.is_empty());
    assert!(world.particles.is_empty());
}
