//! Per-frame simulation step
//!
//! Movement is per call (one call per display frame); `dt` only drives the
//! spawn clock.

use super::collision::{is_caught, is_missed};
use super::input::InputState;
use super::state::{GameEvent, GamePhase, GameWorld};
use crate::consts::CATCH_COLOR;

/// Advance the world by one frame of `dt_ms` milliseconds
pub fn tick(world: &mut GameWorld, input: &InputState, dt_ms: f64) {
    if world.phase != GamePhase::Playing {
        return;
    }

    // Non-finite deltas would pin the clock and the spawn timer at infinity
    if dt_ms.is_finite() {
        world.clock_ms += dt_ms.max(0.0);
    }

    input.apply(&mut world.player, world.playfield, &world.tuning);

    if world.clock_ms > world.next_spawn_ms {
        world.spawn_heart();
        world.next_spawn_ms = world.clock_ms + world.tuning.spawn_interval(world.love_meter);
    }

    update_hearts(world);
    update_particles(world);
}

/// Move hearts and resolve catches/misses, newest first
fn update_hearts(world: &mut GameWorld) {
    let catch_offset = world.tuning.catch_offset;
    let height = world.playfield.height;

    for i in (0..world.hearts.len()).rev() {
        world.hearts[i].advance();

        if is_caught(&world.hearts[i], &world.player, catch_offset) {
            let heart = world.hearts.remove(i);
            world.burst(heart.center(), CATCH_COLOR);
            world.love_meter = world.love_meter.saturating_add(world.tuning.love_per_catch);
            world.events.push(GameEvent::Caught {
                id: heart.id,
                love_meter: world.love_meter,
            });
            log::debug!("Caught heart {} (love meter {})", heart.id, world.love_meter);

            if world.love_meter >= world.tuning.win_threshold {
                world.phase = GamePhase::Win;
                world.events.push(GameEvent::Won {
                    love_meter: world.love_meter,
                });
                log::info!("Win with love meter {}", world.love_meter);
                return;
            }
            continue;
        }

        if is_missed(&world.hearts[i], height) {
            let heart = world.hearts.remove(i);
            world.lives = world.lives.saturating_sub(1);
            world.events.push(GameEvent::Missed {
                id: heart.id,
                lives: world.lives,
            });
            log::debug!("Missed heart {} ({} lives left)", heart.id, world.lives);

            if world.lives == 0 {
                world.phase = GamePhase::GameOver;
                world.events.push(GameEvent::GameOver {
                    love_meter: world.love_meter,
                });
                log::info!("Game over with love meter {}", world.love_meter);
                return;
            }
        }
    }
}

fn update_particles(world: &mut GameWorld) {
    let decay = world.tuning.particle_decay;
    world.particles.retain_mut(|p| p.update(decay));
}
