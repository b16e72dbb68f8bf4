//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one [`GameWorld`], owned by
//! the host driver and passed explicitly to `tick` and the renderer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_span;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start trigger
    Start,
    /// Active gameplay
    Playing,
    /// Ran out of lives
    GameOver,
    /// Love meter reached the win threshold
    Win,
}

impl GamePhase {
    /// GameOver and Win only leave via restart
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Spawned { id: u32 },
    Caught { id: u32, love_meter: u32 },
    Missed { id: u32, lives: u8 },
    Won { love_meter: u32 },
    GameOver { love_meter: u32 },
}

/// Visible simulation area, sized to the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player's basket
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(playfield: Playfield) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        };
        player.center(playfield);
        player
    }

    /// Center horizontally and sit on the bottom margin
    pub fn center(&mut self, playfield: Playfield) {
        self.pos.x = playfield.width / 2.0 - self.size.x / 2.0;
        self.fit(playfield);
    }

    /// Re-anchor to the bottom edge and clamp into the horizontal bounds
    pub fn fit(&mut self, playfield: Playfield) {
        self.pos.y = playfield.height - self.size.y - PLAYER_BOTTOM_MARGIN;
        self.clamp_x(playfield);
    }

    pub fn clamp_x(&mut self, playfield: Playfield) {
        self.pos.x = clamp_span(self.pos.x, self.size.x, playfield.width);
    }
}

/// A falling heart
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Edge length of the square sprite
    pub size: f32,
    /// Fall speed, units per frame
    pub speed: f32,
    pub sway_phase: f32,
    pub sway_rate: f32,
}

impl Heart {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Fall one frame and sway sideways
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.pos.x += self.sway_phase.sin() * HEART_SWAY_AMPLITUDE;
        self.sway_phase += self.sway_rate;
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [f32; 4],
    /// 1.0 when spawned, removed at 0
    pub life: f32,
}

/// Life at or below this counts as expired (absorbs f32 drift)
pub const PARTICLE_LIFE_EPSILON: f32 = 1e-4;

impl Particle {
    /// Move one frame and fade. Returns false once expired.
    pub fn update(&mut self, decay: f32) -> bool {
        self.pos += self.vel;
        self.life -= decay;
        self.life > PARTICLE_LIFE_EPSILON
    }

    /// Draw opacity, never negative
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub phase: GamePhase,
    pub playfield: Playfield,
    pub tuning: Tuning,
    /// Progress toward the win threshold
    pub love_meter: u32,
    pub lives: u8,
    pub player: Player,
    /// Live hearts
    pub hearts: Vec<Heart>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Simulation clock, sum of all `dt` fed to `tick` this run (ms)
    pub clock_ms: f64,
    /// Clock value the spawner must exceed before firing again (ms)
    pub next_spawn_ms: f64,
    /// Pending events for the host
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameWorld {
    /// Create a world in the Start phase
    pub fn new(playfield: Playfield, tuning: Tuning, seed: u64) -> Self {
        Self {
            phase: GamePhase::Start,
            playfield,
            love_meter: 0,
            lives: tuning.starting_lives,
            tuning,
            player: Player::new(playfield),
            hearts: Vec::new(),
            particles: Vec::new(),
            clock_ms: 0.0,
            next_spawn_ms: 0.0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Begin a fresh run from any phase
    pub fn start_or_restart(&mut self) {
        let previous = self.phase;
        self.love_meter = 0;
        self.lives = self.tuning.starting_lives;
        self.hearts.clear();
        self.particles.clear();
        self.events.clear();
        self.clock_ms = 0.0;
        self.next_spawn_ms = 0.0;
        self.player.center(self.playfield);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Run started (previous phase: {:?})", previous);
    }

    /// Apply a new viewport size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield = Playfield::new(width, height);
        self.player.fit(self.playfield);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a heart above the top edge at a random column
    pub fn spawn_heart(&mut self) -> u32 {
        let id = self.next_entity_id();
        let size = HEART_MIN_SIZE + self.rng.random::<f32>() * HEART_SIZE_RANGE;
        let x = self.rng.random::<f32>() * (self.playfield.width - size).max(0.0);
        let speed = HEART_MIN_SPEED + self.rng.random::<f32>() * HEART_SPEED_RANGE;
        let sway_phase = self.rng.random::<f32>() * std::f32::consts::TAU;
        let sway_rate = HEART_MIN_SWAY_RATE + self.rng.random::<f32>() * HEART_SWAY_RATE_RANGE;

        self.hearts.push(Heart {
            id,
            pos: Vec2::new(x, -size),
            size,
            speed,
            sway_phase,
            sway_rate,
        });
        self.events.push(GameEvent::Spawned { id });
        log::debug!("Spawned heart {} (size {:.1}, speed {:.2})", id, size, speed);
        id
    }

    /// Emit a particle burst centered on `at`
    pub fn burst(&mut self, at: Vec2, color: [f32; 4]) {
        for _ in 0..self.tuning.particle_burst {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
                (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            );
            self.particles.push(Particle {
                pos: at,
                vel,
                color,
                life: 1.0,
            });
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> GameWorld {
        GameWorld::new(Playfield::new(800.0, 600.0), Tuning::default(), 7)
    }

    #[test]
    fn test_new_world_waits_in_start() {
        let w = world();
        assert_eq!(w.phase, GamePhase::Start);
        assert_eq!(w.lives, 3);
        assert_eq!(w.love_meter, 0);
        assert_eq!(w.player.pos, Vec2::new(360.0, 500.0));
    }

    #[test]
    fn test_spawned_heart_fits_playfield() {
        let mut w = world();
        for _ in 0..200 {
            w.spawn_heart();
        }
        for h in &w.hearts {
            assert!((HEART_MIN_SIZE..HEART_MIN_SIZE + HEART_SIZE_RANGE).contains(&h.size));
            assert!((HEART_MIN_SPEED..HEART_MIN_SPEED + HEART_SPEED_RANGE).contains(&h.speed));
            assert!(h.pos.x >= 0.0 && h.pos.x + h.size <= 800.0);
            assert_eq!(h.pos.y, -h.size);
        }
    }

    #[test]
    fn test_burst_size_and_life() {
        let mut w = world();
        w.burst(Vec2::new(10.0, 10.0), CATCH_COLOR);
        assert_eq!(w.particles.len(), PARTICLE_BURST);
        for p in &w.particles {
            assert_eq!(p.life, 1.0);
            assert!(p.vel.x.abs() <= PARTICLE_SPREAD / 2.0);
            assert!(p.vel.y.abs() <= PARTICLE_SPREAD / 2.0);
        }
    }

    #[test]
    fn test_particle_expires_after_twenty_updates() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            color: CATCH_COLOR,
            life: 1.0,
        };
        for _ in 0..19 {
            assert!(p.update(PARTICLE_DECAY));
            assert!(p.opacity() > 0.0);
        }
        assert!(!p.update(PARTICLE_DECAY));
        assert!(p.opacity() >= 0.0);
        assert_eq!(p.pos, Vec2::new(20.0, -20.0));
    }

    #[test]
    fn test_resize_reclamps_player() {
        let mut w = world();
        w.player.pos.x = 700.0;
        w.resize(400.0, 300.0);
        assert_eq!(w.player.pos.x, 320.0);
        assert_eq!(w.player.pos.y, 300.0 - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN);
    }

    #[test]
    fn test_narrow_playfield_pins_player_to_left_edge() {
        let mut w = world();
        w.resize(50.0, 300.0);
        assert_eq!(w.player.pos.x, 0.0);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = world();
        let mut b = world();
        for _ in 0..10 {
            a.spawn_heart();
            b.spawn_heart();
        }
        assert_eq!(a.hearts, b.hearts);
    }
}
