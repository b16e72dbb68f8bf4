//! Heart Catch - A falling-hearts arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (input, spawning, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Score/lives/overlay projection for the host UI
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::{HudSnapshot, Overlay};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Frame duration the host assumes when it has no previous timestamp (ms)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Basket dimensions
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Gap between the basket bottom and the playfield bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    /// Horizontal displacement per frame while a direction key is held
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Fraction of the remaining distance to the pointer covered each frame
    pub const POINTER_SMOOTHING: f32 = 0.2;
    /// Catch box top sits this far below the basket rim
    pub const CATCH_OFFSET: f32 = 20.0;

    /// Heart size range [min, min + range)
    pub const HEART_MIN_SIZE: f32 = 30.0;
    pub const HEART_SIZE_RANGE: f32 = 20.0;
    /// Heart fall speed range [min, min + range), units per frame
    pub const HEART_MIN_SPEED: f32 = 2.0;
    pub const HEART_SPEED_RANGE: f32 = 3.0;
    /// Sway phase increment range [min, min + range), radians per frame
    pub const HEART_MIN_SWAY_RATE: f32 = 0.05;
    pub const HEART_SWAY_RATE_RANGE: f32 = 0.05;
    /// Lateral sway amplitude, units per frame
    pub const HEART_SWAY_AMPLITUDE: f32 = 1.0;

    /// Particles per catch burst
    pub const PARTICLE_BURST: usize = 8;
    /// Burst velocity spread per axis (velocity in [-spread/2, spread/2))
    pub const PARTICLE_SPREAD: f32 = 5.0;
    /// Life lost per update
    pub const PARTICLE_DECAY: f32 = 0.05;
    /// Drawn radius of a particle
    pub const PARTICLE_RADIUS: f32 = 4.0;
    /// Catch burst color (#ff4757)
    pub const CATCH_COLOR: [f32; 4] = [1.0, 0.278, 0.341, 1.0];

    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
    /// Love meter value that wins the game
    pub const WIN_THRESHOLD: u32 = 100;
    /// Love meter gain per caught heart
    pub const LOVE_PER_CATCH: u32 = 5;

    /// Base delay between spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Spawn delay shaved off per love meter point (ms)
    pub const SPAWN_SPEEDUP_PER_LOVE_MS: f64 = 5.0;
    /// Lower bound on the spawn delay (ms)
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 100.0;
}

/// Clamp a value into `[0, extent - size]`, collapsing to 0 when `size > extent`
#[inline]
pub fn clamp_span(value: f32, size: f32, extent: f32) -> f32 {
    value.clamp(0.0, (extent - size).max(0.0))
}
