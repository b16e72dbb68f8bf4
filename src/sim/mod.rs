//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One `tick` per display frame, driven by the host
//! - Seeded RNG only
//! - Input read from a plain `InputState`, never from callbacks

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, catch_box, heart_box, is_caught, is_missed};
pub use input::{Direction, InputState};
pub use state::{
    GameEvent, GamePhase, GameWorld, Heart, PARTICLE_LIFE_EPSILON, Particle, Player, Playfield,
};
pub use tick::tick;
