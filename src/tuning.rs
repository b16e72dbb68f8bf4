//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! tuning file only needs to list what it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    /// Document is not valid JSON for [`Tuning`]
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning file could not be read
    #[error("tuning file error: {0}")]
    Io(#[from] std::io::Error),

    /// A field holds a value the simulation cannot run with
    #[error("invalid tuning `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance knobs for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a run
    pub starting_lives: u8,
    /// Love meter value that wins
    pub win_threshold: u32,
    /// Love meter gain per catch
    pub love_per_catch: u32,
    /// Base spawn delay (ms)
    pub spawn_interval_ms: f64,
    /// Delay removed per love meter point (ms)
    pub spawn_speedup_per_love_ms: f64,
    /// Spawn delay floor; `None` lets the delay go to zero or below
    pub min_spawn_interval_ms: Option<f64>,
    /// Basket displacement per frame for held keys
    pub player_speed: f32,
    /// Pointer follow factor per frame, in (0, 1]
    pub pointer_smoothing: f32,
    /// Catch box top offset below the basket rim
    pub catch_offset: f32,
    /// Particles per catch
    pub particle_burst: usize,
    /// Particle life lost per update
    pub particle_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            win_threshold: WIN_THRESHOLD,
            love_per_catch: LOVE_PER_CATCH,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_speedup_per_love_ms: SPAWN_SPEEDUP_PER_LOVE_MS,
            min_spawn_interval_ms: Some(MIN_SPAWN_INTERVAL_MS),
            player_speed: PLAYER_SPEED,
            pointer_smoothing: POINTER_SMOOTHING,
            catch_offset: CATCH_OFFSET,
            particle_burst: PARTICLE_BURST,
            particle_decay: PARTICLE_DECAY,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a tuning file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(1..=STARTING_LIVES).contains(&self.starting_lives) {
            return invalid("starting_lives", "must be between 1 and 3");
        }
        if self.win_threshold == 0 {
            return invalid("win_threshold", "must be at least 1");
        }
        if self.love_per_catch == 0 {
            return invalid("love_per_catch", "must be at least 1");
        }
        if self.love_per_catch > self.win_threshold {
            return invalid("love_per_catch", "must not exceed win_threshold");
        }
        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms > 0.0) {
            return invalid("spawn_interval_ms", "must be a positive number");
        }
        if !self.spawn_speedup_per_love_ms.is_finite() {
            return invalid("spawn_speedup_per_love_ms", "must be finite");
        }
        if let Some(floor) = self.min_spawn_interval_ms {
            if !floor.is_finite() {
                return invalid("min_spawn_interval_ms", "must be finite");
            }
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return invalid("player_speed", "must be non-negative");
        }
        if !(self.pointer_smoothing > 0.0 && self.pointer_smoothing <= 1.0) {
            return invalid("pointer_smoothing", "must be in (0, 1]");
        }
        if !self.catch_offset.is_finite() {
            return invalid("catch_offset", "must be finite");
        }
        if !(self.particle_decay.is_finite() && self.particle_decay > 0.0) {
            return invalid("particle_decay", "must be positive");
        }
        Ok(())
    }

    /// Delay before the next spawn at the given love meter value (ms)
    ///
    /// Shrinks linearly with progress. Without a floor the delay can reach
    /// zero or go negative, which makes the spawner fire on every frame.
    pub fn spawn_interval(&self, love_meter: u32) -> f64 {
        let interval = self.spawn_interval_ms - love_meter as f64 * self.spawn_speedup_per_love_ms;
        match self.min_spawn_interval_ms {
            Some(floor) => interval.max(floor),
            None => interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.starting_lives, 3);
        assert_eq!(t.win_threshold, 100);
        assert_eq!(t.love_per_catch, 5);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "win_threshold": 50 }"#).unwrap();
        assert_eq!(t.win_threshold, 50);
        assert_eq!(t.starting_lives, STARTING_LIVES);
        assert_eq!(t.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "starting_lives",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "pointer_smoothing": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "pointer_smoothing",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "starting_lives": 200 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "starting_lives",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "win_threshold": 10, "love_per_catch": 11 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "love_per_catch",
                ..
            }
        ));

        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_spawn_interval_shrinks_with_progress() {
        let t = Tuning::default();
        assert_eq!(t.spawn_interval(0), 1000.0);
        assert_eq!(t.spawn_interval(50), 750.0);
        assert_eq!(t.spawn_interval(100), 500.0);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let floored = Tuning::default();
        assert_eq!(floored.spawn_interval(250), MIN_SPAWN_INTERVAL_MS);

        let unfloored = Tuning {
            min_spawn_interval_ms: None,
            ..Tuning::default()
        };
        assert_eq!(unfloored.spawn_interval(250), -250.0);
    }
}
