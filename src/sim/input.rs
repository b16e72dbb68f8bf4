//! Input aggregation
//!
//! The host writes key and pointer events into an [`InputState`] as they
//! arrive; the simulation reads it once per tick.

use super::state::{Playfield, Player};
use crate::tuning::Tuning;

/// Horizontal direction key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held keys plus the active pointer/touch column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Pointer x in playfield coordinates, `None` when no touch is active
    pub pointer_x: Option<f32>,
}

impl InputState {
    pub fn set_direction(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    pub fn pointer_released(&mut self) {
        self.pointer_x = None;
    }

    /// Release everything (e.g. on restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move the player for one frame: keys, then pointer pull, then clamp
    pub fn apply(&self, player: &mut Player, playfield: Playfield, tuning: &Tuning) {
        if self.left {
            player.pos.x -= tuning.player_speed;
        }
        if self.right {
            player.pos.x += tuning.player_speed;
        }

        if let Some(pointer_x) = self.pointer_x.filter(|x| x.is_finite()) {
            let target = pointer_x - player.size.x / 2.0;
            player.pos.x += (target - player.pos.x) * tuning.pointer_smoothing;
        }

        player.clamp_x(playfield);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Player, Playfield, Tuning) {
        let playfield = Playfield::new(800.0, 600.0);
        (Player::new(playfield), playfield, Tuning::default())
    }

    #[test]
    fn test_keys_move_by_speed() {
        let (mut player, playfield, tuning) = setup();
        let mut input = InputState::default();
        input.set_direction(Direction::Left, true);
        input.apply(&mut player, playfield, &tuning);
        assert_eq!(player.pos.x, 350.0);

        input.set_direction(Direction::Left, false);
        input.set_direction(Direction::Right, true);
        input.apply(&mut player, playfield, &tuning);
        input.apply(&mut player, playfield, &tuning);
        assert_eq!(player.pos.x, 370.0);
    }

    #[test]
    fn test_both_keys_cancel() {
        let (mut player, playfield, tuning) = setup();
        let input = InputState {
            left: true,
            right: true,
            pointer_x: None,
        };
        input.apply(&mut player, playfield, &tuning);
        assert_eq!(player.pos.x, 360.0);
    }

    #[test]
    fn test_pointer_pull_is_smoothed() {
        let (mut player, playfield, tuning) = setup();
        let mut input = InputState::default();
        // Target x = 540 - 40 = 500; 360 + (500 - 360) * 0.2 = 388
        input.pointer_moved(540.0);
        input.apply(&mut player, playfield, &tuning);
        assert!((player.pos.x - 388.0).abs() < 1e-4);

        input.pointer_released();
        input.apply(&mut player, playfield, &tuning);
        assert!((player.pos.x - 388.0).abs() < 1e-4);
    }

    #[test]
    fn test_keys_apply_before_pointer() {
        let (mut player, playfield, tuning) = setup();
        let input = InputState {
            left: false,
            right: true,
            pointer_x: Some(400.0),
        };
        // 360 + 10 = 370, then target 360: 370 + (360 - 370) * 0.2 = 368
        input.apply(&mut player, playfield, &tuning);
        assert!((player.pos.x - 368.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamped_at_edges() {
        let (mut player, playfield, tuning) = setup();
        player.pos.x = 5.0;
        let mut input = InputState::default();
        input.set_direction(Direction::Left, true);
        input.apply(&mut player, playfield, &tuning);
        assert_eq!(player.pos.x, 0.0);

        input.clear();
        player.pos.x = 715.0;
        input.set_direction(Direction::Right, true);
        input.apply(&mut player, playfield, &tuning);
        assert_eq!(player.pos.x, 720.0);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Direction::from_key_code("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key_code("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key_code("KeyA"), None);
    }
}
