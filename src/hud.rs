//! HUD and overlay projection
//!
//! What the host UI shows for the current world: the score board while
//! playing, and one of the start/game-over/win screens otherwise.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameWorld};

/// Icon repeated once per remaining life
pub const LIFE_ICON: &str = "❤️";

/// Which screen the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Start,
    ScoreBoard,
    GameOver,
    Win,
}

impl Overlay {
    /// DOM element id of the screen
    pub fn element_id(self) -> &'static str {
        match self {
            Overlay::Start => "start-screen",
            Overlay::ScoreBoard => "score-board",
            Overlay::GameOver => "game-over-screen",
            Overlay::Win => "win-screen",
        }
    }

    pub const ALL: [Overlay; 4] = [
        Overlay::Start,
        Overlay::ScoreBoard,
        Overlay::GameOver,
        Overlay::Win,
    ];
}

/// Observable per-frame outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub love_meter: u32,
    pub lives: u8,
    /// Love meter at the end of the run, set on GameOver/Win
    pub final_score: Option<u32>,
}

impl HudSnapshot {
    pub fn from_world(world: &GameWorld) -> Self {
        Self {
            phase: world.phase,
            love_meter: world.love_meter,
            lives: world.lives,
            final_score: world.phase.is_terminal().then_some(world.love_meter),
        }
    }

    pub fn overlay(&self) -> Overlay {
        match self.phase {
            GamePhase::Start => Overlay::Start,
            GamePhase::Playing => Overlay::ScoreBoard,
            GamePhase::GameOver => Overlay::GameOver,
            GamePhase::Win => Overlay::Win,
        }
    }

    pub fn score_text(&self) -> String {
        self.love_meter.to_string()
    }

    pub fn lives_text(&self) -> String {
        LIFE_ICON.repeat(self.lives as usize)
    }

    /// Summary line for the end screens
    pub fn final_score_text(&self) -> Option<String> {
        self.final_score.map(|score| format!("Score: {}%", score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Playfield;
    use crate::tuning::Tuning;

    fn world() -> GameWorld {
        GameWorld::new(Playfield::new(800.0, 600.0), Tuning::default(), 3)
    }

    #[test]
    fn test_start_screen_before_first_run() {
        let hud = HudSnapshot::from_world(&world());
        assert_eq!(hud.overlay(), Overlay::Start);
        assert_eq!(hud.final_score, None);
    }

    #[test]
    fn test_playing_shows_score_board() {
        let mut w = world();
        w.start_or_restart();
        w.love_meter = 35;
        w.lives = 2;
        let hud = HudSnapshot::from_world(&w);
        assert_eq!(hud.overlay(), Overlay::ScoreBoard);
        assert_eq!(hud.score_text(), "35");
        assert_eq!(hud.lives_text(), "❤️❤️");
        assert_eq!(hud.final_score_text(), None);
    }

    #[test]
    fn test_terminal_phases_report_final_score() {
        let mut w = world();
        w.start_or_restart();
        w.love_meter = 40;
        w.lives = 0;
        w.phase = GamePhase::GameOver;
        let hud = HudSnapshot::from_world(&w);
        assert_eq!(hud.overlay(), Overlay::GameOver);
        assert_eq!(hud.lives_text(), "");
        assert_eq!(hud.final_score_text().as_deref(), Some("Score: 40%"));

        w.phase = GamePhase::Win;
        w.love_meter = 100;
        let hud = HudSnapshot::from_world(&w);
        assert_eq!(hud.overlay(), Overlay::Win);
        assert_eq!(hud.final_score, Some(100));
    }

    #[test]
    fn test_snapshot_serializes() {
        let hud = HudSnapshot::from_world(&world());
        let json = serde_json::to_string(&hud).unwrap();
        assert!(json.contains("\"phase\":\"Start\""));
    }
}
