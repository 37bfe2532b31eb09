/// Game entity types. Plain data; the rules live in `compute` and `fleet`.

use crate::button::Button;
use crate::geometry::Rect;
use crate::settings::DynamicSettings;
use crate::stats::{GameStats, Scoreboard};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    /// Frozen for a short while after losing a ship.
    Respawning,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub rect: Rect,
    pub moving_right: bool,
    pub moving_left: bool,
    pub moving_up: bool,
    pub moving_down: bool,
}

impl Ship {
    pub fn stop(&mut self) {
        self.moving_right = false;
        self.moving_left = false;
        self.moving_up = false;
        self.moving_down = false;
    }
}

// ── Projectiles & fleet ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub rect: Rect,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub dynamic: DynamicSettings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub play_button: Button,
    /// Frames left in the respawn pause; zero when not paused.
    pub respawn_frames: u32,
    /// Whether the pointer should be shown (only while no game is running).
    pub pointer_visible: bool,
    pub frame: u64,
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        if !self.stats.game_active {
            GameStatus::GameOver
        } else if self.respawn_frames > 0 {
            GameStatus::Respawning
        } else {
            GameStatus::Playing
        }
    }
}
