//! Game settings
//!
//! `Settings` holds the static configuration and is only ever read during
//! play. `DynamicSettings` carries the values that change as levels go by and
//! is reset from the static baseline whenever a new game starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Static configuration. Every field can be overridden from a JSON file;
/// missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Playfield width in cells
    pub screen_width: f32,
    /// Playfield height in cells
    pub screen_height: f32,
    /// Background colour (RGB)
    pub bg_color: [u8; 3],

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    /// Ships available at the start of a game, including the one in play
    pub ship_limit: u32,
    /// Baseline ship speed in cells per frame
    pub ship_speed: f32,

    // === Bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: [u8; 3],
    pub bullets_allowed: usize,
    pub bullet_speed: f32,

    // === Aliens ===
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_speed: f32,
    /// Vertical drop applied to the whole fleet on every edge bounce
    pub fleet_drop_speed: f32,
    pub alien_points: u32,

    // === Level progression ===
    /// Multiplier applied to every speed on level-up
    pub speedup_scale: f32,
    /// Multiplier applied to alien points on level-up
    pub score_scale: f32,

    // === Timing ===
    pub frame_millis: u64,
    /// Length of the freeze after losing a ship
    pub respawn_pause_millis: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 80.0,
            screen_height: 22.0,
            bg_color: [10, 10, 30],

            ship_width: 3.0,
            ship_height: 2.0,
            ship_limit: 3,
            ship_speed: 0.8,

            bullet_width: 1.0,
            bullet_height: 1.0,
            bullet_color: [230, 230, 60],
            bullets_allowed: 3,
            bullet_speed: 1.0,

            alien_width: 3.0,
            alien_height: 1.0,
            alien_speed: 0.1,
            fleet_drop_speed: 1.0,
            alien_points: 50,

            speedup_scale: 1.1,
            score_scale: 1.5,

            frame_millis: 33,
            respawn_pause_millis: 500,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file. Not validated: the caller still has
    /// to fit the screen size and call `validate`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Same settings with a different playfield size.
    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Reject configurations the game loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let positive = [
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("ship_speed", self.ship_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("bullet_speed", self.bullet_speed),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("alien_speed", self.alien_speed),
            ("fleet_drop_speed", self.fleet_drop_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
        ] {
            if !(value >= 1.0) {
                return Err(ConfigError::ScaleBelowOne { name, value });
            }
        }

        if self.ship_limit == 0 {
            return Err(ConfigError::ZeroLimit("ship_limit"));
        }
        if self.bullets_allowed == 0 {
            return Err(ConfigError::ZeroLimit("bullets_allowed"));
        }
        if self.frame_millis == 0 {
            return Err(ConfigError::ZeroLimit("frame_millis"));
        }

        if self.ship_width > self.screen_width || self.ship_height > self.screen_height {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let (columns, rows) = crate::fleet::fleet_capacity(self);
        if columns == 0 || rows == 0 {
            return Err(ConfigError::NoRoomForFleet {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        Ok(())
    }

    /// Number of frames the respawn pause lasts, rounded up.
    pub fn respawn_frames(&self) -> u32 {
        let frame = self.frame_millis.max(1);
        self.respawn_pause_millis.div_ceil(frame) as u32
    }
}

/// Values that change during a game.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// +1 moves the fleet right, -1 moves it left
    pub fleet_direction: f32,
    pub alien_points: u32,
}

impl DynamicSettings {
    /// Baseline values for a fresh game.
    pub fn new(settings: &Settings) -> Self {
        Self {
            ship_speed: settings.ship_speed,
            bullet_speed: settings.bullet_speed,
            alien_speed: settings.alien_speed,
            fleet_direction: 1.0,
            alien_points: settings.alien_points,
        }
    }

    /// Level-up: everything gets faster and aliens are worth more.
    pub fn increase_speed(&mut self, settings: &Settings) {
        self.ship_speed *= settings.speedup_scale;
        self.bullet_speed *= settings.speedup_scale;
        self.alien_speed *= settings.speedup_scale;

        self.alien_points = (self.alien_points as f32 * settings.score_scale) as u32;
    }
}
