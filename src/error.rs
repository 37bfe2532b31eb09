//! Error types for loading and validating game settings

/// Error type for configuration problems detected before the game loop starts
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Screen width or height is zero or negative
    #[error("Invalid screen size {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },

    /// A size, speed or scale that must be positive is not
    #[error("Setting `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// A multiplier that would shrink values between levels
    #[error("Setting `{name}` must be at least 1.0, got {value}")]
    ScaleBelowOne { name: &'static str, value: f32 },

    /// A count that must be at least one
    #[error("Setting `{0}` must be at least 1")]
    ZeroLimit(&'static str),

    /// The ship does not fit inside the screen
    #[error("Screen {width}x{height} is too small for the ship")]
    ScreenTooSmall { width: f32, height: f32 },

    /// Not even one alien fits on the screen
    #[error("Screen {width}x{height} has no room for a fleet")]
    NoRoomForFleet { width: f32, height: f32 },

    /// IO error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `Settings`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
