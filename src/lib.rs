pub mod button;
pub mod compute;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod input;
pub mod settings;
pub mod stats;
