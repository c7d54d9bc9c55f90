//! Edge Dodge - dodge enemies streaming in from the screen edges
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player movement, enemy spawning, culling, score)
//! - `runner`: Fixed-step scheduler driving the simulation and spawn cadences
//! - `renderer`: Draw-list construction and the drawing surface abstraction
//! - `tuning`: Data-driven game rules
//! - `settings`: Display preferences

pub mod error;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, RenderError};
pub use runner::GameLoop;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (browsers clamp repeating timers to ~4ms)
    pub const TICK_RATE_HZ: f32 = 250.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 32;
    /// Longest frame delta accepted by the scheduler (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Time between enemy spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f32 = 100.0;

    /// Player circle diameter
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Player distance per tick
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Player spawn point
    pub const PLAYER_START: (f32, f32) = (50.0, 50.0);

    /// Enemy square side length
    pub const ENEMY_SIZE: f32 = 10.0;
    /// Enemy distance per tick
    pub const ENEMY_SPEED: f32 = 5.0;

    /// Default playable area
    pub const VIEWPORT_WIDTH: f32 = 900.0;
    pub const VIEWPORT_HEIGHT: f32 = 900.0;
}
