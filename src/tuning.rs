//! Data-driven game rules
//!
//! Every field has a default, so a JSON document only needs to name the values
//! it overrides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation ticks per second
    pub tick_rate_hz: f32,
    /// Cap on ticks run per frame
    pub max_substeps: u32,
    /// Time between enemy spawns (milliseconds)
    pub spawn_interval_ms: f32,
    /// Player distance per tick
    pub player_speed: f32,
    /// Enemy distance per tick
    pub enemy_speed: f32,
    /// Player circle diameter
    pub player_size: f32,
    /// Enemy square side
    pub enemy_size: f32,
    pub player_start: Vec2,
    /// Viewport used until the host reports the real surface size
    pub viewport: Viewport,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            player_size: PLAYER_SIZE,
            enemy_size: ENEMY_SIZE,
            player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            viewport: Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tick_rate_hz", self.tick_rate_hz),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid {
                field: "max_substeps",
                value: 0.0,
            });
        }
        if !self.player_start.is_finite() {
            return Err(ConfigError::Invalid {
                field: "player_start",
                value: f32::NAN,
            });
        }
        Ok(())
    }

    /// Fixed timestep in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Spawn cadence expressed in ticks (at least one)
    pub fn spawn_interval_ticks(&self) -> u32 {
        ((self.spawn_interval_ms / 1000.0 * self.tick_rate_hz).round() as u32).max(1)
    }

    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }
}
