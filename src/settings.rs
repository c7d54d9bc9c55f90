//! Display preferences
//!
//! Only affects how a frame is drawn, never the simulation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Draw the score in the top-left corner
    pub show_score: bool,
    /// Draw the player's coordinates next to the player
    pub show_coordinates: bool,
    /// CSS font for HUD text
    pub hud_font: String,

    // === Colors (CSS color strings) ===
    pub player_color: String,
    pub enemy_color: String,
    pub hud_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_score: true,
            show_coordinates: true,
            hud_font: "16px sans-serif".to_string(),

            player_color: "black".to_string(),
            enemy_color: "red".to_string(),
            hud_color: "black".to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings = serde_json::from_str(json)?;
        log::info!("Loaded display settings");
        Ok(settings)
    }

    /// Parse `json`, falling back to defaults if it is malformed
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring display settings: {}", e);
                Self::default()
            }
        }
    }
}
