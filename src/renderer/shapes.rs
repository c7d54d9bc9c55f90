//! Draw commands for one frame
//!
//! Built from a shared borrow of the simulation state, so drawing can never
//! feed back into the simulation.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::SimulationState;
use crate::tuning::Tuning;

/// HUD text inset from the top-left corner
const HUD_MARGIN: Vec2 = Vec2::new(8.0, 20.0);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear,
    /// Outlined circle
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    /// Outlined axis-aligned square, `origin` is the top-left corner
    StrokeSquare {
        origin: Vec2,
        size: f32,
        color: String,
    },
    Text {
        pos: Vec2,
        text: String,
        font: String,
        color: String,
    },
}

/// Player coordinate label, as shown beside the player
pub fn coordinate_label(pos: Vec2) -> String {
    format!("({:.0}, {:.0})", pos.x, pos.y)
}

/// Build the draw list for the current state
pub fn build_draw_list(
    state: &SimulationState,
    tuning: &Tuning,
    settings: &Settings,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.enemies.len() + 4);
    commands.push(DrawCommand::Clear);

    for enemy in &state.enemies {
        commands.push(DrawCommand::StrokeSquare {
            origin: enemy.pos,
            size: tuning.enemy_size,
            color: settings.enemy_color.clone(),
        });
    }

    let player = &state.player;
    commands.push(DrawCommand::StrokeCircle {
        center: player.pos,
        radius: player.radius,
        color: settings.player_color.clone(),
    });

    if settings.show_coordinates {
        // Up and to the right of the circle
        let pos = player.pos + Vec2::new(player.radius, -tuning.player_size);
        commands.push(DrawCommand::Text {
            pos,
            text: coordinate_label(player.pos),
            font: settings.hud_font.clone(),
            color: settings.hud_color.clone(),
        });
    }

    if settings.show_score {
        commands.push(DrawCommand::Text {
            pos: HUD_MARGIN,
            text: format!("Score: {}", state.score),
            font: settings.hud_font.clone(),
            color: settings.hud_color.clone(),
        });
    }

    commands
}
