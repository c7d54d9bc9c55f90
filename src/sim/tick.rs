//! Fixed timestep simulation tick
//!
//! Advances the simulation one step. Everything a tick reads from the outside
//! world arrives in a single [`TickInput`] snapshot, so a key event or a canvas
//! resize landing mid-frame can never split a tick across two views.

use super::input::InputState;
use super::state::{EnemyId, SimulationState};
use super::viewport::Viewport;
use crate::tuning::Tuning;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement keys held at the start of the tick
    pub held: InputState,
    /// Playable area for this tick
    pub viewport: Viewport,
    /// Spawn cadence fired; add one enemy after movement
    pub spawn: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub spawned: Option<EnemyId>,
    pub culled: u32,
}

/// Advance the simulation by one tick.
///
/// Order: move vector, player, enemies, then spawn. A degenerate viewport
/// freezes the world for the tick; only the tick counter advances.
pub fn tick(state: &mut SimulationState, input: &TickInput, tuning: &Tuning) -> TickOutcome {
    state.time_ticks += 1;

    let viewport = input.viewport;
    if viewport.is_degenerate() {
        // Enemies are not culled either, a transient 0x0 resize must not score them
        return TickOutcome::default();
    }

    let move_vec = input.held.move_vector();
    state.advance_player(move_vec, viewport, tuning.player_speed);

    let culled = state.advance_enemies(viewport, tuning.enemy_speed);

    let spawned = if input.spawn {
        state.spawn_enemy(viewport)
    } else {
        None
    };

    TickOutcome { spawned, culled }
}

/// Pure form of [`tick`]: returns the next state, leaving `state` untouched
pub fn advance(state: &SimulationState, input: &TickInput, tuning: &Tuning) -> SimulationState {
    let mut next = state.clone();
    tick(&mut next, input, tuning);
    next
}
