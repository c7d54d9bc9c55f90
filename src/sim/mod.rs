//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod direction;
pub mod input;
pub mod state;
pub mod tick;
pub mod viewport;

pub use direction::Direction;
pub use input::InputState;
pub use state::{Enemy, EnemyId, Player, SimulationState};
pub use tick::{TickInput, TickOutcome, advance, tick};
pub use viewport::Viewport;
