//! Movement direction lookup table
//!
//! Each direction carries a signed magnitude and an input key. The player and
//! enemies read the vertical magnitude with opposite screen-space signs:
//! - player `Up` (key `w`) moves toward decreasing screen y
//! - enemy `Up` heads toward increasing screen y, entering from the top edge

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Signed unit magnitude on this direction's axis
    pub const fn magnitude(self) -> i32 {
        match self {
            Direction::Up | Direction::Right => 1,
            Direction::Down | Direction::Left => -1,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Movement key bound to this direction
    pub const fn key(self) -> &'static str {
        match self {
            Direction::Up => "w",
            Direction::Down => "s",
            Direction::Left => "a",
            Direction::Right => "d",
        }
    }

    /// Map a browser `KeyboardEvent.key` to a direction.
    ///
    /// Case-insensitive so a key released with a different Shift state than it
    /// was pressed with still clears.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Screen-space step contributed to the player's move vector
    pub const fn player_step(self) -> IVec2 {
        if self.is_horizontal() {
            IVec2::new(self.magnitude(), 0)
        } else {
            // Screen y grows downward, so "up" subtracts
            IVec2::new(0, -self.magnitude())
        }
    }

    /// Screen-space unit heading of an enemy travelling in this direction
    pub fn enemy_heading(self) -> Vec2 {
        let m = self.magnitude() as f32;
        if self.is_horizontal() {
            Vec2::new(m, 0.0)
        } else {
            Vec2::new(0.0, m)
        }
    }
}
