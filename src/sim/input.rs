//! Held movement keys
//!
//! Presses and releases toggle membership rather than counting, so repeated
//! key-down events (OS auto-repeat) and a key-up racing a tick are harmless.

use glam::IVec2;

use super::direction::Direction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` held. Returns false if it is not a movement key.
    pub fn press(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.set(dir, true);
                true
            }
            None => false,
        }
    }

    /// Mark `key` released. Returns false if it is not a movement key.
    pub fn release(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.set(dir, false);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, dir: Direction, is_down: bool) {
        self.held[dir.index()] = is_down;
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }

    /// Drop every held key (focus lost, tab hidden)
    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Net screen-space move direction. Opposite keys cancel.
    pub fn move_vector(&self) -> IVec2 {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_held(dir))
            .map(Direction::player_step)
            .sum()
    }
}
