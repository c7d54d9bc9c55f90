//! Playable area bounds
//!
//! Supplied by the host each frame; the canvas may be resized at any time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when there is no area to play in (zero, negative or non-finite).
    /// Spawning, culling and rendering all no-op on a degenerate viewport.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Inclusive bounds check against `[0, width] x [0, height]`
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Clamp a circle's center so the whole circle stays visible.
    ///
    /// If the viewport is narrower than the circle the range collapses to
    /// `radius` on that axis.
    pub fn clamp_circle(&self, center: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(center.x, radius, self.width - radius),
            clamp_axis(center.y, radius, self.height - radius),
        )
    }
}

/// `min` then `max`, so an inverted range never panics (unlike `f32::clamp`)
#[inline]
fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}
