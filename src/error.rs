//! Error types
//!
//! The simulation itself never fails; errors only come from configuration
//! parsing and from the drawing surface.

use thiserror::Error;

/// Failure loading [`crate::Tuning`] or [`crate::Settings`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {value} (must be finite and greater than zero)")]
    Invalid { field: &'static str, value: f32 },
}

/// Failure drawing a frame. Never fatal: the frame is skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Drawing context not ready yet (or lost); retry next frame
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("draw call failed: {0}")]
    Draw(String),
}
