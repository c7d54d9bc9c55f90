//! Rendering module
//!
//! A frame is a list of [`DrawCommand`]s built from a read-only view of the
//! simulation, replayed onto whatever [`Surface`] the host provides.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2d;
pub use shapes::{DrawCommand, build_draw_list, coordinate_label};

use crate::error::RenderError;
use crate::sim::Viewport;

/// Something a frame can be drawn onto
pub trait Surface {
    /// Prepare for a new frame. Fails with [`RenderError::SurfaceUnavailable`]
    /// if the surface is not ready.
    fn begin_frame(&mut self, viewport: Viewport) -> Result<(), RenderError>;

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError>;
}

/// Replay `commands` onto `surface`.
///
/// Stops at the first failing command. Rendering on a degenerate viewport is
/// skipped.
pub fn present<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: Viewport,
    commands: &[DrawCommand],
) -> Result<(), RenderError> {
    if viewport.is_degenerate() {
        return Ok(());
    }
    surface.begin_frame(viewport)?;
    for command in commands {
        surface.draw(command)?;
    }
    Ok(())
}
