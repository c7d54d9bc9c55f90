//! Canvas 2D surface (browser only)

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCommand, Surface};
use crate::error::RenderError;
use crate::sim::Viewport;

pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

fn js_err(e: JsValue) -> RenderError {
    RenderError::Draw(format!("{:?}", e))
}

impl Canvas2d {
    /// Grab the canvas' 2D context. Fails with `SurfaceUnavailable` if the
    /// context cannot be created yet; callers retry on a later frame.
    pub fn acquire(canvas: &HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(RenderError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::SurfaceUnavailable)?;
        Ok(Self {
            ctx,
            viewport: Viewport::default(),
        })
    }
}

impl Surface for Canvas2d {
    fn begin_frame(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        // Context no longer backed by a canvas element
        if self.ctx.canvas().is_none() {
            return Err(RenderError::SurfaceUnavailable);
        }
        self.viewport = viewport;
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear => {
                let vp = self.viewport;
                ctx.clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);
            }
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .map_err(js_err)?;
                ctx.close_path();
                ctx.stroke();
            }
            DrawCommand::StrokeSquare {
                origin,
                size,
                color,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.stroke_rect(origin.x as f64, origin.y as f64, *size as f64, *size as f64);
            }
            DrawCommand::Text {
                pos,
                text,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, pos.x as f64, pos.y as f64)
                    .map_err(js_err)?;
            }
        }
        Ok(())
    }
}
