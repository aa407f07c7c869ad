use std::f64::consts::TAU;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Rgb, Rgba, Viewport};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    #[error("draw failed: {0}")]
    Draw(String),
}

/// Something the dot grid can be painted on.
pub trait Surface {
    fn size(&self) -> Viewport;
    fn resize(&mut self, viewport: Viewport) -> Result<(), SurfaceError>;
    /// Blends `color` over the whole surface.
    fn fade(&mut self, color: Rgba) -> Result<(), SurfaceError>;
    fn dot(&mut self, center: (f64, f64), diameter: f64, color: Rgb) -> Result<(), SurfaceError>;
    /// Gives the surface back. Called at most once per surface.
    fn release(&mut self);
}

/// A `<canvas>` whose backing store is `pixel_ratio` times its CSS size.
///
/// The trail fill goes through plotters' canvas backend; dots are drawn as
/// arcs so they keep sub-pixel positions.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    area: DrawingArea<CanvasBackend, Shift>,
    viewport: Viewport,
    pixel_ratio: f64,
}

fn drawing_area(canvas: &HtmlCanvasElement) -> Result<DrawingArea<CanvasBackend, Shift>, SurfaceError> {
    CanvasBackend::with_canvas_object(canvas.clone())
        .map(IntoDrawingArea::into_drawing_area)
        .ok_or(SurfaceError::ContextUnavailable)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(SurfaceError::ContextUnavailable)
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport, pixel_ratio: f64) {
    canvas.set_width((viewport.width as f64 * pixel_ratio).round() as u32);
    canvas.set_height((viewport.height as f64 * pixel_ratio).round() as u32);
    let _ = canvas.set_attribute(
        "style",
        &format!("width: {}px; height: {}px;", viewport.width, viewport.height),
    );
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, viewport: Viewport, pixel_ratio: f64) -> Result<Self, SurfaceError> {
        let pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        size_canvas(&canvas, viewport, pixel_ratio);
        let context = context_2d(&canvas)?;
        let area = drawing_area(&canvas)?;
        Ok(Self {
            canvas,
            context,
            area,
            viewport,
            pixel_ratio,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        size_canvas(&self.canvas, viewport, self.pixel_ratio);
        self.viewport = viewport;
        // the drawing area caches its bounds, so rebuild it against the new size
        self.area = drawing_area(&self.canvas)?;
        Ok(())
    }

    fn fade(&mut self, color: Rgba) -> Result<(), SurfaceError> {
        let Rgba(r, g, b, a) = color;
        self.area
            .fill(&RGBAColor(r, g, b, a as f64 / 255.0))
            .map_err(|e| SurfaceError::Draw(e.to_string()))
    }

    fn dot(&mut self, center: (f64, f64), diameter: f64, color: Rgb) -> Result<(), SurfaceError> {
        let Rgb(r, g, b) = color;
        let ratio = self.pixel_ratio;
        self.context.set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
        self.context.begin_path();
        self.context
            .arc(center.0 * ratio, center.1 * ratio, diameter / 2.0 * ratio, 0.0, TAU)
            .map_err(|e| SurfaceError::Draw(format!("{:?}", e)))?;
        self.context.fill();
        Ok(())
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}
