//! Animated dot-grid backdrop.
//!
//! The drawing logic here is plain Rust over the [`Surface`] trait so it can
//! run on the host in tests. [`animator`] wires it to the browser window and
//! a `<canvas>` through [`surface::CanvasSurface`].

pub mod animator;
pub mod surface;

pub use animator::{Animator, AnimatorError};
pub use surface::{CanvasSurface, Surface, SurfaceError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pointer position in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn clamped_to(self, viewport: Viewport) -> Self {
        Self {
            x: self.x.clamp(0.0, viewport.width as f64),
            y: self.y.clamp(0.0, viewport.height as f64),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    /// Distance between neighbouring dots, in pixels.
    pub spacing: f64,
    pub dot_diameter: f64,
    pub dot_color: Rgb,
    /// Painted over the previous frame instead of a hard clear, leaving a short trail.
    pub trail_color: Rgba,
    /// Max offset is `spacing / parallax_divisor` in each direction.
    pub parallax_divisor: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            dot_diameter: 2.0,
            dot_color: Rgb(209, 213, 219),
            trail_color: Rgba(18, 18, 18, 150),
            parallax_divisor: 5.0,
        }
    }
}

impl BackgroundConfig {
    pub fn max_offset(&self) -> f64 {
        if self.parallax_divisor == 0.0 {
            return 0.0;
        }
        self.spacing / self.parallax_divisor
    }
}

/// Linear map of `value` from `[0, extent]` onto `[-max, max]`.
fn map_axis(value: f64, extent: u32, max: f64) -> f64 {
    if extent == 0 {
        return 0.0;
    }
    -max + value / extent as f64 * 2.0 * max
}

/// Grid shift for the current pointer. Centre of the viewport gives `(0, 0)`.
pub fn parallax_offset(pointer: Pointer, viewport: Viewport, config: &BackgroundConfig) -> (f64, f64) {
    let max = config.max_offset();
    let pointer = pointer.clamped_to(viewport);
    (
        map_axis(pointer.x, viewport.width, max),
        map_axis(pointer.y, viewport.height, max),
    )
}

/// Positions along one axis: `-spacing, 0, spacing, ...` while below `extent + spacing`.
fn axis_points(extent: u32, spacing: f64) -> impl Iterator<Item = f64> + Clone {
    let limit = extent as f64 + spacing;
    let spacing = if spacing > 0.0 { spacing } else { f64::INFINITY };
    (0u32..)
        .map(move |i| -spacing + i as f64 * spacing)
        .take_while(move |x| *x < limit)
}

/// Unshifted dot centres covering the viewport plus one spacing of margin on each edge.
pub fn grid_points(viewport: Viewport, spacing: f64) -> impl Iterator<Item = (f64, f64)> {
    let ys = axis_points(viewport.height, spacing);
    axis_points(viewport.width, spacing).flat_map(move |x| ys.clone().map(move |y| (x, y)))
}

/// Paints one frame: trail fade, then the shifted grid.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    config: &BackgroundConfig,
    pointer: Pointer,
) -> Result<(), SurfaceError> {
    let viewport = surface.size();
    surface.fade(config.trail_color)?;

    let (dx, dy) = parallax_offset(pointer, viewport, config);
    for (x, y) in grid_points(viewport, config.spacing) {
        surface.dot((x + dx, y + dy), config.dot_diameter, config.dot_color)?;
    }
    Ok(())
}

/// Owns the surface for as long as the backdrop runs.
pub struct Background<S: Surface> {
    surface: Option<S>,
    config: BackgroundConfig,
    pointer: Pointer,
    frames: u64,
}

impl<S: Surface> Background<S> {
    pub fn new(surface: S, config: BackgroundConfig) -> Self {
        Self {
            surface: Some(surface),
            config,
            pointer: Pointer::default(),
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.surface.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    /// Resizes in place. The frame counter and pointer carry over.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        match self.surface.as_mut() {
            Some(surface) if surface.size() != viewport => surface.resize(viewport),
            _ => Ok(()),
        }
    }

    /// Draws one frame. `Ok(false)` once shut down, so the caller stops scheduling.
    pub fn tick(&mut self) -> Result<bool, SurfaceError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        draw_frame(surface, &self.config, self.pointer)?;
        self.frames += 1;
        Ok(true)
    }

    /// Releases the surface. Returns `true` only on the call that released it.
    pub fn shutdown(&mut self) -> bool {
        match self.surface.take() {
            Some(mut surface) => {
                surface.release();
                true
            }
            None => false,
        }
    }
}

impl<S: Surface> Drop for Background<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
