// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for drawing.
//!
//! Trellis does not draw anything itself. A *backend* (a vector graphics
//! context, a GPU canvas, or a recording test double) implements
//! [`Renderer`], and the masked renderer replays render objects against it.
//!
//! The drawing model is path based: [`Renderer::begin_path`] starts a fresh
//! path, geometry calls ([`rect`](Renderer::rect),
//! [`rounded_rect`](Renderer::rounded_rect), [`line`](Renderer::line)) add to
//! it, and [`fill`](Renderer::fill) / [`stroke`](Renderer::stroke) paint it
//! with the current style. Text is drawn directly.
//!
//! Offscreen surfaces back the render cache. A surface is created at a size,
//! bound as the drawing target, unbound (which returns to the live target),
//! composited onto the live target, and finally deleted. The default surface
//! methods report [`BackendError::Unsupported`], which makes the renderer fall
//! back to drawing every group directly.
//!
//! Every call can fail with a [`BackendError`]. Draw failures are absorbed
//! per render object; surface failures are reported to the caller.

use alloc::string::String;

use crate::geometry::{Point, Rect, RoundedRectRadii, Size, Vec2};
use crate::paint::{Color, FontConfig};
use crate::surface::SurfaceKey;

/// Error reported by a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The call failed for a backend-specific reason.
    #[error("backend call failed: {0}")]
    Failed(String),
    /// The backend does not implement this capability.
    #[error("unsupported backend capability: {0}")]
    Unsupported(&'static str),
    /// No more offscreen surfaces can be allocated.
    #[error("offscreen surface budget exhausted")]
    SurfaceExhausted,
    /// The key does not name a live surface.
    #[error("unknown surface {0}")]
    UnknownSurface(SurfaceKey),
}

/// Drawing capability consumed by the masked renderer.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(now: HostTime) {
///     let size = root.layout(BoxConstraints::tight(viewport))?;
///     let tree = RenderTree::new(root.render_content(now).unwrap_or_default());
///     renderer.update_tree(tree, &mut backend)?;
///     let stats = renderer.render(&mut backend, viewport, now, &mut tracer)?;
/// }
/// ```
pub trait Renderer {
    /// Starts a fresh path.
    fn begin_path(&mut self) -> Result<(), BackendError>;

    /// Adds a rectangle to the current path.
    fn rect(&mut self, rect: Rect) -> Result<(), BackendError>;

    /// Adds a rounded rectangle to the current path.
    fn rounded_rect(&mut self, rect: Rect, radii: RoundedRectRadii) -> Result<(), BackendError>;

    /// Adds a line segment to the current path.
    fn line(&mut self, from: Point, to: Point) -> Result<(), BackendError>;

    /// Sets the fill color.
    fn fill_color(&mut self, color: Color) -> Result<(), BackendError>;

    /// Fills the current path.
    fn fill(&mut self) -> Result<(), BackendError>;

    /// Sets the stroke width.
    fn stroke_width(&mut self, width: f64) -> Result<(), BackendError>;

    /// Sets the stroke color.
    fn stroke_color(&mut self, color: Color) -> Result<(), BackendError>;

    /// Strokes the current path.
    fn stroke(&mut self) -> Result<(), BackendError>;

    /// Draws single-line text with its top-left corner at `position`.
    fn text(
        &mut self,
        text: &str,
        position: Point,
        font: &FontConfig,
        color: Color,
    ) -> Result<(), BackendError>;

    /// Draws text wrapped at `max_width`.
    fn multiline_text(
        &mut self,
        text: &str,
        position: Point,
        max_width: f64,
        font: &FontConfig,
        color: Color,
    ) -> Result<(), BackendError>;

    /// Pushes the transform and style state.
    fn save(&mut self) -> Result<(), BackendError>;

    /// Pops the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self) -> Result<(), BackendError>;

    /// Offsets subsequent drawing.
    fn translate(&mut self, offset: Vec2) -> Result<(), BackendError>;

    /// Allocates an offscreen surface.
    fn create_surface(&mut self, size: Size) -> Result<SurfaceKey, BackendError> {
        _ = size;
        Err(BackendError::Unsupported("offscreen surfaces"))
    }

    /// Makes `key` the drawing target and clears it.
    fn bind_surface(&mut self, key: SurfaceKey) -> Result<(), BackendError> {
        Err(BackendError::UnknownSurface(key))
    }

    /// Returns drawing to the live target.
    fn unbind_surface(&mut self) -> Result<(), BackendError> {
        Err(BackendError::Unsupported("offscreen surfaces"))
    }

    /// Draws the contents of `key` onto the current target at `at`.
    fn composite_surface(&mut self, key: SurfaceKey, at: Point) -> Result<(), BackendError> {
        _ = at;
        Err(BackendError::UnknownSurface(key))
    }

    /// Frees an offscreen surface. The key is invalid afterwards.
    fn delete_surface(&mut self, key: SurfaceKey) -> Result<(), BackendError> {
        Err(BackendError::UnknownSurface(key))
    }
}
