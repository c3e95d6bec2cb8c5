// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless backend that records every call.
//!
//! [`RecordingRenderer`] implements [`Renderer`] by appending a [`DrawCall`]
//! per method call. It keeps real surface bookkeeping (creation, binding,
//! deletion), so misuse such as compositing a deleted surface or deleting a
//! surface twice is reported as a [`BackendError`] just like a GPU backend
//! would. Individual calls can be made to fail to exercise the renderer's
//! failure handling.

use std::collections::{BTreeMap, BTreeSet};

use trellis_core::backend::{BackendError, Renderer};
use trellis_core::geometry::{Point, Rect, RoundedRectRadii, Size, Vec2};
use trellis_core::paint::{Color, FontConfig};
use trellis_core::surface::SurfaceKey;

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// `begin_path`
    BeginPath,
    /// `rect`
    Rect(Rect),
    /// `rounded_rect`
    RoundedRect(Rect, RoundedRectRadii),
    /// `line`
    Line(Point, Point),
    /// `fill_color`
    FillColor(Color),
    /// `fill`
    Fill,
    /// `stroke_width`
    StrokeWidth(f64),
    /// `stroke_color`
    StrokeColor(Color),
    /// `stroke`
    Stroke,
    /// `text`
    Text {
        /// The text.
        text: String,
        /// Top-left corner.
        position: Point,
        /// Text color.
        color: Color,
    },
    /// `multiline_text`
    MultilineText {
        /// The text.
        text: String,
        /// Top-left corner.
        position: Point,
        /// Wrap width.
        max_width: f64,
        /// Text color.
        color: Color,
    },
    /// `save`
    Save,
    /// `restore`
    Restore,
    /// `translate`
    Translate(Vec2),
    /// `create_surface`
    CreateSurface(SurfaceKey, Size),
    /// `bind_surface`
    BindSurface(SurfaceKey),
    /// `unbind_surface`
    UnbindSurface,
    /// `composite_surface`
    CompositeSurface(SurfaceKey, Point),
    /// `delete_surface`
    DeleteSurface(SurfaceKey),
}

impl DrawCall {
    /// The [`Renderer`] method that produced this call.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::BeginPath => "begin_path",
            Self::Rect(_) => "rect",
            Self::RoundedRect(..) => "rounded_rect",
            Self::Line(..) => "line",
            Self::FillColor(_) => "fill_color",
            Self::Fill => "fill",
            Self::StrokeWidth(_) => "stroke_width",
            Self::StrokeColor(_) => "stroke_color",
            Self::Stroke => "stroke",
            Self::Text { .. } => "text",
            Self::MultilineText { .. } => "multiline_text",
            Self::Save => "save",
            Self::Restore => "restore",
            Self::Translate(_) => "translate",
            Self::CreateSurface(..) => "create_surface",
            Self::BindSurface(_) => "bind_surface",
            Self::UnbindSurface => "unbind_surface",
            Self::CompositeSurface(..) => "composite_surface",
            Self::DeleteSurface(_) => "delete_surface",
        }
    }
}

/// A [`Renderer`] that records calls instead of drawing.
#[derive(Debug)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
    failing: BTreeSet<&'static str>,
    surfaces: BTreeMap<SurfaceKey, Size>,
    deleted: Vec<SurfaceKey>,
    bound: Option<SurfaceKey>,
    surface_limit: Option<usize>,
    supports_surfaces: bool,
    next_key: u64,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    /// A recorder with unlimited offscreen surfaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            failing: BTreeSet::new(),
            surfaces: BTreeMap::new(),
            deleted: Vec::new(),
            bound: None,
            surface_limit: None,
            supports_surfaces: true,
            next_key: 0,
        }
    }

    /// A recorder whose `create_surface` reports
    /// [`BackendError::Unsupported`].
    #[must_use]
    pub fn without_surfaces() -> Self {
        Self {
            supports_surfaces: false,
            ..Self::new()
        }
    }

    /// Limits live surfaces; creation beyond the limit reports
    /// [`BackendError::SurfaceExhausted`].
    #[must_use]
    pub fn with_surface_limit(mut self, limit: usize) -> Self {
        self.surface_limit = Some(limit);
        self
    }

    /// Makes every call to `method` (a [`DrawCall::method`] name) fail.
    #[must_use]
    pub fn failing(mut self, method: &'static str) -> Self {
        self.failing.insert(method);
        self
    }

    /// Stops failing calls to `method`.
    pub fn heal(&mut self, method: &str) {
        self.failing.remove(method);
    }

    /// All calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns and clears the recorded calls. Surface state is kept.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls to `method`.
    #[must_use]
    pub fn count(&self, method: &str) -> usize {
        self.calls.iter().filter(|c| c.method() == method).count()
    }

    /// Number of surfaces created and not yet deleted.
    #[must_use]
    pub fn live_surfaces(&self) -> usize {
        self.surfaces.len()
    }

    /// Size a live surface was created at.
    #[must_use]
    pub fn surface_size(&self, key: SurfaceKey) -> Option<Size> {
        self.surfaces.get(&key).copied()
    }

    /// Surfaces deleted so far, in deletion order.
    #[must_use]
    pub fn deleted(&self) -> &[SurfaceKey] {
        &self.deleted
    }

    /// The surface currently bound as draw target, if any.
    #[must_use]
    pub fn bound(&self) -> Option<SurfaceKey> {
        self.bound
    }

    fn record(&mut self, call: DrawCall) -> Result<(), BackendError> {
        if self.failing.contains(call.method()) {
            return Err(BackendError::Failed(format!(
                "injected failure in {}",
                call.method()
            )));
        }
        self.calls.push(call);
        Ok(())
    }

    fn live(&self, key: SurfaceKey) -> Result<(), BackendError> {
        if self.surfaces.contains_key(&key) {
            Ok(())
        } else {
            Err(BackendError::UnknownSurface(key))
        }
    }
}

impl Renderer for RecordingRenderer {
    fn begin_path(&mut self) -> Result<(), BackendError> {
        self.record(DrawCall::BeginPath)
    }

    fn rect(&mut self, rect: Rect) -> Result<(), BackendError> {
        self.record(DrawCall::Rect(rect))
    }

    fn rounded_rect(&mut self, rect: Rect, radii: RoundedRectRadii) -> Result<(), BackendError> {
        self.record(DrawCall::RoundedRect(rect, radii))
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), BackendError> {
        self.record(DrawCall::Line(from, to))
    }

    fn fill_color(&mut self, color: Color) -> Result<(), BackendError> {
        self.record(DrawCall::FillColor(color))
    }

    fn fill(&mut self) -> Result<(), BackendError> {
        self.record(DrawCall::Fill)
    }

    fn stroke_width(&mut self, width: f64) -> Result<(), BackendError> {
        self.record(DrawCall::StrokeWidth(width))
    }

    fn stroke_color(&mut self, color: Color) -> Result<(), BackendError> {
        self.record(DrawCall::StrokeColor(color))
    }

    fn stroke(&mut self) -> Result<(), BackendError> {
        self.record(DrawCall::Stroke)
    }

    fn text(
        &mut self,
        text: &str,
        position: Point,
        _font: &FontConfig,
        color: Color,
    ) -> Result<(), BackendError> {
        self.record(DrawCall::Text {
            text: text.to_owned(),
            position,
            color,
        })
    }

    fn multiline_text(
        &mut self,
        text: &str,
        position: Point,
        max_width: f64,
        _font: &FontConfig,
        color: Color,
    ) -> Result<(), BackendError> {
        self.record(DrawCall::MultilineText {
            text: text.to_owned(),
            position,
            max_width,
            color,
        })
    }

    fn save(&mut self) -> Result<(), BackendError> {
        self.record(DrawCall::Save)
    }

    fn restore(&mut self) -> Result<(), BackendError> {
        self.record(DrawCall::Restore)
    }

    fn translate(&mut self, offset: Vec2) -> Result<(), BackendError> {
        self.record(DrawCall::Translate(offset))
    }

    fn create_surface(&mut self, size: Size) -> Result<SurfaceKey, BackendError> {
        if !self.supports_surfaces {
            return Err(BackendError::Unsupported("offscreen surfaces"));
        }
        if self.surface_limit.is_some_and(|limit| self.surfaces.len() >= limit) {
            return Err(BackendError::SurfaceExhausted);
        }
        self.next_key += 1;
        let key = SurfaceKey(self.next_key);
        self.record(DrawCall::CreateSurface(key, size))?;
        self.surfaces.insert(key, size);
        Ok(key)
    }

    fn bind_surface(&mut self, key: SurfaceKey) -> Result<(), BackendError> {
        self.live(key)?;
        if let Some(bound) = self.bound {
            return Err(BackendError::Failed(format!("surface {bound} is already bound")));
        }
        self.record(DrawCall::BindSurface(key))?;
        self.bound = Some(key);
        Ok(())
    }

    fn unbind_surface(&mut self) -> Result<(), BackendError> {
        if self.bound.is_none() {
            return Err(BackendError::Failed("no surface is bound".to_owned()));
        }
        self.record(DrawCall::UnbindSurface)?;
        self.bound = None;
        Ok(())
    }

    fn composite_surface(&mut self, key: SurfaceKey, at: Point) -> Result<(), BackendError> {
        self.live(key)?;
        if self.bound == Some(key) {
            return Err(BackendError::Failed(format!(
                "surface {key} composited while bound"
            )));
        }
        self.record(DrawCall::CompositeSurface(key, at))
    }

    fn delete_surface(&mut self, key: SurfaceKey) -> Result<(), BackendError> {
        self.live(key)?;
        self.record(DrawCall::DeleteSurface(key))?;
        self.surfaces.remove(&key);
        if self.bound == Some(key) {
            self.bound = None;
        }
        self.deleted.push(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::geometry::Vec2;
    use trellis_core::object::{RenderObject, RenderTree, Style};
    use trellis_core::time::HostTime;
    use trellis_core::trace::Tracer;
    use trellis_render::{RenderError, RenderTreeRenderer, RendererConfig};

    const VIEWPORT: Size = Size::new(64.0, 64.0);

    fn scene() -> RenderTree {
        RenderTree::new(RenderObject::translation(
            Vec2::new(4.0, 4.0),
            vec![
                RenderObject::style(
                    Style::fill(Color::WHITE),
                    vec![RenderObject::rectangle(Rect::new(0.0, 0.0, 8.0, 8.0))],
                ),
                RenderObject::uncachable(vec![RenderObject::line_segment(
                    Point::ORIGIN,
                    Point::new(8.0, 0.0),
                )]),
            ],
        ))
    }

    fn run(
        renderer: &mut RenderTreeRenderer,
        backend: &mut RecordingRenderer,
    ) -> Result<trellis_render::FrameStats, RenderError> {
        let mut tracer = Tracer::none();
        renderer.update_tree(scene(), backend, &mut tracer)?;
        renderer.render(backend, VIEWPORT, HostTime::ZERO, &mut tracer)
    }

    #[test]
    fn surface_bookkeeping() {
        let mut r = RecordingRenderer::new();
        let key = r.create_surface(VIEWPORT).unwrap();
        assert_eq!(r.surface_size(key), Some(VIEWPORT));
        r.bind_surface(key).unwrap();
        assert_eq!(r.bound(), Some(key));
        assert!(r.bind_surface(key).is_err());
        assert!(r.composite_surface(key, Point::ORIGIN).is_err());
        r.unbind_surface().unwrap();
        r.composite_surface(key, Point::ORIGIN).unwrap();
        r.delete_surface(key).unwrap();
        assert_eq!(
            r.delete_surface(key),
            Err(BackendError::UnknownSurface(key))
        );
        assert_eq!(r.deleted(), &[key]);
        assert_eq!(r.live_surfaces(), 0);
    }

    #[test]
    fn injected_failures_are_not_recorded() {
        let mut r = RecordingRenderer::new().failing("fill");
        r.begin_path().unwrap();
        assert!(matches!(r.fill(), Err(BackendError::Failed(_))));
        r.heal("fill");
        r.fill().unwrap();
        assert_eq!(r.calls(), &[DrawCall::BeginPath, DrawCall::Fill]);
    }

    #[test]
    fn renderer_survives_failing_fill() {
        let mut renderer = RenderTreeRenderer::new(RendererConfig::default());
        let mut backend = RecordingRenderer::new().failing("fill");
        let stats = run(&mut renderer, &mut backend).unwrap();
        assert_eq!(stats.draw_failures, 1);
        assert_eq!(backend.count("line"), 1);
        assert_eq!(backend.bound(), None);
    }

    #[test]
    fn unsupported_backend_draws_directly() {
        let mut renderer = RenderTreeRenderer::new(RendererConfig::default());
        let mut backend = RecordingRenderer::without_surfaces();
        let stats = run(&mut renderer, &mut backend).unwrap();
        assert_eq!(stats.direct_passes, 2);
        assert_eq!(backend.count("rect"), 1);
        assert_eq!(backend.count("translate"), 2);
    }

    #[test]
    fn exhausted_backend_fails_the_group() {
        let mut renderer = RenderTreeRenderer::new(RendererConfig::default());
        let mut backend = RecordingRenderer::new().with_surface_limit(0);
        let err = run(&mut renderer, &mut backend).unwrap_err();
        assert!(
            matches!(
                err,
                RenderError::SurfaceAllocation {
                    group: 0,
                    source: BackendError::SurfaceExhausted,
                }
            ),
            "unexpected error: {err:?}"
        );
        assert_eq!(backend.count("rect"), 0);
        assert_eq!(backend.live_surfaces(), 0);
    }

    #[test]
    fn failed_delete_is_reported_once() {
        let mut renderer = RenderTreeRenderer::new(RendererConfig::default());
        let mut backend = RecordingRenderer::new();
        run(&mut renderer, &mut backend).unwrap();
        assert_eq!(backend.live_surfaces(), 1);

        // The surface does not exist on this backend, so deletion fails.
        let mut failing = RecordingRenderer::new();
        let err = renderer.release_caches(&mut failing).unwrap_err();
        assert!(matches!(err, RenderError::SurfaceRelease { .. }));
        assert_eq!(renderer.live_surfaces(), 0);
        assert_eq!(renderer.release_caches(&mut backend).unwrap(), 0);
    }

    #[test]
    fn cached_frame_only_composites() {
        let mut renderer = RenderTreeRenderer::new(RendererConfig::default());
        let mut backend = RecordingRenderer::new();
        run(&mut renderer, &mut backend).unwrap();
        backend.take_calls();
        let stats = run(&mut renderer, &mut backend).unwrap();
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(backend.count("rect"), 0);
        assert_eq!(backend.count("composite_surface"), 1);
        assert_eq!(backend.count("line"), 1);
    }
}
