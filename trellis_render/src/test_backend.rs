// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-crate recording backend for tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use trellis_core::backend::{BackendError, Renderer};
use trellis_core::geometry::{Point, Rect, RoundedRectRadii, Size, Vec2};
use trellis_core::paint::{Color, FontConfig};
use trellis_core::surface::SurfaceKey;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    BeginPath,
    Rect(Rect),
    RoundedRect(Rect),
    Line(Point, Point),
    FillColor(Color),
    Fill,
    StrokeWidth(f64),
    StrokeColor(Color),
    Stroke,
    Text(String),
    MultilineText(String, f64),
    Save,
    Restore,
    Translate(Vec2),
    Create(SurfaceKey),
    Bind(SurfaceKey),
    Unbind,
    Composite(SurfaceKey),
    Delete(SurfaceKey),
}

#[derive(Debug, Default)]
pub(crate) struct TestBackend {
    pub(crate) calls: Vec<Call>,
    pub(crate) live: Vec<SurfaceKey>,
    pub(crate) deleted: Vec<SurfaceKey>,
    pub(crate) fail_rects: bool,
    pub(crate) no_surfaces: bool,
    pub(crate) exhausted: bool,
    pub(crate) next_key: u64,
}

impl TestBackend {
    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn creates(&self) -> usize {
        self.count(|c| matches!(c, Call::Create(_)))
    }

    pub(crate) fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for TestBackend {
    fn begin_path(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::BeginPath);
        Ok(())
    }

    fn rect(&mut self, rect: Rect) -> Result<(), BackendError> {
        if self.fail_rects {
            return Err(BackendError::Failed("rect".to_string()));
        }
        self.calls.push(Call::Rect(rect));
        Ok(())
    }

    fn rounded_rect(&mut self, rect: Rect, _radii: RoundedRectRadii) -> Result<(), BackendError> {
        self.calls.push(Call::RoundedRect(rect));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), BackendError> {
        self.calls.push(Call::Line(from, to));
        Ok(())
    }

    fn fill_color(&mut self, color: Color) -> Result<(), BackendError> {
        self.calls.push(Call::FillColor(color));
        Ok(())
    }

    fn fill(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::Fill);
        Ok(())
    }

    fn stroke_width(&mut self, width: f64) -> Result<(), BackendError> {
        self.calls.push(Call::StrokeWidth(width));
        Ok(())
    }

    fn stroke_color(&mut self, color: Color) -> Result<(), BackendError> {
        self.calls.push(Call::StrokeColor(color));
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::Stroke);
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        _position: Point,
        _font: &FontConfig,
        _color: Color,
    ) -> Result<(), BackendError> {
        self.calls.push(Call::Text(text.to_string()));
        Ok(())
    }

    fn multiline_text(
        &mut self,
        text: &str,
        _position: Point,
        max_width: f64,
        _font: &FontConfig,
        _color: Color,
    ) -> Result<(), BackendError> {
        self.calls.push(Call::MultilineText(text.to_string(), max_width));
        Ok(())
    }

    fn save(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::Restore);
        Ok(())
    }

    fn translate(&mut self, offset: Vec2) -> Result<(), BackendError> {
        self.calls.push(Call::Translate(offset));
        Ok(())
    }

    fn create_surface(&mut self, _size: Size) -> Result<SurfaceKey, BackendError> {
        if self.no_surfaces {
            return Err(BackendError::Unsupported("offscreen surfaces"));
        }
        if self.exhausted {
            return Err(BackendError::SurfaceExhausted);
        }
        self.next_key += 1;
        let key = SurfaceKey(self.next_key);
        self.live.push(key);
        self.calls.push(Call::Create(key));
        Ok(key)
    }

    fn bind_surface(&mut self, key: SurfaceKey) -> Result<(), BackendError> {
        if !self.live.contains(&key) {
            return Err(BackendError::UnknownSurface(key));
        }
        self.calls.push(Call::Bind(key));
        Ok(())
    }

    fn unbind_surface(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::Unbind);
        Ok(())
    }

    fn composite_surface(&mut self, key: SurfaceKey, _at: Point) -> Result<(), BackendError> {
        if !self.live.contains(&key) {
            return Err(BackendError::UnknownSurface(key));
        }
        self.calls.push(Call::Composite(key));
        Ok(())
    }

    fn delete_surface(&mut self, key: SurfaceKey) -> Result<(), BackendError> {
        let Some(pos) = self.live.iter().position(|k| *k == key) else {
            return Err(BackendError::UnknownSurface(key));
        };
        self.live.remove(pos);
        self.deleted.push(key);
        self.calls.push(Call::Delete(key));
        Ok(())
    }
}
