// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measured through a [`TextMeasure`] service.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use trellis_core::geometry::{Point, Size};
use trellis_core::object::{RenderObject, TextRun};
use trellis_core::paint::{Color, FontConfig};
use trellis_core::text::TextMeasure;

use crate::constraints::{BoxConfig, BoxConstraints};
use crate::error::LayoutError;
use crate::node::{Layout, RenderContent};

/// A run of text, optionally wrapped to the available width.
pub struct Label {
    text: String,
    font: FontConfig,
    color: Color,
    wrap: bool,
    measure: Arc<dyn TextMeasure + Send + Sync>,
    size: Size,
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("text", &self.text)
            .field("font", &self.font)
            .field("color", &self.color)
            .field("wrap", &self.wrap)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl Label {
    /// A single-line label.
    pub fn new(
        text: impl Into<String>,
        font: FontConfig,
        measure: Arc<dyn TextMeasure + Send + Sync>,
    ) -> Self {
        Self {
            text: text.into(),
            font,
            color: Color::BLACK,
            wrap: false,
            measure,
            size: Size::ZERO,
        }
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Wraps the text at the maximum width it is laid out with.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// The text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text. The owning node must be invalidated.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Layout for Label {
    fn box_config(&self) -> BoxConfig {
        let preferred = self.measure.measure_text_bounds(&self.text, &self.font, None);
        if self.wrap {
            BoxConfig::preferred(preferred)
        } else {
            BoxConfig {
                preferred,
                min: preferred,
                max: preferred,
            }
        }
    }

    fn perform_layout(&mut self, constraints: BoxConstraints) -> Result<Size, LayoutError> {
        let max_width = (self.wrap && constraints.max.width.is_finite())
            .then_some(constraints.max.width);
        let measured = self
            .measure
            .measure_text_bounds(&self.text, &self.font, max_width);
        self.size = constraints.constrain(measured);
        Ok(self.size)
    }
}

impl RenderContent for Label {
    fn render_content(&self) -> Option<RenderObject> {
        if self.text.is_empty() {
            return None;
        }
        let run = TextRun::new(self.text.clone(), self.font.clone(), self.color, Point::ORIGIN);
        let run = if self.wrap {
            run.wrapped(self.size.width)
        } else {
            run
        };
        Some(RenderObject::text(run))
    }
}
