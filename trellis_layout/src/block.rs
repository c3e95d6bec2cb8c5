// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A sized box with an optional fill.

use alloc::vec;

use trellis_core::geometry::{Rect, RoundedRectRadii, Size};
use trellis_core::object::{RenderObject, Style};
use trellis_core::paint::Color;
use trellis_core::value::RenderValue;

use crate::constraints::{BoxConfig, BoxConstraints};
use crate::error::LayoutError;
use crate::node::{Layout, RenderContent};

/// A box that prefers a fixed size and optionally fills its bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    config: BoxConfig,
    fill: Option<RenderValue<Color>>,
    radii: Option<RoundedRectRadii>,
    size: Size,
}

impl Block {
    /// A block preferring `preferred`, shrinkable to zero.
    #[must_use]
    pub fn new(preferred: Size) -> Self {
        Self {
            config: BoxConfig::preferred(preferred),
            fill: None,
            radii: None,
            size: Size::ZERO,
        }
    }

    /// Sets the size below which the block reports it cannot shrink.
    #[must_use]
    pub fn with_min(mut self, min: Size) -> Self {
        self.config.min = min;
        self
    }

    /// Sets the size above which the block does not grow on its own.
    #[must_use]
    pub fn with_max(mut self, max: Size) -> Self {
        self.config.max = max;
        self
    }

    /// Fills the block's bounds.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<RenderValue<Color>>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Rounds the filled rectangle's corners.
    #[must_use]
    pub fn with_radii(mut self, radii: impl Into<RoundedRectRadii>) -> Self {
        self.radii = Some(radii.into());
        self
    }

    /// Replaces the fill.
    pub fn set_fill(&mut self, fill: Option<RenderValue<Color>>) {
        self.fill = fill;
    }
}

impl Layout for Block {
    fn box_config(&self) -> BoxConfig {
        self.config
    }

    fn perform_layout(&mut self, constraints: BoxConstraints) -> Result<Size, LayoutError> {
        self.size = constraints.constrain(self.config.preferred);
        Ok(self.size)
    }
}

impl RenderContent for Block {
    fn render_content(&self) -> Option<RenderObject> {
        let fill = self.fill?;
        let rect = Rect::from_origin_size((0.0, 0.0), self.size);
        let shape = match self.radii {
            Some(radii) => RenderObject::rounded_rectangle(rect, radii),
            None => RenderObject::rectangle(rect),
        };
        Some(RenderObject::style(Style::fill(fill), vec![shape]))
    }
}
