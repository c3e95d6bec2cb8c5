// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of render-object variants.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::backend::{BackendError, Renderer};
use crate::geometry::{Point, Rect, RoundedRectRadii, Vec2};
use crate::hash;
use crate::paint::{Color, FontConfig};
use crate::value::RenderValue;

/// Fill and stroke applied to the path built by a style node's descendants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Fill color, if the path is filled.
    pub fill: Option<RenderValue<Color>>,
    /// Stroke width; stroking needs both width and color.
    pub stroke_width: Option<f64>,
    /// Stroke color; stroking needs both width and color.
    pub stroke_color: Option<RenderValue<Color>>,
}

impl Style {
    /// A fill-only style.
    #[must_use]
    pub fn fill(color: impl Into<RenderValue<Color>>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// A stroke-only style.
    #[must_use]
    pub fn stroke(width: f64, color: impl Into<RenderValue<Color>>) -> Self {
        Self {
            stroke_width: Some(width),
            stroke_color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if any color is timed.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.fill.as_ref().is_some_and(RenderValue::is_timed)
            || self.stroke_color.as_ref().is_some_and(RenderValue::is_timed)
    }
}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fill.hash(state);
        self.stroke_width.map(f64::to_bits).hash(state);
        self.stroke_color.hash(state);
    }
}

/// A run of text positioned by its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// The text.
    pub text: String,
    /// Font passed to the backend.
    pub font: FontConfig,
    /// Text color.
    pub color: Color,
    /// Top-left corner.
    pub position: Point,
    /// Wrap at `max_width`.
    pub wrap: bool,
    /// Wrap width; wrapped text without one is drawn with a zero width.
    pub max_width: Option<f64>,
}

impl TextRun {
    /// A single-line run.
    #[must_use]
    pub fn new(text: impl Into<String>, font: FontConfig, color: Color, position: Point) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            position,
            wrap: false,
            max_width: None,
        }
    }

    /// Enables wrapping at `max_width`.
    #[must_use]
    pub fn wrapped(mut self, max_width: f64) -> Self {
        self.wrap = true;
        self.max_width = Some(max_width);
        self
    }
}

impl Hash for TextRun {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.font.hash(state);
        self.color.hash(state);
        hash_point(self.position, state);
        self.max_width.map(f64::to_bits).hash(state);
        self.wrap.hash(state);
    }
}

/// Signature of a custom draw callback.
pub type DrawFn = dyn Fn(&mut dyn Renderer) -> Result<(), BackendError> + Send + Sync;

/// An opaque draw callback with a stable identity.
///
/// Only `id` takes part in hashing and equality, so distinct callbacks need
/// distinct ids.
#[derive(Clone)]
pub struct CustomDraw {
    /// Identity of `draw`.
    pub id: u64,
    draw: Arc<DrawFn>,
}

impl CustomDraw {
    /// Wraps a draw callback.
    pub fn new(
        id: u64,
        draw: impl Fn(&mut dyn Renderer) -> Result<(), BackendError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            draw: Arc::new(draw),
        }
    }

    /// Runs the callback against `renderer`.
    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<(), BackendError> {
        (self.draw)(renderer)
    }
}

impl PartialEq for CustomDraw {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for CustomDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDraw")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A render-object variant.
///
/// The first six variants are containers that own children; the rest are
/// leaves.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    /// Groups children without drawing.
    Container,
    /// A container whose individual hash is a stable id.
    IdentifiedSubTree {
        /// Identity correlated across frames.
        id: u64,
    },
    /// Children are redrawn every frame and never cached.
    Uncachable,
    /// Children get a cache boundary of their own.
    CacheSplit,
    /// Fills or strokes the path built by the children, after they render.
    RenderStyle(Style),
    /// Offsets the children.
    Translation(Vec2),
    /// Adds a (possibly rounded) rectangle to a fresh path.
    Rectangle {
        /// Rectangle bounds.
        rect: Rect,
        /// Corner radii.
        radii: Option<RoundedRectRadii>,
    },
    /// Adds a line segment to a fresh path.
    LineSegment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Draws text.
    Text(TextRun),
    /// Runs a custom draw callback.
    Custom(CustomDraw),
}

impl ObjectKind {
    /// Returns `true` for variants that own children.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Container
                | Self::IdentifiedSubTree { .. }
                | Self::Uncachable
                | Self::CacheSplit
                | Self::RenderStyle(_)
                | Self::Translation(_)
        )
    }

    /// Returns `true` if any of this node's own attributes is timed.
    #[must_use]
    pub fn has_timed_value(&self) -> bool {
        match self {
            Self::RenderStyle(style) => style.is_timed(),
            _ => false,
        }
    }

    /// Short variant name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Container => "Container",
            Self::IdentifiedSubTree { .. } => "IdentifiedSubTree",
            Self::Uncachable => "Uncachable",
            Self::CacheSplit => "CacheSplit",
            Self::RenderStyle(_) => "RenderStyle",
            Self::Translation(_) => "Translation",
            Self::Rectangle { .. } => "Rectangle",
            Self::LineSegment { .. } => "LineSegment",
            Self::Text(_) => "Text",
            Self::Custom(_) => "Custom",
        }
    }

    pub(crate) const fn discriminant(&self) -> u8 {
        match self {
            Self::Container => 0,
            Self::IdentifiedSubTree { .. } => 1,
            Self::Uncachable => 2,
            Self::CacheSplit => 3,
            Self::RenderStyle(_) => 4,
            Self::Translation(_) => 5,
            Self::Rectangle { .. } => 6,
            Self::LineSegment { .. } => 7,
            Self::Text(_) => 8,
            Self::Custom(_) => 9,
        }
    }

    /// Hash of this node's own attributes, excluding children.
    #[must_use]
    pub fn individual_hash(&self) -> u64 {
        let mut h = hash::hasher();
        h.write_u8(self.discriminant());
        match self {
            Self::Container | Self::Uncachable | Self::CacheSplit => {}
            Self::IdentifiedSubTree { id } => id.hash(&mut h),
            Self::RenderStyle(style) => style.hash(&mut h),
            Self::Translation(offset) => {
                h.write_u64(offset.x.to_bits());
                h.write_u64(offset.y.to_bits());
            }
            Self::Rectangle { rect, radii } => {
                for v in [rect.x0, rect.y0, rect.x1, rect.y1] {
                    h.write_u64(v.to_bits());
                }
                if let Some(r) = radii {
                    for v in [r.top_left, r.top_right, r.bottom_right, r.bottom_left] {
                        h.write_u64(v.to_bits());
                    }
                }
            }
            Self::LineSegment { from, to } => {
                hash_point(*from, &mut h);
                hash_point(*to, &mut h);
            }
            Self::Text(run) => run.hash(&mut h),
            Self::Custom(custom) => custom.id.hash(&mut h),
        }
        h.finish()
    }
}

fn hash_point<H: Hasher>(p: Point, state: &mut H) {
    state.write_u64(p.x.to_bits());
    state.write_u64(p.y.to_bits());
}
