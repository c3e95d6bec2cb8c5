// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout and render contracts, and the memoizing layout slot.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt;

use trellis_core::geometry::{Point, Rect, Size};
use trellis_core::object::RenderObject;

use crate::constraints::{BoxConfig, BoxConstraints};
use crate::error::LayoutError;

/// A node that can be sized by box constraints.
pub trait Layout {
    /// The node's intrinsic sizing hint.
    fn box_config(&self) -> BoxConfig;

    /// Computes the node's size for `constraints`.
    ///
    /// Must be deterministic: the same constraints and the same inputs give
    /// the same size and the same child placement. The returned size is
    /// clamped into `constraints` by [`LayoutNode::layout`].
    fn perform_layout(&mut self, constraints: BoxConstraints) -> Result<Size, LayoutError>;
}

/// A node that describes its visual output as render objects.
pub trait RenderContent {
    /// The node's render-object subtree in its own coordinate space, or
    /// `None` if it draws nothing.
    fn render_content(&self) -> Option<RenderObject>;
}

/// A layoutable, renderable node.
pub trait Widget: Layout + RenderContent + fmt::Debug {}

impl<T: Layout + RenderContent + fmt::Debug> Widget for T {}

/// A widget plus its layout state: last constraints, size and position.
///
/// [`layout`](Self::layout) skips the widget's own layout when called again
/// with the constraints it last saw. Parents that need a fresh result anyway
/// call [`invalidate`](Self::invalidate) first.
pub struct LayoutNode {
    widget: Box<dyn Widget>,
    previous: Option<BoxConstraints>,
    size: Size,
    position: Point,
}

impl fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutNode")
            .field("widget", &self.widget)
            .field("previous", &self.previous)
            .field("size", &self.size)
            .field("position", &self.position)
            .finish()
    }
}

impl LayoutNode {
    /// Wraps a widget.
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self::from_boxed(Box::new(widget))
    }

    /// Wraps an already boxed widget.
    #[must_use]
    pub fn from_boxed(widget: Box<dyn Widget>) -> Self {
        Self {
            widget,
            previous: None,
            size: Size::ZERO,
            position: Point::ORIGIN,
        }
    }

    /// Lays the widget out, reusing the last result if `constraints` are
    /// unchanged.
    pub fn layout(&mut self, constraints: BoxConstraints) -> Result<Size, LayoutError> {
        constraints.validate()?;
        if self.previous == Some(constraints) {
            return Ok(self.size);
        }
        let size = constraints.constrain(self.widget.perform_layout(constraints)?);
        tracing::trace!(?constraints, ?size, "layout");
        self.size = size;
        self.previous = Some(constraints);
        Ok(size)
    }

    /// Forgets the last constraints so the next [`layout`](Self::layout)
    /// recomputes.
    #[inline]
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Constraints of the last computed layout.
    #[inline]
    #[must_use]
    pub fn previous_constraints(&self) -> Option<BoxConstraints> {
        self.previous
    }

    /// The widget's intrinsic sizing hint.
    #[inline]
    #[must_use]
    pub fn box_config(&self) -> BoxConfig {
        self.widget.box_config()
    }

    /// Size from the last layout.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Position within the parent, set by the parent's layout.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Sets the position within the parent.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Bounds within the parent.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// The wrapped widget.
    #[must_use]
    pub fn widget(&self) -> &dyn Widget {
        &*self.widget
    }

    /// The wrapped widget, mutably. Call [`invalidate`](Self::invalidate)
    /// after changing anything that affects layout.
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        &mut *self.widget
    }

    /// The widget's content in its own coordinate space.
    #[must_use]
    pub fn render_content(&self) -> Option<RenderObject> {
        self.widget.render_content()
    }

    /// The widget's content offset by its position, for use by a parent.
    #[must_use]
    pub fn render_placed(&self) -> Option<RenderObject> {
        let content = self.widget.render_content()?;
        Some(RenderObject::translation(
            self.position.to_vec2(),
            vec![content],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use trellis_core::object::ObjectKind;

    #[derive(Debug, Default)]
    struct Counting {
        calls: Rc<Cell<u32>>,
    }

    impl Layout for Counting {
        fn box_config(&self) -> BoxConfig {
            BoxConfig::preferred(Size::new(30.0, 30.0))
        }

        fn perform_layout(&mut self, _constraints: BoxConstraints) -> Result<Size, LayoutError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Size::new(30.0, 30.0))
        }
    }

    impl RenderContent for Counting {
        fn render_content(&self) -> Option<RenderObject> {
            Some(RenderObject::container(alloc::vec::Vec::new()))
        }
    }

    #[test]
    fn memoizes_until_invalidated() {
        let calls = Rc::new(Cell::new(0));
        let mut node = LayoutNode::new(Counting {
            calls: calls.clone(),
        });
        let c = BoxConstraints::loose(Size::new(100.0, 100.0));
        node.layout(c).unwrap();
        node.layout(c).unwrap();
        assert_eq!(calls.get(), 1);
        node.invalidate();
        node.layout(c).unwrap();
        assert_eq!(calls.get(), 2);
        node.layout(BoxConstraints::loose(Size::new(90.0, 100.0))).unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn result_is_clamped() {
        let mut node = LayoutNode::new(Counting::default());
        let size = node.layout(BoxConstraints::loose(Size::new(10.0, 50.0))).unwrap();
        assert_eq!(size, Size::new(10.0, 30.0));
    }

    #[test]
    fn malformed_constraints_propagate() {
        let mut node = LayoutNode::new(Counting::default());
        let bad = BoxConstraints::new(Size::new(5.0, 0.0), Size::new(1.0, 1.0));
        assert!(matches!(node.layout(bad), Err(LayoutError::Inverted { .. })));
        assert_eq!(node.previous_constraints(), None);
    }

    #[test]
    fn placed_content_is_translated() {
        let mut node = LayoutNode::new(Counting::default());
        node.set_position(Point::new(4.0, 5.0));
        let placed = node.render_placed().unwrap();
        assert!(matches!(placed.kind, ObjectKind::Translation(v) if v.x == 4.0 && v.y == 5.0));
        assert_eq!(placed.children.len(), 1);
    }
}
