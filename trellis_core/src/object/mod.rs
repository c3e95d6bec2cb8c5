// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-object model.
//!
//! Widgets describe their visual output as a tree of [`RenderObject`]s, built
//! fresh every frame. Containers own their children by value; there are no
//! parent pointers. Once built, the tree is flattened into a [`RenderTree`]
//! arena, which computes per-node hashes and answers path queries.

mod kind;
mod mask;
mod path;
mod tree;

use alloc::vec::Vec;

pub use kind::{CustomDraw, DrawFn, ObjectKind, Style, TextRun};
pub use mask::{MaskEntry, RenderTreeMask};
pub use path::RenderTreePath;
pub use tree::{RenderTree, Traverse, TreeChildren};

use crate::geometry::{Point, Rect, RoundedRectRadii, Vec2};

/// One node of the per-frame drawing-intent tree.
///
/// Leaf variants never have children; the leaf constructors take none.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderObject {
    /// What the node does.
    pub kind: ObjectKind,
    /// Children, drawn in order. Always empty for leaf variants.
    pub children: Vec<RenderObject>,
}

impl RenderObject {
    fn branch(kind: ObjectKind, children: Vec<Self>) -> Self {
        Self { kind, children }
    }

    fn leaf(kind: ObjectKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// A plain grouping container.
    #[must_use]
    pub fn container(children: Vec<Self>) -> Self {
        Self::branch(ObjectKind::Container, children)
    }

    /// A container identified by a stable id.
    #[must_use]
    pub fn identified(id: u64, children: Vec<Self>) -> Self {
        Self::branch(ObjectKind::IdentifiedSubTree { id }, children)
    }

    /// Marks `children` as redrawn every frame.
    #[must_use]
    pub fn uncachable(children: Vec<Self>) -> Self {
        Self::branch(ObjectKind::Uncachable, children)
    }

    /// Gives `children` a cache boundary of their own.
    #[must_use]
    pub fn cache_split(children: Vec<Self>) -> Self {
        Self::branch(ObjectKind::CacheSplit, children)
    }

    /// Fills or strokes the path built by `children`.
    #[must_use]
    pub fn style(style: Style, children: Vec<Self>) -> Self {
        Self::branch(ObjectKind::RenderStyle(style), children)
    }

    /// Offsets `children`.
    #[must_use]
    pub fn translation(offset: Vec2, children: Vec<Self>) -> Self {
        Self::branch(ObjectKind::Translation(offset), children)
    }

    /// A rectangle.
    #[must_use]
    pub fn rectangle(rect: Rect) -> Self {
        Self::leaf(ObjectKind::Rectangle { rect, radii: None })
    }

    /// A rectangle with rounded corners.
    #[must_use]
    pub fn rounded_rectangle(rect: Rect, radii: impl Into<RoundedRectRadii>) -> Self {
        Self::leaf(ObjectKind::Rectangle {
            rect,
            radii: Some(radii.into()),
        })
    }

    /// A line segment.
    #[must_use]
    pub fn line_segment(from: Point, to: Point) -> Self {
        Self::leaf(ObjectKind::LineSegment { from, to })
    }

    /// A run of text.
    #[must_use]
    pub fn text(run: TextRun) -> Self {
        Self::leaf(ObjectKind::Text(run))
    }

    /// A custom draw callback.
    #[must_use]
    pub fn custom(draw: CustomDraw) -> Self {
        Self::leaf(ObjectKind::Custom(draw))
    }

    /// Hash of this node's own attributes, excluding children.
    #[must_use]
    pub fn individual_hash(&self) -> u64 {
        self.kind.individual_hash()
    }

    /// Hash of this node folded with its children's combined hashes.
    ///
    /// This walks the whole subtree; [`RenderTree`] computes the same value
    /// for every node in one pass.
    #[must_use]
    pub fn combined_hash(&self) -> u64 {
        self.children
            .iter()
            .fold(self.individual_hash(), |acc, child| {
                crate::hash::fold(acc, child.combined_hash())
            })
    }

    /// Returns `true` if this node or any descendant holds a timed value.
    #[must_use]
    pub fn has_timed_value(&self) -> bool {
        self.kind.has_timed_value() || self.children.iter().any(Self::has_timed_value)
    }

    /// Total number of nodes in this subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use alloc::vec;

    fn sample() -> RenderObject {
        RenderObject::container(vec![
            RenderObject::style(
                Style::fill(Color::WHITE),
                vec![RenderObject::rectangle(Rect::new(0.0, 0.0, 5.0, 5.0))],
            ),
            RenderObject::translation(
                Vec2::new(10.0, 0.0),
                vec![RenderObject::line_segment(
                    Point::ORIGIN,
                    Point::new(3.0, 4.0),
                )],
            ),
        ])
    }

    #[test]
    fn independently_built_trees_hash_equal() {
        assert_eq!(sample().combined_hash(), sample().combined_hash());
        assert_eq!(sample().node_count(), 5);
    }

    #[test]
    fn leaf_change_reaches_root() {
        let a = sample();
        let mut b = sample();
        b.children[1].children[0] =
            RenderObject::line_segment(Point::ORIGIN, Point::new(3.0, 5.0));
        assert_ne!(a.combined_hash(), b.combined_hash());
        assert_ne!(
            a.children[1].combined_hash(),
            b.children[1].combined_hash()
        );
        assert_eq!(
            a.children[0].combined_hash(),
            b.children[0].combined_hash()
        );
    }

    #[test]
    fn child_order_matters() {
        let a = sample();
        let mut b = sample();
        b.children.swap(0, 1);
        assert_ne!(a.combined_hash(), b.combined_hash());
    }
}
