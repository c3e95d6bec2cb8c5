// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cache-boundary wrapper.

use alloc::vec;

use trellis_core::geometry::{Point, Size};
use trellis_core::object::RenderObject;

use crate::constraints::{BoxConfig, BoxConstraints};
use crate::error::LayoutError;
use crate::node::{Layout, LayoutNode, RenderContent, Widget};

/// How [`Isolated`] separates its child from the surrounding cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Isolation {
    /// The child gets a cache group of its own.
    CacheSplit,
    /// The child is redrawn every frame.
    Uncachable,
}

/// Lays out a single child unchanged and wraps its render output in a
/// [`CacheSplit`](trellis_core::object::ObjectKind::CacheSplit) or
/// [`Uncachable`](trellis_core::object::ObjectKind::Uncachable) node.
#[derive(Debug)]
pub struct Isolated {
    isolation: Isolation,
    child: LayoutNode,
}

impl Isolated {
    /// Wraps `child`.
    pub fn new(isolation: Isolation, child: impl Widget + 'static) -> Self {
        Self {
            isolation,
            child: LayoutNode::new(child),
        }
    }

    /// The wrapped child.
    #[must_use]
    pub fn child(&self) -> &LayoutNode {
        &self.child
    }

    /// The wrapped child, mutably.
    pub fn child_mut(&mut self) -> &mut LayoutNode {
        &mut self.child
    }
}

impl Layout for Isolated {
    fn box_config(&self) -> BoxConfig {
        self.child.box_config()
    }

    fn perform_layout(&mut self, constraints: BoxConstraints) -> Result<Size, LayoutError> {
        let size = self.child.layout(constraints)?;
        self.child.set_position(Point::ORIGIN);
        Ok(size)
    }
}

impl RenderContent for Isolated {
    fn render_content(&self) -> Option<RenderObject> {
        let content = self.child.render_content()?;
        Some(match self.isolation {
            Isolation::CacheSplit => RenderObject::cache_split(vec![content]),
            Isolation::Uncachable => RenderObject::uncachable(vec![content]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use trellis_core::object::ObjectKind;
    use trellis_core::paint::Color;

    #[test]
    fn delegates_layout_and_wraps_output() {
        let mut iso = Isolated::new(
            Isolation::Uncachable,
            Block::new(Size::new(5.0, 5.0)).with_fill(Color::BLACK),
        );
        let s = iso.perform_layout(BoxConstraints::UNBOUNDED).unwrap();
        assert_eq!(s, Size::new(5.0, 5.0));
        let obj = iso.render_content().unwrap();
        assert_eq!(obj.kind, ObjectKind::Uncachable);
        assert!(matches!(obj.children[0].kind, ObjectKind::RenderStyle(_)));
    }

    #[test]
    fn empty_child_draws_nothing() {
        let iso = Isolated::new(Isolation::CacheSplit, Block::new(Size::new(5.0, 5.0)));
        assert!(iso.render_content().is_none());
    }
}
