// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-order arena over one frame's render-object tree.

use alloc::vec::Vec;
use core::hash::Hasher;

use super::kind::ObjectKind;
use super::path::RenderTreePath;
use super::RenderObject;
use crate::hash;

/// A render-object tree flattened into pre-order, struct-of-arrays storage.
///
/// Node `0` is the root. A node's descendants occupy the index range
/// `idx + 1 .. subtree_end(idx)`, and its first child (if any) is `idx + 1`.
/// Hashes are computed bottom-up while the arena is built.
#[derive(Clone, Debug)]
pub struct RenderTree {
    kinds: Vec<ObjectKind>,
    parent: Vec<Option<usize>>,
    child_index: Vec<u32>,
    child_count: Vec<u32>,
    subtree_end: Vec<usize>,
    individual_hash: Vec<u64>,
    combined_hash: Vec<u64>,
    timed: Vec<bool>,
    structure_hash: u64,
}

impl RenderTree {
    /// Flattens `root` into an arena.
    #[must_use]
    pub fn new(root: RenderObject) -> Self {
        let n = root.node_count();
        let mut tree = Self {
            kinds: Vec::with_capacity(n),
            parent: Vec::with_capacity(n),
            child_index: Vec::with_capacity(n),
            child_count: Vec::with_capacity(n),
            subtree_end: Vec::with_capacity(n),
            individual_hash: Vec::with_capacity(n),
            combined_hash: Vec::with_capacity(n),
            timed: Vec::with_capacity(n),
            structure_hash: 0,
        };
        tree.push(root, None, 0);

        let mut h = hash::hasher();
        let mut idx = 0;
        while idx < tree.len() {
            h.write_u8(tree.kinds[idx].discriminant());
            h.write_u8(u8::from(tree.timed[idx]));
            if tree.is_volatile(idx) {
                // Redrawn as a whole every frame; its inner shape is irrelevant.
                idx = tree.subtree_end[idx];
                continue;
            }
            h.write_u32(tree.child_count[idx]);
            idx += 1;
        }
        tree.structure_hash = h.finish();
        tree
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "child counts are far below u32::MAX"
    )]
    fn push(&mut self, object: RenderObject, parent: Option<usize>, child_index: u32) -> usize {
        let idx = self.kinds.len();
        let RenderObject { kind, children } = object;
        let individual = kind.individual_hash();
        self.timed.push(kind.has_timed_value());
        self.kinds.push(kind);
        self.parent.push(parent);
        self.child_index.push(child_index);
        self.child_count.push(children.len() as u32);
        self.subtree_end.push(idx + 1);
        self.individual_hash.push(individual);
        self.combined_hash.push(individual);

        let mut combined = individual;
        for (i, child) in children.into_iter().enumerate() {
            let c = self.push(child, Some(idx), i as u32);
            combined = hash::fold(combined, self.combined_hash[c]);
        }
        self.combined_hash[idx] = combined;
        self.subtree_end[idx] = self.kinds.len();
        idx
    }

    /// Number of nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always `false`; a tree has at least its root.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The node's variant.
    #[inline]
    #[must_use]
    pub fn kind(&self, idx: usize) -> &ObjectKind {
        &self.kinds[idx]
    }

    /// The node's parent, `None` for the root.
    #[inline]
    #[must_use]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parent[idx]
    }

    /// The node's position among its siblings.
    #[inline]
    #[must_use]
    pub fn child_index(&self, idx: usize) -> u32 {
        self.child_index[idx]
    }

    /// Number of direct children.
    #[inline]
    #[must_use]
    pub fn child_count(&self, idx: usize) -> usize {
        self.child_count[idx] as usize
    }

    /// One past the last descendant of `idx`.
    #[inline]
    #[must_use]
    pub fn subtree_end(&self, idx: usize) -> usize {
        self.subtree_end[idx]
    }

    /// Iterates the direct children of `idx` in order.
    #[must_use]
    pub fn children(&self, idx: usize) -> TreeChildren<'_> {
        TreeChildren {
            tree: self,
            next: idx + 1,
            end: self.subtree_end[idx],
        }
    }

    /// Hash of the node's own attributes.
    #[inline]
    #[must_use]
    pub fn individual_hash(&self, idx: usize) -> u64 {
        self.individual_hash[idx]
    }

    /// Hash of the node folded with its children's combined hashes.
    #[inline]
    #[must_use]
    pub fn combined_hash(&self, idx: usize) -> u64 {
        self.combined_hash[idx]
    }

    /// Returns `true` if the node's own attributes are timed.
    #[inline]
    #[must_use]
    pub fn has_timed_value(&self, idx: usize) -> bool {
        self.timed[idx]
    }

    /// Returns `true` if the node must be redrawn every frame: it is an
    /// [`Uncachable`](ObjectKind::Uncachable) wrapper or holds a timed value.
    #[inline]
    #[must_use]
    pub fn is_volatile(&self, idx: usize) -> bool {
        self.timed[idx] || matches!(self.kinds[idx], ObjectKind::Uncachable)
    }

    /// Hash over variants, child counts and timed flags in pre-order.
    ///
    /// Two trees with equal structure hashes have the same shape outside of
    /// volatile subtrees, so paths computed against one address the same kind
    /// of node in the other. The inside of a volatile subtree does not
    /// contribute.
    #[inline]
    #[must_use]
    pub fn structure_hash(&self) -> u64 {
        self.structure_hash
    }

    /// Path from the root to `idx`.
    #[must_use]
    pub fn path_of(&self, idx: usize) -> RenderTreePath {
        let mut segments = Vec::new();
        let mut cur = idx;
        while let Some(p) = self.parent[cur] {
            segments.push(self.child_index[cur]);
            cur = p;
        }
        segments.reverse();
        RenderTreePath::new(segments)
    }

    /// Index of the node at `path`, if it exists.
    #[must_use]
    pub fn find(&self, path: &RenderTreePath) -> Option<usize> {
        let mut idx = 0;
        for &segment in path.segments() {
            idx = self.children(idx).nth(segment as usize)?;
        }
        Some(idx)
    }

    /// Depth-first traversal yielding `(index, path, parent)` for every node.
    #[must_use]
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse {
            tree: self,
            next: 0,
            stack: Vec::new(),
            path: RenderTreePath::root(),
        }
    }
}

/// Iterator over the direct children of a node.
///
/// Created by [`RenderTree::children`].
#[derive(Debug)]
pub struct TreeChildren<'a> {
    tree: &'a RenderTree,
    next: usize,
    end: usize,
}

impl Iterator for TreeChildren<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.end {
            return None;
        }
        let idx = self.next;
        self.next = self.tree.subtree_end[idx];
        Some(idx)
    }
}

/// Depth-first traversal over a [`RenderTree`].
///
/// Created by [`RenderTree::traverse`].
#[derive(Debug)]
pub struct Traverse<'a> {
    tree: &'a RenderTree,
    next: usize,
    stack: Vec<usize>,
    path: RenderTreePath,
}

impl Iterator for Traverse<'_> {
    type Item = (usize, RenderTreePath, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next;
        if idx >= self.tree.len() {
            return None;
        }
        while let Some(&top) = self.stack.last() {
            if self.tree.subtree_end[top] > idx {
                break;
            }
            self.stack.pop();
            self.path.pop();
        }
        if !self.stack.is_empty() {
            self.path.push(self.tree.child_index[idx]);
        }
        self.stack.push(idx);
        self.next = idx + 1;
        Some((idx, self.path.clone(), self.tree.parent[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Vec2};
    use crate::object::Style;
    use crate::paint::Color;
    use crate::time::{Duration, HostTime};
    use crate::value::{RenderValue, TimedValue};
    use alloc::vec;

    fn build(width: f64) -> RenderObject {
        RenderObject::container(vec![
            RenderObject::style(
                Style::fill(Color::WHITE),
                vec![RenderObject::rectangle(Rect::new(0.0, 0.0, width, 5.0))],
            ),
            RenderObject::uncachable(vec![RenderObject::line_segment(
                Point::ORIGIN,
                Point::new(1.0, 1.0),
            )]),
            RenderObject::translation(Vec2::new(2.0, 2.0), vec![]),
        ])
    }

    #[test]
    fn preorder_layout() {
        let tree = RenderTree::new(build(5.0));
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.children(0).collect::<vec::Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(tree.children(1).collect::<vec::Vec<_>>(), vec![2]);
        assert_eq!(tree.subtree_end(1), 3);
        assert_eq!(tree.parent(4), Some(3));
        assert_eq!(tree.child_count(0), 3);
        assert_eq!(tree.kind(5).name(), "Translation");
    }

    #[test]
    fn arena_hashes_match_recursive_hashes() {
        let obj = build(5.0);
        let tree = RenderTree::new(obj.clone());
        assert_eq!(tree.combined_hash(0), obj.combined_hash());
        assert_eq!(tree.combined_hash(1), obj.children[0].combined_hash());
        assert_eq!(tree.individual_hash(2), obj.children[0].children[0].individual_hash());
    }

    #[test]
    fn attribute_change_keeps_structure() {
        let a = RenderTree::new(build(5.0));
        let b = RenderTree::new(build(6.0));
        assert_eq!(a.structure_hash(), b.structure_hash());
        assert_ne!(a.combined_hash(0), b.combined_hash(0));
        assert_ne!(a.combined_hash(1), b.combined_hash(1));
        assert_eq!(a.combined_hash(3), b.combined_hash(3));
    }

    #[test]
    fn timed_flag_is_structural() {
        fn fade(p: f64) -> Color {
            Color::WHITE.with_alpha(p)
        }
        let timed = RenderObject::style(
            Style::fill(RenderValue::Timed(TimedValue::new(HostTime(0), Duration(1), 1, fade))),
            vec![],
        );
        let fixed = RenderObject::style(Style::fill(Color::WHITE), vec![]);
        let a = RenderTree::new(timed);
        let b = RenderTree::new(fixed);
        assert!(a.has_timed_value(0));
        assert_ne!(a.structure_hash(), b.structure_hash());
    }

    #[test]
    fn volatile_interior_is_not_structural() {
        let a = RenderTree::new(build(5.0));
        let mut changed = build(5.0);
        changed.children[1]
            .children
            .push(RenderObject::rectangle(Rect::new(0.0, 0.0, 1.0, 1.0)));
        let b = RenderTree::new(changed);
        assert!(b.is_volatile(3));
        assert_eq!(a.structure_hash(), b.structure_hash());
        assert_ne!(a.combined_hash(0), b.combined_hash(0));
    }

    #[test]
    fn paths_round_trip_through_find() {
        let tree = RenderTree::new(build(5.0));
        for (idx, path, parent) in tree.traverse() {
            assert_eq!(path, tree.path_of(idx));
            assert_eq!(tree.find(&path), Some(idx));
            assert_eq!(parent, tree.parent(idx));
        }
        assert_eq!(tree.find(&RenderTreePath::from([1, 0])), Some(4));
        assert_eq!(tree.find(&RenderTreePath::from([2, 0])), None);
        assert_eq!(tree.find(&RenderTreePath::from([7])), None);
    }

    #[test]
    fn traverse_visits_every_node_once() {
        let tree = RenderTree::new(build(5.0));
        let visited: vec::Vec<_> = tree.traverse().map(|(idx, _, _)| idx).collect();
        assert_eq!(visited, (0..tree.len()).collect::<vec::Vec<_>>());
    }
}
