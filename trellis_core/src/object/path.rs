// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child-index paths into a render-object tree.

use alloc::vec::Vec;
use core::fmt;

/// A sequence of child indices from the tree root.
///
/// The empty path addresses the root. Paths compare lexicographically, which
/// matches pre-order: an ancestor sorts before its descendants, and earlier
/// siblings (with their subtrees) sort before later siblings.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTreePath(Vec<u32>);

impl RenderTreePath {
    /// The root path.
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Creates a path from child indices.
    #[inline]
    #[must_use]
    pub fn new(segments: impl Into<Vec<u32>>) -> Self {
        Self(segments.into())
    }

    /// The child indices, root first.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.0
    }

    /// Number of segments; zero for the root.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns this path extended by one child index.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(index);
        Self(segments)
    }

    /// Appends a child index in place.
    #[inline]
    pub fn push(&mut self, index: u32) {
        self.0.push(index);
    }

    /// Removes the last segment.
    #[inline]
    pub fn pop(&mut self) -> Option<u32> {
        self.0.pop()
    }

    /// The parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    /// Returns `true` if `self` equals `other` or is one of its ancestors.
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<&[u32]> for RenderTreePath {
    fn from(segments: &[u32]) -> Self {
        Self(segments.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for RenderTreePath {
    fn from(segments: [u32; N]) -> Self {
        Self(segments.to_vec())
    }
}

impl fmt::Debug for RenderTreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RenderTreePath({self})")
    }
}

impl fmt::Display for RenderTreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}
