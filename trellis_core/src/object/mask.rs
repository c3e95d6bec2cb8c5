// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path sets describing which tree positions a render group draws.

use alloc::vec::Vec;

use super::path::RenderTreePath;

/// One entry of a [`RenderTreeMask`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaskEntry {
    /// The covered position.
    pub path: RenderTreePath,
    /// Whether the entry covers the whole subtree under `path`, or only the
    /// node at `path`.
    pub subtree: bool,
}

/// A set of tree paths, kept in pre-order.
///
/// Subtree entries cover a node and all of its descendants. Node entries cover
/// exactly one node; its descendants are covered only if they are added too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderTreeMask {
    entries: Vec<MaskEntry>,
}

impl RenderTreeMask {
    /// Creates an empty mask.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds `path` together with its whole subtree.
    pub fn add(&mut self, path: RenderTreePath) {
        self.insert(MaskEntry { path, subtree: true });
    }

    /// Adds the single node at `path`, without its descendants.
    pub fn add_node(&mut self, path: RenderTreePath) {
        self.insert(MaskEntry {
            path,
            subtree: false,
        });
    }

    fn insert(&mut self, entry: MaskEntry) {
        match self.entries.binary_search_by(|e| e.path.cmp(&entry.path)) {
            Ok(i) => self.entries[i].subtree |= entry.subtree,
            Err(i) => self.entries.insert(i, entry),
        }
    }

    /// Returns `true` if the node at `path` is covered: some subtree entry is
    /// a prefix of (or equal to) `path`, or a node entry equals it.
    #[must_use]
    pub fn contains_any(&self, path: &RenderTreePath) -> bool {
        // Entries that are prefixes of `path` sort at or before it.
        let end = self.entries.partition_point(|e| e.path <= *path);
        self.entries[..end].iter().rev().any(|e| {
            if e.path == *path {
                true
            } else {
                e.subtree && e.path.is_prefix_of(path)
            }
        })
    }

    /// Returns `true` if some subtree entry is a prefix of (or equal to)
    /// `path`, so everything below `path` is covered too.
    #[must_use]
    pub fn covers_subtree(&self, path: &RenderTreePath) -> bool {
        let end = self.entries.partition_point(|e| e.path <= *path);
        self.entries[..end]
            .iter()
            .rev()
            .any(|e| e.subtree && e.path.is_prefix_of(path))
    }

    /// Returns `true` if some entry lies at or below `path`.
    ///
    /// Replay descends through such nodes even when they are not covered.
    #[must_use]
    pub fn leads_to(&self, path: &RenderTreePath) -> bool {
        let start = self.entries.partition_point(|e| e.path < *path);
        self.entries
            .get(start)
            .is_some_and(|e| path.is_prefix_of(&e.path))
    }

    /// Entries in pre-order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[MaskEntry] {
        &self.entries
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries were added.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtree_entry_covers_descendants() {
        let mut mask = RenderTreeMask::new();
        mask.add(RenderTreePath::from([0, 1]));
        assert!(mask.contains_any(&RenderTreePath::from([0, 1])));
        assert!(mask.contains_any(&RenderTreePath::from([0, 1, 2])));
        assert!(!mask.contains_any(&RenderTreePath::from([0, 2])));
        assert!(!mask.contains_any(&RenderTreePath::from([0])));
    }

    #[test]
    fn node_entry_covers_only_itself() {
        let mut mask = RenderTreeMask::new();
        mask.add_node(RenderTreePath::from([0]));
        assert!(mask.contains_any(&RenderTreePath::from([0])));
        assert!(!mask.contains_any(&RenderTreePath::from([0, 0])));
    }

    #[test]
    fn prefix_found_past_unrelated_entries() {
        let mut mask = RenderTreeMask::new();
        mask.add(RenderTreePath::from([1]));
        mask.add_node(RenderTreePath::from([1, 0, 0]));
        mask.add_node(RenderTreePath::from([1, 2]));
        assert!(mask.contains_any(&RenderTreePath::from([1, 3, 7])));
    }

    #[test]
    fn covers_subtree_ignores_node_entries() {
        let mut mask = RenderTreeMask::new();
        mask.add_node(RenderTreePath::from([0]));
        mask.add(RenderTreePath::from([1]));
        assert!(!mask.covers_subtree(&RenderTreePath::from([0])));
        assert!(mask.covers_subtree(&RenderTreePath::from([1])));
        assert!(mask.covers_subtree(&RenderTreePath::from([1, 4])));
    }

    #[test]
    fn leads_to_ancestors() {
        let mut mask = RenderTreeMask::new();
        mask.add(RenderTreePath::from([2, 1]));
        assert!(mask.leads_to(&RenderTreePath::root()));
        assert!(mask.leads_to(&RenderTreePath::from([2])));
        assert!(mask.leads_to(&RenderTreePath::from([2, 1])));
        assert!(!mask.leads_to(&RenderTreePath::from([1])));
        assert!(!mask.leads_to(&RenderTreePath::from([2, 1, 0])));
    }

    #[test]
    fn entries_stay_sorted_and_deduplicated() {
        let mut mask = RenderTreeMask::new();
        mask.add_node(RenderTreePath::from([1]));
        mask.add_node(RenderTreePath::root());
        mask.add(RenderTreePath::from([1]));
        assert_eq!(mask.len(), 2);
        assert_eq!(mask.entries()[0].path, RenderTreePath::root());
        assert!(mask.entries()[1].subtree);
    }
}
