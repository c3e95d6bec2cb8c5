// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting a render tree into cachable and uncachable groups.
//!
//! The walk is depth-first pre-order. A volatile node (an `Uncachable`
//! wrapper, or a node holding a timed value) is recorded as a subtree entry
//! in the current uncachable group and its children are not visited. Any other
//! node is recorded as a node-only entry in the current cachable group and
//! its children are visited in order. Consecutive entries of the same kind
//! merge into one group, so groups alternate between the two kinds.
//!
//! A `CacheSplit` node always opens a fresh cachable group, and the first
//! cachable node after its subtree opens another one.

use alloc::vec::Vec;

use trellis_core::object::{ObjectKind, RenderTree, RenderTreePath};

use crate::group::RenderGroup;

/// Partitions `tree` into an ordered sequence of groups.
///
/// Every node is covered by exactly one group: either by its own node entry
/// or by a volatile ancestor's subtree entry.
#[must_use]
pub fn generate_groups(tree: &RenderTree) -> Vec<RenderGroup> {
    let mut groups = Vec::new();
    let mut fresh = false;
    let mut path = RenderTreePath::root();
    visit(tree, 0, &mut path, &mut groups, &mut fresh);
    groups
}

fn visit(
    tree: &RenderTree,
    idx: usize,
    path: &mut RenderTreePath,
    groups: &mut Vec<RenderGroup>,
    fresh: &mut bool,
) {
    if tree.is_volatile(idx) {
        open(groups, false, false).mask_mut().add(path.clone());
        return;
    }

    let split = matches!(tree.kind(idx), ObjectKind::CacheSplit);
    open(groups, true, split || *fresh)
        .mask_mut()
        .add_node(path.clone());
    *fresh = false;

    for child in tree.children(idx) {
        path.push(tree.child_index(child));
        visit(tree, child, path, groups, fresh);
        path.pop();
    }

    if split {
        *fresh = true;
    }
}

/// Returns the group new entries go to, appending one if the last group has
/// the wrong kind or a fresh group is requested.
fn open(groups: &mut Vec<RenderGroup>, cachable: bool, fresh: bool) -> &mut RenderGroup {
    let reuse = !fresh && groups.last().is_some_and(|g| g.is_cachable() == cachable);
    if !reuse {
        groups.push(if cachable {
            RenderGroup::cachable()
        } else {
            RenderGroup::uncachable()
        });
    }
    let last = groups.len() - 1;
    &mut groups[last]
}
