// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of render trees and group partitions.
//!
//! Hashes are exported as 16-digit hex strings so they survive JSON readers
//! that parse numbers as doubles.

use serde_json::{Value, json};

use trellis_core::object::RenderTree;
use trellis_render::{GroupKind, RenderGroup};

use crate::dump::describe;

/// The tree as nested objects:
/// `{ "path", "kind", "detail", "volatile", "hash", "combined_hash", "children": [...] }`.
#[must_use]
pub fn tree_to_json(tree: &RenderTree) -> Value {
    node(tree, 0)
}

fn node(tree: &RenderTree, idx: usize) -> Value {
    let kind = tree.kind(idx);
    let children: Vec<Value> = tree.children(idx).map(|c| node(tree, c)).collect();
    json!({
        "path": tree.path_of(idx).to_string(),
        "kind": kind.name(),
        "detail": describe(kind),
        "volatile": tree.is_volatile(idx),
        "hash": format!("{:016x}", tree.individual_hash(idx)),
        "combined_hash": format!("{:016x}", tree.combined_hash(idx)),
        "children": children,
    })
}

/// The partition as an array of
/// `{ "index", "kind", "surface", "content_hash", "entries": [{ "path", "subtree" }] }`.
///
/// `surface` and `content_hash` are `null` for uncachable groups and for
/// cachable groups without a populated surface.
#[must_use]
pub fn groups_to_json(groups: &[RenderGroup]) -> Value {
    let groups: Vec<Value> = groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let kind = match group.kind() {
                GroupKind::Cachable { .. } => "cachable",
                GroupKind::Uncachable => "uncachable",
            };
            let cache = group.cache();
            let entries: Vec<Value> = group
                .mask()
                .entries()
                .iter()
                .map(|e| json!({ "path": e.path.to_string(), "subtree": e.subtree }))
                .collect();
            json!({
                "index": index,
                "kind": kind,
                "surface": cache.map(|c| c.key.raw()),
                "content_hash": cache
                    .and_then(|c| c.content_hash)
                    .map(|h| format!("{h:016x}")),
                "entries": entries,
            })
        })
        .collect();
    Value::Array(groups)
}
