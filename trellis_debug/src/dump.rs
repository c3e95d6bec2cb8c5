// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text outlines of render trees and group partitions.

use std::fmt::Write;

use trellis_core::object::{ObjectKind, RenderTree, Style};
use trellis_core::paint::Color;
use trellis_core::value::RenderValue;
use trellis_render::{GroupKind, RenderGroup};

/// One line per node, indented by depth:
///
/// ```text
/// / Translation by (4, 4)
///   /0 RenderStyle fill=#ffffffff
///     /0/0 Rectangle (0, 0)-(8, 8)
///   /1 Uncachable [volatile]
/// ```
#[must_use]
pub fn dump_tree(tree: &RenderTree) -> String {
    let mut out = String::new();
    for (idx, path, _) in tree.traverse() {
        let kind = tree.kind(idx);
        let indent = path.depth() * 2;
        let _ = write!(out, "{:indent$}{path} {}", "", kind.name());
        let detail = describe(kind);
        if !detail.is_empty() {
            let _ = write!(out, " {detail}");
        }
        if tree.is_volatile(idx) {
            out.push_str(" [volatile]");
        }
        out.push('\n');
    }
    out
}

/// One block per group: kind, surface, and mask entries.
///
/// ```text
/// #0 cachable surface=#1 hash=00000000deadbeef
///   / node
///   /0 node
/// #1 uncachable
///   /1 subtree
/// ```
#[must_use]
pub fn dump_groups(groups: &[RenderGroup]) -> String {
    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        let _ = write!(out, "#{index}");
        match group.kind() {
            GroupKind::Uncachable => out.push_str(" uncachable"),
            GroupKind::Cachable { cache: None } => out.push_str(" cachable"),
            GroupKind::Cachable { cache: Some(cache) } => {
                let _ = write!(out, " cachable surface={}", cache.key);
                match cache.content_hash {
                    Some(hash) => {
                        let _ = write!(out, " hash={hash:016x}");
                    }
                    None => out.push_str(" hash=none"),
                }
            }
        }
        out.push('\n');
        for entry in group.mask().entries() {
            let scope = if entry.subtree { "subtree" } else { "node" };
            let _ = writeln!(out, "  {} {scope}", entry.path);
        }
    }
    out
}

/// Variant attributes as a short string, empty for plain containers.
pub(crate) fn describe(kind: &ObjectKind) -> String {
    match kind {
        ObjectKind::Container | ObjectKind::Uncachable | ObjectKind::CacheSplit => String::new(),
        ObjectKind::IdentifiedSubTree { id } => format!("id={id}"),
        ObjectKind::Custom(custom) => format!("id={}", custom.id),
        ObjectKind::RenderStyle(style) => describe_style(style),
        ObjectKind::Translation(v) => format!("by ({}, {})", v.x, v.y),
        ObjectKind::Rectangle { rect, radii } => {
            let mut s = format!("({}, {})-({}, {})", rect.x0, rect.y0, rect.x1, rect.y1);
            if radii.is_some() {
                s.push_str(" rounded");
            }
            s
        }
        ObjectKind::LineSegment { from, to } => {
            format!("({}, {})-({}, {})", from.x, from.y, to.x, to.y)
        }
        ObjectKind::Text(run) => match run.max_width {
            Some(w) if run.wrap => format!("{:?} wrap={w}", run.text),
            _ => format!("{:?}", run.text),
        },
    }
}

fn describe_style(style: &Style) -> String {
    let mut parts = Vec::new();
    if let Some(fill) = &style.fill {
        parts.push(format!("fill={}", describe_color(fill)));
    }
    if let (Some(width), Some(color)) = (style.stroke_width, &style.stroke_color) {
        parts.push(format!("stroke={width}:{}", describe_color(color)));
    }
    parts.join(" ")
}

fn describe_color(value: &RenderValue<Color>) -> String {
    match value {
        RenderValue::Fixed(c) => hex(*c),
        RenderValue::Timed(t) => format!("timed#{}", t.id),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "channels are clamped to 0..=255 before the cast"
)]
fn hex(c: Color) -> String {
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        byte(c.r),
        byte(c.g),
        byte(c.b),
        byte(c.a)
    )
}
