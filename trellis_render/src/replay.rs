// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-filtered replay of a render tree.
//!
//! Replay walks the tree depth first from the root and only enters children
//! that are covered by the mask or lie on the way to a covered node. Covered
//! nodes issue their draw calls. Nodes merely passed through still apply
//! their effect on descendants: a `Translation` offsets them, and a
//! `RenderStyle` fills or strokes whatever path they built in this replay.
//!
//! `RenderStyle` paints after its children, so the style applies to the path
//! accumulated by its descendants. It paints only if some descendant drew in
//! the same replay.

use trellis_core::backend::{BackendError, Renderer};
use trellis_core::hash;
use trellis_core::object::{ObjectKind, RenderTree, RenderTreeMask, RenderTreePath, Style};
use trellis_core::time::HostTime;
use trellis_core::trace::{DrawFailureEvent, Tracer};

/// Counters from one replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// Covered render objects whose draw calls succeeded.
    pub nodes_drawn: usize,
    /// Render objects whose draw calls failed and were skipped.
    pub draw_failures: usize,
}

/// Replays the nodes covered by `mask` against `backend`.
///
/// Timed values are sampled at `now`. Draw failures are logged, traced, and
/// counted; they never stop the replay.
pub fn replay_mask(
    tree: &RenderTree,
    mask: &RenderTreeMask,
    backend: &mut dyn Renderer,
    now: HostTime,
    tracer: &mut Tracer<'_>,
) -> ReplayOutcome {
    replay_group(tree, mask, backend, now, tracer, 0, 0)
}

pub(crate) fn replay_group(
    tree: &RenderTree,
    mask: &RenderTreeMask,
    backend: &mut dyn Renderer,
    now: HostTime,
    tracer: &mut Tracer<'_>,
    frame_index: u64,
    group: usize,
) -> ReplayOutcome {
    let mut replay = Replay {
        tree,
        mask,
        now,
        frame_index,
        group,
        tracer,
        outcome: ReplayOutcome::default(),
    };
    if !mask.is_empty() {
        let mut path = RenderTreePath::root();
        replay.visit(backend, 0, &mut path);
    }
    replay.outcome
}

/// Folds the hashes of everything a replay of `mask` would visit.
///
/// Subtree entries contribute their combined hash. Node entries and the
/// ancestors replay passes through contribute their individual hash, so a
/// change to an uncovered descendant does not change the result, while a
/// change to an enclosing translation does.
#[must_use]
pub fn content_hash(tree: &RenderTree, mask: &RenderTreeMask) -> u64 {
    let mut acc = 0;
    if !mask.is_empty() {
        let mut path = RenderTreePath::root();
        hash_visit(tree, mask, 0, &mut path, &mut acc);
    }
    acc
}

fn hash_visit(
    tree: &RenderTree,
    mask: &RenderTreeMask,
    idx: usize,
    path: &mut RenderTreePath,
    acc: &mut u64,
) {
    if mask.covers_subtree(path) {
        *acc = hash::fold(*acc, tree.combined_hash(idx));
        return;
    }
    *acc = hash::fold(*acc, tree.individual_hash(idx));
    for child in tree.children(idx) {
        path.push(tree.child_index(child));
        if mask.contains_any(path) || mask.leads_to(path) {
            hash_visit(tree, mask, child, path, acc);
        }
        path.pop();
    }
}

struct Replay<'a, 't> {
    tree: &'a RenderTree,
    mask: &'a RenderTreeMask,
    now: HostTime,
    frame_index: u64,
    group: usize,
    tracer: &'a mut Tracer<'t>,
    outcome: ReplayOutcome,
}

impl Replay<'_, '_> {
    /// Returns `true` if anything in the subtree drew.
    fn visit(&mut self, backend: &mut dyn Renderer, idx: usize, path: &mut RenderTreePath) -> bool {
        let tree = self.tree;
        let kind = tree.kind(idx);
        let covered = self.mask.contains_any(path);
        tracing::trace!(node = idx, kind = kind.name(), covered, "replay");

        match kind {
            ObjectKind::Container
            | ObjectKind::IdentifiedSubTree { .. }
            | ObjectKind::Uncachable
            | ObjectKind::CacheSplit => self.children(backend, idx, path),
            ObjectKind::Translation(offset) => {
                if let Err(e) = backend.save() {
                    self.fail(idx, &e);
                    return false;
                }
                if let Err(e) = backend.translate(*offset) {
                    self.fail(idx, &e);
                    _ = backend.restore();
                    return false;
                }
                let drew = self.children(backend, idx, path);
                match backend.restore() {
                    Ok(()) if covered => self.outcome.nodes_drawn += 1,
                    Ok(()) => {}
                    Err(e) => self.fail(idx, &e),
                }
                drew
            }
            ObjectKind::RenderStyle(style) => {
                let drew = self.children(backend, idx, path);
                if drew {
                    match apply_style(backend, style, self.now) {
                        Ok(()) if covered => self.outcome.nodes_drawn += 1,
                        Ok(()) => {}
                        Err(e) => self.fail(idx, &e),
                    }
                }
                drew
            }
            ObjectKind::Rectangle { .. }
            | ObjectKind::LineSegment { .. }
            | ObjectKind::Text(_)
            | ObjectKind::Custom(_) => {
                if !covered {
                    return false;
                }
                match draw_leaf(backend, kind) {
                    Ok(()) => {
                        self.outcome.nodes_drawn += 1;
                        true
                    }
                    Err(e) => {
                        self.fail(idx, &e);
                        false
                    }
                }
            }
        }
    }

    fn children(&mut self, backend: &mut dyn Renderer, idx: usize, path: &mut RenderTreePath) -> bool {
        let tree = self.tree;
        let mut drew = false;
        for child in tree.children(idx) {
            path.push(tree.child_index(child));
            if self.mask.contains_any(path) || self.mask.leads_to(path) {
                drew |= self.visit(backend, child, path);
            }
            path.pop();
        }
        drew
    }

    fn fail(&mut self, idx: usize, error: &BackendError) {
        let kind = self.tree.kind(idx).name();
        tracing::warn!(node = idx, kind, group = self.group, %error, "render object failed to draw");
        self.outcome.draw_failures += 1;
        self.tracer.draw_failure(&DrawFailureEvent {
            frame_index: self.frame_index,
            group: self.group,
            node: idx,
            kind,
            error,
        });
    }
}

fn apply_style(backend: &mut dyn Renderer, style: &Style, now: HostTime) -> Result<(), BackendError> {
    if let Some(fill) = &style.fill {
        backend.fill_color(fill.get(now))?;
        backend.fill()?;
    }
    if let (Some(width), Some(color)) = (style.stroke_width, &style.stroke_color) {
        backend.stroke_width(width)?;
        backend.stroke_color(color.get(now))?;
        backend.stroke()?;
    }
    Ok(())
}

fn draw_leaf(backend: &mut dyn Renderer, kind: &ObjectKind) -> Result<(), BackendError> {
    match kind {
        ObjectKind::Rectangle { rect, radii } => {
            backend.begin_path()?;
            match radii {
                Some(radii) => backend.rounded_rect(*rect, *radii),
                None => backend.rect(*rect),
            }
        }
        ObjectKind::LineSegment { from, to } => {
            backend.begin_path()?;
            backend.line(*from, *to)
        }
        ObjectKind::Text(run) if run.wrap => backend.multiline_text(
            &run.text,
            run.position,
            run.max_width.unwrap_or(0.0),
            &run.font,
            run.color,
        ),
        ObjectKind::Text(run) => backend.text(&run.text, run.position, &run.font, run.color),
        ObjectKind::Custom(custom) => custom.draw(backend),
        other => {
            tracing::warn!(kind = other.name(), "no leaf drawing for container variant");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_backend::{Call, TestBackend};
    use alloc::vec;
    use alloc::vec::Vec;
    use trellis_core::geometry::{Point, Rect, Vec2};
    use trellis_core::object::{CustomDraw, RenderObject, TextRun};
    use trellis_core::paint::{Color, FontConfig};

    fn rect(w: f64) -> RenderObject {
        RenderObject::rectangle(Rect::new(0.0, 0.0, w, 1.0))
    }

    fn full_mask(tree: &RenderTree) -> RenderTreeMask {
        let mut mask = RenderTreeMask::new();
        for (_, path, _) in tree.traverse() {
            mask.add_node(path);
        }
        mask
    }

    fn replay(tree: &RenderTree, mask: &RenderTreeMask, backend: &mut TestBackend) -> ReplayOutcome {
        replay_mask(tree, mask, backend, HostTime(0), &mut Tracer::none())
    }

    #[test]
    fn style_paints_after_children() {
        let tree = RenderTree::new(RenderObject::style(
            Style::fill(Color::WHITE),
            vec![rect(2.0)],
        ));
        let mut backend = TestBackend::default();
        let out = replay(&tree, &full_mask(&tree), &mut backend);
        assert_eq!(
            backend.calls,
            vec![
                Call::BeginPath,
                Call::Rect(Rect::new(0.0, 0.0, 2.0, 1.0)),
                Call::FillColor(Color::WHITE),
                Call::Fill,
            ]
        );
        assert_eq!(out.nodes_drawn, 2);
    }

    #[test]
    fn masked_out_siblings_are_skipped() {
        let tree = RenderTree::new(RenderObject::container(vec![rect(1.0), rect(2.0), rect(3.0)]));
        let mut mask = RenderTreeMask::new();
        mask.add(RenderTreePath::from([1]));
        let mut backend = TestBackend::default();
        replay(&tree, &mask, &mut backend);
        assert_eq!(
            backend.calls,
            vec![Call::BeginPath, Call::Rect(Rect::new(0.0, 0.0, 2.0, 1.0))]
        );
    }

    #[test]
    fn pass_through_translation_applies() {
        let tree = RenderTree::new(RenderObject::translation(
            Vec2::new(5.0, 0.0),
            vec![RenderObject::uncachable(vec![RenderObject::line_segment(
                Point::ORIGIN,
                Point::new(1.0, 0.0),
            )])],
        ));
        let mut mask = RenderTreeMask::new();
        mask.add(RenderTreePath::from([0]));
        let mut backend = TestBackend::default();
        let out = replay(&tree, &mask, &mut backend);
        assert_eq!(backend.calls.first(), Some(&Call::Save));
        assert_eq!(backend.calls.get(1), Some(&Call::Translate(Vec2::new(5.0, 0.0))));
        assert_eq!(backend.calls.last(), Some(&Call::Restore));
        // Only the covered line counts; the translation was passed through.
        assert_eq!(out.nodes_drawn, 1);
    }

    #[test]
    fn style_without_drawn_descendants_does_not_paint() {
        let tree = RenderTree::new(RenderObject::style(
            Style::fill(Color::WHITE),
            vec![RenderObject::uncachable(vec![rect(1.0)])],
        ));
        let mut mask = RenderTreeMask::new();
        mask.add_node(RenderTreePath::root());
        let mut backend = TestBackend::default();
        replay(&tree, &mask, &mut backend);
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn draw_failure_skips_only_that_node() {
        let tree = RenderTree::new(RenderObject::container(vec![
            rect(1.0),
            RenderObject::text(TextRun::new("hi", FontConfig::default(), Color::BLACK, Point::ORIGIN)),
            RenderObject::text(
                TextRun::new("wrapped", FontConfig::default(), Color::BLACK, Point::ORIGIN)
                    .wrapped(40.0),
            ),
        ]));
        let mut backend = TestBackend {
            fail_rects: true,
            ..TestBackend::default()
        };
        let out = replay(&tree, &full_mask(&tree), &mut backend);
        assert_eq!(out.draw_failures, 1);
        assert_eq!(out.nodes_drawn, 2);
        let texts: Vec<_> = backend
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Text(_) | Call::MultilineText(..)))
            .collect();
        assert_eq!(texts.len(), 2);
        assert!(backend.calls.contains(&Call::MultilineText("wrapped".into(), 40.0)));
    }

    #[test]
    fn custom_draw_runs_callback() {
        let tree = RenderTree::new(RenderObject::custom(CustomDraw::new(1, |r| {
            r.begin_path()?;
            r.stroke()
        })));
        let mut backend = TestBackend::default();
        replay(&tree, &full_mask(&tree), &mut backend);
        assert_eq!(backend.calls, vec![Call::BeginPath, Call::Stroke]);
    }

    #[test]
    fn content_hash_ignores_uncovered_descendants() {
        let build = |w: f64| {
            RenderTree::new(RenderObject::container(vec![
                rect(1.0),
                RenderObject::uncachable(vec![rect(w)]),
            ]))
        };
        let a = build(1.0);
        let b = build(9.0);
        let mut cachable = RenderTreeMask::new();
        cachable.add_node(RenderTreePath::root());
        cachable.add_node(RenderTreePath::from([0]));
        let mut uncachable = RenderTreeMask::new();
        uncachable.add(RenderTreePath::from([1]));
        assert_eq!(content_hash(&a, &cachable), content_hash(&b, &cachable));
        assert_ne!(content_hash(&a, &uncachable), content_hash(&b, &uncachable));
    }

    #[test]
    fn content_hash_tracks_enclosing_translation() {
        let build = |x: f64| {
            RenderTree::new(RenderObject::translation(
                Vec2::new(x, 0.0),
                vec![RenderObject::uncachable(vec![]), rect(1.0)],
            ))
        };
        let mut mask = RenderTreeMask::new();
        mask.add_node(RenderTreePath::from([1]));
        assert_ne!(content_hash(&build(0.0), &mask), content_hash(&build(1.0), &mask));
    }
}
