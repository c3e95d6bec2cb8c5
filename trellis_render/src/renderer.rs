// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-to-frame orchestration of groups and cache surfaces.

use alloc::vec::Vec;

use trellis_core::backend::{BackendError, Renderer};
use trellis_core::geometry::{Point, Size};
use trellis_core::object::RenderTree;
use trellis_core::surface::SurfaceKey;
use trellis_core::time::HostTime;
use trellis_core::trace::{
    CacheHitEvent, CachePopulateEvent, FrameStats, GroupsRegeneratedEvent, PassBeginEvent,
    PassEndEvent, PopulateReason, Tracer,
};

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::group::{CacheSurface, GroupKind, RenderGroup};
use crate::partition::generate_groups;
use crate::replay::{ReplayOutcome, content_hash, replay_group};

/// Keeps render groups and their cache surfaces alive across frames.
///
/// Each frame the host hands over a freshly built [`RenderTree`] through
/// [`update_tree`](Self::update_tree) and then calls
/// [`render`](Self::render). Groups are regenerated only when the tree's
/// structure hash changes, so cache surfaces survive frames in which only
/// attributes or volatile subtrees changed.
///
/// Cache surfaces are backend resources. Call
/// [`release_caches`](Self::release_caches) before dropping the renderer.
#[derive(Debug, Default)]
pub struct RenderTreeRenderer {
    config: RendererConfig,
    tree: Option<RenderTree>,
    groups: Vec<RenderGroup>,
    structure: Option<u64>,
    frame_index: u64,
}

impl RenderTreeRenderer {
    /// Creates a renderer with no tree.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The renderer's configuration.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// The current tree, if one was supplied.
    #[must_use]
    pub fn tree(&self) -> Option<&RenderTree> {
        self.tree.as_ref()
    }

    /// The current partition, in draw order.
    #[must_use]
    pub fn groups(&self) -> &[RenderGroup] {
        &self.groups
    }

    /// Number of render passes run so far.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Number of cache surfaces currently held.
    #[must_use]
    pub fn live_surfaces(&self) -> usize {
        self.groups.iter().filter(|g| g.cache().is_some()).count()
    }

    /// Installs this frame's tree.
    ///
    /// If the structure hash differs from the previous tree's, every held
    /// cache surface is released and the groups are regenerated. Returns
    /// whether regeneration happened.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SurfaceRelease`] if a surface could not be
    /// deleted. The new tree is not installed in that case; every surface has
    /// already been detached from its group, so retrying does not release
    /// anything twice.
    pub fn update_tree(
        &mut self,
        tree: RenderTree,
        backend: &mut dyn Renderer,
        tracer: &mut Tracer<'_>,
    ) -> Result<bool, RenderError> {
        let structure = tree.structure_hash();
        let regenerate = self.structure != Some(structure);
        if regenerate {
            let released = self.release_caches(backend)?;
            self.groups = generate_groups(&tree);
            self.structure = Some(structure);

            let cachable = self.groups.iter().filter(|g| g.is_cachable()).count();
            let uncachable = self.groups.len() - cachable;
            tracing::debug!(
                frame = self.frame_index,
                cachable,
                uncachable,
                released,
                "regenerated render groups"
            );
            tracer.groups_regenerated(&GroupsRegeneratedEvent {
                frame_index: self.frame_index,
                cachable,
                uncachable,
                released_surfaces: released,
            });
        }
        self.tree = Some(tree);
        Ok(regenerate)
    }

    /// Deletes every cache surface held by the current groups.
    ///
    /// All groups are attempted even if one fails. Returns the number of
    /// surfaces deleted.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError::SurfaceRelease`] encountered.
    pub fn release_caches(&mut self, backend: &mut dyn Renderer) -> Result<usize, RenderError> {
        let mut released = 0;
        let mut first_error = None;
        for group in &mut self.groups {
            match group.release(backend) {
                Ok(Some(_)) => released += 1,
                Ok(None) => {}
                Err((key, source)) => {
                    tracing::warn!(%key, error = %source, "failed to delete cache surface");
                    if first_error.is_none() {
                        first_error = Some(RenderError::SurfaceRelease { key, source });
                    }
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(released),
        }
    }

    /// Draws the current tree onto the backend's live target.
    ///
    /// Uncachable groups are replayed directly. A cachable group whose
    /// surface still matches its content hash and the viewport size is only
    /// composited; otherwise its surface is (re)allocated as needed, the group
    /// is replayed into it, and the result is composited. Timed values are
    /// sampled at `now`.
    ///
    /// A draw call failure skips only the render object that issued it. A
    /// group replayed with failures does not record its content hash, so it
    /// is redrawn next frame.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if a cache surface could not be created,
    /// bound, composited or deleted, including [`BackendError::SurfaceExhausted`]
    /// on creation. The pass stops at the failing group; later groups are not
    /// drawn this frame, and the pass end event still reports the partial
    /// stats. A backend reporting [`BackendError::Unsupported`] on creation is
    /// not an error: the group is replayed directly instead.
    pub fn render(
        &mut self,
        backend: &mut dyn Renderer,
        viewport: Size,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Result<FrameStats, RenderError> {
        let frame_index = self.frame_index;
        self.frame_index += 1;

        let mut stats = FrameStats::default();
        let Some(tree) = &self.tree else {
            return Ok(stats);
        };

        tracer.pass_begin(&PassBeginEvent {
            frame_index,
            now,
            groups: self.groups.len(),
        });

        let target = PassTarget {
            viewport,
            now,
            frame_index,
        };
        let result = draw_groups(
            tree,
            &mut self.groups,
            &self.config,
            target,
            backend,
            tracer,
            &mut stats,
        );

        match &result {
            Ok(()) => tracing::trace!(frame = frame_index, ?stats, "render pass complete"),
            Err(err) => tracing::warn!(frame = frame_index, ?stats, %err, "render pass aborted"),
        }
        tracer.pass_end(&PassEndEvent { frame_index, stats });
        result.map(|()| stats)
    }
}

#[derive(Clone, Copy)]
struct PassTarget {
    viewport: Size,
    now: HostTime,
    frame_index: u64,
}

fn draw_groups(
    tree: &RenderTree,
    groups: &mut [RenderGroup],
    config: &RendererConfig,
    target: PassTarget,
    backend: &mut dyn Renderer,
    tracer: &mut Tracer<'_>,
    stats: &mut FrameStats,
) -> Result<(), RenderError> {
    let PassTarget {
        viewport,
        now,
        frame_index,
    } = target;
    let mut live = groups.iter().filter(|g| g.cache().is_some()).count();

    for (index, group) in groups.iter_mut().enumerate() {
        stats.groups += 1;

        if matches!(group.kind(), GroupKind::Uncachable) || !config.caching {
            let out = replay_group(tree, group.mask(), backend, now, tracer, frame_index, index);
            absorb(stats, out);
            stats.direct_passes += 1;
            continue;
        }

        let hash = content_hash(tree, group.mask());
        if let Some(cache) = group.cache()
            && cache.size == viewport
            && cache.content_hash == Some(hash)
        {
            let surface = cache.key;
            backend
                .composite_surface(surface, Point::ORIGIN)
                .map_err(|source| RenderError::SurfaceBinding { group: index, source })?;
            tracing::trace!(frame = frame_index, group = index, %surface, "cache hit");
            tracer.cache_hit(&CacheHitEvent {
                frame_index,
                group: index,
                surface,
            });
            stats.cache_hits += 1;
            continue;
        }

        let Some((surface, reason)) =
            acquire_surface(group, index, viewport, config, &mut live, backend)?
        else {
            let out = replay_group(tree, group.mask(), backend, now, tracer, frame_index, index);
            absorb(stats, out);
            stats.direct_passes += 1;
            continue;
        };

        tracing::debug!(
            frame = frame_index,
            group = index,
            %surface,
            ?reason,
            "populating cache surface"
        );
        backend
            .bind_surface(surface)
            .map_err(|source| RenderError::SurfaceBinding { group: index, source })?;
        let out = replay_group(tree, group.mask(), backend, now, tracer, frame_index, index);
        backend
            .unbind_surface()
            .map_err(|source| RenderError::SurfaceBinding { group: index, source })?;
        if let Some(Some(cache)) = group.cache_mut() {
            cache.content_hash = (out.draw_failures == 0).then_some(hash);
        }
        backend
            .composite_surface(surface, Point::ORIGIN)
            .map_err(|source| RenderError::SurfaceBinding { group: index, source })?;

        tracer.cache_populate(&CachePopulateEvent {
            frame_index,
            group: index,
            surface,
            reason,
        });
        absorb(stats, out);
        stats.cache_populations += 1;
    }
    Ok(())
}

fn absorb(stats: &mut FrameStats, out: ReplayOutcome) {
    stats.nodes_drawn += out.nodes_drawn;
    stats.draw_failures += out.draw_failures;
}

/// Returns the surface to populate and why, or `None` if the group must be
/// replayed directly.
///
/// A surface allocated for another viewport size is deleted first. The new
/// surface is stored in the group before it is used, so it is released with
/// the group even if a later backend call fails.
fn acquire_surface(
    group: &mut RenderGroup,
    index: usize,
    viewport: Size,
    config: &RendererConfig,
    live: &mut usize,
    backend: &mut dyn Renderer,
) -> Result<Option<(SurfaceKey, PopulateReason)>, RenderError> {
    let reason = match group.cache() {
        Some(cache) if cache.size == viewport => {
            return Ok(Some((cache.key, PopulateReason::ContentChanged)));
        }
        Some(cache) => {
            tracing::warn!(
                group = index,
                surface = %cache.key,
                from = ?cache.size,
                to = ?viewport,
                "reallocating cache surface after resize"
            );
            group
                .release(backend)
                .map_err(|(key, source)| RenderError::SurfaceRelease { key, source })?;
            *live -= 1;
            PopulateReason::Resized
        }
        None => PopulateReason::NoSurface,
    };

    if config.max_cache_surfaces.is_some_and(|max| *live >= max) {
        tracing::trace!(group = index, live = *live, "cache surface budget exhausted");
        return Ok(None);
    }

    let key = match backend.create_surface(viewport) {
        Ok(key) => key,
        Err(BackendError::Unsupported(_)) => {
            tracing::debug!(group = index, "offscreen surfaces unsupported, drawing directly");
            return Ok(None);
        }
        Err(source) => return Err(RenderError::SurfaceAllocation { group: index, source }),
    };
    *live += 1;
    if let Some(slot) = group.cache_mut() {
        *slot = Some(CacheSurface {
            key,
            size: viewport,
            content_hash: None,
        });
    }
    Ok(Some((key, reason)))
}
