// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render groups and the cache surfaces they own.

use trellis_core::backend::{BackendError, Renderer};
use trellis_core::geometry::Size;
use trellis_core::object::RenderTreeMask;
use trellis_core::surface::SurfaceKey;

/// An offscreen surface holding a cachable group's last drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CacheSurface {
    /// Backend handle.
    pub key: SurfaceKey,
    /// Size the surface was allocated at.
    pub size: Size,
    /// Content hash of the drawing it holds; `None` until populated.
    pub content_hash: Option<u64>,
}

/// Whether a group may be served from a cache surface.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupKind {
    /// Redrawn only when its content hash changes.
    Cachable {
        /// The group's surface, once allocated.
        cache: Option<CacheSurface>,
    },
    /// Redrawn every frame.
    Uncachable,
}

/// A contiguous run of tree positions drawn together.
///
/// A cachable group exclusively owns its cache surface. Dropping a group does
/// not free the surface; call [`release`](Self::release) first.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGroup {
    mask: RenderTreeMask,
    kind: GroupKind,
}

impl RenderGroup {
    /// An empty cachable group.
    #[must_use]
    pub const fn cachable() -> Self {
        Self {
            mask: RenderTreeMask::new(),
            kind: GroupKind::Cachable { cache: None },
        }
    }

    /// An empty uncachable group.
    #[must_use]
    pub const fn uncachable() -> Self {
        Self {
            mask: RenderTreeMask::new(),
            kind: GroupKind::Uncachable,
        }
    }

    /// The positions the group draws.
    #[must_use]
    pub fn mask(&self) -> &RenderTreeMask {
        &self.mask
    }

    pub(crate) fn mask_mut(&mut self) -> &mut RenderTreeMask {
        &mut self.mask
    }

    /// Cachable or uncachable, with the cache surface if any.
    #[must_use]
    pub fn kind(&self) -> &GroupKind {
        &self.kind
    }

    /// Returns `true` for cachable groups.
    #[must_use]
    pub fn is_cachable(&self) -> bool {
        matches!(self.kind, GroupKind::Cachable { .. })
    }

    /// The group's cache surface, if it has one.
    #[must_use]
    pub fn cache(&self) -> Option<&CacheSurface> {
        match &self.kind {
            GroupKind::Cachable { cache } => cache.as_ref(),
            GroupKind::Uncachable => None,
        }
    }

    pub(crate) fn cache_mut(&mut self) -> Option<&mut Option<CacheSurface>> {
        match &mut self.kind {
            GroupKind::Cachable { cache } => Some(cache),
            GroupKind::Uncachable => None,
        }
    }

    /// Deletes the group's cache surface, if any.
    ///
    /// The surface is detached before the backend call, so it is released at
    /// most once even if deletion fails. Returns the deleted key.
    pub fn release(
        &mut self,
        backend: &mut dyn Renderer,
    ) -> Result<Option<SurfaceKey>, (SurfaceKey, BackendError)> {
        let Some(surface) = self.cache_mut().and_then(Option::take) else {
            return Ok(None);
        };
        backend
            .delete_surface(surface.key)
            .map(|()| Some(surface.key))
            .map_err(|e| (surface.key, e))
    }
}
