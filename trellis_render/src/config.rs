// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

/// Tunables for [`RenderTreeRenderer`](crate::RenderTreeRenderer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererConfig {
    /// Draw cachable groups through offscreen surfaces. When off, every
    /// group is replayed straight onto the live target each frame.
    pub caching: bool,
    /// Upper bound on live cache surfaces. Cachable groups beyond the budget
    /// are replayed directly. `None` means unbounded.
    pub max_cache_surfaces: Option<usize>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            caching: true,
            max_cache_surfaces: None,
        }
    }
}

impl RendererConfig {
    /// A configuration that never allocates cache surfaces.
    #[must_use]
    pub const fn uncached() -> Self {
        Self {
            caching: false,
            max_cache_surfaces: None,
        }
    }

    /// Sets the surface budget.
    #[must_use]
    pub const fn with_max_cache_surfaces(mut self, max: usize) -> Self {
        self.max_cache_surfaces = Some(max);
        self
    }
}
