// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque handles for offscreen cache surfaces.

use core::fmt;

/// Identifies an offscreen surface owned by a backend.
///
/// Keys are minted by [`Renderer::create_surface`](crate::backend::Renderer::create_surface)
/// and stay valid until passed to
/// [`Renderer::delete_surface`](crate::backend::Renderer::delete_surface).
/// The renderer never interprets the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceKey(pub u64);

impl SurfaceKey {
    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceKey({})", self.0)
    }
}

impl fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
