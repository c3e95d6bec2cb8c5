// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render pass errors.

use trellis_core::backend::BackendError;
use trellis_core::surface::SurfaceKey;

/// A cache-surface lifecycle failure that aborted a render pass.
///
/// Per-object draw failures never surface here; they are absorbed and
/// counted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Creating a cache surface for a group failed.
    #[error("allocating cache surface for group {group} failed")]
    SurfaceAllocation {
        /// Index of the group.
        group: usize,
        /// The backend's error.
        #[source]
        source: BackendError,
    },
    /// Binding, unbinding or compositing a group's surface failed.
    #[error("using cache surface of group {group} failed")]
    SurfaceBinding {
        /// Index of the group.
        group: usize,
        /// The backend's error.
        #[source]
        source: BackendError,
    },
    /// Deleting a cache surface failed.
    #[error("releasing cache surface {key} failed")]
    SurfaceRelease {
        /// The surface that could not be deleted.
        key: SurfaceKey,
        /// The backend's error.
        #[source]
        source: BackendError,
    },
}
