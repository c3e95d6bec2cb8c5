// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumentation for the render pass.
//!
//! This module provides a [`RenderTraceSink`] trait with one method per event
//! the masked renderer emits. Every method defaults to a no-op, so a sink only
//! overrides what it cares about.
//!
//! [`Tracer`] wraps an optional `&mut dyn RenderTraceSink`. With the `trace`
//! feature **off**, every `Tracer` method compiles to nothing. With it **on**,
//! each method performs a single `Option` branch before dispatching.
//!
//! Structured logging goes through `tracing` separately; the sink is for
//! tooling that wants typed events (pretty printers, recorders, tests).

use crate::backend::BackendError;
use crate::surface::SurfaceKey;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Why a cachable group's surface was (re)drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopulateReason {
    /// The group had no surface yet.
    NoSurface,
    /// The group's content hash changed since it was last drawn.
    ContentChanged,
    /// The viewport size changed, so the surface was reallocated.
    Resized,
}

/// Emitted when a render pass starts.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Monotonic pass counter.
    pub frame_index: u64,
    /// Frame time the pass samples timed values at.
    pub now: HostTime,
    /// Number of groups that will be replayed.
    pub groups: usize,
}

/// Emitted after the partitioner rebuilt the group list.
#[derive(Clone, Copy, Debug)]
pub struct GroupsRegeneratedEvent {
    /// Pass counter at the time of regeneration.
    pub frame_index: u64,
    /// Number of cachable groups.
    pub cachable: usize,
    /// Number of uncachable groups.
    pub uncachable: usize,
    /// Cache surfaces released before rebuilding.
    pub released_surfaces: usize,
}

/// Emitted when a cachable group reused its surface.
#[derive(Clone, Copy, Debug)]
pub struct CacheHitEvent {
    /// Pass counter.
    pub frame_index: u64,
    /// Index of the group.
    pub group: usize,
    /// The composited surface.
    pub surface: SurfaceKey,
}

/// Emitted when a cachable group redrew its surface.
#[derive(Clone, Copy, Debug)]
pub struct CachePopulateEvent {
    /// Pass counter.
    pub frame_index: u64,
    /// Index of the group.
    pub group: usize,
    /// The surface drawn into.
    pub surface: SurfaceKey,
    /// Why the surface was drawn.
    pub reason: PopulateReason,
}

/// Emitted when a single render object failed to draw.
#[derive(Clone, Copy, Debug)]
pub struct DrawFailureEvent<'a> {
    /// Pass counter.
    pub frame_index: u64,
    /// Index of the group being replayed.
    pub group: usize,
    /// Arena index of the node.
    pub node: usize,
    /// Variant name of the node.
    pub kind: &'static str,
    /// The backend's error.
    pub error: &'a BackendError,
}

/// Counters for one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Groups visited.
    pub groups: usize,
    /// Cachable groups composited from an unchanged surface.
    pub cache_hits: usize,
    /// Cachable groups redrawn into their surface.
    pub cache_populations: usize,
    /// Groups replayed straight onto the live target.
    pub direct_passes: usize,
    /// Render objects whose draw calls were issued.
    pub nodes_drawn: usize,
    /// Render objects whose draw calls failed.
    pub draw_failures: usize,
}

/// Emitted when a render pass completes.
#[derive(Clone, Copy, Debug)]
pub struct PassEndEvent {
    /// Pass counter.
    pub frame_index: u64,
    /// Counters for the pass.
    pub stats: FrameStats,
}

// ---------------------------------------------------------------------------
// RenderTraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the render pass.
///
/// All methods have default no-op implementations.
pub trait RenderTraceSink {
    /// Called when a render pass starts.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called after groups were regenerated.
    fn on_groups_regenerated(&mut self, e: &GroupsRegeneratedEvent) {
        _ = e;
    }

    /// Called when a cachable group reused its surface.
    fn on_cache_hit(&mut self, e: &CacheHitEvent) {
        _ = e;
    }

    /// Called when a cachable group redrew its surface.
    fn on_cache_populate(&mut self, e: &CachePopulateEvent) {
        _ = e;
    }

    /// Called when a render object failed to draw.
    fn on_draw_failure(&mut self, e: &DrawFailureEvent<'_>) {
        _ = e;
    }

    /// Called when a render pass completes.
    fn on_pass_end(&mut self, e: &PassEndEvent) {
        _ = e;
    }
}

/// A [`RenderTraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl RenderTraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`RenderTraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn RenderTraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn RenderTraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::none()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $hook:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$hook(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn RenderTraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits a [`PassBeginEvent`].
        pass_begin => on_pass_begin(PassBeginEvent)
    );
    forward!(
        /// Emits a [`GroupsRegeneratedEvent`].
        groups_regenerated => on_groups_regenerated(GroupsRegeneratedEvent)
    );
    forward!(
        /// Emits a [`CacheHitEvent`].
        cache_hit => on_cache_hit(CacheHitEvent)
    );
    forward!(
        /// Emits a [`CachePopulateEvent`].
        cache_populate => on_cache_populate(CachePopulateEvent)
    );
    forward!(
        /// Emits a [`DrawFailureEvent`].
        draw_failure => on_draw_failure(DrawFailureEvent<'_>)
    );
    forward!(
        /// Emits a [`PassEndEvent`].
        pass_end => on_pass_end(PassEndEvent)
    );
}
