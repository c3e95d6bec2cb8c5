// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental rendering of render-object trees.
//!
//! `trellis_render` turns a [`RenderTree`](trellis_core::object::RenderTree)
//! into draw calls while redrawing as little as possible. It is `no_std`
//! compatible (with `alloc`).
//!
//! # Pipeline
//!
//! ```text
//!   RenderTree ──► generate_groups() ──► [RenderGroup] (only on structure change)
//!                                              │
//!                                              ▼
//!                         RenderTreeRenderer::render() per frame
//!                          ├─ Uncachable group: replay onto live target
//!                          └─ Cachable group:   content hash unchanged?
//!                                               ├─ yes: composite cached surface
//!                                               └─ no:  replay into surface, composite
//! ```
//!
//! **[`partition`]**: Splits a tree into an ordered sequence of cachable and
//! uncachable [`RenderGroup`]s, each owning a
//! [`RenderTreeMask`](trellis_core::object::RenderTreeMask).
//!
//! **[`replay`]**: Path-filtered depth-first replay of one mask against a
//! [`Renderer`](trellis_core::backend::Renderer), and the group content hash.
//!
//! **[`renderer`]**: [`RenderTreeRenderer`], which keeps groups and cache
//! surfaces alive across frames.
//!
//! # Failure policy
//!
//! A draw call that fails skips that render object only: the failure is
//! logged, traced, and counted in [`FrameStats::draw_failures`]. Failures to
//! allocate, bind, composite or delete a cache surface abort the pass with a
//! [`RenderError`], since a lost surface is a leaked backend resource.
//! The pass end event is still emitted. A backend without offscreen surfaces
//! is not a failure: its groups are replayed directly.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Forwards render-pass events to the
//!   [`Tracer`](trellis_core::trace::Tracer) passed to
//!   [`RenderTreeRenderer::render`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod config;
mod error;
mod group;
pub mod partition;
pub mod renderer;
pub mod replay;

#[cfg(test)]
mod test_backend;

pub use config::RendererConfig;
pub use error::RenderError;
pub use group::{CacheSurface, GroupKind, RenderGroup};
pub use partition::generate_groups;
pub use renderer::RenderTreeRenderer;
pub use trellis_core::trace::FrameStats;
