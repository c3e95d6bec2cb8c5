// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-object model and capability contracts for retained-mode UI
//! rendering.
//!
//! `trellis_core` holds the data that flows between layout and rendering. It
//! is `no_std` compatible (with `alloc`). Widgets produce a declarative
//! [`RenderObject`](object::RenderObject) tree every frame; the tree is
//! flattened into a pre-order [`RenderTree`](object::RenderTree) arena that
//! carries per-node hashes for change detection.
//!
//! # Architecture
//!
//! ```text
//!   Widget::render_content() ──► RenderObject tree
//!                                     │
//!                                     ▼
//!                         RenderTree::new() (hashes, structure)
//!                                     │
//!                 ┌───────────────────┘
//!                 ▼
//!   generate_groups() ──► [RenderGroup] ──► RenderTreeRenderer::render() ──► Renderer
//! ```
//!
//! The grouping and replay stages live in `trellis_render`.
//!
//! **[`object`]**: The closed set of render-object variants, the flattened
//! [`RenderTree`](object::RenderTree) arena, tree paths and masks.
//!
//! **[`hash`]**: Deterministic `SipHasher13` helpers shared by every hash in
//! the tree.
//!
//! **[`value`]**: [`RenderValue`](value::RenderValue), fixed or sampled
//! from a timeline. Timed values force their subtree out of the cache.
//!
//! **[`backend`]**: The [`Renderer`](backend::Renderer) capability that
//! drawing backends implement, including offscreen surfaces.
//!
//! **[`text`]**: The [`TextMeasure`](text::TextMeasure) capability consumed
//! by text layout.
//!
//! **[`trace`]**: [`RenderTraceSink`](trace::RenderTraceSink) and the
//! zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod geometry;
pub mod hash;
pub mod object;
pub mod paint;
pub mod surface;
pub mod text;
pub mod time;
pub mod trace;
pub mod value;
