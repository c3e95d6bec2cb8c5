// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace printing, a recording backend, and tree dumps for trellis
//! diagnostics.
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output
//!   for [`RenderTraceSink`](trellis_core::trace::RenderTraceSink).
//! - [`recorder::RecordingRenderer`]: a headless
//!   [`Renderer`](trellis_core::backend::Renderer) that records every call,
//!   tracks offscreen surfaces, and injects failures on request.
//! - [`dump`]: indented outlines of render trees and group partitions.
//! - [`json`]: the same data as [`serde_json::Value`]s.

pub mod dump;
pub mod json;
pub mod pretty;
pub mod recorder;
