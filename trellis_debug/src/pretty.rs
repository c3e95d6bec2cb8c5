// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`RenderTraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr). Frame
//! times are printed in milliseconds.

use std::io::Write;

use trellis_core::time::HostTime;
use trellis_core::trace::{
    CacheHitEvent, CachePopulateEvent, DrawFailureEvent, GroupsRegeneratedEvent, PassBeginEvent,
    PassEndEvent, PopulateReason, RenderTraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.nanos() as f64 / 1_000_000.0
}

fn reason_name(reason: PopulateReason) -> &'static str {
    match reason {
        PopulateReason::NoSurface => "new",
        PopulateReason::ContentChanged => "changed",
        PopulateReason::Resized => "resized",
    }
}

impl<W: Write> RenderTraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] frame={} now={:.3}ms groups={}",
            e.frame_index,
            ms(e.now),
            e.groups,
        );
    }

    fn on_groups_regenerated(&mut self, e: &GroupsRegeneratedEvent) {
        let _ = writeln!(
            self.writer,
            "[groups] frame={} cachable={} uncachable={} released={}",
            e.frame_index, e.cachable, e.uncachable, e.released_surfaces,
        );
    }

    fn on_cache_hit(&mut self, e: &CacheHitEvent) {
        let _ = writeln!(
            self.writer,
            "[hit] frame={} group={} surface={}",
            e.frame_index, e.group, e.surface,
        );
    }

    fn on_cache_populate(&mut self, e: &CachePopulateEvent) {
        let _ = writeln!(
            self.writer,
            "[populate] frame={} group={} surface={} reason={}",
            e.frame_index,
            e.group,
            e.surface,
            reason_name(e.reason),
        );
    }

    fn on_draw_failure(&mut self, e: &DrawFailureEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[draw:FAILED] frame={} group={} node={} kind={} error={}",
            e.frame_index, e.group, e.node, e.kind, e.error,
        );
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        let s = &e.stats;
        let _ = writeln!(
            self.writer,
            "[pass:end] frame={} groups={} hits={} populated={} direct={} \
             drawn={} failed={}",
            e.frame_index,
            s.groups,
            s.cache_hits,
            s.cache_populations,
            s.direct_passes,
            s.nodes_drawn,
            s.draw_failures,
        );
    }
}
