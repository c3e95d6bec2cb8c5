// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated frame loop that exercises layout, partitioning and cached
//! rendering.
//!
//! Runs 60 synthetic frames against a
//! [`RecordingRenderer`](trellis_debug::recorder::RecordingRenderer). The
//! scene has a static header, a row of blocks, and a pulsing block driven by a
//! timed fill. The counter label changes every 20 frames and the viewport is
//! resized at frame 40. Render-pass events go to a
//! [`PrettyPrintSink`](trellis_debug::pretty::PrettyPrintSink) on stdout;
//! library logs go through `tracing-subscriber` (set `RUST_LOG=debug` to see
//! group regeneration and cache population).

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trellis_core::geometry::{Insets, Size};
use trellis_core::object::RenderTree;
use trellis_core::paint::{Color, FontConfig};
use trellis_core::text::{MonospaceMeasure, TextMeasure};
use trellis_core::time::{Duration, HostTime};
use trellis_core::trace::Tracer;
use trellis_core::value::{RenderValue, Repeat, TimedValue};
use trellis_layout::{
    Block, BoxConstraints, CrossAlignment, Flex, FlexItem, Isolated, Isolation, Label, LayoutNode,
};
use trellis_render::{RenderTreeRenderer, RendererConfig};

use trellis_debug::dump::{dump_groups, dump_tree};
use trellis_debug::pretty::PrettyPrintSink;
use trellis_debug::recorder::RecordingRenderer;

const FRAME_COUNT: u64 = 60;
const FRAME_INTERVAL_MS: u64 = 16;
const RESIZE_AT: u64 = 40;

fn pulse(t: f64) -> Color {
    let bright = Color::from_rgb8(0x4a, 0x9e, 0xff);
    let dim = Color::from_rgb8(0x1a, 0x3a, 0x66);
    let wave = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    dim.lerp(bright, wave)
}

fn scene(measure: &Arc<dyn TextMeasure + Send + Sync>, counter: u64) -> LayoutNode {
    let font = FontConfig::new("monospace", 14.0);
    let spinner = TimedValue::new(HostTime::ZERO, Duration::from_millis(500), 1, pulse)
        .with_repeat(Repeat::Forever);

    let header = Label::new("trellis frame loop", font.clone(), Arc::clone(measure));
    let counter = Label::new(format!("epoch {counter}"), font, Arc::clone(measure))
        .with_color(Color::from_rgb8(0x80, 0x80, 0x80));

    let tiles = Flex::row()
        .with_spacing(8.0)
        .with_cross_alignment(CrossAlignment::Center)
        .with_item(
            FlexItem::new(Block::new(Size::new(40.0, 40.0)).with_fill(Color::WHITE)).with_grow(1.0),
        )
        .with_item(FlexItem::new(
            Block::new(Size::new(24.0, 24.0))
                .with_fill(RenderValue::Timed(spinner))
                .with_radii(12.0),
        ))
        .with_item(FlexItem::new(Isolated::new(Isolation::CacheSplit, counter)));

    LayoutNode::new(
        Flex::column()
            .with_spacing(12.0)
            .with_item(FlexItem::new(header).with_margins(Insets::uniform(8.0)))
            .with_item(FlexItem::new(tiles).with_margins(Insets::uniform_xy(8.0, 0.0))),
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let measure: Arc<dyn TextMeasure + Send + Sync> = Arc::new(MonospaceMeasure::default());
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut backend = RecordingRenderer::new();
    let mut renderer = RenderTreeRenderer::new(RendererConfig::default());

    let mut viewport = Size::new(320.0, 120.0);
    let mut totals = trellis_render::FrameStats::default();

    for frame_index in 0..FRAME_COUNT {
        let now = HostTime::from_millis(frame_index * FRAME_INTERVAL_MS);
        if frame_index == RESIZE_AT {
            viewport = Size::new(480.0, 120.0);
        }

        // Widgets are rebuilt every frame, as a declarative UI would.
        let mut root = scene(&measure, frame_index / 20);
        root.layout(BoxConstraints::loose(viewport))?;
        let Some(object) = root.render_placed() else {
            continue;
        };
        let tree = RenderTree::new(object);

        let mut tracer = Tracer::new(&mut pretty);
        if renderer.update_tree(tree, &mut backend, &mut tracer)? {
            if let Some(tree) = renderer.tree() {
                print!("{}", dump_tree(tree));
            }
            print!("{}", dump_groups(renderer.groups()));
        }
        let stats = renderer.render(&mut backend, viewport, now, &mut tracer)?;

        totals.groups += stats.groups;
        totals.cache_hits += stats.cache_hits;
        totals.cache_populations += stats.cache_populations;
        totals.direct_passes += stats.direct_passes;
        totals.nodes_drawn += stats.nodes_drawn;
        totals.draw_failures += stats.draw_failures;
        backend.take_calls();
    }

    let released = renderer.release_caches(&mut backend)?;
    println!(
        "{FRAME_COUNT} frames: {} hits, {} populations, {} direct passes, {} nodes drawn, \
         {} failures; released {released} surfaces, {} still live",
        totals.cache_hits,
        totals.cache_populations,
        totals.direct_passes,
        totals.nodes_drawn,
        totals.draw_failures,
        backend.live_surfaces(),
    );
    Ok(())
}
