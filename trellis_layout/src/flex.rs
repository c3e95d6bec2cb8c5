// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass flex layout for rows and columns.
//!
//! The first pass places items in declaration order along the main axis,
//! starting new lines when wrapping is enabled and an item does not fit. Each
//! item is laid out against the space left in its line.
//!
//! The second pass runs only when some item grows or uses a cross alignment
//! other than [`CrossAlignment::Start`]. Per line, the main-axis space left
//! over after the first pass is shared among growing items in proportion to
//! their grow factors, stretched items are pinned to the line's cross size,
//! and centered or end-aligned items are repositioned.
//!
//! The container's size is the widest line along the main axis (at least the
//! minimum main size) by the sum of line cross sizes, clamped into the
//! constraints.

use alloc::vec::Vec;

use trellis_core::geometry::{Insets, Orientation, Size};
use trellis_core::object::RenderObject;

use crate::constraints::{BoxConfig, BoxConstraints};
use crate::error::LayoutError;
use crate::node::{Layout, LayoutNode, RenderContent, Widget};

/// Slack, in logical pixels, added to the main-axis capacity before an item
/// is considered overflowing its line.
pub const WRAP_TOLERANCE: f64 = 1.0;

/// Where an item sits across its line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossAlignment {
    /// Against the line's cross start.
    Start,
    /// Centered in the line.
    Center,
    /// Against the line's cross end.
    End,
    /// Sized to the line's cross extent.
    #[default]
    Stretch,
}

/// An explicit item size along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlexValue {
    /// Logical pixels.
    Pixels(f64),
    /// Percentage of the container's maximum main size.
    Percent(f64),
}

impl FlexValue {
    /// Resolves against the container's max main size. A percentage of an
    /// unbounded size has no meaning and resolves to `None`.
    fn resolve(self, max_main: f64) -> Option<f64> {
        match self {
            Self::Pixels(v) => Some(v),
            Self::Percent(p) if max_main.is_finite() => Some(max_main * p / 100.0),
            Self::Percent(_) => None,
        }
    }
}

/// One child of a [`Flex`] with its flex parameters.
#[derive(Debug)]
pub struct FlexItem {
    /// Share of leftover main-axis space; `0.0` disables growing.
    pub grow: f64,
    /// Overrides the container's cross alignment.
    pub cross_alignment: Option<CrossAlignment>,
    /// Explicit width.
    pub width: Option<FlexValue>,
    /// Explicit height.
    pub height: Option<FlexValue>,
    /// Space around the item.
    pub margins: Insets,
    /// The laid-out child.
    pub content: LayoutNode,
}

impl FlexItem {
    /// Wraps a widget with default flex parameters.
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self::from_node(LayoutNode::new(widget))
    }

    /// Wraps an existing layout node.
    #[must_use]
    pub fn from_node(content: LayoutNode) -> Self {
        Self {
            grow: 0.0,
            cross_alignment: None,
            width: None,
            height: None,
            margins: Insets::ZERO,
            content,
        }
    }

    /// Sets the grow factor. Negative values are treated as `0.0`.
    #[must_use]
    pub fn with_grow(mut self, grow: f64) -> Self {
        self.grow = grow.max(0.0);
        self
    }

    /// Overrides the cross alignment.
    #[must_use]
    pub fn with_cross_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.cross_alignment = Some(alignment);
        self
    }

    /// Sets an explicit width.
    #[must_use]
    pub fn with_width(mut self, width: FlexValue) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets an explicit height.
    #[must_use]
    pub fn with_height(mut self, height: FlexValue) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the margins.
    #[must_use]
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    fn main_size(&self, orientation: Orientation) -> Option<FlexValue> {
        match orientation {
            Orientation::Row => self.width,
            Orientation::Column => self.height,
        }
    }
}

/// One line of a laid-out [`Flex`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    cross_start: f64,
    main_size: f64,
    cross_size: f64,
    items: Vec<usize>,
    total_grow: f64,
}

impl Line {
    fn starting_at(cross_start: f64) -> Self {
        Self {
            cross_start,
            ..Self::default()
        }
    }

    /// Cross-axis offset of the line inside the container.
    #[must_use]
    pub fn cross_start(&self) -> f64 {
        self.cross_start
    }

    /// Main extent (including margins) by cross extent (including margins).
    #[must_use]
    pub fn size(&self, orientation: Orientation) -> Size {
        orientation.size(self.main_size, self.cross_size)
    }

    /// Indices of the items in this line.
    #[must_use]
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Sum of the grow factors of the line's items.
    #[must_use]
    pub fn total_grow(&self) -> f64 {
        self.total_grow
    }

    fn cross_end(&self) -> f64 {
        self.cross_start + self.cross_size
    }
}

/// Row or column container.
#[derive(Debug, Default)]
pub struct Flex {
    orientation: Orientation,
    cross_alignment: CrossAlignment,
    spacing: f64,
    wrap: bool,
    items: Vec<FlexItem>,
    lines: Vec<Line>,
}

impl Flex {
    /// An empty container with the given orientation.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// An empty row.
    #[must_use]
    pub fn row() -> Self {
        Self::new(Orientation::Row)
    }

    /// An empty column.
    #[must_use]
    pub fn column() -> Self {
        Self::new(Orientation::Column)
    }

    /// Sets the default cross alignment for items that do not override it.
    #[must_use]
    pub fn with_cross_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Sets the main-axis gap between consecutive items.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enables wrapping onto new lines.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Appends an item.
    #[must_use]
    pub fn with_item(mut self, item: FlexItem) -> Self {
        self.items.push(item);
        self
    }

    /// Appends an item in place.
    pub fn push(&mut self, item: FlexItem) {
        self.items.push(item);
    }

    /// Replaces the item list. Lines from the previous layout are dropped.
    pub fn set_items(&mut self, items: Vec<FlexItem>) {
        self.items = items;
        self.lines.clear();
    }

    /// The container's orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The items.
    #[must_use]
    pub fn items(&self) -> &[FlexItem] {
        &self.items
    }

    /// The items, mutably.
    pub fn items_mut(&mut self) -> &mut [FlexItem] {
        &mut self.items
    }

    /// Lines from the last layout.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    fn alignment_of(&self, item: &FlexItem) -> CrossAlignment {
        item.cross_alignment.unwrap_or(self.cross_alignment)
    }

    fn first_pass(
        &mut self,
        constraints: BoxConstraints,
    ) -> Result<(Vec<Line>, f64, bool), LayoutError> {
        let o = self.orientation;
        let max_main = o.main(constraints.max);
        let max_cross = o.cross_of(constraints.max);
        let default_alignment = self.cross_alignment;

        let mut lines = Vec::new();
        let mut line = Line::starting_at(0.0);
        let mut need_second_pass = false;
        let mut main_size = o.main(constraints.min);
        let mut cursor = 0.0;
        let mut break_pending = false;

        for (index, item) in self.items.iter_mut().enumerate() {
            let alignment = item.cross_alignment.unwrap_or(default_alignment);
            let needs_relayout = item.grow > 0.0 || alignment == CrossAlignment::Stretch;
            need_second_pass |= needs_relayout || alignment != CrossAlignment::Start;

            if break_pending {
                break_pending = false;
                let next = Line::starting_at(line.cross_end());
                lines.push(core::mem::replace(&mut line, next));
                cursor = 0.0;
            }

            let config = item.content.box_config();
            let (lead, trail) = o.main_insets(item.margins);
            let (cross_lead, cross_trail) = o.cross_insets(item.margins);

            let explicit = item.main_size(o).and_then(|v| v.resolve(max_main));
            let mut preferred_main = o.main(config.preferred);
            let mut min_main = 0.0;
            if let Some(v) = explicit.filter(|v| v.is_finite()) {
                preferred_main = v;
                min_main = v;
            }

            cursor += lead;
            let mut free_main = (max_main - cursor - trail).max(0.0);

            if self.wrap
                && !line.items.is_empty()
                && cursor + preferred_main >= max_main + WRAP_TOLERANCE
                && o.main(config.min) > free_main
            {
                let next = Line::starting_at(line.cross_end());
                lines.push(core::mem::replace(&mut line, next));
                cursor = lead;
                free_main = (max_main - lead - trail).max(0.0);
            }

            let free_cross = (max_cross - line.cross_start - cross_lead - cross_trail).max(0.0);
            let max_main_item = explicit.unwrap_or(free_main);
            let item_constraints = BoxConstraints::new(
                o.size(min_main, 0.0),
                o.size(max_main_item.max(min_main), free_cross),
            );

            if needs_relayout {
                item.content.invalidate();
            }
            let size = item.content.layout(item_constraints)?;
            item.content
                .set_position(o.point(cursor, line.cross_start + cross_lead));

            cursor += o.main(size) + trail;
            line.total_grow += item.grow;
            line.items.push(index);
            line.main_size = cursor;
            line.cross_size = line
                .cross_size
                .max(o.cross_of(size) + cross_lead + cross_trail);
            main_size = f64::max(main_size, cursor);

            if self.wrap && max_main < cursor {
                break_pending = true;
            } else {
                cursor += self.spacing;
            }
        }

        if lines.is_empty() {
            line.cross_size = line.cross_size.max(o.cross_of(constraints.min));
        }
        lines.push(line);

        Ok((lines, main_size, need_second_pass))
    }

    fn second_pass(&mut self, lines: &mut [Line], main_size: &mut f64) -> Result<(), LayoutError> {
        let o = self.orientation;
        let mut prev_end: Option<f64> = None;
        for line in lines.iter_mut() {
            if let Some(end) = prev_end {
                line.cross_start = end;
            }
            let grow_space = (*main_size - line.main_size).max(0.0);
            let mut cursor = 0.0;

            for &index in &line.items {
                let alignment = self.alignment_of(&self.items[index]);
                let item = &mut self.items[index];
                let (lead, trail) = o.main_insets(item.margins);
                let (cross_lead, cross_trail) = o.cross_insets(item.margins);
                let current = item.content.size();
                let mut main = o.main(current);
                let mut cross = o.cross_of(current);
                let mut relayout = false;

                cursor += lead;

                if item.grow > 0.0 && line.total_grow > 0.0 {
                    main += grow_space * (item.grow / line.total_grow);
                    relayout = true;
                }
                if alignment == CrossAlignment::Stretch {
                    cross = (line.cross_size - cross_lead - cross_trail).max(0.0);
                    relayout = true;
                }

                let size = if relayout {
                    item.content.layout(BoxConstraints::tight(o.size(main, cross)))?
                } else {
                    current
                };

                let item_cross = o.cross_of(size);
                let cross_pos = match alignment {
                    CrossAlignment::Start | CrossAlignment::Stretch => line.cross_start + cross_lead,
                    CrossAlignment::Center => {
                        line.cross_start
                            + cross_lead
                            + (line.cross_size - (item_cross + cross_lead + cross_trail)) / 2.0
                    }
                    CrossAlignment::End => line.cross_end() - cross_trail - item_cross,
                };
                item.content.set_position(o.point(cursor, cross_pos));

                cursor += o.main(size) + trail;
                line.cross_size = line.cross_size.max(item_cross + cross_lead + cross_trail);
                line.main_size = line.main_size.max(cursor);
                *main_size = main_size.max(cursor);
                cursor += self.spacing;
            }
            prev_end = Some(line.cross_end());
        }
        Ok(())
    }
}

impl Layout for Flex {
    fn box_config(&self) -> BoxConfig {
        let o = self.orientation;
        let mut preferred = (0.0_f64, 0.0_f64);
        let mut min = (0.0_f64, 0.0_f64);
        let mut max = (0.0_f64, 0.0_f64);
        let count = self.items.len();
        for (i, item) in self.items.iter().enumerate() {
            let config = item.content.box_config();
            let gap = if i + 1 < count { self.spacing } else { 0.0 };
            for (acc, size) in [
                (&mut preferred, config.preferred),
                (&mut min, config.min),
                (&mut max, config.max),
            ] {
                acc.0 += o.main(size) + gap;
                acc.1 = acc.1.max(o.cross_of(size));
            }
        }
        BoxConfig {
            preferred: o.size(preferred.0, preferred.1),
            min: o.size(min.0, min.1),
            max: o.size(max.0, max.1),
        }
    }

    fn perform_layout(&mut self, constraints: BoxConstraints) -> Result<Size, LayoutError> {
        let (mut lines, mut main_size, need_second_pass) = self.first_pass(constraints)?;
        if need_second_pass {
            self.second_pass(&mut lines, &mut main_size)?;
        }
        let cross_size = lines.last().map_or(0.0, Line::cross_end);
        self.lines = lines;
        Ok(constraints.constrain(self.orientation.size(main_size, cross_size)))
    }
}

impl RenderContent for Flex {
    fn render_content(&self) -> Option<RenderObject> {
        let children: Vec<_> = self
            .items
            .iter()
            .filter_map(|item| item.content.render_placed())
            .collect();
        Some(RenderObject::container(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use trellis_core::geometry::{Point, Rect};

    const EPS: f64 = 1e-9;

    fn block(w: f64, h: f64) -> Block {
        Block::new(Size::new(w, h))
    }

    fn rigid(w: f64, h: f64) -> Block {
        Block::new(Size::new(w, h)).with_min(Size::new(w, h))
    }

    fn bounds(flex: &Flex) -> Vec<Rect> {
        flex.items().iter().map(|i| i.content.bounds()).collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn grow_distribution_one_one_two() {
        let mut row = Flex::row()
            .with_item(FlexItem::new(block(10.0, 10.0)).with_grow(1.0))
            .with_item(FlexItem::new(block(10.0, 10.0)).with_grow(1.0))
            .with_item(FlexItem::new(block(10.0, 10.0)).with_grow(2.0));
        let size = row
            .perform_layout(BoxConstraints::tight(Size::new(100.0, 20.0)))
            .unwrap();
        assert_eq!(size, Size::new(100.0, 20.0));

        // 30 used by content, 70 left over.
        let s = 70.0;
        let b = bounds(&row);
        assert_close(b[0].width(), 10.0 + s / 4.0);
        assert_close(b[1].width(), 10.0 + s / 4.0);
        assert_close(b[2].width(), 10.0 + s / 2.0);
        assert_close(b[1].x0, b[0].x1);
        assert_close(b[2].x0, b[1].x1);
        assert_close(b[2].x1, 100.0);
        // Default alignment stretches to the tight cross size.
        assert_close(b[0].height(), 20.0);
    }

    #[test]
    fn wrap_moves_third_item_to_second_line() {
        let mut row = Flex::row()
            .with_wrap(true)
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(FlexItem::new(rigid(40.0, 20.0)))
            .with_item(FlexItem::new(rigid(40.0, 20.0)))
            .with_item(FlexItem::new(rigid(40.0, 20.0)));
        let size = row
            .perform_layout(BoxConstraints::loose(Size::new(100.0, f64::INFINITY)))
            .unwrap();

        let lines = row.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].items(), &[0, 1]);
        assert_eq!(lines[1].items(), &[2]);
        assert_eq!(row.items()[2].content.position(), Point::new(0.0, 20.0));
        assert_eq!(size, Size::new(80.0, 40.0));
    }

    #[test]
    fn no_wrap_keeps_one_line() {
        let mut row = Flex::row()
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(FlexItem::new(rigid(40.0, 20.0)))
            .with_item(FlexItem::new(rigid(40.0, 20.0)))
            .with_item(FlexItem::new(rigid(40.0, 20.0)));
        row.perform_layout(BoxConstraints::loose(Size::new(100.0, 100.0)))
            .unwrap();
        assert_eq!(row.lines().len(), 1);
    }

    #[test]
    fn layout_is_idempotent() {
        let mut column = Flex::column()
            .with_spacing(3.0)
            .with_item(FlexItem::new(block(30.0, 10.0)).with_grow(1.0))
            .with_item(
                FlexItem::new(block(20.0, 10.0))
                    .with_cross_alignment(CrossAlignment::Center)
                    .with_margins(Insets::uniform(2.0)),
            )
            .with_item(FlexItem::new(block(10.0, 10.0)).with_cross_alignment(CrossAlignment::End))
            .with_item(FlexItem::new(block(5.0, 5.0)).with_grow(2.0));
        let c = BoxConstraints::new(Size::new(0.0, 80.0), Size::new(60.0, 200.0));
        let first = column.perform_layout(c).unwrap();
        let first_bounds = bounds(&column);
        let second = column.perform_layout(c).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_bounds, bounds(&column));
    }

    #[test]
    fn result_stays_inside_constraints() {
        let cases = [
            BoxConstraints::tight(Size::new(50.0, 50.0)),
            BoxConstraints::loose(Size::new(15.0, 5.0)),
            BoxConstraints::new(Size::new(200.0, 100.0), Size::new(300.0, 300.0)),
            BoxConstraints::UNBOUNDED,
        ];
        for wrap in [false, true] {
            for c in cases {
                let mut row = Flex::row()
                    .with_wrap(wrap)
                    .with_spacing(4.0)
                    .with_item(FlexItem::new(rigid(40.0, 20.0)).with_grow(1.0))
                    .with_item(FlexItem::new(block(25.0, 30.0)))
                    .with_item(
                        FlexItem::new(block(10.0, 10.0)).with_width(FlexValue::Percent(25.0)),
                    );
                let size = row.perform_layout(c).unwrap();
                assert!(c.contains(size), "{size:?} outside {c:?}");
            }
        }
    }

    #[test]
    fn cross_alignments() {
        let mut row = Flex::row()
            .with_item(FlexItem::new(block(10.0, 40.0)).with_cross_alignment(CrossAlignment::Start))
            .with_item(
                FlexItem::new(block(10.0, 10.0)).with_cross_alignment(CrossAlignment::Center),
            )
            .with_item(FlexItem::new(block(10.0, 10.0)).with_cross_alignment(CrossAlignment::End))
            .with_item(
                FlexItem::new(block(10.0, 10.0))
                    .with_cross_alignment(CrossAlignment::Stretch)
                    .with_margins(Insets::new(0.0, 5.0, 0.0, 5.0)),
            );
        row.perform_layout(BoxConstraints::UNBOUNDED).unwrap();
        let b = bounds(&row);
        assert_close(b[0].y0, 0.0);
        assert_close(b[1].y0, 15.0);
        assert_close(b[2].y0, 30.0);
        assert_close(b[3].y0, 5.0);
        assert_close(b[3].height(), 30.0);
    }

    #[test]
    fn margins_and_spacing_offset_items() {
        let mut row = Flex::row()
            .with_spacing(5.0)
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(FlexItem::new(block(10.0, 10.0)).with_margins(Insets::new(2.0, 3.0, 4.0, 0.0)))
            .with_item(FlexItem::new(block(10.0, 10.0)));
        let size = row.perform_layout(BoxConstraints::UNBOUNDED).unwrap();
        let b = bounds(&row);
        assert_eq!(b[0].origin(), Point::new(2.0, 3.0));
        // 2 + 10 + 4 margin, then 5 spacing.
        assert_close(b[1].x0, 21.0);
        assert_eq!(size, Size::new(31.0, 13.0));
    }

    #[test]
    fn explicit_sizes() {
        let mut row = Flex::row()
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(FlexItem::new(block(10.0, 10.0)).with_width(FlexValue::Pixels(33.0)))
            .with_item(FlexItem::new(block(10.0, 10.0)).with_width(FlexValue::Percent(50.0)));
        row.perform_layout(BoxConstraints::loose(Size::new(200.0, 50.0)))
            .unwrap();
        let b = bounds(&row);
        assert_close(b[0].width(), 33.0);
        assert_close(b[1].width(), 100.0);
    }

    #[test]
    fn percent_of_unbounded_is_ignored() {
        let mut row = Flex::row()
            .with_item(FlexItem::new(block(12.0, 10.0)).with_width(FlexValue::Percent(50.0)));
        row.perform_layout(BoxConstraints::UNBOUNDED).unwrap();
        assert_close(row.items()[0].content.size().width, 12.0);
    }

    #[test]
    fn grow_ignored_when_total_is_zero() {
        let mut row = Flex::row()
            .with_cross_alignment(CrossAlignment::Center)
            .with_item(FlexItem::new(block(10.0, 10.0)));
        row.perform_layout(BoxConstraints::tight(Size::new(50.0, 10.0)))
            .unwrap();
        assert_close(row.items()[0].content.size().width, 10.0);
    }

    #[test]
    fn box_config_aggregates_children() {
        let row = Flex::row()
            .with_spacing(2.0)
            .with_item(FlexItem::new(block(10.0, 5.0)))
            .with_item(FlexItem::new(block(20.0, 8.0)));
        let config = row.box_config();
        assert_eq!(config.preferred, Size::new(32.0, 8.0));
        assert_eq!(config.min, Size::new(2.0, 0.0));
    }

    fn three_rigid(last: f64) -> Flex {
        Flex::row()
            .with_wrap(true)
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(FlexItem::new(rigid(40.0, 20.0)))
            .with_item(FlexItem::new(rigid(40.0, 20.0)))
            .with_item(FlexItem::new(rigid(last, 20.0)))
    }

    #[test]
    fn near_fit_within_tolerance_stays_on_line() {
        // 80 + 20.5 overshoots 100 by less than WRAP_TOLERANCE.
        let mut row = three_rigid(20.5);
        row.perform_layout(BoxConstraints::loose(Size::new(100.0, f64::INFINITY)))
            .unwrap();
        assert_eq!(row.lines().len(), 1);
        assert_eq!(row.lines()[0].items(), &[0, 1, 2]);
        assert_eq!(row.items()[2].content.position(), Point::new(80.0, 0.0));
    }

    #[test]
    fn overshoot_past_tolerance_wraps() {
        let mut row = three_rigid(21.5);
        row.perform_layout(BoxConstraints::loose(Size::new(100.0, f64::INFINITY)))
            .unwrap();
        assert_eq!(row.lines().len(), 2);
        assert_eq!(row.lines()[1].items(), &[2]);
        assert_eq!(row.items()[2].content.position(), Point::new(0.0, 20.0));
    }

    #[test]
    fn infinite_explicit_width_keeps_preferred() {
        let mut row = Flex::row()
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(
                FlexItem::new(block(30.0, 10.0)).with_width(FlexValue::Pixels(f64::INFINITY)),
            );
        row.perform_layout(BoxConstraints::loose(Size::new(100.0, 50.0)))
            .unwrap();
        let content = &row.items()[0].content;
        assert_eq!(content.size(), Size::new(30.0, 10.0));
        let constraints = content.previous_constraints().unwrap();
        assert_eq!(constraints.min.width, 0.0);
        assert_eq!(constraints.max.width, f64::INFINITY);
    }

    #[test]
    fn malformed_explicit_size_propagates() {
        let mut row =
            Flex::row().with_item(FlexItem::new(block(10.0, 10.0)).with_width(FlexValue::Pixels(-4.0)));
        assert!(matches!(
            row.perform_layout(BoxConstraints::UNBOUNDED),
            Err(LayoutError::Negative { .. })
        ));
    }

    #[test]
    fn render_content_translates_children() {
        let mut row = Flex::row()
            .with_cross_alignment(CrossAlignment::Start)
            .with_item(FlexItem::new(block(10.0, 10.0).with_fill(trellis_core::paint::Color::WHITE)))
            .with_item(FlexItem::new(block(10.0, 10.0)));
        row.perform_layout(BoxConstraints::UNBOUNDED).unwrap();
        let content = row.render_content().unwrap();
        // The unfilled block draws nothing.
        assert_eq!(content.children.len(), 1);
    }
}
