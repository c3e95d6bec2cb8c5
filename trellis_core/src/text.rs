// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement capability.
//!
//! Shaping and font metrics live outside Trellis. Layout asks a
//! [`TextMeasure`] for the bounds of a string; [`MonospaceMeasure`] is a
//! deterministic stand-in for tests and headless runs.

use crate::geometry::Size;
use crate::paint::FontConfig;

/// Measures text bounds. Must be pure and synchronous.
pub trait TextMeasure {
    /// Bounds of `text` set in `font`, wrapped at `max_width` when given.
    fn measure_text_bounds(&self, text: &str, font: &FontConfig, max_width: Option<f64>) -> Size;
}

/// Measures every character with the same advance.
///
/// Advance is `font.size * advance_ratio`; line height is
/// `font.size * line_height_ratio`. With a `max_width`, words are wrapped
/// greedily on spaces; a word wider than the line occupies a line of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    /// Character advance relative to font size.
    pub advance_ratio: f64,
    /// Line height relative to font size.
    pub line_height_ratio: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl MonospaceMeasure {
    fn width_of(&self, chars: usize, font: &FontConfig) -> f64 {
        chars as f64 * font.size * self.advance_ratio
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text_bounds(&self, text: &str, font: &FontConfig, max_width: Option<f64>) -> Size {
        let line_height = font.size * self.line_height_ratio;
        let mut widest = 0.0_f64;
        let mut lines = 0_u32;
        for raw_line in text.split('\n') {
            let Some(limit) = max_width else {
                widest = widest.max(self.width_of(raw_line.chars().count(), font));
                lines += 1;
                continue;
            };
            let mut current = 0_usize;
            let mut line_open = false;
            for word in raw_line.split(' ') {
                let len = word.chars().count();
                let candidate = if line_open { current + 1 + len } else { len };
                if line_open && self.width_of(candidate, font) > limit {
                    widest = widest.max(self.width_of(current, font));
                    lines += 1;
                    current = len;
                } else {
                    current = candidate;
                }
                line_open = true;
            }
            widest = widest.max(self.width_of(current, font));
            lines += 1;
        }
        Size::new(widest, f64::from(lines) * line_height)
    }
}
