// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry vocabulary shared by layout and rendering.
//!
//! All geometry is `f64` and comes from [`kurbo`]. [`Orientation`] adds the
//! main/cross axis view used by flex layout.

pub use kurbo::{Insets, Point, Rect, RoundedRectRadii, Size, Vec2};

/// The primary direction of a flex container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow left to right; the main axis is horizontal.
    #[default]
    Row,
    /// Items flow top to bottom; the main axis is vertical.
    Column,
}

impl Orientation {
    /// Returns the perpendicular orientation.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }

    /// Main-axis component of a size.
    #[inline]
    #[must_use]
    pub const fn main(self, size: Size) -> f64 {
        match self {
            Self::Row => size.width,
            Self::Column => size.height,
        }
    }

    /// Cross-axis component of a size.
    #[inline]
    #[must_use]
    pub const fn cross_of(self, size: Size) -> f64 {
        match self {
            Self::Row => size.height,
            Self::Column => size.width,
        }
    }

    /// Main-axis component of a point.
    #[inline]
    #[must_use]
    pub const fn main_pos(self, point: Point) -> f64 {
        match self {
            Self::Row => point.x,
            Self::Column => point.y,
        }
    }

    /// Cross-axis component of a point.
    #[inline]
    #[must_use]
    pub const fn cross_pos(self, point: Point) -> f64 {
        match self {
            Self::Row => point.y,
            Self::Column => point.x,
        }
    }

    /// Builds a size from main and cross components.
    #[inline]
    #[must_use]
    pub const fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Row => Size::new(main, cross),
            Self::Column => Size::new(cross, main),
        }
    }

    /// Builds a point from main and cross components.
    #[inline]
    #[must_use]
    pub const fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Row => Point::new(main, cross),
            Self::Column => Point::new(cross, main),
        }
    }

    /// Leading and trailing main-axis insets.
    #[inline]
    #[must_use]
    pub const fn main_insets(self, insets: Insets) -> (f64, f64) {
        match self {
            Self::Row => (insets.x0, insets.x1),
            Self::Column => (insets.y0, insets.y1),
        }
    }

    /// Leading and trailing cross-axis insets.
    #[inline]
    #[must_use]
    pub const fn cross_insets(self, insets: Insets) -> (f64, f64) {
        self.cross().main_insets(insets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_swap_components() {
        let s = Size::new(3.0, 7.0);
        assert_eq!(Orientation::Row.main(s), 3.0);
        assert_eq!(Orientation::Row.cross_of(s), 7.0);
        assert_eq!(Orientation::Column.main(s), 7.0);
        assert_eq!(Orientation::Column.cross_of(s), 3.0);
        assert_eq!(Orientation::Column.size(7.0, 3.0), s);
        assert_eq!(Orientation::Row.point(1.0, 2.0), Point::new(1.0, 2.0));
        assert_eq!(Orientation::Column.point(1.0, 2.0), Point::new(2.0, 1.0));
    }

    #[test]
    fn insets_follow_axis() {
        let m = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Orientation::Row.main_insets(m), (1.0, 3.0));
        assert_eq!(Orientation::Row.cross_insets(m), (2.0, 4.0));
        assert_eq!(Orientation::Column.main_insets(m), (2.0, 4.0));
    }
}
