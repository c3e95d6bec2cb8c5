// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box constraints and intrinsic sizing hints.

use trellis_core::geometry::Size;

use crate::error::{Axis, LayoutError};

/// A min/max size window a layout result must fall into.
///
/// Well-formed constraints satisfy `0 <= min <= max` componentwise; `max` may
/// be infinite. Use [`validate`](Self::validate) before laying out with
/// constraints from untrusted arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    /// Smallest allowed size.
    pub min: Size,
    /// Largest allowed size.
    pub max: Size,
}

impl BoxConstraints {
    /// No minimum, infinite maximum.
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(f64::INFINITY, f64::INFINITY),
    };

    /// Creates constraints from explicit bounds.
    #[inline]
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Constraints that allow exactly `size`.
    #[inline]
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Constraints from zero up to `max`.
    #[inline]
    #[must_use]
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// Clamps `size` into `[min, max]` componentwise.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min.width).min(self.max.width),
            size.height.max(self.min.height).min(self.max.height),
        )
    }

    /// Returns `true` if `size` lies inside the window.
    #[must_use]
    pub fn contains(&self, size: Size) -> bool {
        size.width >= self.min.width
            && size.width <= self.max.width
            && size.height >= self.min.height
            && size.height <= self.max.height
    }

    /// Returns `true` if `min == max`.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Checks that the constraints are well formed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_axis(Axis::Horizontal, self.min.width, self.max.width)?;
        check_axis(Axis::Vertical, self.min.height, self.max.height)
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), LayoutError> {
    if min.is_nan() || max.is_nan() {
        return Err(LayoutError::NotANumber { axis });
    }
    if min < 0.0 {
        return Err(LayoutError::Negative { axis, value: min });
    }
    if min > max {
        return Err(LayoutError::Inverted { axis, min, max });
    }
    Ok(())
}

/// A node's intrinsic sizing hint, independent of any constraints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConfig {
    /// Size the node would like to have.
    pub preferred: Size,
    /// Size below which the node cannot shrink.
    pub min: Size,
    /// Size above which the node does not grow on its own.
    pub max: Size,
}

impl BoxConfig {
    /// A hint that prefers `preferred`, with no minimum and no maximum.
    #[must_use]
    pub const fn preferred(preferred: Size) -> Self {
        Self {
            preferred,
            min: Size::ZERO,
            max: Size::new(f64::INFINITY, f64::INFINITY),
        }
    }

    /// A hint that is exactly `size`.
    #[must_use]
    pub const fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            min: size,
            max: size,
        }
    }
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self::preferred(Size::ZERO)
    }
}
