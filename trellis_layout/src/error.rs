// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraint validation errors.

use core::fmt;

/// A layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width.
    Horizontal,
    /// Height.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// Malformed constraints passed to a layout call.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A bound is NaN.
    #[error("{axis} constraint is not a number")]
    NotANumber {
        /// Offending axis.
        axis: Axis,
    },
    /// A minimum is negative.
    #[error("{axis} minimum {value} is negative")]
    Negative {
        /// Offending axis.
        axis: Axis,
        /// The negative minimum.
        value: f64,
    },
    /// A minimum exceeds its maximum.
    #[error("{axis} minimum {min} exceeds maximum {max}")]
    Inverted {
        /// Offending axis.
        axis: Axis,
        /// Minimum bound.
        min: f64,
        /// Maximum bound.
        max: f64,
    },
}
