// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render values: fixed, or sampled from a timeline.
//!
//! A [`RenderValue`] is either a constant or a [`TimedValue`] that maps the
//! frame time to a value through a plain sampling function. Timed values make
//! the render object that holds them uncachable, since their output changes
//! every frame without the render-object tree changing.
//!
//! Identity for hashing is `(start, duration, repeat, id)`. The sampling
//! function pointer never participates, so callers must give distinct
//! sampling functions distinct ids.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::time::{Duration, HostTime};

/// How many times a [`TimedValue`] runs through its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// A single run; the end value holds afterwards.
    #[default]
    Once,
    /// The given number of runs; the end value holds afterwards. `Times(0)`
    /// behaves like `Once`.
    Times(u32),
    /// Restart indefinitely (e.g. a caret blink).
    Forever,
}

/// A value sampled from elapsed time.
pub struct TimedValue<V> {
    /// Start of the first run.
    pub start: HostTime,
    /// Length of one run.
    pub duration: Duration,
    /// Number of runs.
    pub repeat: Repeat,
    /// Identity of `sample`, used for hashing and equality.
    pub id: u64,
    /// Maps progress in `0.0..=1.0` to a value.
    pub sample: fn(f64) -> V,
}

impl<V> TimedValue<V> {
    /// Creates a timed value that runs once.
    #[must_use]
    pub const fn new(start: HostTime, duration: Duration, id: u64, sample: fn(f64) -> V) -> Self {
        Self {
            start,
            duration,
            repeat: Repeat::Once,
            id,
            sample,
        }
    }

    /// Sets the repetition count.
    #[must_use]
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Progress in `0.0..=1.0` at `now`.
    ///
    /// Before `start` progress is `0.0`. With a zero duration, or once the
    /// final run has elapsed, progress is `1.0`. Otherwise it is the fractional
    /// position inside the current run.
    #[must_use]
    pub fn progress(&self, now: HostTime) -> f64 {
        if now < self.start {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).nanos();
        let period = self.duration.nanos();
        let run = elapsed / period;
        let runs = match self.repeat {
            Repeat::Once | Repeat::Times(0) => Some(1_u64),
            Repeat::Times(n) => Some(u64::from(n)),
            Repeat::Forever => None,
        };
        if runs.is_some_and(|runs| run >= runs) {
            return 1.0;
        }
        let within = elapsed % period;
        let p = within as f64 / period as f64;
        p.clamp(0.0, 1.0)
    }

    /// Samples the value at `now`.
    #[must_use]
    pub fn sample_at(&self, now: HostTime) -> V {
        (self.sample)(self.progress(now))
    }

    /// Time at which the value stops changing, if it ever does.
    #[must_use]
    pub fn end(&self) -> Option<HostTime> {
        let runs = match self.repeat {
            Repeat::Once | Repeat::Times(0) => 1,
            Repeat::Times(n) => u64::from(n),
            Repeat::Forever => return None,
        };
        self.start.checked_add(self.duration.saturating_mul(runs))
    }
}

impl<V> Clone for TimedValue<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TimedValue<V> {}

impl<V> PartialEq for TimedValue<V> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.duration == other.duration
            && self.repeat == other.repeat
            && self.id == other.id
    }
}

impl<V> Hash for TimedValue<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.duration.hash(state);
        self.repeat.hash(state);
        self.id.hash(state);
    }
}

impl<V> fmt::Debug for TimedValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedValue")
            .field("start", &self.start)
            .field("duration", &self.duration)
            .field("repeat", &self.repeat)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A value that is either fixed or sampled from time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderValue<V> {
    /// A constant.
    Fixed(V),
    /// Sampled from the frame time.
    Timed(TimedValue<V>),
}

impl<V: Clone> RenderValue<V> {
    /// Resolves the value at `now`.
    #[must_use]
    pub fn get(&self, now: HostTime) -> V {
        match self {
            Self::Fixed(v) => v.clone(),
            Self::Timed(t) => t.sample_at(now),
        }
    }
}

impl<V> RenderValue<V> {
    /// Returns `true` for [`RenderValue::Timed`].
    #[inline]
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        matches!(self, Self::Timed(_))
    }
}

impl<V> From<V> for RenderValue<V> {
    fn from(value: V) -> Self {
        Self::Fixed(value)
    }
}

impl<V: Hash> Hash for RenderValue<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Fixed(v) => {
                state.write_u8(0);
                v.hash(state);
            }
            Self::Timed(t) => {
                state.write_u8(1);
                t.hash(state);
            }
        }
    }
}
