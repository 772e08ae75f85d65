// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition configuration and interpolation.
//!
//! ## Modes
//!
//! With [`TransitionConfig::enable_legacy_transitions`] set, a change of transform
//! and opacity is interpolated over [`TransitionConfig::transition_duration`] and
//! completes on a later frame. Otherwise it is applied on the spot and its
//! completion callback runs before the triggering call returns.
//!
//! ## Time
//!
//! Time is a caller-supplied monotonic [`Duration`], typically the timestamp of
//! the current animation frame. Nothing here reads a clock.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use crate::error::Error;
use crate::transform::Translation;

/// Completion callback of a transition.
///
/// Called at most once, after the final transform and opacity are applied.
pub type DoneCallback = Box<dyn FnOnce()>;

/// How transform and opacity changes are applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TransitionConfig {
    /// Interpolate changes over [`transition_duration`](Self::transition_duration).
    pub enable_legacy_transitions: bool,
    /// Length of an animated transition.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub transition_duration: Duration,
}

impl TransitionConfig {
    /// Default animation length.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

    /// Immediate application; every change lands synchronously.
    pub const IMMEDIATE: Self = Self {
        enable_legacy_transitions: false,
        transition_duration: Self::DEFAULT_DURATION,
    };

    /// Animated application over `duration`.
    pub const fn animated(duration: Duration) -> Self {
        Self {
            enable_legacy_transitions: true,
            transition_duration: duration,
        }
    }

    /// Build a configuration from a duration in (possibly fractional) milliseconds.
    pub fn from_millis(enable_legacy_transitions: bool, millis: f64) -> Result<Self, Error> {
        Ok(Self {
            enable_legacy_transitions,
            transition_duration: duration_from_millis(millis)?,
        })
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::IMMEDIATE
    }
}

/// Milliseconds as a [`Duration`]; rejects negative, non-finite and overflowing values.
fn duration_from_millis(millis: f64) -> Result<Duration, Error> {
    Duration::try_from_secs_f64(millis / 1000.0).map_err(|_| Error::InvalidDuration(millis))
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(d)?;
        super::duration_from_millis(ms).map_err(serde::de::Error::custom)
    }
}

/// What a node element looks like at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visual {
    /// Screen translation.
    pub transform: Translation,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl Visual {
    /// Interpolate towards `to` at eased progress `t`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            transform: self.transform.lerp(to.transform, t),
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

/// Cubic ease-in-out over `t` in `0.0..=1.0`; values outside are clamped.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// An in-flight animated transition.
pub(crate) struct Transition {
    pub(crate) from: Visual,
    pub(crate) to: Visual,
    pub(crate) start: Duration,
    pub(crate) duration: Duration,
    pub(crate) generation: u64,
    pub(crate) done: Option<DoneCallback>,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("start", &self.start)
            .field("duration", &self.duration)
            .field("generation", &self.generation)
            .field("has_done", &self.done.is_some())
            .finish()
    }
}

impl Transition {
    /// Eased progress at `now`, and whether the transition has reached its end.
    pub(crate) fn progress(&self, now: Duration) -> (f64, bool) {
        let elapsed = now.saturating_sub(self.start);
        if elapsed >= self.duration {
            return (1.0, true);
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (ease_cubic_in_out(t), false)
    }

    /// The visual state at `now`.
    pub(crate) fn sample(&self, now: Duration) -> (Visual, bool) {
        let (t, finished) = self.progress(now);
        if finished {
            (self.to, true)
        } else {
            (self.from.lerp(self.to, t), false)
        }
    }
}
