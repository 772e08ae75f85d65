// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and parsing.
//!
//! Transform computation, transitions and change detection cannot fail; only
//! converting loosely typed input (milliseconds, orientation names) can.

use alloc::string::String;

/// Errors raised while building configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A transition duration was negative, not a finite number, or too large for a `Duration`.
    #[error("transition duration must be a non-negative number of milliseconds within range, got {0}")]
    InvalidDuration(f64),
}

/// Returned when parsing an [`Orientation`](crate::Orientation) from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation `{0}`")]
pub struct ParseOrientationError(pub String);
