// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-space to screen-space mapping.
//!
//! A node's screen position is a pure function of its layout [`Point`] and the
//! tree [`Orientation`]. Entering and leaving nodes use the *origin transform*:
//! the screen position of the parent's current point, or of `(0, 0)` for the root.

use core::fmt;

use kurbo::{Affine, Point, Vec2};

use crate::types::Orientation;

/// A screen-space translation applied to a node element.
///
/// `Display` yields the SVG attribute form, e.g. `translate(10,20)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Translation(pub Vec2);

impl Translation {
    /// The identity translation, `translate(0,0)`.
    pub const ZERO: Self = Self(Vec2::ZERO);

    /// Create a translation from screen coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Screen-space `x` offset.
    pub const fn x(self) -> f64 {
        self.0.x
    }

    /// Screen-space `y` offset.
    pub const fn y(self) -> f64 {
        self.0.y
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self(self.0.lerp(other.0, t))
    }

    /// The equivalent affine transform.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.0)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{})", SvgNumber(self.0.x), SvgNumber(self.0.y))
    }
}

/// Formats a number the way SVG attribute values are conventionally written.
///
/// Integral values print without a fractional part, negative zero prints as `0`
/// and infinities print as `Infinity` / `-Infinity`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgNumber(pub f64);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            f.write_str("0")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            write!(f, "{v}")
        }
    }
}

/// Place a node at its layout point.
///
/// Vertical trees translate to `(p.x, p.y)`; horizontal trees swap the axes to `(p.y, p.x)`.
///
/// ```
/// use arbor_node::{Orientation, compute_transform};
/// use kurbo::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(compute_transform(p, Orientation::Vertical).to_string(), "translate(10,20)");
/// assert_eq!(compute_transform(p, Orientation::Horizontal).to_string(), "translate(20,10)");
/// ```
pub fn compute_transform(point: Point, orientation: Orientation) -> Translation {
    match orientation {
        Orientation::Vertical => Translation::new(point.x, point.y),
        Orientation::Horizontal => Translation::new(point.y, point.x),
    }
}

/// The point a node grows out of on entry and retreats into on exit.
///
/// A missing parent (the root, or a parent not resolved yet) maps to the
/// coordinate-space origin.
pub fn compute_origin_transform(parent: Option<Point>, orientation: Orientation) -> Translation {
    compute_transform(parent.unwrap_or(Point::ORIGIN), orientation)
}
