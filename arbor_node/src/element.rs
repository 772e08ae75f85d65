// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles to rendered node elements.

use crate::transform::Translation;

/// A rendered node element that transform and opacity can be applied to.
///
/// The rendering surface owns the element; controllers only borrow a handle for
/// the duration of a call that applies a new visual state.
pub trait ElementHandle {
    /// Set the element's translation.
    fn set_transform(&mut self, transform: Translation);
    /// Set the element's opacity.
    fn set_opacity(&mut self, opacity: f64);
}

impl<E: ElementHandle + ?Sized> ElementHandle for &mut E {
    fn set_transform(&mut self, transform: Translation) {
        (**self).set_transform(transform);
    }

    fn set_opacity(&mut self, opacity: f64) {
        (**self).set_opacity(opacity);
    }
}

/// A handle for a node whose element is not attached to any surface yet.
///
/// Applying to it does nothing; the controller still tracks the state.
#[derive(Copy, Clone, Debug, Default)]
pub struct Detached;

impl ElementHandle for Detached {
    fn set_transform(&mut self, _transform: Translation) {}

    fn set_opacity(&mut self, _opacity: f64) {}
}
