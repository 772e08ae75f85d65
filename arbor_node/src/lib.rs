// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_node --heading-base-level=0

//! Arbor Node: placement and transitions for the nodes of a tree diagram.
//!
//! Each visible node of a tree diagram gets one [`NodeController`]. It maps the
//! node's layout point to a screen translation, animates the node out of its
//! parent when it appears, to its new position when the layout changes, and back
//! into its parent when it is removed.
//!
//! - Coordinates: [`compute_transform`] and [`compute_origin_transform`] are pure
//!   functions of a point and an [`Orientation`].
//! - Change detection: [`should_recompute`] decides whether new [`NodeInputs`]
//!   require any work. Only the position, the orientation and a [`Subscription`]
//!   token count.
//! - Lifecycle: [`Lifecycle`] is the `{ enter, update, leave }` capability an
//!   owning container drives; [`NodeController::tick`] advances animations.
//! - Application: transform and opacity are written through an [`ElementHandle`]
//!   the rendering surface lends for each call.
//!
//! ## Not a layout engine
//!
//! This crate never assigns coordinates. Upstream code runs whatever tree layout
//! it likes and hands each node its point and its parent's point.
//!
//! ## Animated and immediate transitions
//!
//! [`TransitionConfig::enable_legacy_transitions`] selects between interpolating
//! over [`TransitionConfig::transition_duration`] (completion on a later
//! [`tick`](NodeController::tick)) and applying on the spot (completion before the
//! triggering call returns). Callers relying on synchronous teardown, such as tests
//! or reduced-motion settings, disable the animation.
//!
//! ## Minimal usage
//!
//! ```
//! use arbor_node::{Detached, Lifecycle, NodeController, NodeInputs, Orientation, Phase, TransitionConfig};
//! use core::time::Duration;
//! use kurbo::Point;
//!
//! let inputs = NodeInputs::new(Point::new(10.0, 20.0), Some(Point::ORIGIN))
//!     .with_orientation(Orientation::Vertical)
//!     .with_transition(TransitionConfig::animated(Duration::from_millis(100)));
//! let mut node = NodeController::new("a".into(), inputs);
//!
//! node.enter(Duration::ZERO, &mut Detached);
//! assert!(node.tick(Duration::from_millis(16), &mut Detached));
//! assert_eq!(node.phase(), Phase::Entering);
//! node.tick(Duration::from_millis(100), &mut Detached);
//! assert_eq!(node.phase(), Phase::Settled);
//! assert_eq!(node.state().current_transform.to_string(), "translate(10,20)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod element;
mod error;
mod transform;
mod transition;
mod types;

pub use controller::{
    ControllerState, Lifecycle, NodeController, NodeInputs, Phase, should_recompute,
};
pub use element::{Detached, ElementHandle};
pub use error::{Error, ParseOrientationError};
pub use transform::{SvgNumber, Translation, compute_origin_transform, compute_transform};
pub use transition::{DoneCallback, TransitionConfig, Visual, ease_cubic_in_out};
pub use types::{
    AttributeValue, Attributes, NodeId, NodeMeta, Orientation, RawNodeDatum, Subscription,
    TreeNodeDatum,
};
