// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_host --heading-base-level=0

//! Arbor Host: a reference owner for tree-diagram node controllers.
//!
//! [`arbor_node`] describes what a single node does; something still has to
//! decide when nodes appear and disappear, keep exactly one controller per
//! stable identifier, and hold on to leaving nodes until their exit completes.
//! [`NodeHost`] is that owner, with an in-memory SVG surface.
//!
//! ## Where this fits
//!
//! - Layout engine (not in this workspace): assigns each node a point.
//! - Host (this crate): reconciles layout passes with mounted controllers,
//!   advances animations and serializes the scene.
//! - Node controllers ([`arbor_node`]): per-node transforms and transitions.
//! - Relays and renderers ([`arbor_relay`]): interactions and node content.
//!
//! ## Reconciliation
//!
//! [`NodeHost::sync`] matches layout nodes to controllers by identifier:
//! unknown identifiers are mounted and enter; known ones receive new inputs, which
//! only cause work when [`should_recompute`](arbor_node::should_recompute) says so;
//! identifiers missing from the pass start leaving, toward their parent's point in
//! that same pass when [`LayoutNode::parent_id`] names it. A leaving node that reappears
//! re-enters with its existing controller. Re-parenting or reordering never creates
//! a second controller for the same identifier.
//!
//! ## Minimal usage
//!
//! ```
//! use arbor_host::{HostConfig, LayoutNode, NodeHost};
//! use arbor_node::{NodeId, Orientation, RawNodeDatum, TreeNodeDatum};
//! use arbor_relay::NodeHandlers;
//! use core::time::Duration;
//! use kurbo::Point;
//!
//! struct Owner;
//! impl NodeHandlers for Owner {
//!     type Event = ();
//!     fn on_toggle(&self, _id: &NodeId) {}
//!     fn on_add_children(&self, _id: &NodeId, _children: Vec<RawNodeDatum>) {}
//!     fn dataset(&self) -> Vec<TreeNodeDatum> { Vec::new() }
//! }
//!
//! let mut host = NodeHost::new(HostConfig {
//!     orientation: Orientation::Vertical,
//!     ..Default::default()
//! });
//! let root = TreeNodeDatum::new("root", "Root").with_children(Vec::new());
//! let layout = [LayoutNode::new(root.clone(), Point::new(0.0, 0.0), None)];
//! host.sync(&layout, Duration::ZERO);
//!
//! let svg = host.render_svg(&Owner, &[root], None);
//! assert!(svg.starts_with(
//!     r#"<g id="root" class="arbor-node" transform="translate(0,0)" style="opacity: 1">"#
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod types;

pub use host::NodeHost;
pub use types::{HostConfig, LayoutNode, SvgElement, SyncReport};
