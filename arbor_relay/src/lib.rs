// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_relay --heading-base-level=0

//! Arbor Relay: interaction delegation and pluggable content for tree-diagram nodes.
//!
//! ## Overview
//!
//! A node does not decide what happens when it is clicked, and it does not draw
//! its own content. Both are delegated:
//!
//! - Interactions go to the owner's [`NodeHandlers`], always keyed by the node's
//!   stable identifier. [`NodeRelays`] binds the handlers to one node so content
//!   can call `toggle()`, `click(&event)`, `pointer_enter(&event)`,
//!   `pointer_leave(&event)`, `add_children(children)` and `fetch_dataset()`
//!   without knowing which node it belongs to.
//! - Content comes from a [`NodeRenderer`]. It receives the node's record, the
//!   whole dataset and the node's relays, and returns SVG markup plus the
//!   [`EventBindings`] that markup listens to. [`DefaultNodeRenderer`] is used
//!   when the owner supplies none.
//!
//! [`NodeElement`] wraps content in the node's `<g>` element: `id`, branch or
//! leaf class, transform and opacity.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//!
//! use arbor_node::{NodeId, RawNodeDatum, TreeNodeDatum};
//! use arbor_relay::{Interaction, NodeHandlers, NodeRelays, RenderProps, render_content};
//!
//! #[derive(Default)]
//! struct Owner {
//!     toggled: RefCell<Vec<NodeId>>,
//! }
//!
//! impl NodeHandlers for Owner {
//!     type Event = ();
//!     fn on_toggle(&self, id: &NodeId) {
//!         self.toggled.borrow_mut().push(id.clone());
//!     }
//!     fn on_add_children(&self, _id: &NodeId, _children: Vec<RawNodeDatum>) {}
//!     fn dataset(&self) -> Vec<TreeNodeDatum> {
//!         Vec::new()
//!     }
//! }
//!
//! let owner = Owner::default();
//! let datum = TreeNodeDatum::new("a", "A");
//! let relays = NodeRelays::new(datum.id(), &owner);
//! let props = RenderProps { datum: &datum, tree_data: &[], relays };
//!
//! let content = render_content(None, &props);
//! assert!(content.markup.starts_with("<circle"));
//!
//! // A click on the default content toggles the node.
//! relays.dispatch(Interaction::Click, &(), content.bindings);
//! assert_eq!(owner.toggled.borrow().as_slice(), &[NodeId::from("a")]);
//! ```
//!
//! ## Errors
//!
//! Relays add no handling of their own: a panicking handler unwinds through the
//! relay into the caller that triggered the interaction.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod handlers;
mod relay;
mod render;
mod svg;

pub use handlers::{EventBindings, Interaction, NodeHandlers};
pub use relay::NodeRelays;
pub use render::{DefaultNodeRenderer, NodeContent, NodeRenderer, RenderProps, render_content};
pub use svg::{BRANCH_CLASS, Escaped, LEAF_CLASS, NodeElement};
