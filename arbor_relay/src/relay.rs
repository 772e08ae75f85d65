// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handlers bound to one node.
//!
//! ## Overview
//!
//! A [`NodeRelays`] pairs the owner's [`NodeHandlers`] with a node's stable
//! identifier. Renderers receive one and call it without knowing which node
//! they draw. Relays run no logic of their own: each method forwards to exactly
//! one handler call.

use alloc::vec::Vec;
use core::fmt;

use arbor_node::{NodeId, RawNodeDatum, TreeNodeDatum};
use tracing::trace;

use crate::handlers::{EventBindings, Interaction, NodeHandlers};

/// The owner's handlers, bound to one node identifier.
pub struct NodeRelays<'a, H: NodeHandlers + ?Sized> {
    id: &'a NodeId,
    handlers: &'a H,
}

impl<H: NodeHandlers + ?Sized> Clone for NodeRelays<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: NodeHandlers + ?Sized> Copy for NodeRelays<'_, H> {}

impl<H: NodeHandlers + ?Sized> fmt::Debug for NodeRelays<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRelays")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<'a, H: NodeHandlers + ?Sized> NodeRelays<'a, H> {
    /// Bind `handlers` to the node `id`.
    pub fn new(id: &'a NodeId, handlers: &'a H) -> Self {
        Self { id, handlers }
    }

    /// The bound node.
    pub fn id(&self) -> &'a NodeId {
        self.id
    }

    /// Request expand/collapse of the bound node.
    pub fn toggle(&self) {
        self.handlers.on_toggle(self.id);
    }

    /// Report a primary click.
    pub fn click(&self, event: &H::Event) {
        self.handlers.on_click(self.id, event);
    }

    /// Report that the pointer entered.
    pub fn pointer_enter(&self, event: &H::Event) {
        self.handlers.on_pointer_enter(self.id, event);
    }

    /// Report that the pointer left.
    pub fn pointer_leave(&self, event: &H::Event) {
        self.handlers.on_pointer_leave(self.id, event);
    }

    /// Ask the owner to merge `children` under the bound node.
    pub fn add_children(&self, children: Vec<RawNodeDatum>) {
        self.handlers.on_add_children(self.id, children);
    }

    /// Fetch the owner's full current dataset.
    pub fn fetch_dataset(&self) -> Vec<TreeNodeDatum> {
        self.handlers.dataset()
    }

    /// Route a surface interaction through the bindings its content declared.
    ///
    /// A click toggles first and then reports the click, when both are bound.
    /// Returns whether any handler was invoked.
    pub fn dispatch(
        &self,
        interaction: Interaction,
        event: &H::Event,
        bindings: EventBindings,
    ) -> bool {
        trace!(node = %self.id, ?interaction, ?bindings, "dispatch");
        match interaction {
            Interaction::Click => {
                if bindings.contains(EventBindings::TOGGLE_ON_CLICK) {
                    self.toggle();
                }
                if bindings.contains(EventBindings::CLICK) {
                    self.click(event);
                }
                bindings.intersects(EventBindings::TOGGLE_ON_CLICK | EventBindings::CLICK)
            }
            Interaction::PointerEnter => {
                let bound = bindings.contains(EventBindings::POINTER_ENTER);
                if bound {
                    self.pointer_enter(event);
                }
                bound
            }
            Interaction::PointerLeave => {
                let bound = bindings.contains(EventBindings::POINTER_LEAVE);
                if bound {
                    self.pointer_leave(event);
                }
                bound
            }
        }
    }
}
