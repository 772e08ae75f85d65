// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner-supplied interaction handlers and the interaction vocabulary.

use alloc::vec::Vec;

use arbor_node::{NodeId, RawNodeDatum, TreeNodeDatum};

/// Handlers the dataset owner supplies for every node.
///
/// Every method receives the stable identifier of the node the interaction
/// happened on. Handlers take `&self`; owners that mutate state in response keep
/// it behind interior mutability, since a renderer may hold several relays at once.
///
/// Panics raised by a handler propagate to whoever triggered the interaction.
pub trait NodeHandlers {
    /// Raw interaction event passed through untouched (pointer event, key event, ...).
    type Event;

    /// Expand/collapse request.
    fn on_toggle(&self, id: &NodeId);

    /// Primary click on the node's content.
    fn on_click(&self, id: &NodeId, event: &Self::Event) {
        let _ = (id, event);
    }

    /// Pointer entered the node's content.
    fn on_pointer_enter(&self, id: &NodeId, event: &Self::Event) {
        let _ = (id, event);
    }

    /// Pointer left the node's content.
    fn on_pointer_leave(&self, id: &NodeId, event: &Self::Event) {
        let _ = (id, event);
    }

    /// Merge new child records under the node.
    fn on_add_children(&self, id: &NodeId, children: Vec<RawNodeDatum>);

    /// The full current dataset, for content that needs more than its own record.
    fn dataset(&self) -> Vec<TreeNodeDatum>;
}

/// A surface interaction that carries a raw event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Primary click.
    Click,
    /// Pointer entered.
    PointerEnter,
    /// Pointer left.
    PointerLeave,
}

bitflags::bitflags! {
    /// Which interactions a rendered node content listens to.
    ///
    /// Returned by renderers alongside their markup so a surface knows how to route
    /// its events through [`NodeRelays::dispatch`](crate::NodeRelays::dispatch).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventBindings: u8 {
        /// A click requests expand/collapse.
        const TOGGLE_ON_CLICK = 0b0000_0001;
        /// A click is reported to [`NodeHandlers::on_click`].
        const CLICK           = 0b0000_0010;
        /// Pointer entry is reported to [`NodeHandlers::on_pointer_enter`].
        const POINTER_ENTER   = 0b0000_0100;
        /// Pointer exit is reported to [`NodeHandlers::on_pointer_leave`].
        const POINTER_LEAVE   = 0b0000_1000;
    }
}

impl Default for EventBindings {
    fn default() -> Self {
        Self::all()
    }
}
