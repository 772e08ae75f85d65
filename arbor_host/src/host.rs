// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host implementation: keyed mounting, deferred removal, ticking, rendering.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use arbor_node::{Lifecycle, NodeController, NodeId, NodeInputs, Phase, TreeNodeDatum};
use arbor_relay::{
    EventBindings, Interaction, NodeElement, NodeHandlers, NodeRelays, NodeRenderer, RenderProps,
    render_content,
};
use kurbo::Point;
use tracing::{debug, warn};

use crate::types::{HostConfig, LayoutNode, SvgElement, SyncReport};

#[derive(Debug)]
struct Slot {
    controller: NodeController,
    element: SvgElement,
    datum: TreeNodeDatum,
    parent_id: Option<NodeId>,
    bindings: EventBindings,
    // Position in the latest layout pass; leaving nodes keep their last one.
    order: usize,
    seen: u64,
}

/// Owns one [`NodeController`] per visible node, keyed by stable identifier.
///
/// ## Usage
///
/// - Call [`NodeHost::sync`] with every layout pass. New identifiers enter,
///   known ones receive their new inputs, missing ones start leaving.
/// - Call [`NodeHost::tick`] every animation frame while it returns `true`.
/// - A node is discarded only once its exit has completed.
/// - [`NodeHost::render_svg`] serializes the current scene;
///   [`NodeHost::dispatch`] routes surface events to the owner's handlers.
#[derive(Debug, Default)]
pub struct NodeHost {
    config: HostConfig,
    slots: Vec<Option<Slot>>,
    free_list: Vec<usize>,
    by_id: BTreeMap<NodeId, usize>,
    // Filled by exit completion callbacks, drained by `sweep`.
    removals: Rc<RefCell<Vec<NodeId>>>,
    epoch: u64,
}

impl NodeHost {
    /// Create an empty host.
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Replace the configuration; nodes pick it up on the next [`sync`](Self::sync).
    pub fn set_config(&mut self, config: HostConfig) {
        self.config = config;
    }

    /// Number of mounted nodes, including leaving ones.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no node is mounted.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Whether a controller for `id` is mounted.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.by_id.contains_key(id)
    }

    /// The controller mounted for `id`.
    pub fn controller(&self, id: &NodeId) -> Option<&NodeController> {
        self.slot(id).map(|s| &s.controller)
    }

    /// The element mounted for `id`.
    pub fn element(&self, id: &NodeId) -> Option<&SvgElement> {
        self.slot(id).map(|s| &s.element)
    }

    /// Mounted identifiers in render order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.render_order()
            .into_iter()
            .filter_map(|idx| self.slots[idx].as_ref())
            .map(|s| s.controller.id().clone())
            .collect()
    }

    /// Reconcile mounted nodes with a layout pass taken at `now`.
    pub fn sync(&mut self, layout: &[LayoutNode], now: Duration) -> SyncReport {
        self.epoch += 1;
        let epoch = self.epoch;
        let mut report = SyncReport::default();
        let positions: BTreeMap<&NodeId, Point> = layout
            .iter()
            .map(|node| (node.datum.id(), node.position))
            .collect();

        for (order, node) in layout.iter().enumerate() {
            let inputs = NodeInputs {
                position: node.position,
                parent: node.parent,
                orientation: self.config.orientation,
                subscription: node.subscription,
                transition: self.config.transition,
            };
            let id = node.datum.id();
            let Some(&idx) = self.by_id.get(id) else {
                self.mount(node, inputs, order, now);
                report.entered += 1;
                continue;
            };
            let Some(slot) = self.slots[idx].as_mut() else {
                continue;
            };
            if slot.seen == epoch {
                warn!(node = %id, "identifier appears twice in one layout pass");
            }
            slot.seen = epoch;
            slot.order = order;
            slot.datum = node.datum.clone();
            slot.parent_id.clone_from(&node.parent_id);
            if slot.controller.phase() == Phase::Leaving {
                slot.controller.update(inputs, now, &mut slot.element);
                slot.controller.enter(now, &mut slot.element);
                report.reentered += 1;
            } else if slot.controller.update(inputs, now, &mut slot.element) {
                report.updated += 1;
            } else {
                report.skipped += 1;
            }
        }

        for slot in self.slots.iter_mut().flatten() {
            if slot.seen == epoch {
                continue;
            }
            if matches!(slot.controller.phase(), Phase::Leaving | Phase::Removed) {
                continue;
            }
            // Exit toward the parent's point in this pass.
            let parent = slot.parent_id.as_ref().and_then(|p| positions.get(p));
            if let Some(&parent) = parent {
                let inputs = NodeInputs {
                    parent: Some(parent),
                    ..*slot.controller.inputs()
                };
                slot.controller.update(inputs, now, &mut slot.element);
            }
            let removals = Rc::clone(&self.removals);
            let id = slot.controller.id().clone();
            slot.controller.leave(
                Box::new(move || removals.borrow_mut().push(id)),
                now,
                &mut slot.element,
            );
            report.left += 1;
        }

        report.removed = self.sweep();
        debug!(?report, "sync");
        report
    }

    /// Advance every animation to `now`. Returns `true` while any is still running.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut animating = false;
        for slot in self.slots.iter_mut().flatten() {
            animating |= slot.controller.tick(now, &mut slot.element);
        }
        self.sweep();
        animating
    }

    /// Route a surface event on `id` through the bindings of its last rendered content.
    ///
    /// Before the first render every interaction is bound. Returns whether a
    /// handler ran.
    pub fn dispatch<H: NodeHandlers + ?Sized>(
        &self,
        id: &NodeId,
        interaction: Interaction,
        event: &H::Event,
        handlers: &H,
    ) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        NodeRelays::new(slot.controller.id(), handlers).dispatch(interaction, event, slot.bindings)
    }

    /// Serialize all mounted nodes as SVG `<g>` elements, in layout order.
    ///
    /// `renderer` draws each node's content; `None` selects the default renderer.
    pub fn render_svg<H: NodeHandlers + ?Sized>(
        &mut self,
        handlers: &H,
        tree_data: &[TreeNodeDatum],
        renderer: Option<&dyn NodeRenderer<H>>,
    ) -> String {
        let mut out = String::new();
        let class_name = self.config.node_class_name.as_deref();
        for idx in self.render_order() {
            let Some(slot) = self.slots[idx].as_mut() else {
                continue;
            };
            let props = RenderProps {
                datum: &slot.datum,
                tree_data,
                relays: NodeRelays::new(slot.controller.id(), handlers),
            };
            let content = render_content(renderer, &props);
            let element = NodeElement {
                id: slot.controller.id(),
                is_branch: slot.datum.is_branch(),
                class_name,
                transform: slot.element.transform(),
                opacity: slot.element.opacity(),
            };
            out.push_str(&element.to_markup(&content));
            slot.bindings = content.bindings;
        }
        out
    }

    // --- internals ---

    fn slot(&self, id: &NodeId) -> Option<&Slot> {
        let &idx = self.by_id.get(id)?;
        self.slots.get(idx)?.as_ref()
    }

    fn mount(&mut self, node: &LayoutNode, inputs: NodeInputs, order: usize, now: Duration) {
        let id = node.datum.id().clone();
        let mut controller = NodeController::new(id.clone(), inputs);
        let state = controller.state();
        let mut element = SvgElement::new(state.current_transform, state.opacity);
        controller.enter(now, &mut element);
        let slot = Slot {
            controller,
            element,
            datum: node.datum.clone(),
            parent_id: node.parent_id.clone(),
            bindings: EventBindings::default(),
            order,
            seen: self.epoch,
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(slot);
            idx
        } else {
            self.slots.push(Some(slot));
            self.slots.len() - 1
        };
        debug!(node = %id, slot = idx, "mounted");
        self.by_id.insert(id, idx);
    }

    /// Discard nodes whose exit completed. Returns how many were discarded.
    fn sweep(&mut self) -> usize {
        let done: Vec<NodeId> = self.removals.borrow_mut().drain(..).collect();
        let mut removed = 0;
        for id in done {
            let Some(&idx) = self.by_id.get(&id) else {
                continue;
            };
            let finished = self.slots[idx]
                .as_ref()
                .is_some_and(|s| s.controller.phase() == Phase::Removed);
            if !finished {
                continue;
            }
            self.slots[idx] = None;
            self.free_list.push(idx);
            self.by_id.remove(&id);
            debug!(node = %id, slot = idx, "discarded");
            removed += 1;
        }
        removed
    }

    fn render_order(&self) -> Vec<usize> {
        let mut order: Vec<(usize, &NodeId, usize)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(idx, s)| s.as_ref().map(|s| (s.order, s.controller.id(), idx)))
            .collect();
        order.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        order.into_iter().map(|(_, _, idx)| idx).collect()
    }
}
