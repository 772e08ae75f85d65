// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the host: configuration, layout snapshots, sync reports, elements.

use alloc::string::String;

use arbor_node::{
    ElementHandle, NodeId, Orientation, Subscription, Translation, TransitionConfig, TreeNodeDatum,
};
use kurbo::Point;

/// Settings shared by every node a host mounts.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct HostConfig {
    /// Axis mapping for all nodes.
    pub orientation: Orientation,
    /// Animated or immediate transitions.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub transition: TransitionConfig,
    /// Extra class added to every node element.
    pub node_class_name: Option<String>,
}

/// One node of a layout pass: its record and the points the layout engine assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// The node's record; its identifier keys the mounted controller.
    pub datum: TreeNodeDatum,
    /// Layout position of the node.
    pub position: Point,
    /// Layout position of the parent; `None` for the root.
    pub parent: Option<Point>,
    /// Identifier of the parent, used to find where it sits in later passes.
    pub parent_id: Option<NodeId>,
    /// Token for external state the node depends on.
    pub subscription: Subscription,
}

impl LayoutNode {
    /// A node at `position` under `parent` with the default subscription token.
    pub fn new(datum: TreeNodeDatum, position: Point, parent: Option<Point>) -> Self {
        Self {
            datum,
            position,
            parent,
            parent_id: None,
            subscription: Subscription::default(),
        }
    }

    /// A node at `position` under the parent `parent_id`, laid out at `parent`.
    pub fn child_of(
        datum: TreeNodeDatum,
        position: Point,
        parent_id: NodeId,
        parent: Point,
    ) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(datum, position, Some(parent))
        }
    }
}

/// What a [`NodeHost::sync`](crate::NodeHost::sync) did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Newly mounted nodes.
    pub entered: usize,
    /// Mounted nodes whose transform was recomputed.
    ///
    /// Counts accepted changes; a node recomputed to the target it already had
    /// is included even though it does not move.
    pub updated: usize,
    /// Mounted nodes whose input change did not warrant a recompute.
    pub skipped: usize,
    /// Leaving nodes that came back before their exit completed.
    pub reentered: usize,
    /// Nodes that started leaving.
    pub left: usize,
    /// Nodes discarded because their exit completed.
    pub removed: usize,
}

/// In-memory stand-in for a rendered `<g>` element.
///
/// Holds the attributes the controller last applied; serialized by
/// [`NodeHost::render_svg`](crate::NodeHost::render_svg).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgElement {
    transform: Translation,
    opacity: f64,
}

impl SvgElement {
    /// An element showing `transform` at `opacity`.
    pub const fn new(transform: Translation, opacity: f64) -> Self {
        Self { transform, opacity }
    }

    /// The `transform` attribute.
    pub const fn transform(&self) -> Translation {
        self.transform
    }

    /// The `opacity` style.
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl ElementHandle for SvgElement {
    fn set_transform(&mut self, transform: Translation) {
        self.transform = transform;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}
