// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable node content.
//!
//! ## Overview
//!
//! A [`NodeRenderer`] turns a node's record into SVG markup. It receives the
//! record, the full dataset (read-only) and the node's [`NodeRelays`], and returns
//! [`NodeContent`]: the markup plus the [`EventBindings`] the markup listens to.
//!
//! Closures with the right signature are renderers. When the owner supplies
//! none, [`DefaultNodeRenderer`] draws a circle and a label.

use alloc::format;
use alloc::string::{String, ToString};

use arbor_node::{SvgNumber, TreeNodeDatum};

use crate::handlers::{EventBindings, NodeHandlers};
use crate::relay::NodeRelays;
use crate::svg::Escaped;

/// Inputs handed to a renderer.
pub struct RenderProps<'a, H: NodeHandlers + ?Sized> {
    /// The node's own record.
    pub datum: &'a TreeNodeDatum,
    /// The whole dataset, for content that needs global context.
    pub tree_data: &'a [TreeNodeDatum],
    /// The owner's handlers bound to this node.
    pub relays: NodeRelays<'a, H>,
}

impl<H: NodeHandlers + ?Sized> core::fmt::Debug for RenderProps<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderProps")
            .field("datum", &self.datum.id())
            .field("tree_data_len", &self.tree_data.len())
            .field("relays", &self.relays)
            .finish()
    }
}

/// Rendered node content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeContent {
    /// SVG markup placed inside the node's `<g>` element.
    pub markup: String,
    /// Interactions the markup listens to.
    pub bindings: EventBindings,
}

/// Draws the content of a node.
pub trait NodeRenderer<H: NodeHandlers + ?Sized> {
    /// Render `props.datum`.
    fn render(&self, props: &RenderProps<'_, H>) -> NodeContent;
}

impl<H, F> NodeRenderer<H> for F
where
    H: NodeHandlers + ?Sized,
    F: Fn(&RenderProps<'_, H>) -> NodeContent,
{
    fn render(&self, props: &RenderProps<'_, H>) -> NodeContent {
        self(props)
    }
}

/// Circle plus label: the node name as a title line and one line per attribute.
///
/// A click toggles the node and reports the click; pointer entry and exit are
/// reported as well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DefaultNodeRenderer {
    /// Circle radius.
    pub radius: f64,
    /// Horizontal offset of the label from the node's center.
    pub label_x: f64,
}

impl Default for DefaultNodeRenderer {
    fn default() -> Self {
        Self {
            radius: 15.0,
            label_x: 40.0,
        }
    }
}

impl<H: NodeHandlers + ?Sized> NodeRenderer<H> for DefaultNodeRenderer {
    fn render(&self, props: &RenderProps<'_, H>) -> NodeContent {
        let datum = props.datum;
        let x = SvgNumber(self.label_x);
        let mut markup = format!(
            "<circle r=\"{}\"></circle>\
             <g class=\"arbor-label\">\
             <text class=\"arbor-label__title\" text-anchor=\"start\" x=\"{x}\">{}</text>\
             <text class=\"arbor-label__attributes\">",
            SvgNumber(self.radius),
            Escaped(&datum.name),
        );
        for (key, value) in &datum.attributes {
            let value = value.to_string();
            markup.push_str(&format!(
                "<tspan x=\"{x}\" dy=\"1.2em\">{}: {}</tspan>",
                Escaped(key),
                Escaped(&value),
            ));
        }
        markup.push_str("</text></g>");
        NodeContent {
            markup,
            bindings: EventBindings::all(),
        }
    }
}

/// Render with `renderer`, or with [`DefaultNodeRenderer`] when there is none.
pub fn render_content<H: NodeHandlers + ?Sized>(
    renderer: Option<&dyn NodeRenderer<H>>,
    props: &RenderProps<'_, H>,
) -> NodeContent {
    match renderer {
        Some(custom) => custom.render(props),
        None => DefaultNodeRenderer::default().render(props),
    }
}
