// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small org chart driven through a host: expand, toggle, collapse.
//!
//! The host configuration is read from JSON, the layout is a naive
//! depth-times-spacing placement, and clicks are routed back to an owner that
//! flips `collapsed` flags and lays the tree out again.
//!
//! Run:
//! - `cargo run -p arbor_demos --example host_tree`
//! - `RUST_LOG=debug cargo run -p arbor_demos --example host_tree`

use std::cell::RefCell;
use std::time::Duration;

use arbor_host::{HostConfig, LayoutNode, NodeHost};
use arbor_node::{NodeId, RawNodeDatum, TreeNodeDatum};
use arbor_relay::{Interaction, NodeHandlers, NodeRelays};
use kurbo::Point;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CONFIG: &str = r#"{
    "orientation": "vertical",
    "enableLegacyTransitions": true,
    "transitionDuration": 300,
    "nodeClassName": "org-chart"
}"#;

struct Owner {
    tree: RefCell<TreeNodeDatum>,
}

impl Owner {
    fn toggle_in(node: &mut TreeNodeDatum, id: &NodeId) -> bool {
        if node.id() == id {
            node.meta.collapsed = !node.meta.collapsed;
            return true;
        }
        node.children
            .iter_mut()
            .flatten()
            .any(|child| Self::toggle_in(child, id))
    }

    fn layout(&self) -> Vec<LayoutNode> {
        fn walk(
            node: &TreeNodeDatum,
            parent: Option<(&NodeId, Point)>,
            depth: usize,
            row: &mut usize,
            out: &mut Vec<LayoutNode>,
        ) {
            let position = Point::new(*row as f64 * 120.0, depth as f64 * 100.0);
            out.push(match parent {
                Some((id, at)) => LayoutNode::child_of(node.clone(), position, id.clone(), at),
                None => LayoutNode::new(node.clone(), position, None),
            });
            if node.meta.collapsed {
                return;
            }
            let children = node.children.as_deref().unwrap_or_default();
            if children.is_empty() {
                *row += 1;
            }
            for child in children {
                walk(child, Some((node.id(), position)), depth + 1, row, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.tree.borrow(), None, 0, &mut 0, &mut out);
        out
    }
}

impl NodeHandlers for Owner {
    type Event = ();

    fn on_toggle(&self, id: &NodeId) {
        let found = Self::toggle_in(&mut self.tree.borrow_mut(), id);
        tracing::info!(node = %id, found, "toggle");
    }

    fn on_click(&self, id: &NodeId, _event: &()) {
        println!("clicked {id}");
    }

    fn on_add_children(&self, id: &NodeId, children: Vec<RawNodeDatum>) {
        println!("{id} asked for {} more children", children.len());
    }

    fn dataset(&self) -> Vec<TreeNodeDatum> {
        vec![self.tree.borrow().clone()]
    }
}

fn org_chart() -> TreeNodeDatum {
    TreeNodeDatum::new("ceo", "CEO")
        .with_attribute("department", "Production")
        .with_children(vec![
            TreeNodeDatum::new("manager", "Manager")
                .with_attribute("department", "Fabrication")
                .with_children(vec![
                    TreeNodeDatum::new("foreman", "Foreman"),
                    TreeNodeDatum::new("worker", "Worker"),
                ]),
            TreeNodeDatum::new("assistant", "Assistant"),
        ])
}

fn settle(host: &mut NodeHost, now: &mut Duration) {
    while host.tick(*now) {
        *now += Duration::from_millis(16);
    }
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config: HostConfig = serde_json::from_str(CONFIG)?;
    println!("config: {config:?}");

    let owner = Owner {
        tree: RefCell::new(org_chart()),
    };
    let mut host = NodeHost::new(config);
    let mut now = Duration::ZERO;

    let report = host.sync(&owner.layout(), now);
    println!("initial: {report:?}");
    settle(&mut host, &mut now);
    println!("{}\n", host.render_svg(&owner, &owner.dataset(), None));

    // A click on the manager toggles it; its reports retreat into it.
    host.dispatch(&NodeId::from("manager"), Interaction::Click, &(), &owner);
    let report = host.sync(&owner.layout(), now);
    println!("collapse manager: {report:?}");
    settle(&mut host, &mut now);
    println!("{}\n", host.render_svg(&owner, &owner.dataset(), None));

    host.dispatch(&NodeId::from("manager"), Interaction::Click, &(), &owner);
    let report = host.sync(&owner.layout(), now);
    println!("expand manager: {report:?}");
    settle(&mut host, &mut now);
    println!("{}", host.render_svg(&owner, &owner.dataset(), None));

    // Renderers hold relays; they forward straight to the owner.
    let assistant = NodeId::from("assistant");
    let relays = NodeRelays::new(&assistant, &owner);
    relays.add_children(vec![RawNodeDatum::new("Intern")]);
    println!("dataset roots: {}", relays.fetch_dataset().len());
    Ok(())
}
