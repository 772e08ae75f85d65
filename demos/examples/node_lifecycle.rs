// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single node controller through enter, update and leave.
//!
//! Drives one [`NodeController`] against a printing element with a fixed
//! 60 Hz clock and shows which updates the change predicate lets through.
//!
//! Run:
//! - `cargo run -p arbor_demos --example node_lifecycle`
//! - `RUST_LOG=arbor_node=trace cargo run -p arbor_demos --example node_lifecycle`

use std::time::Duration;

use arbor_node::{
    ElementHandle, Lifecycle, NodeController, NodeInputs, Orientation, Phase, Subscription,
    Translation, TransitionConfig,
};
use kurbo::Point;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct Printer {
    transform: Option<Translation>,
    opacity: Option<f64>,
}

impl ElementHandle for Printer {
    fn set_transform(&mut self, transform: Translation) {
        if self.transform != Some(transform) {
            println!("    transform={transform}");
        }
        self.transform = Some(transform);
    }

    fn set_opacity(&mut self, opacity: f64) {
        if self.opacity != Some(opacity) {
            println!("    opacity={opacity:.3}");
        }
        self.opacity = Some(opacity);
    }
}

fn run_until_settled(node: &mut NodeController, el: &mut Printer, now: &mut Duration) {
    while node.tick(*now, el) {
        *now += FRAME;
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let parent = Point::new(0.0, 0.0);
    let transition = TransitionConfig::animated(Duration::from_millis(120));
    let inputs = NodeInputs::new(Point::new(40.0, 80.0), Some(parent))
        .with_orientation(Orientation::Vertical)
        .with_transition(transition);

    let mut el = Printer::default();
    let mut node = NodeController::new("child".into(), inputs);
    let mut now = Duration::ZERO;

    println!("enter");
    node.enter(now, &mut el);
    run_until_settled(&mut node, &mut el, &mut now);

    println!("update: parent moved (ignored)");
    let moved_parent = NodeInputs {
        parent: Some(Point::new(10.0, 10.0)),
        ..inputs
    };
    let recomputed = node.update(moved_parent, now, &mut el);
    println!("    recomputed={recomputed}");

    println!("update: subscription bumped");
    let bumped = NodeInputs {
        subscription: Subscription::default().bump(),
        ..moved_parent
    };
    let recomputed = node.update(bumped, now, &mut el);
    println!("    recomputed={recomputed}");
    run_until_settled(&mut node, &mut el, &mut now);

    println!("update: position changed");
    let recomputed = node.update(
        NodeInputs {
            position: Point::new(60.0, 80.0),
            ..bumped
        },
        now,
        &mut el,
    );
    println!("    recomputed={recomputed}");
    run_until_settled(&mut node, &mut el, &mut now);

    println!("leave (retreats toward the current parent)");
    node.leave(Box::new(|| println!("    removed")), now, &mut el);
    run_until_settled(&mut node, &mut el, &mut now);
    assert_eq!(node.phase(), Phase::Removed);
}
