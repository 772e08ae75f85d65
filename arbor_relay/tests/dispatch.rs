// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing surface interactions through declared bindings.

use std::cell::RefCell;

use arbor_node::{NodeId, RawNodeDatum, TreeNodeDatum};
use arbor_relay::{EventBindings, Interaction, NodeHandlers, NodeRelays};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Toggle(String),
    Click(String, &'static str),
    Enter(String, &'static str),
    Leave(String, &'static str),
    AddChildren(String, Vec<String>),
}

#[derive(Default)]
struct Owner {
    calls: RefCell<Vec<Call>>,
}

impl NodeHandlers for Owner {
    type Event = &'static str;

    fn on_toggle(&self, id: &NodeId) {
        self.calls.borrow_mut().push(Call::Toggle(id.to_string()));
    }

    fn on_click(&self, id: &NodeId, event: &&'static str) {
        self.calls.borrow_mut().push(Call::Click(id.to_string(), *event));
    }

    fn on_pointer_enter(&self, id: &NodeId, event: &&'static str) {
        self.calls.borrow_mut().push(Call::Enter(id.to_string(), *event));
    }

    fn on_pointer_leave(&self, id: &NodeId, event: &&'static str) {
        self.calls.borrow_mut().push(Call::Leave(id.to_string(), *event));
    }

    fn on_add_children(&self, id: &NodeId, children: Vec<RawNodeDatum>) {
        self.calls.borrow_mut().push(Call::AddChildren(
            id.to_string(),
            children.into_iter().map(|c| c.name).collect(),
        ));
    }

    fn dataset(&self) -> Vec<TreeNodeDatum> {
        vec![
            TreeNodeDatum::new("root", "Root").with_children(vec![TreeNodeDatum::new("leaf", "Leaf")]),
        ]
    }
}

fn id(s: &str) -> String {
    s.to_string()
}

#[rstest]
#[case::default_click(Interaction::Click, EventBindings::all(), vec![Call::Toggle(id("n")), Call::Click(id("n"), "ev")])]
#[case::toggle_only(Interaction::Click, EventBindings::TOGGLE_ON_CLICK, vec![Call::Toggle(id("n"))])]
#[case::click_only(Interaction::Click, EventBindings::CLICK, vec![Call::Click(id("n"), "ev")])]
#[case::enter(Interaction::PointerEnter, EventBindings::all(), vec![Call::Enter(id("n"), "ev")])]
#[case::leave(Interaction::PointerLeave, EventBindings::all(), vec![Call::Leave(id("n"), "ev")])]
#[case::unbound(Interaction::PointerLeave, EventBindings::POINTER_ENTER, vec![])]
fn dispatch_follows_bindings(
    #[case] interaction: Interaction,
    #[case] bindings: EventBindings,
    #[case] expected: Vec<Call>,
) {
    let owner = Owner::default();
    let node = NodeId::from("n");
    let handled = NodeRelays::new(&node, &owner).dispatch(interaction, &"ev", bindings);
    assert_eq!(handled, !expected.is_empty());
    assert_eq!(*owner.calls.borrow(), expected);
}

#[test]
fn toggle_reaches_owner_exactly_once() {
    let owner = Owner::default();
    let node = NodeId::from("n42");
    NodeRelays::new(&node, &owner).toggle();
    assert_eq!(*owner.calls.borrow(), vec![Call::Toggle(id("n42"))]);
}

#[test]
fn add_children_and_fetch_dataset_are_forwarded() {
    let owner = Owner::default();
    let node = NodeId::from("root");
    let relays = NodeRelays::new(&node, &owner);
    relays.add_children(vec![RawNodeDatum::new("x"), RawNodeDatum::new("y")]);
    assert_eq!(
        *owner.calls.borrow(),
        vec![Call::AddChildren(id("root"), vec![id("x"), id("y")])]
    );
    let data = relays.fetch_dataset();
    assert_eq!(data.len(), 1);
    assert!(data[0].is_branch());
}
