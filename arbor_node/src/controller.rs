// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node transform controller: one state machine per visible node.
//!
//! ## Phases
//!
//! `Entering → Settled → Updating → Leaving → Removed`
//!
//! - A fresh controller sits at its *origin transform* with opacity `0`.
//! - [`Lifecycle::enter`] moves it to its layout position at opacity `1`, so the node
//!   appears to grow out of its parent.
//! - [`Lifecycle::update`] stores new inputs and, when [`should_recompute`] says so,
//!   moves the node to its new position.
//! - [`Lifecycle::leave`] moves it back to the parent's current position at opacity `0`,
//!   then runs the completion callback. Only then may the owner discard it.
//!
//! ## Supersession
//!
//! At most one transition is active. Starting another one drops the previous
//! transition's completion callback without running it and starts from the
//! current, possibly interpolated, state. Every started transition bumps a
//! generation counter; completion only runs the callback of the transition that
//! carries the current generation.

use core::time::Duration;

use kurbo::Point;
use tracing::{debug, trace};

use crate::element::ElementHandle;
use crate::transform::{Translation, compute_origin_transform, compute_transform};
use crate::transition::{DoneCallback, Transition, TransitionConfig, Visual};
use crate::types::{NodeId, Orientation, Subscription};

/// Lifecycle phase of a node controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created, or growing out of its parent.
    Entering,
    /// At its layout position, fully opaque, nothing in flight.
    Settled,
    /// Moving to a new layout position.
    Updating,
    /// Retreating into its parent; the completion callback is pending.
    Leaving,
    /// Terminal; the owner may discard the controller.
    Removed,
}

/// Everything a controller derives its transform from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeInputs {
    /// Layout position of the node.
    pub position: Point,
    /// Current layout position of the parent; `None` for the root.
    pub parent: Option<Point>,
    /// Axis mapping.
    pub orientation: Orientation,
    /// Token for external state the node depends on.
    pub subscription: Subscription,
    /// Animated or immediate application.
    pub transition: TransitionConfig,
}

impl NodeInputs {
    /// Inputs for a node at `position` under `parent`, with default orientation and transitions.
    pub fn new(position: Point, parent: Option<Point>) -> Self {
        Self {
            position,
            parent,
            orientation: Orientation::default(),
            subscription: Subscription::default(),
            transition: TransitionConfig::default(),
        }
    }

    /// Replace the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Replace the transition configuration.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Replace the subscription token.
    #[must_use]
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = subscription;
        self
    }
}

/// Decide whether a change of inputs warrants recomputing the node's transform.
///
/// True iff the subscription token, either coordinate of the position, or the
/// orientation differ. The parent position and the transition configuration do
/// not participate, and nothing else about the node (its record, renderer or
/// handlers) is an input at all. Large trees rely on this to skip work for
/// unrelated changes.
///
/// ```
/// use arbor_node::{NodeInputs, should_recompute};
/// use kurbo::Point;
///
/// let prev = NodeInputs::new(Point::new(10.0, 20.0), None);
/// let moved = NodeInputs { position: Point::new(11.0, 20.0), ..prev };
/// let reparented = NodeInputs { parent: Some(Point::new(5.0, 5.0)), ..prev };
/// assert!(should_recompute(&prev, &moved));
/// assert!(!should_recompute(&prev, &reparented));
/// ```
pub fn should_recompute(prev: &NodeInputs, next: &NodeInputs) -> bool {
    prev.subscription != next.subscription
        || prev.position.x != next.position.x
        || prev.position.y != next.position.y
        || prev.orientation != next.orientation
}

/// Per-node state owned by exactly one controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControllerState {
    /// Transform currently on screen, possibly mid-interpolation.
    pub current_transform: Translation,
    /// Opacity currently on screen; starts at `0`.
    pub opacity: f64,
}

/// The capability an owning container drives a node through.
pub trait Lifecycle {
    /// The node became visible.
    fn enter<E: ElementHandle + ?Sized>(&mut self, now: Duration, element: &mut E);

    /// New inputs arrived.
    ///
    /// Returns `true` when [`should_recompute`] accepted the change and the node
    /// could take a new target. A transition starts only if the recomputed target
    /// differs from the current one, so a subscription bump on a node that did not
    /// move returns `true` without touching the element.
    fn update<E: ElementHandle + ?Sized>(
        &mut self,
        next: NodeInputs,
        now: Duration,
        element: &mut E,
    ) -> bool;

    /// The node is scheduled for removal; `done` runs once it may be discarded.
    fn leave<E: ElementHandle + ?Sized>(
        &mut self,
        done: DoneCallback,
        now: Duration,
        element: &mut E,
    );
}

/// Position and transition state machine for a single tree node.
///
/// ## Example
///
/// ```
/// use arbor_node::{Detached, Lifecycle, NodeController, NodeInputs, Orientation, Phase};
/// use core::time::Duration;
/// use kurbo::Point;
///
/// let inputs = NodeInputs::new(Point::new(10.0, 20.0), Some(Point::ORIGIN))
///     .with_orientation(Orientation::Vertical);
/// let mut node = NodeController::new("child".into(), inputs);
/// assert_eq!(node.state().current_transform.to_string(), "translate(0,0)");
/// assert_eq!(node.state().opacity, 0.0);
///
/// node.enter(Duration::ZERO, &mut Detached);
/// assert_eq!(node.phase(), Phase::Settled);
/// assert_eq!(node.state().current_transform.to_string(), "translate(10,20)");
/// assert_eq!(node.state().opacity, 1.0);
/// ```
#[derive(Debug)]
pub struct NodeController {
    id: NodeId,
    inputs: NodeInputs,
    state: ControllerState,
    phase: Phase,
    active: Option<Transition>,
    generation: u64,
}

impl NodeController {
    /// Create a controller positioned at its origin transform with opacity `0`.
    pub fn new(id: NodeId, inputs: NodeInputs) -> Self {
        let state = ControllerState {
            current_transform: compute_origin_transform(inputs.parent, inputs.orientation),
            opacity: 0.0,
        };
        Self {
            id,
            inputs,
            state,
            phase: Phase::Entering,
            active: None,
            generation: 0,
        }
    }

    /// The node's stable identifier.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The most recently supplied inputs.
    pub fn inputs(&self) -> &NodeInputs {
        &self.inputs
    }

    /// What is currently on screen.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of transitions started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an animated transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Where the node settles for its current inputs.
    pub fn target_transform(&self) -> Translation {
        compute_transform(self.inputs.position, self.inputs.orientation)
    }

    /// Where the node enters from and leaves to: its parent's current position.
    pub fn origin_transform(&self) -> Translation {
        compute_origin_transform(self.inputs.parent, self.inputs.orientation)
    }

    /// Move to the target of the current inputs, whether or not they changed.
    ///
    /// Does nothing when the node is already at, or already heading to, that
    /// target. Has no effect before entry or during exit.
    pub fn refresh<E: ElementHandle + ?Sized>(&mut self, now: Duration, element: &mut E) {
        if !self.is_retargetable() {
            return;
        }
        let to = Visual {
            transform: self.target_transform(),
            opacity: 1.0,
        };
        let unchanged = match &self.active {
            Some(active) => active.to == to,
            None => self.visual() == to,
        };
        if unchanged {
            trace!(node = %self.id, "already at target");
            return;
        }
        self.begin(Phase::Updating, to, None, now, element);
    }

    /// Advance an animated transition to `now`.
    ///
    /// Returns `true` while a transition is still running. When one completes,
    /// its final values are applied before its completion callback runs.
    pub fn tick<E: ElementHandle + ?Sized>(&mut self, now: Duration, element: &mut E) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let (visual, finished) = active.sample(now);
        self.apply(visual, element);
        if !finished {
            return true;
        }
        if let Some(active) = self.active.take() {
            if active.generation == self.generation {
                self.finish(active.done);
            }
        }
        false
    }

    /// Entered and not leaving.
    fn is_retargetable(&self) -> bool {
        match self.phase {
            Phase::Leaving | Phase::Removed => false,
            Phase::Entering => self.active.is_some(),
            Phase::Settled | Phase::Updating => true,
        }
    }

    fn visual(&self) -> Visual {
        Visual {
            transform: self.state.current_transform,
            opacity: self.state.opacity,
        }
    }

    fn apply<E: ElementHandle + ?Sized>(&mut self, visual: Visual, element: &mut E) {
        self.state.current_transform = visual.transform;
        self.state.opacity = visual.opacity;
        element.set_transform(visual.transform);
        element.set_opacity(visual.opacity);
    }

    fn begin<E: ElementHandle + ?Sized>(
        &mut self,
        phase: Phase,
        to: Visual,
        done: Option<DoneCallback>,
        now: Duration,
        element: &mut E,
    ) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(superseded) = self.active.take() {
            debug!(
                node = %self.id,
                generation = superseded.generation,
                "transition superseded"
            );
        }
        self.phase = phase;
        let TransitionConfig {
            enable_legacy_transitions,
            transition_duration,
        } = self.inputs.transition;
        debug!(
            node = %self.id,
            ?phase,
            generation = self.generation,
            target = %to.transform,
            animated = enable_legacy_transitions,
            "transition begun"
        );
        if enable_legacy_transitions {
            self.active = Some(Transition {
                from: self.visual(),
                to,
                start: now,
                duration: transition_duration,
                generation: self.generation,
                done,
            });
        } else {
            self.apply(to, element);
            self.finish(done);
        }
    }

    fn finish(&mut self, done: Option<DoneCallback>) {
        self.phase = match self.phase {
            Phase::Leaving | Phase::Removed => Phase::Removed,
            _ => Phase::Settled,
        };
        debug!(node = %self.id, phase = ?self.phase, "transition finished");
        if let Some(done) = done {
            done();
        }
    }
}

impl Lifecycle for NodeController {
    fn enter<E: ElementHandle + ?Sized>(&mut self, now: Duration, element: &mut E) {
        let to = Visual {
            transform: self.target_transform(),
            opacity: 1.0,
        };
        match self.phase {
            Phase::Entering if self.active.is_none() => {}
            // Re-entry mid-exit: the pending leave callback is dropped.
            Phase::Leaving => {}
            _ => {
                trace!(node = %self.id, phase = ?self.phase, "enter ignored");
                return;
            }
        }
        self.begin(Phase::Entering, to, None, now, element);
    }

    fn update<E: ElementHandle + ?Sized>(
        &mut self,
        next: NodeInputs,
        now: Duration,
        element: &mut E,
    ) -> bool {
        let recompute = should_recompute(&self.inputs, &next);
        self.inputs = next;
        if !recompute || !self.is_retargetable() {
            trace!(node = %self.id, phase = ?self.phase, "update skipped");
            return false;
        }
        self.refresh(now, element);
        true
    }

    fn leave<E: ElementHandle + ?Sized>(
        &mut self,
        done: DoneCallback,
        now: Duration,
        element: &mut E,
    ) {
        if self.phase == Phase::Removed {
            done();
            return;
        }
        let to = Visual {
            transform: self.origin_transform(),
            opacity: 0.0,
        };
        self.begin(Phase::Leaving, to, Some(done), now, element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        transforms: Vec<Translation>,
        opacities: Vec<f64>,
    }

    impl ElementHandle for Recorder {
        fn set_transform(&mut self, transform: Translation) {
            self.transforms.push(transform);
        }

        fn set_opacity(&mut self, opacity: f64) {
            self.opacities.push(opacity);
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn counter() -> (Rc<Cell<u32>>, DoneCallback) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    fn vertical(x: f64, y: f64, parent: Option<Point>, transition: TransitionConfig) -> NodeInputs {
        NodeInputs::new(Point::new(x, y), parent)
            .with_orientation(Orientation::Vertical)
            .with_transition(transition)
    }

    #[test]
    fn predicate_tracks_position_orientation_and_subscription() {
        let prev = vertical(1.0, 2.0, None, TransitionConfig::IMMEDIATE);
        assert!(!should_recompute(&prev, &prev));
        let x = NodeInputs {
            position: Point::new(9.0, 2.0),
            ..prev
        };
        assert!(should_recompute(&prev, &x));
        let y = NodeInputs {
            position: Point::new(1.0, 9.0),
            ..prev
        };
        assert!(should_recompute(&prev, &y));
        assert!(should_recompute(
            &prev,
            &prev.with_orientation(Orientation::Horizontal)
        ));
        assert!(should_recompute(
            &prev,
            &prev.with_subscription(prev.subscription.bump())
        ));
    }

    #[test]
    fn predicate_ignores_parent_and_transition_config() {
        let prev = vertical(1.0, 2.0, None, TransitionConfig::IMMEDIATE);
        let parent = NodeInputs {
            parent: Some(Point::new(4.0, 4.0)),
            ..prev
        };
        assert!(!should_recompute(&prev, &parent));
        let animated = prev.with_transition(TransitionConfig::animated(ms(300)));
        assert!(!should_recompute(&prev, &animated));
    }

    #[test]
    fn immediate_enter_lands_synchronously() {
        let mut el = Recorder::default();
        let mut node = NodeController::new(
            "n".into(),
            vertical(10.0, 20.0, Some(Point::ORIGIN), TransitionConfig::IMMEDIATE),
        );
        assert_eq!(node.state().current_transform, Translation::ZERO);
        assert_eq!(node.state().opacity, 0.0);
        assert_eq!(node.phase(), Phase::Entering);

        node.enter(ms(0), &mut el);
        assert_eq!(node.phase(), Phase::Settled);
        assert_eq!(el.transforms, [Translation::new(10.0, 20.0)]);
        assert_eq!(el.opacities, [1.0]);
        assert!(!node.is_animating());
    }

    #[test]
    fn animated_enter_interpolates_from_parent() {
        let mut el = Recorder::default();
        let mut node = NodeController::new(
            "n".into(),
            vertical(
                10.0,
                20.0,
                Some(Point::ORIGIN),
                TransitionConfig::animated(ms(100)),
            ),
        );
        node.enter(ms(1_000), &mut el);
        assert_eq!(node.phase(), Phase::Entering);
        assert!(el.transforms.is_empty(), "nothing applied before the first frame");

        assert!(node.tick(ms(1_050), &mut el));
        let mid = node.state();
        assert!((mid.current_transform.x() - 5.0).abs() < 1e-9);
        assert!((mid.opacity - 0.5).abs() < 1e-9);

        assert!(!node.tick(ms(1_100), &mut el));
        assert_eq!(node.phase(), Phase::Settled);
        assert_eq!(node.state().current_transform, Translation::new(10.0, 20.0));
        assert_eq!(node.state().opacity, 1.0);
        assert!(!node.tick(ms(1_200), &mut el));
    }

    #[test]
    fn immediate_leave_fires_done_before_returning() {
        let mut el = Recorder::default();
        let mut node = NodeController::new(
            "n".into(),
            vertical(10.0, 20.0, Some(Point::ORIGIN), TransitionConfig::IMMEDIATE),
        );
        node.enter(ms(0), &mut el);
        let (count, done) = counter();
        node.leave(done, ms(5), &mut el);
        assert_eq!(count.get(), 1);
        assert_eq!(node.phase(), Phase::Removed);
        assert_eq!(node.state().current_transform, Translation::ZERO);
        assert_eq!(node.state().opacity, 0.0);
    }

    /// Publishes the last applied opacity so a completion callback can observe it.
    struct SharedOpacity(Rc<Cell<f64>>);

    impl ElementHandle for SharedOpacity {
        fn set_transform(&mut self, _transform: Translation) {}

        fn set_opacity(&mut self, opacity: f64) {
            self.0.set(opacity);
        }
    }

    #[test]
    fn animated_leave_fires_done_once_after_final_values() {
        let on_screen = Rc::new(Cell::new(0.0));
        let mut el = SharedOpacity(on_screen.clone());
        let mut node = NodeController::new(
            "n".into(),
            vertical(
                10.0,
                20.0,
                Some(Point::ORIGIN),
                TransitionConfig::animated(ms(100)),
            ),
        );
        node.enter(ms(0), &mut el);
        node.tick(ms(100), &mut el);
        assert_eq!(on_screen.get(), 1.0);

        let count = Rc::new(Cell::new(0_u32));
        let seen = Rc::new(Cell::new(None));
        let (c, s, o) = (count.clone(), seen.clone(), on_screen.clone());
        node.leave(
            Box::new(move || {
                c.set(c.get() + 1);
                s.set(Some(o.get()));
            }),
            ms(200),
            &mut el,
        );
        assert_eq!(node.phase(), Phase::Leaving);
        assert!(node.tick(ms(250), &mut el));
        assert_eq!(count.get(), 0);

        assert!(!node.tick(ms(300), &mut el));
        assert_eq!(count.get(), 1);
        assert_eq!(seen.get(), Some(0.0));
        assert_eq!(node.phase(), Phase::Removed);
        assert_eq!(node.state().current_transform, Translation::ZERO);

        node.tick(ms(400), &mut el);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn update_retargets_without_fading() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, None, TransitionConfig::IMMEDIATE);
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);

        let moved = NodeInputs {
            position: Point::new(30.0, 20.0),
            ..inputs
        };
        assert!(node.update(moved, ms(10), &mut el));
        assert_eq!(node.phase(), Phase::Settled);
        assert_eq!(node.state().current_transform, Translation::new(30.0, 20.0));
        assert_eq!(node.state().opacity, 1.0);
    }

    #[test]
    fn skipped_update_still_refreshes_parent_for_exit() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, Some(Point::ORIGIN), TransitionConfig::IMMEDIATE);
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);
        let parent_moved = NodeInputs {
            parent: Some(Point::new(5.0, 6.0)),
            ..inputs
        };
        assert!(!node.update(parent_moved, ms(1), &mut el));
        assert_eq!(el.transforms.len(), 1);

        let (_count, done) = counter();
        node.leave(done, ms(2), &mut el);
        assert_eq!(node.state().current_transform, Translation::new(5.0, 6.0));
    }

    #[test]
    fn subscription_bump_in_place_recomputes_without_a_transition() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, None, TransitionConfig::animated(ms(100)));
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);
        node.tick(ms(100), &mut el);
        let generation = node.generation();
        let writes = el.transforms.len();

        let bumped = inputs.with_subscription(inputs.subscription.bump());
        assert!(node.update(bumped, ms(200), &mut el));
        assert_eq!(node.generation(), generation);
        assert!(!node.is_animating());
        assert_eq!(el.transforms.len(), writes);
        assert_eq!(node.phase(), Phase::Settled);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, None, TransitionConfig::animated(ms(100)));
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);
        node.tick(ms(100), &mut el);
        let generation = node.generation();
        let writes = el.transforms.len();

        node.refresh(ms(200), &mut el);
        node.refresh(ms(210), &mut el);
        assert_eq!(node.generation(), generation);
        assert!(!node.is_animating());
        assert_eq!(el.transforms.len(), writes);
        assert_eq!(node.phase(), Phase::Settled);
    }

    #[test]
    fn update_mid_flight_starts_from_interpolated_state() {
        let mut el = Recorder::default();
        let inputs = vertical(100.0, 0.0, None, TransitionConfig::animated(ms(100)));
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);
        node.tick(ms(50), &mut el);
        let mid = node.state().current_transform;
        assert!((mid.x() - 50.0).abs() < 1e-9);

        let moved = NodeInputs {
            position: Point::new(0.0, 100.0),
            ..inputs
        };
        assert!(node.update(moved, ms(50), &mut el));
        assert_eq!(node.phase(), Phase::Updating);
        // First frame of the new transition still shows the interpolated start.
        node.tick(ms(50), &mut el);
        assert_eq!(node.state().current_transform, mid);

        node.tick(ms(150), &mut el);
        assert_eq!(node.state().current_transform, Translation::new(0.0, 100.0));
        assert_eq!(node.state().opacity, 1.0);
        assert_eq!(node.phase(), Phase::Settled);
    }

    #[test]
    fn reentering_mid_exit_drops_leave_callback() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, None, TransitionConfig::animated(ms(100)));
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);
        node.tick(ms(100), &mut el);

        let (count, done) = counter();
        node.leave(done, ms(200), &mut el);
        node.tick(ms(250), &mut el);
        node.enter(ms(250), &mut el);
        assert_eq!(node.phase(), Phase::Entering);

        node.tick(ms(400), &mut el);
        assert_eq!(count.get(), 0);
        assert_eq!(node.phase(), Phase::Settled);
        assert_eq!(node.state().opacity, 1.0);
    }

    #[test]
    fn second_leave_supersedes_first() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, None, TransitionConfig::animated(ms(100)));
        let mut node = NodeController::new("n".into(), inputs);
        node.enter(ms(0), &mut el);
        node.tick(ms(100), &mut el);

        let (first, done_a) = counter();
        let (second, done_b) = counter();
        node.leave(done_a, ms(100), &mut el);
        node.leave(done_b, ms(150), &mut el);
        node.tick(ms(300), &mut el);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn update_while_leaving_only_stores_inputs() {
        let mut el = Recorder::default();
        let inputs = vertical(10.0, 20.0, None, TransitionConfig::animated(ms(100)));
        let mut node = NodeController::new("n".into(), inputs);
        assert!(!node.update(inputs.with_subscription(Subscription(7)), ms(0), &mut el));
        node.enter(ms(0), &mut el);
        node.tick(ms(100), &mut el);

        let (count, done) = counter();
        node.leave(done, ms(100), &mut el);
        let generation = node.generation();
        let moved = NodeInputs {
            position: Point::new(50.0, 50.0),
            ..inputs
        };
        assert!(!node.update(moved, ms(120), &mut el));
        assert_eq!(node.generation(), generation);
        assert_eq!(node.inputs().position, Point::new(50.0, 50.0));
        node.tick(ms(200), &mut el);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn leave_after_removal_fires_immediately() {
        let mut el = Recorder::default();
        let mut node =
            NodeController::new("n".into(), vertical(1.0, 1.0, None, TransitionConfig::IMMEDIATE));
        node.enter(ms(0), &mut el);
        let (first, done) = counter();
        node.leave(done, ms(1), &mut el);
        let (second, done) = counter();
        node.leave(done, ms(2), &mut el);
        assert_eq!((first.get(), second.get()), (1, 1));
    }

    #[test]
    fn enter_twice_is_a_noop() {
        let mut el = Recorder::default();
        let mut node =
            NodeController::new("n".into(), vertical(1.0, 1.0, None, TransitionConfig::IMMEDIATE));
        node.enter(ms(0), &mut el);
        node.enter(ms(1), &mut el);
        assert_eq!(node.generation(), 1);
        assert_eq!(el.transforms.len(), 1);
    }

    #[test]
    fn zero_duration_animation_completes_on_next_tick() {
        let mut el = Recorder::default();
        let mut node = NodeController::new(
            "n".into(),
            vertical(1.0, 1.0, None, TransitionConfig::animated(Duration::ZERO)),
        );
        node.enter(ms(0), &mut el);
        assert_eq!(node.phase(), Phase::Entering);
        assert!(!node.tick(ms(0), &mut el));
        assert_eq!(node.phase(), Phase::Settled);
    }

    #[test]
    fn horizontal_swaps_target_and_origin() {
        let inputs = NodeInputs::new(Point::new(10.0, 20.0), Some(Point::new(1.0, 2.0)))
            .with_orientation(Orientation::Horizontal);
        let node = NodeController::new("n".into(), inputs);
        assert_eq!(node.target_transform(), Translation::new(20.0, 10.0));
        assert_eq!(node.origin_transform(), Translation::new(2.0, 1.0));
        assert_eq!(node.state().current_transform, Translation::new(2.0, 1.0));
    }
}
