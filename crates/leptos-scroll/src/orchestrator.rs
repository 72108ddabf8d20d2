//! Animation Orchestrator
//!
//! Owns every scroll-driven and entrance animation registered by one page.
//! Registrations are notified in registration order on each frame; boundary
//! crossings are collected during the frame and dispatched afterwards in
//! viewport order so that the furthest boundary crossed wins.

use crate::stage::Stage;
use crate::trigger::{ScrollRange, TriggerPoint, TriggerRange, Zone};
use crate::tween::{BoundTimeline, Props, Timeline};

pub type ProgressFn = Box<dyn FnMut(f64)>;
pub type EventFn = Box<dyn FnMut()>;

/// Handle returned by every successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(u64);

/// Scroll-bound animation settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBoundSpec {
    pub range: TriggerRange,
    /// Seconds for the reported progress to catch up with the scroll position
    pub scrub: Option<f64>,
    /// Hold the trigger element in place for the length of the range
    pub pin: bool,
}

impl ScrollBoundSpec {
    pub fn new(range: TriggerRange) -> Self {
        Self { range, scrub: None, pin: false }
    }

    pub fn scrub(mut self, lag: f64) -> Self {
        self.scrub = Some(lag);
        self
    }

    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }
}

/// Where tween targets are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targets {
    Document,
    /// Inside each trigger element; [`crate::SELF_TARGET`] is the trigger itself
    WithinTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Enter,
    EnterBack,
}

enum Driver<N> {
    Callback(ProgressFn),
    Timeline(BoundTimeline<N>),
}

struct ScrollBound<N> {
    node: N,
    spec: ScrollBoundSpec,
    range: ScrollRange,
    reported: Option<f64>,
    driver: Driver<N>,
}

impl<N: Clone> ScrollBound<N> {
    fn update<S: Stage<Node = N>>(&mut self, stage: &S, y: f64, dt: f64) {
        let target = self.range.progress(y);
        let value = match (self.spec.scrub, self.reported) {
            (Some(lag), Some(prev)) if lag > 0.0 => approach(prev, target, dt, lag),
            _ => target,
        };
        let inside = self.range.contains(y);
        if self.reported.is_none() && !inside && matches!(self.driver, Driver::Callback(_)) {
            // Remember the starting side without reporting; crossing the range later
            // still delivers its clamped edge value
            self.reported = Some(value);
            return;
        }
        let changed = self.reported.map_or(true, |prev| (prev - value).abs() > f64::EPSILON);
        if !inside && !changed {
            return;
        }

        if self.spec.pin {
            let offset = (y - self.range.start).clamp(0.0, self.range.length());
            stage.apply(&self.node, &Props::new().y(offset));
        }
        match &mut self.driver {
            Driver::Callback(on_progress) => on_progress(value),
            Driver::Timeline(timeline) => timeline.render(stage, value * timeline.duration()),
        }
        self.reported = Some(value);
    }

    fn remeasure<S: Stage<Node = N>>(&mut self, stage: &S, viewport_height: f64) {
        self.range = self.spec.range.resolve(stage.rect(&self.node), viewport_height);
        if self.spec.pin {
            stage.set_pin_spacing(&self.node, self.range.length());
        }
    }
}

/// Exponential catch-up; snaps once within a hair of the target
fn approach(prev: f64, target: f64, dt: f64, lag: f64) -> f64 {
    let k = 1.0 - (-dt / lag).exp();
    let value = prev + (target - prev) * k;
    if (target - value).abs() < 1e-4 {
        target
    } else {
        value
    }
}

struct Boundary<N> {
    node: N,
    trigger: TriggerRange,
    range: ScrollRange,
    zone: Option<Zone>,
    on_enter: EventFn,
    on_enter_back: EventFn,
}

impl<N> Boundary<N> {
    fn update(&mut self, y: f64) -> Option<Crossing> {
        let now = self.range.zone(y);
        let crossing = match (self.zone, now) {
            // A first frame below the start counts as having scrolled past it
            (None | Some(Zone::Before), Zone::Inside | Zone::After) => Some(Crossing::Enter),
            (Some(Zone::After), Zone::Inside | Zone::Before) => Some(Crossing::EnterBack),
            _ => None,
        };
        self.zone = Some(now);
        crossing
    }

    /// Sort key placing crossings in the order the viewport passed them
    fn order_key(&self, crossing: Crossing) -> f64 {
        match crossing {
            Crossing::Enter => self.range.start,
            Crossing::EnterBack => -self.range.end,
        }
    }

    fn fire(&mut self, crossing: Crossing) {
        match crossing {
            Crossing::Enter => (self.on_enter)(),
            Crossing::EnterBack => (self.on_enter_back)(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealState {
    Waiting,
    Playing(f64),
    Done,
}

struct Reveal<N> {
    node: N,
    start: TriggerPoint,
    threshold: f64,
    timeline: BoundTimeline<N>,
    state: RevealState,
}

impl<N: Clone> Reveal<N> {
    fn update<S: Stage<Node = N>>(&mut self, stage: &S, y: f64, dt: f64) {
        match self.state {
            RevealState::Waiting if y >= self.threshold => {
                self.timeline.render(stage, 0.0);
                self.state = RevealState::Playing(0.0);
            }
            RevealState::Playing(elapsed) => {
                let t = elapsed + dt;
                self.timeline.render(stage, t);
                self.state = if t >= self.timeline.duration() {
                    RevealState::Done
                } else {
                    RevealState::Playing(t)
                };
            }
            _ => {}
        }
    }
}

struct Entrance<N> {
    timeline: BoundTimeline<N>,
    elapsed: f64,
    done: bool,
}

impl<N: Clone> Entrance<N> {
    fn update<S: Stage<Node = N>>(&mut self, stage: &S, dt: f64) {
        self.elapsed += dt;
        self.timeline.render(stage, self.elapsed);
        self.done = self.elapsed >= self.timeline.duration();
    }
}

enum Registration<N> {
    ScrollBound(ScrollBound<N>),
    Boundary(Boundary<N>),
    Reveal(Reveal<N>),
    Entrance(Entrance<N>),
}

impl<N> Registration<N> {
    fn finished(&self) -> bool {
        match self {
            Registration::Reveal(reveal) => reveal.state == RevealState::Done,
            Registration::Entrance(entrance) => entrance.done,
            _ => false,
        }
    }
}

/// Per-page registry of scroll and entrance animations
pub struct Orchestrator<S: Stage> {
    slots: Vec<(RegistrationId, Registration<S::Node>)>,
    next_id: u64,
}

impl<S: Stage> Default for Orchestrator<S> {
    fn default() -> Self {
        Self { slots: Vec::new(), next_id: 1 }
    }
}

impl<S: Stage> Orchestrator<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_registered(&self, id: RegistrationId) -> bool {
        self.slots.iter().any(|(slot, _)| *slot == id)
    }

    pub fn unregister(&mut self, id: RegistrationId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot, _)| *slot != id);
        before != self.slots.len()
    }

    /// Drop every registration; their callbacks never fire again
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn push(&mut self, registration: Registration<S::Node>) -> RegistrationId {
        let id = RegistrationId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, registration));
        id
    }

    fn first_match(stage: &S, selector: &str, kind: &str) -> Option<S::Node> {
        let node = stage.query(selector).into_iter().next();
        if node.is_none() {
            log::warn!("{} target `{}` not found, registration skipped", kind, selector);
        }
        node
    }

    /// Report progress through `spec.range` of the first element matching `selector`
    pub fn register_scroll_bound(
        &mut self,
        stage: &S,
        selector: &str,
        spec: ScrollBoundSpec,
        on_progress: impl FnMut(f64) + 'static,
    ) -> Option<RegistrationId> {
        let node = Self::first_match(stage, selector, "scroll-bound")?;
        Some(self.push_scroll_bound(stage, node, spec, Driver::Callback(Box::new(on_progress))))
    }

    /// Drive `timeline` by scroll progress, once per element matching `trigger`
    pub fn register_scrub(
        &mut self,
        stage: &S,
        trigger: &str,
        spec: ScrollBoundSpec,
        timeline: &Timeline,
        targets: Targets,
    ) -> Vec<RegistrationId> {
        let nodes = stage.query(trigger);
        if nodes.is_empty() {
            log::warn!("scrub trigger `{}` not found, registration skipped", trigger);
        }
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            let scope = match targets {
                Targets::Document => None,
                Targets::WithinTrigger => Some(&node),
            };
            if let Some(bound) = timeline.bind(stage, scope) {
                ids.push(self.push_scroll_bound(stage, node.clone(), spec, Driver::Timeline(bound)));
            }
        }
        ids
    }

    fn push_scroll_bound(
        &mut self,
        stage: &S,
        node: S::Node,
        spec: ScrollBoundSpec,
        driver: Driver<S::Node>,
    ) -> RegistrationId {
        let mut bound = ScrollBound {
            node,
            spec,
            range: ScrollRange::default(),
            reported: None,
            driver,
        };
        bound.remeasure(stage, stage.viewport_height());
        self.push(Registration::ScrollBound(bound))
    }

    /// Track entering the section matching `selector` in either direction
    pub fn register_boundary(
        &mut self,
        stage: &S,
        selector: &str,
        trigger: TriggerRange,
        on_enter: impl FnMut() + 'static,
        on_enter_back: impl FnMut() + 'static,
    ) -> Option<RegistrationId> {
        let node = Self::first_match(stage, selector, "boundary")?;
        let range = trigger.resolve(stage.rect(&node), stage.viewport_height());
        Some(self.push(Registration::Boundary(Boundary {
            node,
            trigger,
            range,
            zone: None,
            on_enter: Box::new(on_enter),
            on_enter_back: Box::new(on_enter_back),
        })))
    }

    /// Play `timeline` once, the first time `start` is crossed, per trigger element.
    /// Targets are held at their `from` state until then.
    pub fn register_reveal(
        &mut self,
        stage: &S,
        trigger: &str,
        start: TriggerPoint,
        timeline: &Timeline,
        targets: Targets,
    ) -> Vec<RegistrationId> {
        let nodes = stage.query(trigger);
        if nodes.is_empty() {
            log::warn!("reveal trigger `{}` not found, registration skipped", trigger);
        }
        let viewport_height = stage.viewport_height();
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            let scope = match targets {
                Targets::Document => None,
                Targets::WithinTrigger => Some(&node),
            };
            let Some(bound) = timeline.bind(stage, scope) else {
                continue;
            };
            bound.render(stage, 0.0);
            let threshold = start.resolve(stage.rect(&node), viewport_height);
            ids.push(self.push(Registration::Reveal(Reveal {
                node: node.clone(),
                start,
                threshold,
                timeline: bound,
                state: RevealState::Waiting,
            })));
        }
        ids
    }

    /// Play `timeline` from mount, once; unaffected by scroll and resize
    pub fn register_entrance(&mut self, stage: &S, timeline: &Timeline) -> Option<RegistrationId> {
        let Some(bound) = timeline.bind(stage, None) else {
            log::warn!("entrance timeline matched no elements, registration skipped");
            return None;
        };
        bound.render(stage, 0.0);
        Some(self.push(Registration::Entrance(Entrance {
            timeline: bound,
            elapsed: 0.0,
            done: false,
        })))
    }

    /// Recompute every pixel threshold against the current layout
    pub fn resize(&mut self, stage: &S) {
        let viewport_height = stage.viewport_height();
        for (_, registration) in self.slots.iter_mut() {
            match registration {
                Registration::ScrollBound(bound) => bound.remeasure(stage, viewport_height),
                Registration::Boundary(boundary) => {
                    boundary.range = boundary.trigger.resolve(stage.rect(&boundary.node), viewport_height);
                }
                Registration::Reveal(reveal) => {
                    reveal.threshold = reveal.start.resolve(stage.rect(&reveal.node), viewport_height);
                }
                Registration::Entrance(_) => {}
            }
        }
    }

    /// Advance every registration to scroll offset `y`, `dt` seconds after the last frame
    pub fn frame(&mut self, stage: &S, y: f64, dt: f64) {
        let mut crossings = Vec::new();
        for (index, (_, registration)) in self.slots.iter_mut().enumerate() {
            match registration {
                Registration::ScrollBound(bound) => bound.update(stage, y, dt),
                Registration::Boundary(boundary) => {
                    if let Some(crossing) = boundary.update(y) {
                        crossings.push((boundary.order_key(crossing), index, crossing));
                    }
                }
                Registration::Reveal(reveal) => reveal.update(stage, y, dt),
                Registration::Entrance(entrance) => entrance.update(stage, dt),
            }
        }

        crossings.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        for (_, index, crossing) in crossings {
            if let Registration::Boundary(boundary) = &mut self.slots[index].1 {
                boundary.fire(crossing);
            }
        }

        self.slots.retain(|(_, registration)| !registration.finished());
    }
}
