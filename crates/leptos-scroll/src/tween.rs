//! Tweens and Timelines
//!
//! A [`Tween`] interpolates [`Props`] on every element matched by a selector,
//! optionally staggered. A [`Timeline`] sequences tweens; binding it to a
//! [`Stage`] resolves the selectors and fixes each tween's start time.

use std::str::FromStr;

use crate::easing::Easing;
use crate::error::{ScrollError, ScrollResult};
use crate::stage::Stage;

/// Translation length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percent of the element's own size
    Percent(f64),
}

impl Length {
    fn value(self) -> f64 {
        match self {
            Length::Px(v) | Length::Percent(v) => v,
        }
    }

    fn with_value(self, value: f64) -> Self {
        match self {
            Length::Px(_) => Length::Px(value),
            Length::Percent(_) => Length::Percent(value),
        }
    }

    fn css(self) -> String {
        match self {
            Length::Px(v) => format!("{}px", round(v)),
            Length::Percent(v) => format!("{}%", round(v)),
        }
    }
}

/// Animatable properties; `None` leaves the property untouched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Props {
    pub x: Option<Length>,
    pub y: Option<Length>,
    /// Degrees
    pub rotate: Option<f64>,
    pub opacity: Option<f64>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x_percent(mut self, value: f64) -> Self {
        self.x = Some(Length::Percent(value));
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(Length::Px(px));
        self
    }

    pub fn y_percent(mut self, value: f64) -> Self {
        self.y = Some(Length::Percent(value));
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Natural resting values for every property set on `self`
    pub fn rest(&self) -> Self {
        Self {
            x: self.x.map(|l| l.with_value(0.0)),
            y: self.y.map(|l| l.with_value(0.0)),
            rotate: self.rotate.map(|_| 0.0),
            opacity: self.opacity.map(|_| 1.0),
        }
    }

    /// Interpolate between `from` and `to` at eased progress `t`
    pub fn lerp(from: &Props, to: &Props, t: f64) -> Props {
        fn mix(a: f64, b: f64, t: f64) -> f64 {
            a + (b - a) * t
        }
        fn length(a: Option<Length>, b: Option<Length>, t: f64) -> Option<Length> {
            match (a, b) {
                (Some(a), Some(b)) => Some(b.with_value(mix(a.value(), b.value(), t))),
                (Some(a), None) => Some(a.with_value(mix(a.value(), 0.0, t))),
                (None, Some(b)) => Some(b.with_value(mix(0.0, b.value(), t))),
                (None, None) => None,
            }
        }
        fn scalar(a: Option<f64>, b: Option<f64>, rest: f64, t: f64) -> Option<f64> {
            match (a, b) {
                (None, None) => None,
                (a, b) => Some(mix(a.unwrap_or(rest), b.unwrap_or(rest), t)),
            }
        }
        Props {
            x: length(from.x, to.x, t),
            y: length(from.y, to.y, t),
            rotate: scalar(from.rotate, to.rotate, 0.0, t),
            opacity: scalar(from.opacity, to.opacity, 1.0, t),
        }
    }

    /// CSS `transform` value, or `None` when no transform property is set
    pub fn transform(&self) -> Option<String> {
        if self.x.is_none() && self.y.is_none() && self.rotate.is_none() {
            return None;
        }
        let x = self.x.unwrap_or(Length::Px(0.0)).css();
        let y = self.y.unwrap_or(Length::Px(0.0)).css();
        let mut css = format!("translate3d({}, {}, 0)", x, y);
        if let Some(deg) = self.rotate {
            css.push_str(&format!(" rotate({}deg)", round(deg)));
        }
        Some(css)
    }
}

fn round(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// A single interpolation over the elements matched by `targets`
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub targets: String,
    pub from: Props,
    pub to: Props,
    /// Seconds
    pub duration: f64,
    pub delay: f64,
    /// Offset between consecutive targets
    pub stagger: f64,
    pub ease: Easing,
    /// Render the `from` state before the tween starts
    pub immediate: bool,
}

impl Tween {
    fn base(targets: &str, from: Props, to: Props, immediate: bool) -> Self {
        Self {
            targets: targets.to_string(),
            from,
            to,
            duration: 0.5,
            delay: 0.0,
            stagger: 0.0,
            ease: Easing::Power1Out,
            immediate,
        }
    }

    /// Animate from `props` to the natural state
    pub fn from(targets: &str, props: Props) -> Self {
        Self::base(targets, props, props.rest(), true)
    }

    /// Animate from the natural state to `props`
    pub fn to(targets: &str, props: Props) -> Self {
        Self::base(targets, props.rest(), props, false)
    }

    pub fn from_to(targets: &str, from: Props, to: Props) -> Self {
        Self::base(targets, from, to, true)
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    /// Total length including delay and stagger for `count` targets
    pub fn total(&self, count: usize) -> f64 {
        let staggered = self.stagger * count.saturating_sub(1) as f64;
        self.delay + self.duration + staggered
    }

    /// Properties of the `index`-th target at `local` seconds after the tween start
    pub fn sample(&self, local: f64, index: usize) -> Option<Props> {
        let local = local - self.delay - self.stagger * index as f64;
        if local < 0.0 {
            return self.immediate.then_some(self.from);
        }
        let linear = if self.duration <= 0.0 { 1.0 } else { (local / self.duration).min(1.0) };
        Some(Props::lerp(&self.from, &self.to, self.ease.apply(linear)))
    }
}

/// Where a tween is placed on a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// After the previous tween ends
    Sequential,
    /// Relative to the previous tween's end (`"-=0.8"`, `"+=0.2"`)
    Offset(f64),
    /// Absolute time
    At(f64),
}

impl FromStr for Position {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        let invalid = || ScrollError::InvalidTrigger(s.to_string());
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("-=") {
            rest.parse::<f64>().map(|v| Position::Offset(-v)).map_err(|_| invalid())
        } else if let Some(rest) = s.strip_prefix("+=") {
            rest.parse::<f64>().map(Position::Offset).map_err(|_| invalid())
        } else {
            s.parse::<f64>().map(Position::At).map_err(|_| invalid())
        }
    }
}

/// Ordered tweens with placement, independent of any stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<(Tween, Position)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tween` after the previous one
    pub fn then(mut self, tween: Tween) -> Self {
        self.steps.push((tween, Position::Sequential));
        self
    }

    pub fn at(mut self, tween: Tween, position: Position) -> Self {
        self.steps.push((tween, position));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resolve selectors on `stage` and fix start times.
    ///
    /// `scope` restricts target lookup to descendants of one element;
    /// [`SELF_TARGET`] then addresses the scope element itself.
    /// Returns `None` when no tween matched any element.
    pub fn bind<S: Stage>(&self, stage: &S, scope: Option<&S::Node>) -> Option<BoundTimeline<S::Node>> {
        let mut tracks = Vec::with_capacity(self.steps.len());
        let mut previous_end = 0.0_f64;
        let mut duration = 0.0_f64;

        for (tween, position) in &self.steps {
            let nodes = resolve_targets(stage, scope, &tween.targets);
            if nodes.is_empty() {
                log::warn!("tween target `{}` matched nothing, skipped", tween.targets);
            }
            let start = match position {
                Position::Sequential => previous_end,
                Position::Offset(offset) => (previous_end + offset).max(0.0),
                Position::At(at) => at.max(0.0),
            };
            // Timing is kept even for empty tweens so later positions don't shift
            let end = start + tween.total(nodes.len().max(1));
            previous_end = end;
            duration = duration.max(end);
            if !nodes.is_empty() {
                tracks.push(Track { tween: tween.clone(), start, nodes });
            }
        }

        if tracks.is_empty() {
            None
        } else {
            Some(BoundTimeline { tracks, duration })
        }
    }
}

/// Selector that addresses the scope element itself
pub const SELF_TARGET: &str = ":scope";

pub(crate) fn resolve_targets<S: Stage>(stage: &S, scope: Option<&S::Node>, selector: &str) -> Vec<S::Node> {
    match scope {
        Some(node) if selector == SELF_TARGET => vec![node.clone()],
        Some(node) => stage.query_within(node, selector),
        None => stage.query(selector),
    }
}

struct Track<N> {
    tween: Tween,
    start: f64,
    nodes: Vec<N>,
}

/// Timeline with concrete target elements
pub struct BoundTimeline<N> {
    tracks: Vec<Track<N>>,
    duration: f64,
}

impl<N: Clone> BoundTimeline<N> {
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Per-element properties at time `t`, in track then element order
    pub fn sample(&self, t: f64) -> Vec<(N, Props)> {
        let mut out = Vec::new();
        for track in &self.tracks {
            for (index, node) in track.nodes.iter().enumerate() {
                if let Some(props) = track.tween.sample(t - track.start, index) {
                    out.push((node.clone(), props));
                }
            }
        }
        out
    }

    pub fn render<S: Stage<Node = N>>(&self, stage: &S, t: f64) {
        for (node, props) in self.sample(t) {
            stage.apply(&node, &props);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tween_starts_at_from_and_rests() {
        let tween = Tween::from(".card", Props::new().y(100.0).opacity(0.0))
            .duration(1.0)
            .ease(Easing::Linear);

        assert_eq!(tween.sample(0.0, 0), Some(Props::new().y(100.0).opacity(0.0)));
        let mid = tween.sample(0.5, 0).unwrap();
        assert_eq!(mid.y, Some(Length::Px(50.0)));
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(tween.sample(5.0, 0), Some(Props::new().y(0.0).opacity(1.0)));
    }

    #[test]
    fn test_to_tween_is_untouched_before_start() {
        let tween = Tween::to(".curtain", Props::new().y_percent(-100.0)).delay(0.2).duration(1.2);
        assert_eq!(tween.sample(0.1, 0), None);
        assert_eq!(tween.sample(10.0, 0).unwrap().y, Some(Length::Percent(-100.0)));
    }

    #[test]
    fn test_stagger_offsets_each_target() {
        let tween = Tween::from(".line", Props::new().opacity(0.0))
            .duration(1.0)
            .stagger(0.1)
            .ease(Easing::Linear);
        assert!((tween.total(3) - 1.2).abs() < 1e-9);
        let first = tween.sample(0.5, 0).unwrap().opacity.unwrap();
        let third = tween.sample(0.5, 2).unwrap().opacity.unwrap();
        assert!(first > third);
        assert!((third - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("-=0.8".parse::<Position>().unwrap(), Position::Offset(-0.8));
        assert_eq!("+=0.2".parse::<Position>().unwrap(), Position::Offset(0.2));
        assert_eq!("1.5".parse::<Position>().unwrap(), Position::At(1.5));
        assert!("later".parse::<Position>().is_err());
    }

    #[test]
    fn test_transform_css() {
        let props = Props::new().x_percent(-200.0).rotate(3.0);
        assert_eq!(props.transform().unwrap(), "translate3d(-200%, 0px, 0) rotate(3deg)");
        assert_eq!(Props::new().opacity(0.5).transform(), None);
    }
}
