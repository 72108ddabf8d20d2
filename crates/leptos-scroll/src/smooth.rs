//! Smooth Scroll Core
//!
//! Turns raw wheel input and imperative scroll commands into an eased,
//! inertial scroll position. Pure state: the caller feeds frame deltas and
//! writes [`SmoothScroll::position`] back to the page.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Smooth scroll settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Seconds for a wheel retarget to settle
    pub duration: f64,
    pub easing: Easing,
    /// Intercept wheel events; when off, native scrolling is left alone
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration: 1.2,
            easing: Easing::ExpoOut,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MotionKind {
    Wheel,
    Command,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    kind: MotionKind,
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    easing: Easing,
}

impl Motion {
    fn value(&self) -> f64 {
        if self.finished() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    fn finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

/// Eased scroll position owned by one page
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    config: ScrollConfig,
    running: bool,
    position: f64,
    target: f64,
    limit: f64,
    motion: Option<Motion>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin smoothing. Returns `false` if already running; the config is then kept.
    pub fn start(&mut self, config: ScrollConfig) -> bool {
        if self.running {
            return false;
        }
        self.config = config;
        self.running = true;
        self.motion = None;
        self.target = self.position;
        true
    }

    /// Stop smoothing and drop any motion in flight
    pub fn stop(&mut self) {
        self.running = false;
        self.motion = None;
        self.target = self.position;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Update the largest reachable offset (document height minus viewport)
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        if let Some(motion) = self.motion.as_mut() {
            motion.to = motion.to.clamp(0.0, self.limit);
        }
        if self.motion.is_none() {
            self.position = self.position.clamp(0.0, self.limit);
        }
    }

    /// Feed a wheel delta. Returns `true` when the event was consumed and the
    /// native scroll should be suppressed.
    pub fn on_wheel(&mut self, delta: f64) -> bool {
        if !self.running || !self.config.smooth_wheel {
            return false;
        }
        // A wheel gesture overrides an imperative scroll; continue from where we are
        let base = match self.motion {
            Some(Motion { kind: MotionKind::Command, .. }) => self.position,
            _ => self.target,
        };
        let target = (base + delta * self.config.wheel_multiplier).clamp(0.0, self.limit);
        self.retarget(MotionKind::Wheel, target, self.config.duration, self.config.easing);
        true
    }

    /// Adopt a native scroll offset (scrollbar drag, keyboard) when idle
    pub fn sync_native(&mut self, y: f64) {
        if self.motion.is_some() {
            return;
        }
        self.position = y.clamp(0.0, self.limit);
        self.target = self.position;
    }

    /// Scroll to `target` over `duration`. Replaces any motion in flight.
    pub fn scroll_to(&mut self, target: f64, duration: f64, easing: Easing) {
        if !self.running {
            return;
        }
        let target = target.clamp(0.0, self.limit);
        self.retarget(MotionKind::Command, target, duration, easing);
    }

    fn retarget(&mut self, kind: MotionKind, to: f64, duration: f64, easing: Easing) {
        self.target = to;
        self.motion = Some(Motion {
            kind,
            from: self.position,
            to,
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    /// Advance by `dt` seconds. Returns the new position if it moved.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let motion = self.motion.as_mut()?;
        motion.elapsed += dt.max(0.0);
        let value = motion.value();
        if motion.finished() {
            self.motion = None;
        }
        let moved = (value - self.position).abs() > f64::EPSILON;
        self.position = value;
        moved.then_some(value)
    }
}
