//! Scroll Session
//!
//! One page's smooth scroll plus its orchestrator, advanced together each frame.

use crate::easing::Easing;
use crate::error::{ScrollError, ScrollResult};
use crate::orchestrator::Orchestrator;
use crate::smooth::{ScrollConfig, SmoothScroll};
use crate::stage::Stage;

pub struct ScrollSession<S: Stage> {
    smooth: SmoothScroll,
    orchestrator: Orchestrator<S>,
}

impl<S: Stage> Default for ScrollSession<S> {
    fn default() -> Self {
        Self {
            smooth: SmoothScroll::new(),
            orchestrator: Orchestrator::new(),
        }
    }
}

impl<S: Stage> ScrollSession<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start smoothing; a second call while running is ignored
    pub fn start(&mut self, stage: &S, config: ScrollConfig) -> bool {
        self.smooth.set_limit(stage.scroll_limit());
        self.smooth.start(config)
    }

    /// Stop smoothing and drop every registration
    pub fn stop(&mut self) {
        self.smooth.stop();
        self.orchestrator.clear();
    }

    pub fn is_running(&self) -> bool {
        self.smooth.is_running()
    }

    pub fn smooth(&self) -> &SmoothScroll {
        &self.smooth
    }

    pub fn orchestrator(&self) -> &Orchestrator<S> {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut Orchestrator<S> {
        &mut self.orchestrator
    }

    pub fn wheel(&mut self, delta: f64) -> bool {
        self.smooth.on_wheel(delta)
    }

    /// Adopt the page's own scroll offset, measured against the current document height
    pub fn native_scroll(&mut self, stage: &S, y: f64) {
        if self.smooth.is_running() {
            self.smooth.set_limit(stage.scroll_limit());
            self.smooth.sync_native(y);
        }
    }

    pub fn resize(&mut self, stage: &S) {
        self.orchestrator.resize(stage);
        self.smooth.set_limit(stage.scroll_limit());
    }

    /// Bring element `target_id` to `offset` pixels below the viewport top.
    /// Returns the resolved scroll target.
    pub fn scroll_to(
        &mut self,
        stage: &S,
        target_id: &str,
        offset: f64,
        duration: f64,
        easing: Easing,
    ) -> ScrollResult<f64> {
        let node = stage
            .by_id(target_id)
            .ok_or_else(|| ScrollError::MissingTarget(target_id.to_string()))?;
        self.smooth.scroll_to(stage.rect(&node).top - offset, duration, easing);
        Ok(self.smooth.target())
    }

    /// Advance one frame. Returns the scroll offset to write to the page, if it moved.
    pub fn frame(&mut self, stage: &S, dt: f64) -> Option<f64> {
        if !self.smooth.is_running() {
            return None;
        }
        // Document height changes as images and fonts load
        self.smooth.set_limit(stage.scroll_limit());
        let moved = self.smooth.advance(dt);
        self.orchestrator.frame(stage, self.smooth.position(), dt);
        moved
    }
}
