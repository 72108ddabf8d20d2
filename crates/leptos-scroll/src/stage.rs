//! Stage Abstraction
//!
//! The orchestrator never touches the DOM directly. It measures and styles
//! elements through a [`Stage`], so the same registration logic runs against
//! the browser ([`crate::dom::DomStage`]) and against an in-memory layout in tests.

use crate::tween::Props;

/// Document-relative vertical box of an element, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the document top to the element top at scroll 0
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Element lookup, measurement and styling
pub trait Stage {
    type Node: Clone;

    /// All elements matching a CSS selector, in document order
    fn query(&self, selector: &str) -> Vec<Self::Node>;

    /// Descendants of `scope` matching a CSS selector
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Document-relative box of `node`
    fn rect(&self, node: &Self::Node) -> Rect;

    fn viewport_height(&self) -> f64;

    fn viewport_width(&self) -> f64;

    /// Largest reachable scroll offset
    fn scroll_limit(&self) -> f64;

    /// Apply animated properties to `node`
    fn apply(&self, node: &Self::Node, props: &Props);

    /// Reserve `extra` pixels of scroll length after a pinned node
    fn set_pin_spacing(&self, node: &Self::Node, extra: f64);

    /// Convenience lookup by element id
    fn by_id(&self, id: &str) -> Option<Self::Node> {
        self.query(&format!("#{}", id)).into_iter().next()
    }
}
