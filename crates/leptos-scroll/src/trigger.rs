//! Scroll Trigger Thresholds
//!
//! Parses `"<element edge> <viewport edge>"` expressions such as `"top 80%"`
//! or `"bottom top"` and resolves them to absolute scroll offsets.

use std::str::FromStr;

use crate::error::{ScrollError, ScrollResult};
use crate::stage::Rect;

/// A point along an element or the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Fraction of the length (top = 0, center = 0.5, bottom = 1)
    Fraction(f64),
    /// Fixed pixel offset from the start edge
    Pixels(f64),
}

impl Anchor {
    pub fn resolve(self, length: f64) -> f64 {
        match self {
            Anchor::Fraction(f) => f * length,
            Anchor::Pixels(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        let invalid = || ScrollError::InvalidTrigger(s.to_string());
        match s {
            "top" | "left" => return Ok(Anchor::Fraction(0.0)),
            "center" => return Ok(Anchor::Fraction(0.5)),
            "bottom" | "right" => return Ok(Anchor::Fraction(1.0)),
            _ => {}
        }
        if let Some(pct) = s.strip_suffix('%') {
            let value: f64 = pct.parse().map_err(|_| invalid())?;
            return Ok(Anchor::Fraction(value / 100.0));
        }
        let px = s.strip_suffix("px").unwrap_or(s);
        px.parse().map(Anchor::Pixels).map_err(|_| invalid())
    }
}

/// Scroll offset at which an element anchor meets a viewport anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPoint {
    /// Scroll offset where the two anchors line up
    pub fn resolve(&self, rect: Rect, viewport_height: f64) -> f64 {
        rect.top + self.element.resolve(rect.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for TriggerPoint {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(TriggerPoint {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(ScrollError::InvalidTrigger(s.to_string())),
        }
    }
}

/// End of a trigger range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEnd {
    Point(TriggerPoint),
    /// Pixels after the resolved start (`"+=3000"`)
    Relative(f64),
}

impl FromStr for TriggerEnd {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        match s.trim().strip_prefix("+=") {
            Some(amount) => amount
                .trim_end_matches("px")
                .parse()
                .map(TriggerEnd::Relative)
                .map_err(|_| ScrollError::InvalidTrigger(s.to_string())),
            None => s.parse().map(TriggerEnd::Point),
        }
    }
}

/// Start/end pair before layout is known
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRange {
    pub start: TriggerPoint,
    pub end: TriggerEnd,
}

impl TriggerRange {
    pub fn new(start: &str, end: &str) -> ScrollResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Range from `start` until the element's bottom leaves the viewport top
    pub fn starting(start: &str) -> ScrollResult<Self> {
        Self::new(start, "bottom top")
    }

    pub fn resolve(&self, rect: Rect, viewport_height: f64) -> ScrollRange {
        let start = self.start.resolve(rect, viewport_height);
        let end = match self.end {
            TriggerEnd::Point(point) => point.resolve(rect, viewport_height),
            TriggerEnd::Relative(amount) => start + amount,
        };
        ScrollRange::new(start, end)
    }
}

/// Resolved range in scroll pixels; `end >= start` always holds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end: end.max(start) }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.start && y <= self.end
    }

    /// Fraction of the range covered at scroll offset `y`, clamped to [0, 1]
    pub fn progress(&self, y: f64) -> f64 {
        if self.length() <= f64::EPSILON {
            return if y >= self.start { 1.0 } else { 0.0 };
        }
        ((y - self.start) / self.length()).clamp(0.0, 1.0)
    }

    pub fn zone(&self, y: f64) -> Zone {
        if y < self.start {
            Zone::Before
        } else if y > self.end {
            Zone::After
        } else {
            Zone::Inside
        }
    }
}

/// Scroll offset relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    Inside,
    After,
}
