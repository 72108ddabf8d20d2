//! Leptos Smooth Scroll
//!
//! Inertial wheel scrolling and scroll-driven animation for Leptos pages.
//!
//! - [`SmoothScroll`]: eased scroll position from wheel input and `scroll_to` commands
//! - [`Orchestrator`]: scroll-bound, boundary, reveal and entrance registrations
//! - [`ScrollRuntime`] / [`use_smooth_scroll`]: per-page browser loop with explicit teardown
//!
//! The core is independent of the DOM; it measures and styles elements through
//! the [`Stage`] trait.

mod dom;
mod easing;
mod error;
mod hooks;
mod orchestrator;
mod session;
mod smooth;
mod stage;
mod trigger;
mod tween;

#[cfg(test)]
mod tests;

pub use dom::{DomStage, ScrollHandle, ScrollRuntime};
pub use easing::Easing;
pub use error::{ScrollError, ScrollResult};
pub use hooks::use_smooth_scroll;
pub use orchestrator::{EventFn, Orchestrator, ProgressFn, RegistrationId, ScrollBoundSpec, Targets};
pub use session::ScrollSession;
pub use smooth::{ScrollConfig, SmoothScroll};
pub use stage::{Rect, Stage};
pub use trigger::{Anchor, ScrollRange, TriggerEnd, TriggerPoint, TriggerRange, Zone};
pub use tween::{BoundTimeline, Length, Position, Props, Timeline, Tween, SELF_TARGET};
