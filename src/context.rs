//! Page Context
//!
//! Per-page values provided via Leptos Context API.

use leptos::prelude::*;
use leptos_scroll::ScrollHandle;

use crate::config::{JumpConfig, SiteConfig};

/// Provided by each page after it starts smooth scrolling
#[derive(Clone)]
pub struct PageContext {
    scroll: ScrollHandle,
    jump: JumpConfig,
}

impl PageContext {
    /// Call from a component body, where the site config is in scope
    pub fn new(scroll: ScrollHandle) -> Self {
        let jump = use_site_config().category_jump;
        Self { scroll, jump }
    }

    /// Smoothly bring the section `id` under the sticky nav
    pub fn jump_to(&self, id: &str) {
        let jump = self.jump;
        match self.scroll.scroll_to(id, jump.offset, jump.duration, jump.easing) {
            Ok(target) => log::debug!("jump to #{} at {}px", id, target),
            Err(e) => log::warn!("jump to #{} skipped: {}", id, e),
        }
    }
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}

/// Site config, provided once by `App`
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
