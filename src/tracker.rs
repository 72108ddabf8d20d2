//! Category Tracker
//!
//! Which menu section is active. Boundary events from the scroll orchestrator
//! move it; the sticky category nav reads it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos_scroll::{Orchestrator, Stage, TriggerRange};

/// Section start and end, relative to the viewport reference line at 60%
pub const SECTION_START: &str = "top 60%";
pub const SECTION_END: &str = "bottom 60%";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTracker {
    sections: Vec<String>,
    active: String,
}

impl CategoryTracker {
    /// Starts at the first section
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let active = sections.first().cloned().unwrap_or_default();
        Self { sections, active }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Entered `id` scrolling down. Returns whether the active section changed.
    pub fn enter(&mut self, id: &str) -> bool {
        self.activate(id)
    }

    /// Re-entered `id` scrolling up past its bottom edge
    pub fn enter_back(&mut self, id: &str) -> bool {
        self.activate(id)
    }

    fn activate(&mut self, id: &str) -> bool {
        if !self.sections.iter().any(|s| s == id) {
            log::warn!("unknown category `{}` ignored", id);
            return false;
        }
        if self.active == id {
            return false;
        }
        self.active = id.to_string();
        true
    }
}

/// Register one boundary per section; `on_change` receives the new active id
pub fn track_sections<S, F>(
    orchestrator: &mut Orchestrator<S>,
    stage: &S,
    tracker: Rc<RefCell<CategoryTracker>>,
    on_change: F,
) where
    S: Stage,
    F: Fn(String) + Clone + 'static,
{
    let range = match TriggerRange::new(SECTION_START, SECTION_END) {
        Ok(range) => range,
        Err(err) => {
            log::error!("category boundary: {}", err);
            return;
        }
    };
    let ids = tracker.borrow().sections().to_vec();
    for id in ids {
        let enter = {
            let (tracker, on_change, id) = (Rc::clone(&tracker), on_change.clone(), id.clone());
            move || {
                if tracker.borrow_mut().enter(&id) {
                    on_change(id.clone());
                }
            }
        };
        let enter_back = {
            let (tracker, on_change, id) = (Rc::clone(&tracker), on_change.clone(), id.clone());
            move || {
                if tracker.borrow_mut().enter_back(&id) {
                    on_change(id.clone());
                }
            }
        };
        orchestrator.register_boundary(stage, &format!("#{}", id), range, enter, enter_back);
    }
}
