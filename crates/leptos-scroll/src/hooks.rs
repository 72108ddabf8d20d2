//! Leptos Integration

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::dom::{DomStage, ScrollHandle, ScrollRuntime};
use crate::orchestrator::Orchestrator;
use crate::smooth::ScrollConfig;

/// Smooth scrolling and scroll animations scoped to the calling component.
///
/// `setup` runs once after the view is mounted, so selectors resolve against
/// rendered markup. Everything is torn down when the component's owner is
/// cleaned up (route change or unmount).
pub fn use_smooth_scroll<F>(config: ScrollConfig, setup: F) -> ScrollHandle
where
    F: FnOnce(&mut Orchestrator<DomStage>, &DomStage) + 'static,
{
    let runtime = match ScrollRuntime::new() {
        Ok(runtime) => Rc::new(runtime),
        Err(err) => {
            log::warn!("smooth scroll unavailable: {}", err);
            return ScrollHandle::detached();
        }
    };
    let handle = runtime.handle();

    let mounted = Rc::clone(&runtime);
    let mut setup = Some(setup);
    Effect::new(move |_| {
        if let Some(setup) = setup.take() {
            if mounted.start(config) {
                mounted.register(setup);
            }
        }
    });

    let runtime = SendWrapper::new(runtime);
    on_cleanup(move || runtime.stop());

    handle
}
