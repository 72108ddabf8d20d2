//! Browser Binding
//!
//! [`DomStage`] measures and styles real elements. [`ScrollRuntime`] drives a
//! [`ScrollSession`] from `requestAnimationFrame` and owns the wheel, scroll
//! and resize listeners; [`ScrollRuntime::stop`] removes all of them.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, NodeList, WheelEvent, Window};

use crate::easing::Easing;
use crate::error::{ScrollError, ScrollResult};
use crate::orchestrator::Orchestrator;
use crate::session::ScrollSession;
use crate::smooth::ScrollConfig;
use crate::stage::{Rect, Stage};
use crate::tween::Props;

/// Pixels per line for `DOM_DELTA_LINE` wheel events
const LINE_HEIGHT_PX: f64 = 16.0;

/// [`Stage`] backed by the live document
pub struct DomStage {
    window: Window,
    document: Document,
}

impl DomStage {
    pub fn new() -> ScrollResult<Self> {
        let window = web_sys::window().ok_or(ScrollError::DomUnavailable)?;
        let document = window.document().ok_or(ScrollError::DomUnavailable)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn elements(list: Result<NodeList, JsValue>) -> Vec<HtmlElement> {
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl Stage for DomStage {
    type Node = HtmlElement;

    fn query(&self, selector: &str) -> Vec<HtmlElement> {
        Self::elements(self.document.query_selector_all(selector))
    }

    fn query_within(&self, scope: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
        Self::elements(scope.query_selector_all(selector))
    }

    fn rect(&self, node: &HtmlElement) -> Rect {
        // Offsets ignore transforms, so pinned and tweened elements measure stable
        let mut top = 0.0;
        let mut current = Some(node.clone());
        while let Some(el) = current {
            top += el.offset_top() as f64;
            current = el.offset_parent().and_then(|p| p.dyn_into::<HtmlElement>().ok());
        }
        Rect::new(top, node.offset_height() as f64)
    }

    fn viewport_height(&self) -> f64 {
        self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    fn scroll_limit(&self) -> f64 {
        let height = self
            .document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        (height - self.viewport_height()).max(0.0)
    }

    fn apply(&self, node: &HtmlElement, props: &Props) {
        let style = node.style();
        if let Some(transform) = props.transform() {
            let _ = style.set_property("transform", &transform);
        }
        if let Some(opacity) = props.opacity {
            let _ = style.set_property("opacity", &opacity.to_string());
        }
    }

    fn set_pin_spacing(&self, node: &HtmlElement, extra: f64) {
        let _ = node.style().set_property("margin-bottom", &format!("{}px", extra.round()));
    }
}

struct Shared {
    session: ScrollSession<DomStage>,
    stage: DomStage,
    last_time: Option<f64>,
    raf_id: Option<i32>,
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Per-page smooth scroll loop and animation registry
pub struct ScrollRuntime {
    shared: Rc<RefCell<Shared>>,
    stopped: Rc<Cell<bool>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ScrollRuntime {
    pub fn new() -> ScrollResult<Self> {
        let stage = DomStage::new()?;
        Ok(Self {
            shared: Rc::new(RefCell::new(Shared {
                session: ScrollSession::new(),
                stage,
                last_time: None,
                raf_id: None,
            })),
            stopped: Rc::new(Cell::new(false)),
            frame: Rc::new(RefCell::new(None)),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn handle(&self) -> ScrollHandle {
        ScrollHandle {
            shared: SendWrapper::new(Rc::downgrade(&self.shared)),
            stopped: SendWrapper::new(Rc::clone(&self.stopped)),
        }
    }

    /// Start the frame loop and take over wheel input. Idempotent; a stopped
    /// runtime cannot be restarted.
    pub fn start(&self, config: ScrollConfig) -> bool {
        if self.stopped.get() {
            return false;
        }
        {
            let mut guard = self.shared.borrow_mut();
            let Shared { session, stage, .. } = &mut *guard;
            if !session.start(stage, config) {
                return false;
            }
            let y = stage.scroll_y();
            session.native_scroll(stage, y);
        }
        self.bind_listeners();
        self.request_frames();
        log::debug!(
            "smooth scroll started (duration {}s, smooth wheel {})",
            config.duration,
            config.smooth_wheel
        );
        true
    }

    /// Run page registrations, then remeasure so pin spacing is accounted for
    pub fn register<F>(&self, setup: F)
    where
        F: FnOnce(&mut Orchestrator<DomStage>, &DomStage),
    {
        let mut guard = self.shared.borrow_mut();
        let Shared { session, stage, .. } = &mut *guard;
        setup(session.orchestrator_mut(), stage);
        session.resize(stage);
        log::debug!("{} scroll registrations active", session.orchestrator().len());
    }

    /// Cancel the frame loop, restore native scrolling and drop all registrations
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Ok(mut guard) = self.shared.try_borrow_mut() {
            guard.session.stop();
            if let Some(id) = guard.raf_id.take() {
                let _ = guard.stage.window.cancel_animation_frame(id);
            }
        }
        for listener in self.listeners.borrow_mut().drain(..) {
            let _ = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.closure.as_ref().unchecked_ref());
        }
        self.frame.borrow_mut().take();
        log::debug!("smooth scroll stopped");
    }

    fn listen(&self, target: &EventTarget, kind: &'static str, passive: bool, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        let added = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        if added.is_err() {
            log::warn!("failed to bind `{}` listener", kind);
            return;
        }
        self.listeners.borrow_mut().push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    fn bind_listeners(&self) {
        let target: EventTarget = self.shared.borrow().stage.window.clone().into();

        let shared = Rc::clone(&self.shared);
        self.listen(&target, "wheel", false, move |ev: Event| {
            let Some(wheel) = ev.dyn_ref::<WheelEvent>() else {
                return;
            };
            let Ok(mut guard) = shared.try_borrow_mut() else {
                return;
            };
            let delta = match wheel.delta_mode() {
                WheelEvent::DOM_DELTA_LINE => wheel.delta_y() * LINE_HEIGHT_PX,
                WheelEvent::DOM_DELTA_PAGE => wheel.delta_y() * guard.stage.viewport_height(),
                _ => wheel.delta_y(),
            };
            if guard.session.wheel(delta) {
                ev.prevent_default();
            }
        });

        let shared = Rc::clone(&self.shared);
        self.listen(&target, "scroll", true, move |_| {
            if let Ok(mut guard) = shared.try_borrow_mut() {
                let Shared { session, stage, .. } = &mut *guard;
                let y = stage.scroll_y();
                session.native_scroll(stage, y);
            }
        });

        // Late images shift section offsets, so `load` remeasures like `resize`
        for kind in ["resize", "load"] {
            let shared = Rc::clone(&self.shared);
            self.listen(&target, kind, true, move |_| {
                if let Ok(mut guard) = shared.try_borrow_mut() {
                    let Shared { session, stage, .. } = &mut *guard;
                    session.resize(stage);
                }
            });
        }
    }

    fn request_frames(&self) {
        let shared = Rc::clone(&self.shared);
        let stopped = Rc::clone(&self.stopped);
        let frame = Rc::clone(&self.frame);

        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            if stopped.get() {
                return;
            }
            let window = {
                let mut guard = shared.borrow_mut();
                let dt = guard.last_time.map_or(0.0, |last| ((time - last) / 1000.0).max(0.0));
                guard.last_time = Some(time);
                let Shared { session, stage, .. } = &mut *guard;
                if let Some(y) = session.frame(stage, dt) {
                    stage.window.scroll_to_with_x_and_y(0.0, y);
                }
                guard.stage.window.clone()
            };
            // Callbacks above may have stopped the runtime
            if stopped.get() {
                return;
            }
            if let Some(next) = frame.borrow().as_ref() {
                let id = window.request_animation_frame(next.as_ref().unchecked_ref()).ok();
                shared.borrow_mut().raf_id = id;
            }
        });

        let first = {
            let guard = self.shared.borrow();
            guard.stage.window.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
        };
        self.shared.borrow_mut().raf_id = first;
        *self.frame.borrow_mut() = Some(closure);
    }
}

impl Drop for ScrollRuntime {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cheap handle for issuing scroll commands from UI code
#[derive(Clone)]
pub struct ScrollHandle {
    shared: SendWrapper<Weak<RefCell<Shared>>>,
    stopped: SendWrapper<Rc<Cell<bool>>>,
}

impl ScrollHandle {
    /// Handle not attached to any runtime; every command fails with `Stopped`
    pub fn detached() -> Self {
        Self {
            shared: SendWrapper::new(Weak::new()),
            stopped: SendWrapper::new(Rc::new(Cell::new(true))),
        }
    }

    /// Smoothly bring element `target_id` to `offset` pixels below the viewport top.
    /// A later call overrides one still in flight.
    pub fn scroll_to(&self, target_id: &str, offset: f64, duration: f64, easing: Easing) -> ScrollResult<f64> {
        if self.stopped.get() {
            return Err(ScrollError::Stopped);
        }
        let shared = self.shared.upgrade().ok_or(ScrollError::Stopped)?;
        let mut guard = shared.try_borrow_mut().map_err(|_| ScrollError::Busy)?;
        let Shared { session, stage, .. } = &mut *guard;
        session.scroll_to(stage, target_id, offset, duration, easing)
    }

    pub fn position(&self) -> Option<f64> {
        let shared = self.shared.upgrade()?;
        let guard = shared.try_borrow().ok()?;
        Some(guard.session.smooth().position())
    }
}
