//! Orchestrator and Session Scenario Tests
//!
//! Runs registrations against an in-memory layout.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use crate::{
        Easing, Orchestrator, Props, Rect, ScrollBoundSpec, ScrollConfig, ScrollError, ScrollSession, Stage,
        Targets, Timeline, TriggerRange, Tween, SELF_TARGET,
    };

    struct FakeElement {
        selectors: Vec<String>,
        parent: Option<usize>,
        rect: Rect,
    }

    /// In-memory layout; nodes are indices into `elements`
    #[derive(Default)]
    struct FakeStage {
        elements: RefCell<Vec<FakeElement>>,
        viewport_height: RefCell<f64>,
        document_height: RefCell<f64>,
        applied: RefCell<Vec<(usize, Props)>>,
        spacing: RefCell<HashMap<usize, f64>>,
    }

    impl FakeStage {
        fn new(viewport_height: f64, document_height: f64) -> Self {
            let stage = Self::default();
            *stage.viewport_height.borrow_mut() = viewport_height;
            *stage.document_height.borrow_mut() = document_height;
            stage
        }

        fn add(&self, selectors: &[&str], rect: Rect, parent: Option<usize>) -> usize {
            let mut elements = self.elements.borrow_mut();
            elements.push(FakeElement {
                selectors: selectors.iter().map(|s| s.to_string()).collect(),
                parent,
                rect,
            });
            elements.len() - 1
        }

        fn move_to(&self, node: usize, rect: Rect) {
            self.elements.borrow_mut()[node].rect = rect;
        }

        fn applied_to(&self, node: usize) -> Vec<Props> {
            self.applied
                .borrow()
                .iter()
                .filter(|(n, _)| *n == node)
                .map(|(_, p)| *p)
                .collect()
        }

        fn is_descendant(&self, node: usize, ancestor: usize) -> bool {
            let elements = self.elements.borrow();
            let mut current = elements[node].parent;
            while let Some(parent) = current {
                if parent == ancestor {
                    return true;
                }
                current = elements[parent].parent;
            }
            false
        }
    }

    impl Stage for FakeStage {
        type Node = usize;

        fn query(&self, selector: &str) -> Vec<usize> {
            self.elements
                .borrow()
                .iter()
                .enumerate()
                .filter(|(_, el)| el.selectors.iter().any(|s| s == selector))
                .map(|(i, _)| i)
                .collect()
        }

        fn query_within(&self, scope: &usize, selector: &str) -> Vec<usize> {
            self.query(selector)
                .into_iter()
                .filter(|node| self.is_descendant(*node, *scope))
                .collect()
        }

        fn rect(&self, node: &usize) -> Rect {
            self.elements.borrow()[*node].rect
        }

        fn viewport_height(&self) -> f64 {
            *self.viewport_height.borrow()
        }

        fn viewport_width(&self) -> f64 {
            1440.0
        }

        fn scroll_limit(&self) -> f64 {
            *self.document_height.borrow() - *self.viewport_height.borrow()
        }

        fn apply(&self, node: &usize, props: &Props) {
            self.applied.borrow_mut().push((*node, *props));
        }

        fn set_pin_spacing(&self, node: &usize, extra: f64) {
            self.spacing.borrow_mut().insert(*node, extra);
        }
    }

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Rc<RefCell<Vec<T>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Rc::clone(&log), log)
    }

    // ========================
    // Scroll-bound progress
    // ========================

    #[test]
    fn test_scroll_bound_progress_tracks_direction() {
        let stage = FakeStage::new(1000.0, 6000.0);
        stage.add(&[".parallax-wrapper"], Rect::new(2000.0, 1000.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, sink) = recorder::<(f64, f64)>();

        let y_for_callback = Rc::new(RefCell::new(0.0));
        let y_seen = Rc::clone(&y_for_callback);
        let range = TriggerRange::new("top bottom", "bottom top").unwrap();
        orchestrator
            .register_scroll_bound(&stage, ".parallax-wrapper", ScrollBoundSpec::new(range), move |f| {
                sink.borrow_mut().push((*y_seen.borrow(), f));
            })
            .expect("target exists");

        // Forward 0 -> 4000, range is [1000, 3000]
        for step in 0..=40 {
            let y = step as f64 * 100.0;
            *y_for_callback.borrow_mut() = y;
            orchestrator.frame(&stage, y, 1.0 / 60.0);
        }
        let forward: Vec<(f64, f64)> = log.borrow_mut().drain(..).collect();
        assert!(forward.windows(2).all(|w| w[1].1 >= w[0].1));
        assert!(forward.iter().all(|(_, f)| (0.0..=1.0).contains(f)));
        assert!(forward.iter().all(|(y, _)| *y >= 1000.0), "fired before reaching the range");
        assert!(forward.iter().all(|(y, _)| *y <= 3000.0), "fired after leaving the range");
        assert_eq!(forward.last().unwrap().1, 1.0);

        // Backward 4000 -> 0
        for step in (0..=40).rev() {
            let y = step as f64 * 100.0;
            *y_for_callback.borrow_mut() = y;
            orchestrator.frame(&stage, y, 1.0 / 60.0);
        }
        let backward: Vec<(f64, f64)> = log.borrow_mut().drain(..).collect();
        assert!(!backward.is_empty());
        assert!(backward.windows(2).all(|w| w[1].1 <= w[0].1));
        assert!(backward.iter().all(|(y, _)| *y >= 1000.0));
        assert_eq!(backward.last().unwrap().1, 0.0);
    }

    #[test]
    fn test_scroll_bound_exit_reports_edge_and_reentry_resumes() {
        let stage = FakeStage::new(1000.0, 6000.0);
        stage.add(&["#band"], Rect::new(2000.0, 1000.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, sink) = recorder::<f64>();
        let range = TriggerRange::new("top bottom", "bottom top").unwrap();
        orchestrator.register_scroll_bound(&stage, "#band", ScrollBoundSpec::new(range), move |f| {
            sink.borrow_mut().push(f)
        });

        orchestrator.frame(&stage, 2000.0, 0.016);
        // Jump straight past the end: one clamped report, then silence
        orchestrator.frame(&stage, 3600.0, 0.016);
        orchestrator.frame(&stage, 3700.0, 0.016);
        assert_eq!(*log.borrow(), vec![0.5, 1.0]);

        // Re-entering resumes at the current fraction rather than replaying from zero
        orchestrator.frame(&stage, 2500.0, 0.016);
        assert_eq!(*log.borrow().last().unwrap(), 0.75);
    }

    #[test]
    fn test_scroll_bound_silent_until_range_is_reached() {
        let stage = FakeStage::new(1000.0, 8000.0);
        stage.add(&["#band"], Rect::new(3000.0, 1000.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, sink) = recorder::<f64>();
        let range = TriggerRange::new("top bottom", "bottom top").unwrap();
        orchestrator.register_scroll_bound(&stage, "#band", ScrollBoundSpec::new(range), move |f| {
            sink.borrow_mut().push(f)
        });

        // Range is [2000, 4000]
        orchestrator.frame(&stage, 0.0, 0.016);
        orchestrator.frame(&stage, 100.0, 0.016);
        assert!(log.borrow().is_empty());

        // Jumping clean over the range still reports the far edge once
        orchestrator.frame(&stage, 5000.0, 0.016);
        orchestrator.frame(&stage, 5100.0, 0.016);
        assert_eq!(*log.borrow(), vec![1.0]);
    }

    #[test]
    fn test_scroll_bound_first_frame_past_range_stays_silent() {
        let stage = FakeStage::new(1000.0, 8000.0);
        stage.add(&["#band"], Rect::new(1000.0, 500.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, sink) = recorder::<f64>();
        let range = TriggerRange::new("top bottom", "bottom top").unwrap();
        orchestrator.register_scroll_bound(&stage, "#band", ScrollBoundSpec::new(range), move |f| {
            sink.borrow_mut().push(f)
        });

        // Range is [0, 1500]; mounting below it reports nothing until scrolled back in
        orchestrator.frame(&stage, 3000.0, 0.016);
        assert!(log.borrow().is_empty());
        orchestrator.frame(&stage, 750.0, 0.016);
        assert_eq!(*log.borrow(), vec![0.5]);
    }

    #[test]
    fn test_scrubbed_progress_lags_but_stays_monotonic() {
        let stage = FakeStage::new(1000.0, 6000.0);
        stage.add(&["#story"], Rect::new(1000.0, 1000.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, sink) = recorder::<f64>();
        let spec = ScrollBoundSpec::new(TriggerRange::new("top top", "+=3000").unwrap()).scrub(1.0);
        orchestrator.register_scroll_bound(&stage, "#story", spec, move |f| sink.borrow_mut().push(f));

        orchestrator.frame(&stage, 1000.0, 0.0);
        for _ in 0..1000 {
            orchestrator.frame(&stage, 4000.0, 1.0 / 60.0);
        }
        let values = log.borrow();
        assert!(values[1] < 0.1, "scrub should lag behind a jump");
        assert!(values.windows(2).all(|w| w[1] >= w[0]));
        assert!(values.iter().all(|f| (0.0..=1.0).contains(f)));
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[test]
    fn test_pinned_scrub_drives_horizontal_track() {
        let stage = FakeStage::new(1000.0, 8000.0);
        let story = stage.add(&["#story"], Rect::new(1000.0, 1000.0), None);
        let slides: Vec<usize> = (0..3)
            .map(|_| stage.add(&[".h-item"], Rect::new(1000.0, 1000.0), Some(story)))
            .collect();
        let mut orchestrator = Orchestrator::new();
        let spec = ScrollBoundSpec::new(TriggerRange::new("top top", "+=3000").unwrap()).pin();
        let timeline = Timeline::new().then(Tween::to(".h-item", Props::new().x_percent(-200.0)).ease(Easing::Linear));

        let ids = orchestrator.register_scrub(&stage, "#story", spec, &timeline, Targets::WithinTrigger);
        assert_eq!(ids.len(), 1);
        assert_eq!(stage.spacing.borrow().get(&story), Some(&3000.0));

        orchestrator.frame(&stage, 2500.0, 0.016);
        let pin = *stage.applied_to(story).last().unwrap();
        assert_eq!(pin, Props::new().y(1500.0));
        for slide in slides {
            let props = *stage.applied_to(slide).last().unwrap();
            assert_eq!(props, Props::new().x_percent(-100.0));
        }
    }

    // ========================
    // Failure policy
    // ========================

    #[test]
    fn test_missing_targets_are_noops() {
        let stage = FakeStage::new(1000.0, 4000.0);
        stage.add(&["#present"], Rect::new(1500.0, 500.0), None);
        let mut orchestrator = Orchestrator::new();
        let range = TriggerRange::starting("top bottom").unwrap();

        assert!(orchestrator
            .register_scroll_bound(&stage, "#absent", ScrollBoundSpec::new(range), |_| {})
            .is_none());
        assert!(orchestrator.register_boundary(&stage, "#absent", range, || {}, || {}).is_none());
        assert!(orchestrator
            .register_entrance(&stage, &Timeline::new().then(Tween::from(".absent", Props::new().opacity(0.0))))
            .is_none());
        let start = "top 80%".parse().unwrap();
        let reveal = Timeline::new().then(Tween::from(SELF_TARGET, Props::new().opacity(0.0)));
        assert!(orchestrator
            .register_reveal(&stage, ".absent", start, &reveal, Targets::WithinTrigger)
            .is_empty());
        assert!(orchestrator.is_empty());

        // The rest of the page keeps working
        let (log, sink) = recorder::<f64>();
        orchestrator.register_scroll_bound(&stage, "#present", ScrollBoundSpec::new(range), move |f| {
            sink.borrow_mut().push(f)
        });
        orchestrator.frame(&stage, 1000.0, 0.016);
        assert_eq!(log.borrow().len(), 1);
    }

    // ========================
    // Entrance and reveal
    // ========================

    #[test]
    fn test_entrance_plays_exactly_once() {
        let stage = FakeStage::new(1000.0, 4000.0);
        let first = stage.add(&[".hero-title-line"], Rect::new(300.0, 80.0), None);
        let second = stage.add(&[".hero-title-line"], Rect::new(400.0, 80.0), None);
        let mut orchestrator = Orchestrator::new();
        let timeline = Timeline::new().then(
            Tween::from(".hero-title-line", Props::new().y(150.0).opacity(0.0))
                .duration(1.0)
                .stagger(0.1)
                .ease(Easing::Power3Out),
        );
        let id = orchestrator.register_entrance(&stage, &timeline).unwrap();
        assert_eq!(stage.applied_to(first)[0], Props::new().y(150.0).opacity(0.0));

        for _ in 0..20 {
            orchestrator.frame(&stage, 0.0, 0.25);
        }
        assert!(!orchestrator.is_registered(id));
        let rest = Props::new().y(0.0).opacity(1.0);
        assert_eq!(*stage.applied_to(first).last().unwrap(), rest);
        assert_eq!(*stage.applied_to(second).last().unwrap(), rest);

        let settled = stage.applied.borrow().len();
        orchestrator.resize(&stage);
        for y in [500.0, 1500.0, 0.0] {
            orchestrator.frame(&stage, y, 0.1);
        }
        assert_eq!(stage.applied.borrow().len(), settled);
    }

    #[test]
    fn test_reveal_waits_for_threshold_then_plays_once() {
        let stage = FakeStage::new(1000.0, 5000.0);
        stage.add(&["#collection"], Rect::new(2000.0, 800.0), None);
        let cards: Vec<usize> = (0..2)
            .map(|_| stage.add(&[".menu-card"], Rect::new(2100.0, 400.0), None))
            .collect();
        let mut orchestrator = Orchestrator::new();
        let timeline = Timeline::new().then(
            Tween::from(".menu-card", Props::new().y(100.0).opacity(0.0))
                .duration(1.0)
                .stagger(0.2),
        );
        let start = "top 70%".parse().unwrap();
        let ids = orchestrator.register_reveal(&stage, "#collection", start, &timeline, Targets::Document);
        assert_eq!(ids.len(), 1);
        // Held hidden until triggered
        assert_eq!(stage.applied_to(cards[0]), vec![Props::new().y(100.0).opacity(0.0)]);

        orchestrator.frame(&stage, 1200.0, 0.1);
        assert_eq!(stage.applied_to(cards[0]).len(), 1);

        // Threshold is 2000 - 700 = 1300
        for _ in 0..20 {
            orchestrator.frame(&stage, 1400.0, 0.25);
        }
        assert!(!orchestrator.is_registered(ids[0]));
        assert_eq!(*stage.applied_to(cards[1]).last().unwrap(), Props::new().y(0.0).opacity(1.0));

        let settled = stage.applied.borrow().len();
        orchestrator.frame(&stage, 0.0, 0.1);
        orchestrator.frame(&stage, 1400.0, 0.1);
        assert_eq!(stage.applied.borrow().len(), settled);
    }

    // ========================
    // Boundaries
    // ========================

    fn menu_sections(stage: &FakeStage) {
        // viewport 1000; "top 60%".."bottom 60%" gives [400, 1900], [2028, 3528], [3656, 5156]
        stage.add(&["#viennoiserie"], Rect::new(1000.0, 1500.0), None);
        stage.add(&["#boulangerie"], Rect::new(2628.0, 1500.0), None);
        stage.add(&["#patisserie"], Rect::new(4256.0, 1500.0), None);
    }

    fn track_sections(stage: &FakeStage, orchestrator: &mut Orchestrator<FakeStage>) -> Rc<RefCell<Vec<String>>> {
        let (log, _) = recorder::<String>();
        let range = TriggerRange::new("top 60%", "bottom 60%").unwrap();
        for id in ["viennoiserie", "boulangerie", "patisserie"] {
            let enter = Rc::clone(&log);
            let enter_back = Rc::clone(&log);
            orchestrator.register_boundary(
                stage,
                &format!("#{}", id),
                range,
                move || enter.borrow_mut().push(id.to_string()),
                move || enter_back.borrow_mut().push(id.to_string()),
            );
        }
        log
    }

    #[test]
    fn test_boundary_enter_and_enter_back() {
        let stage = FakeStage::new(1000.0, 8000.0);
        menu_sections(&stage);
        let mut orchestrator = Orchestrator::new();
        let log = track_sections(&stage, &mut orchestrator);
        let active = || log.borrow().last().cloned();

        orchestrator.frame(&stage, 0.0, 0.016);
        assert_eq!(active(), None);
        orchestrator.frame(&stage, 500.0, 0.016);
        assert_eq!(active().as_deref(), Some("viennoiserie"));
        orchestrator.frame(&stage, 2100.0, 0.016);
        assert_eq!(active().as_deref(), Some("boulangerie"));
        // In the gap between sections nothing changes
        orchestrator.frame(&stage, 1950.0, 0.016);
        assert_eq!(active().as_deref(), Some("boulangerie"));
        orchestrator.frame(&stage, 1800.0, 0.016);
        assert_eq!(active().as_deref(), Some("viennoiserie"));
    }

    #[test]
    fn test_boundary_first_frame_in_gap_activates_section_above() {
        let stage = FakeStage::new(1000.0, 8000.0);
        menu_sections(&stage);
        let mut orchestrator = Orchestrator::new();
        let log = track_sections(&stage, &mut orchestrator);

        // Restored scroll lands between boulangerie and patisserie
        orchestrator.frame(&stage, 3600.0, 0.016);
        assert_eq!(*log.borrow(), vec!["viennoiserie", "boulangerie"]);

        orchestrator.frame(&stage, 3000.0, 0.016);
        assert_eq!(log.borrow().len(), 2, "no crossing when scrolling back inside boulangerie");
        orchestrator.frame(&stage, 3700.0, 0.016);
        assert_eq!(log.borrow().last().map(String::as_str), Some("patisserie"));
    }

    #[test]
    fn test_same_frame_crossings_resolve_in_viewport_order() {
        let stage = FakeStage::new(1000.0, 8000.0);
        menu_sections(&stage);
        let mut orchestrator = Orchestrator::new();
        let log = track_sections(&stage, &mut orchestrator);

        orchestrator.frame(&stage, 0.0, 0.016);
        // Jump down over two starts at once
        orchestrator.frame(&stage, 2100.0, 0.016);
        assert_eq!(*log.borrow(), vec!["viennoiserie", "boulangerie"]);

        orchestrator.frame(&stage, 4000.0, 0.016);
        log.borrow_mut().clear();
        // Jump up over two ends at once
        orchestrator.frame(&stage, 500.0, 0.016);
        assert_eq!(*log.borrow(), vec!["boulangerie", "viennoiserie"]);
    }

    #[test]
    fn test_resize_recomputes_thresholds() {
        let stage = FakeStage::new(1000.0, 8000.0);
        let section = stage.add(&["#coffee"], Rect::new(3000.0, 1000.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, sink) = recorder::<&str>();
        let range = TriggerRange::new("top 60%", "bottom 60%").unwrap();
        orchestrator.register_boundary(&stage, "#coffee", range, move || sink.borrow_mut().push("enter"), || {});
        orchestrator.frame(&stage, 0.0, 0.016);

        // Layout reflows: the section moves down and the viewport shrinks
        stage.move_to(section, Rect::new(5000.0, 1000.0));
        *stage.viewport_height.borrow_mut() = 800.0;
        orchestrator.resize(&stage);

        // Old start was 2400; new start is 5000 - 480 = 4520
        orchestrator.frame(&stage, 2500.0, 0.016);
        assert!(log.borrow().is_empty());
        orchestrator.frame(&stage, 4600.0, 0.016);
        assert_eq!(*log.borrow(), vec!["enter"]);
    }

    #[test]
    fn test_notification_follows_registration_order() {
        let stage = FakeStage::new(1000.0, 4000.0);
        stage.add(&["#a"], Rect::new(1000.0, 1000.0), None);
        stage.add(&["#b"], Rect::new(500.0, 1000.0), None);
        let mut orchestrator = Orchestrator::new();
        let (log, _) = recorder::<&str>();
        let range = TriggerRange::new("top bottom", "bottom top").unwrap();
        for name in ["#a", "#b"] {
            let sink = Rc::clone(&log);
            orchestrator.register_scroll_bound(&stage, name, ScrollBoundSpec::new(range), move |_| {
                sink.borrow_mut().push(name)
            });
        }
        for y in [600.0, 700.0, 800.0] {
            orchestrator.frame(&stage, y, 0.016);
        }
        assert_eq!(*log.borrow(), vec!["#a", "#b", "#a", "#b", "#a", "#b"]);
    }

    // ========================
    // Session
    // ========================

    fn session_with(stage: &FakeStage) -> ScrollSession<FakeStage> {
        let mut session = ScrollSession::new();
        assert!(session.start(stage, ScrollConfig { duration: 1.5, ..Default::default() }));
        session
    }

    #[test]
    fn test_repeated_scroll_to_ends_on_last_target() {
        let stage = FakeStage::new(1000.0, 8000.0);
        stage.add(&["#contact"], Rect::new(6000.0, 900.0), None);
        let mut session = session_with(&stage);

        session.scroll_to(&stage, "contact", 100.0, 1.0, Easing::Power4Out).unwrap();
        session.frame(&stage, 0.016);
        session.frame(&stage, 0.016);
        let target = session.scroll_to(&stage, "contact", 100.0, 1.0, Easing::Power4Out).unwrap();
        assert_eq!(target, 5900.0);

        let mut trail = Vec::new();
        for _ in 0..120 {
            if let Some(y) = session.frame(&stage, 0.016) {
                trail.push(y);
            }
        }
        assert_eq!(session.smooth().position(), 5900.0);
        assert!(trail.iter().all(|y| *y <= 5900.0));
        assert!(trail.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_scroll_to_unknown_id_is_an_error() {
        let stage = FakeStage::new(1000.0, 3000.0);
        let mut session = session_with(&stage);
        let err = session.scroll_to(&stage, "nowhere", 0.0, 1.0, Easing::Linear).unwrap_err();
        assert_eq!(err, ScrollError::MissingTarget("nowhere".to_string()));
        assert!(!session.smooth().is_animating());
    }

    #[test]
    fn test_no_callbacks_after_stop() {
        let stage = FakeStage::new(1000.0, 5000.0);
        stage.add(&["#band"], Rect::new(1000.0, 1000.0), None);
        let mut session = session_with(&stage);
        let (log, sink) = recorder::<f64>();
        let range = TriggerRange::new("top bottom", "bottom top").unwrap();
        session
            .orchestrator_mut()
            .register_scroll_bound(&stage, "#band", ScrollBoundSpec::new(range), move |f| sink.borrow_mut().push(f));

        session.wheel(800.0);
        for _ in 0..10 {
            session.frame(&stage, 0.016);
        }
        let fired = log.borrow().len();
        assert!(fired > 0);

        session.stop();
        assert!(session.orchestrator().is_empty());
        assert!(!session.wheel(300.0));
        for _ in 0..10 {
            assert_eq!(session.frame(&stage, 0.016), None);
        }
        assert_eq!(log.borrow().len(), fired);
    }
}
