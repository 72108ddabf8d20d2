//! In-memory page layout for registration tests

use std::cell::RefCell;

use leptos_scroll::{Props, Rect, Stage};

struct Element {
    selectors: Vec<&'static str>,
    parent: Option<usize>,
    rect: Rect,
}

/// Nodes are indices; a node matches a selector listed when it was added
pub struct FakePage {
    elements: Vec<Element>,
    viewport_height: f64,
    pub applied: RefCell<Vec<(usize, Props)>>,
}

impl FakePage {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            viewport_height,
            applied: RefCell::new(Vec::new()),
        }
    }

    pub fn add(&mut self, selectors: &[&'static str], top: f64, height: f64) -> usize {
        self.add_within(None, selectors, top, height)
    }

    pub fn add_within(&mut self, parent: Option<usize>, selectors: &[&'static str], top: f64, height: f64) -> usize {
        self.elements.push(Element {
            selectors: selectors.to_vec(),
            parent,
            rect: Rect::new(top, height),
        });
        self.elements.len() - 1
    }

    fn descends_from(&self, node: usize, ancestor: usize) -> bool {
        let mut current = self.elements[node].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.elements[parent].parent;
        }
        false
    }
}

impl Stage for FakePage {
    type Node = usize;

    fn query(&self, selector: &str) -> Vec<usize> {
        (0..self.elements.len())
            .filter(|i| self.elements[*i].selectors.iter().any(|s| *s == selector))
            .collect()
    }

    fn query_within(&self, scope: &usize, selector: &str) -> Vec<usize> {
        self.query(selector)
            .into_iter()
            .filter(|node| self.descends_from(*node, *scope))
            .collect()
    }

    fn rect(&self, node: &usize) -> Rect {
        self.elements[*node].rect
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn viewport_width(&self) -> f64 {
        1440.0
    }

    fn scroll_limit(&self) -> f64 {
        let bottom = self.elements.iter().map(|e| e.rect.bottom()).fold(0.0, f64::max);
        (bottom - self.viewport_height).max(0.0)
    }

    fn apply(&self, node: &usize, props: &Props) {
        self.applied.borrow_mut().push((*node, *props));
    }

    fn set_pin_spacing(&self, _node: &usize, _extra: f64) {}
}
