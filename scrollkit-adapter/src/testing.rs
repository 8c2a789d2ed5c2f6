//! An in-memory fake DOM for tests.
//!
//! Supports the selector subset used by the page contract: tag names, `.class`, `#id`,
//! `[attr]`, `[attr="v"]`, `[attr^="v"]`, descendant combinators and comma lists.
//! Scroll requests are recorded and applied instantly, clamped to the scroll range.
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use scrollkit::{Bounds, ScrollBehavior, ScrollMetrics};

use crate::{
    Block, Document, Element, Environment, FocusOptions, History, RegistrationError,
    WorkerRegistrar, WorkerRegistration,
};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<usize>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    disabled: bool,
    metrics: ScrollMetrics,
    offset_left: f64,
    bounds: Bounds,
    scroll_requests: Vec<(f64, ScrollBehavior)>,
    into_view: Vec<(ScrollBehavior, Block)>,
    focus_calls: Vec<FocusOptions>,
}

#[derive(Debug)]
struct Dom {
    nodes: Vec<Node>,
    active: Option<usize>,
    history: Vec<String>,
    push_state: bool,
    reduced_motion: bool,
    secure_origin: bool,
    workers: bool,
}

/// A fake document. Clones share the same tree.
#[derive(Clone)]
pub struct FakeDom(Rc<RefCell<Dom>>);

impl fmt::Debug for FakeDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeDom")
            .field("nodes", &self.0.borrow().nodes.len())
            .finish_non_exhaustive()
    }
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    /// Creates a document with an `html` root and a `body`.
    pub fn new() -> Self {
        let root = Node {
            tag: String::from("html"),
            ..Node::default()
        };
        let dom = Self(Rc::new(RefCell::new(Dom {
            nodes: alloc::vec![root],
            active: None,
            history: Vec::new(),
            push_state: true,
            reduced_motion: false,
            secure_origin: true,
            workers: true,
        })));
        dom.append(&dom.root(), "body");
        dom
    }

    pub fn body(&self) -> FakeElement {
        FakeElement {
            dom: self.clone(),
            index: 1,
        }
    }

    /// Appends a new `tag` element under `parent`.
    pub fn append(&self, parent: &FakeElement, tag: &str) -> FakeElement {
        let mut dom = self.0.borrow_mut();
        dom.nodes.push(Node {
            tag: String::from(tag),
            parent: Some(parent.index),
            ..Node::default()
        });
        FakeElement {
            dom: self.clone(),
            index: dom.nodes.len() - 1,
        }
    }

    /// History entries pushed so far.
    pub fn history(&self) -> Vec<String> {
        self.0.borrow().history.clone()
    }

    pub fn set_push_state_supported(&self, supported: bool) {
        self.0.borrow_mut().push_state = supported;
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.0.borrow_mut().reduced_motion = reduced;
    }

    pub fn set_secure_origin(&self, secure: bool) {
        self.0.borrow_mut().secure_origin = secure;
    }

    pub fn set_workers_supported(&self, supported: bool) {
        self.0.borrow_mut().workers = supported;
    }

    fn element(&self, index: usize) -> FakeElement {
        FakeElement {
            dom: self.clone(),
            index,
        }
    }

    fn matching(&self, selector: &str) -> Vec<usize> {
        let dom = self.0.borrow();
        (0..dom.nodes.len())
            .filter(|&i| dom.matches(i, selector))
            .collect()
    }
}

impl Dom {
    fn matches(&self, index: usize, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|s| self.matches_complex(index, s))
    }

    fn matches_complex(&self, index: usize, selector: &str) -> bool {
        let parts: Vec<&str> = selector.split_whitespace().collect();
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        if !self.matches_compound(index, last) {
            return false;
        }
        let mut cur = self.nodes[index].parent;
        for part in ancestors.iter().rev() {
            loop {
                let Some(p) = cur else {
                    return false;
                };
                cur = self.nodes[p].parent;
                if self.matches_compound(p, part) {
                    break;
                }
            }
        }
        true
    }

    fn matches_compound(&self, index: usize, compound: &str) -> bool {
        let node = &self.nodes[index];
        let bytes = compound.as_bytes();
        let mut i = ident_end(compound, 0);
        if i > 0 && node.tag.as_str() != &compound[..i] {
            return false;
        }
        while i < bytes.len() {
            match bytes[i] {
                b'.' => {
                    let end = ident_end(compound, i + 1);
                    let class = &compound[i + 1..end];
                    if !node.classes.iter().any(|c| c == class) {
                        return false;
                    }
                    i = end;
                }
                b'#' => {
                    let end = ident_end(compound, i + 1);
                    if node.attributes.get("id").map(String::as_str) != Some(&compound[i + 1..end])
                    {
                        return false;
                    }
                    i = end;
                }
                b'[' => {
                    let Some(close) = compound[i..].find(']') else {
                        return false;
                    };
                    if !attribute_matches(node, &compound[i + 1..i + close]) {
                        return false;
                    }
                    i += close + 1;
                }
                _ => return false,
            }
        }
        true
    }
}

fn ident_end(s: &str, start: usize) -> usize {
    s[start..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .map_or(s.len(), |n| start + n)
}

fn attribute_matches(node: &Node, expr: &str) -> bool {
    let (name, op, value) = if let Some((name, value)) = expr.split_once("^=") {
        (name, "^=", value)
    } else if let Some((name, value)) = expr.split_once('=') {
        (name, "=", value)
    } else {
        return node.attributes.contains_key(expr.trim());
    };
    let value = value.trim().trim_matches('"').trim_matches('\'');
    let Some(actual) = node.attributes.get(name.trim()) else {
        return false;
    };
    match op {
        "^=" => actual.starts_with(value),
        _ => actual == value,
    }
}

/// A handle to a node of a [`FakeDom`].
#[derive(Clone)]
pub struct FakeElement {
    dom: FakeDom,
    index: usize,
}

impl fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dom = self.dom.0.borrow();
        let node = &dom.nodes[self.index];
        f.debug_struct("FakeElement")
            .field("index", &self.index)
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .finish()
    }
}

impl FakeElement {
    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        f(&self.dom.0.borrow().nodes[self.index])
    }

    fn with_node_mut<R>(&self, f: impl FnOnce(&mut Node) -> R) -> R {
        f(&mut self.dom.0.borrow_mut().nodes[self.index])
    }

    /// Appends a child element.
    pub fn child(&self, tag: &str) -> FakeElement {
        self.dom.append(self, tag)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets content and window widths, keeping the current offset.
    pub fn with_scroll_size(self, scroll_width: f64, client_width: f64) -> Self {
        self.with_node_mut(|n| {
            n.metrics.scroll_width = scroll_width;
            n.metrics.client_width = client_width;
        });
        self
    }

    pub fn with_offset_left(self, offset_left: f64) -> Self {
        self.with_node_mut(|n| n.offset_left = offset_left);
        self
    }

    pub fn with_bounds(self, bounds: Bounds) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn set_bounds(&self, bounds: Bounds) {
        self.with_node_mut(|n| n.bounds = bounds);
    }

    pub fn scroll_left(&self) -> f64 {
        self.with_node(|n| n.metrics.scroll_left)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.with_node(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.with_node(|n| n.styles.get(property).cloned())
    }

    pub fn is_disabled(&self) -> bool {
        self.with_node(|n| n.disabled)
    }

    pub fn is_focused(&self) -> bool {
        self.dom.0.borrow().active == Some(self.index)
    }

    pub fn scroll_requests(&self) -> Vec<(f64, ScrollBehavior)> {
        self.with_node(|n| n.scroll_requests.clone())
    }

    pub fn scroll_into_view_calls(&self) -> Vec<(ScrollBehavior, Block)> {
        self.with_node(|n| n.into_view.clone())
    }

    pub fn focus_calls(&self) -> Vec<FocusOptions> {
        self.with_node(|n| n.focus_calls.clone())
    }
}

impl Element for FakeElement {
    fn is_same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dom.0, &other.dom.0) && self.index == other.index
    }

    fn contains(&self, other: &Self) -> bool {
        if !Rc::ptr_eq(&self.dom.0, &other.dom.0) {
            return false;
        }
        let dom = self.dom.0.borrow();
        let mut cur = Some(other.index);
        while let Some(i) = cur {
            if i == self.index {
                return true;
            }
            cur = dom.nodes[i].parent;
        }
        false
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let found = {
            let dom = self.dom.0.borrow();
            let mut cur = Some(self.index);
            let mut found = None;
            while let Some(i) = cur {
                if dom.matches(i, selector) {
                    found = Some(i);
                    break;
                }
                cur = dom.nodes[i].parent;
            }
            found
        };
        found.map(|i| self.dom.element(i))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.with_node(|n| n.attributes.get(name).cloned())
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.with_node_mut(|n| {
            n.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&self, name: &str) {
        self.with_node_mut(|n| {
            n.attributes.remove(name);
        });
    }

    fn add_class(&self, class: &str) {
        self.with_node_mut(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
    }

    fn set_style_property(&self, property: &str, value: &str) {
        self.with_node_mut(|n| {
            n.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn set_disabled(&self, disabled: bool) {
        self.with_node_mut(|n| n.disabled = disabled);
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.with_node(|n| n.metrics)
    }

    fn offset_left(&self) -> f64 {
        self.with_node(|n| n.offset_left)
    }

    fn bounding_rect(&self) -> Bounds {
        self.with_node(|n| n.bounds)
    }

    fn set_scroll_left(&self, scroll_left: f64) {
        self.with_node_mut(|n| n.metrics.scroll_left = n.metrics.clamp_scroll_left(scroll_left));
    }

    fn scroll_by(&self, delta: f64, behavior: ScrollBehavior) {
        self.with_node_mut(|n| {
            n.scroll_requests.push((delta, behavior));
            n.metrics.scroll_left = n.metrics.clamp_scroll_left(n.metrics.scroll_left + delta);
        });
    }

    fn scroll_into_view(&self, behavior: ScrollBehavior, block: Block) {
        self.with_node_mut(|n| n.into_view.push((behavior, block)));
    }

    fn focus(&self, options: FocusOptions) {
        self.with_node_mut(|n| n.focus_calls.push(options));
        self.dom.0.borrow_mut().active = Some(self.index);
    }

    fn blur(&self) {
        let mut dom = self.dom.0.borrow_mut();
        if dom.active == Some(self.index) {
            dom.active = None;
        }
    }
}

impl Document for FakeDom {
    type Element = FakeElement;

    fn query_selector(&self, selector: &str) -> Option<FakeElement> {
        self.matching(selector)
            .first()
            .map(|&i| self.element(i))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
        self.matching(selector)
            .into_iter()
            .map(|i| self.element(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let found = {
            let dom = self.0.borrow();
            (0..dom.nodes.len())
                .find(|&i| dom.nodes[i].attributes.get("id").map(String::as_str) == Some(id))
        };
        found.map(|i| self.element(i))
    }

    fn root(&self) -> FakeElement {
        self.element(0)
    }

    fn active_element(&self) -> Option<FakeElement> {
        let active = self.0.borrow().active;
        active.map(|i| self.element(i))
    }
}

impl History for FakeDom {
    fn supports_push_state(&self) -> bool {
        self.0.borrow().push_state
    }

    fn push_state(&self, url: &str) {
        self.0.borrow_mut().history.push(url.to_string());
    }
}

impl Environment for FakeDom {
    fn prefers_reduced_motion(&self) -> bool {
        self.0.borrow().reduced_motion
    }

    fn is_secure_origin(&self) -> bool {
        self.0.borrow().secure_origin
    }

    fn supports_workers(&self) -> bool {
        self.0.borrow().workers
    }
}

/// A registrar returning a fixed result and recording the requested scripts.
#[derive(Debug)]
pub struct FakeRegistrar {
    result: Result<WorkerRegistration, RegistrationError>,
    calls: RefCell<Vec<String>>,
}

impl FakeRegistrar {
    pub fn succeeding(scope: &str) -> Self {
        Self {
            result: Ok(WorkerRegistration {
                scope: scope.to_string(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: RegistrationError) -> Self {
        Self {
            result: Err(err),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl WorkerRegistrar for FakeRegistrar {
    fn register(&self, script_url: &str) -> Result<WorkerRegistration, RegistrationError> {
        self.calls.borrow_mut().push(script_url.to_string());
        self.result.clone()
    }
}
