use alloc::vec::Vec;

use scrollkit::{Bounds, RevealOptions, VisibilityWatch, intersection_ratio};

use crate::{Document, Element, IntersectionEntry};

/// Reveals sections as they scroll into view.
///
/// Each watched element gets its own [`VisibilityWatch`]. An intersecting observation marks the
/// element with the visible class and retires the watch, so revealed sections stay revealed.
#[derive(Clone, Debug)]
pub struct RevealAnimator<E> {
    options: RevealOptions,
    watches: Vec<(E, VisibilityWatch)>,
}

impl<E: Element> RevealAnimator<E> {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            watches: Vec::new(),
        }
    }

    /// Watches every element in `doc` matching the configured section selector.
    pub fn mount<D>(doc: &D, options: RevealOptions) -> Self
    where
        D: Document<Element = E>,
    {
        let mut animator = Self::new(options);
        for section in doc.query_selector_all(&animator.options.section_selector) {
            animator.observe(section);
        }
        kdebug!(sections = animator.watches.len(), "reveal animator mounted");
        animator
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Starts watching `element`. Returns `false` if it is already known.
    pub fn observe(&mut self, element: E) -> bool {
        if self.position(&element).is_some() {
            return false;
        }
        let mut watch = VisibilityWatch::default();
        watch.observe();
        self.watches.push((element, watch));
        true
    }

    pub fn watch_of(&self, element: &E) -> Option<VisibilityWatch> {
        self.position(element).map(|i| self.watches[i].1)
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.watches.iter().filter(|(_, w)| w.is_observed()).count()
    }

    pub fn revealed(&self) -> usize {
        self.watches.iter().filter(|(_, w)| w.is_revealed()).count()
    }

    /// Applies a batch of intersection results.
    ///
    /// Returns the elements revealed by this batch; the host should stop observing them.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry<E>]) -> Vec<E> {
        let mut revealed = Vec::new();
        for entry in entries {
            let Some(i) = self.position(&entry.target) else {
                continue;
            };
            if self.reveal_at(i, entry.is_intersecting) {
                revealed.push(entry.target.clone());
            }
        }
        revealed
    }

    /// Runs the reveal transitions from element geometry, for hosts without an observer.
    pub fn check_viewport(&mut self, viewport: Bounds) -> Vec<E> {
        let mut revealed = Vec::new();
        for i in 0..self.watches.len() {
            if !self.watches[i].1.is_observed() {
                continue;
            }
            let bounds = self.watches[i].0.bounding_rect();
            let ratio = intersection_ratio(bounds, viewport, &self.options);
            if self.reveal_at(i, self.options.is_intersecting(ratio)) {
                revealed.push(self.watches[i].0.clone());
            }
        }
        revealed
    }

    fn reveal_at(&mut self, i: usize, intersecting: bool) -> bool {
        let (element, watch) = &mut self.watches[i];
        if !watch.observe_intersection(intersecting) {
            return false;
        }
        element.add_class(&self.options.visible_class);
        ktrace!(?element, "section revealed");
        true
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.watches
            .iter()
            .position(|(e, _)| e.is_same_node(element))
    }
}
