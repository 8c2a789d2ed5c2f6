use crate::{Bounds, RevealOptions};

/// One-shot visibility watch of a single section.
///
/// `Unobserved -> Observed -> Revealed`. Revealing is irreversible: once revealed, further
/// observations are ignored and the host should stop observing the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityWatch {
    #[default]
    Unobserved,
    Observed,
    Revealed,
}

impl VisibilityWatch {
    /// Arms the watch. Returns `false` if it was already observed or revealed.
    pub fn observe(&mut self) -> bool {
        if *self != Self::Unobserved {
            return false;
        }
        *self = Self::Observed;
        true
    }

    pub fn is_observed(&self) -> bool {
        *self == Self::Observed
    }

    pub fn is_revealed(&self) -> bool {
        *self == Self::Revealed
    }

    /// Feeds one intersection result. Returns `true` only on the transition to `Revealed`.
    pub fn observe_intersection(&mut self, intersecting: bool) -> bool {
        if !intersecting || !self.is_observed() {
            return false;
        }
        *self = Self::Revealed;
        true
    }
}

/// Visible fraction of `element` inside `viewport` after applying the root margin.
///
/// Zero-area elements count as fully visible when they touch the viewport.
pub fn intersection_ratio(element: Bounds, viewport: Bounds, options: &RevealOptions) -> f64 {
    let m = options.root_margin;
    let root = Bounds::new(
        viewport.left - m.left,
        viewport.top - m.top,
        viewport.width + m.left + m.right,
        viewport.height + m.top + m.bottom,
    );
    let Some(overlap) = element.intersection(&root) else {
        return 0.0;
    };
    let area = element.area();
    if area <= 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}
