use alloc::format;
use alloc::string::String;

/// Button step of the portfolio strip: one item plus its gap.
pub const PORTFOLIO_STEP: f64 = 420.0;

/// Button step of the testimonial and service strips: a 320px card plus a 24px gap.
pub const CARD_STEP: f64 = 320.0 + 24.0;

/// Arrow-key step, shared by every region. Deliberately not derived from the button steps.
pub const KEYBOARD_STEP: f64 = 320.0;

/// Pointer travel is amplified by this factor while dragging.
pub const DRAG_MULTIPLIER: f64 = 2.0;

/// Sub-pixel slack when deciding whether a region is scrolled to its end.
pub const EDGE_TOLERANCE: f64 = 1.0;

/// Opacity applied to a disabled previous/next control.
pub const DISABLED_OPACITY: f64 = 0.5;

/// Configuration for one carousel region.
///
/// The selectors are the binding contract with the page markup. If any of them matches nothing,
/// the region stays inert.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionOptions {
    /// Selector of the scrollable container.
    pub container: String,
    /// Selector of the "previous" control.
    pub prev: String,
    /// Selector of the "next" control.
    pub next: String,
    /// Distance scrolled per button activation, in pixels.
    pub step: f64,
}

impl RegionOptions {
    pub fn new(
        container: impl Into<String>,
        prev: impl Into<String>,
        next: impl Into<String>,
        step: f64,
    ) -> Self {
        Self {
            container: container.into(),
            prev: prev.into(),
            next: next.into(),
            step,
        }
    }

    /// Builds options whose controls are `.nav-prev`/`.nav-next` nested under `nav`.
    pub fn with_nav(container: impl Into<String>, nav: &str, step: f64) -> Self {
        Self::new(
            container,
            format!("{nav} .nav-prev"),
            format!("{nav} .nav-next"),
            step,
        )
    }

    pub fn portfolio() -> Self {
        Self::with_nav(".portfolio-scroll", ".portfolio-nav", PORTFOLIO_STEP)
    }

    pub fn testimonials() -> Self {
        Self::with_nav(".testimonials-scroll", ".testimonials-nav", CARD_STEP)
    }

    pub fn services() -> Self {
        Self::with_nav(".services-scroll", ".services-nav", CARD_STEP)
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_prev(mut self, prev: impl Into<String>) -> Self {
        self.prev = prev.into();
        self
    }

    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = next.into();
        self
    }
}

/// Margins applied to the viewport box before intersection tests (CSS `rootMargin` order).
///
/// Negative values shrink the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn bottom(bottom: f64) -> Self {
        Self {
            bottom,
            ..Self::default()
        }
    }
}

/// Configuration for reveal-on-scroll.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealOptions {
    /// Selector of the sections to watch.
    pub section_selector: String,
    /// Class added once a section is revealed.
    pub visible_class: String,
    /// Fraction of the element's area that must be visible.
    pub threshold: f64,
    pub root_margin: Margin,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            section_selector: String::from(".fade-in-section"),
            visible_class: String::from("is-visible"),
            threshold: 0.15,
            root_margin: Margin::bottom(-50.0),
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, root_margin: Margin) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub fn with_section_selector(mut self, selector: impl Into<String>) -> Self {
        self.section_selector = selector.into();
        self
    }

    pub fn with_visible_class(mut self, class: impl Into<String>) -> Self {
        self.visible_class = class.into();
        self
    }

    /// Whether an intersection ratio is enough to reveal a section.
    pub fn is_intersecting(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}
