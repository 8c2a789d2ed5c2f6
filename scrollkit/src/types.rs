use crate::EDGE_TOLERANCE;

/// Geometry of a horizontally scrollable container, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset (`scrollLeft`).
    pub scroll_left: f64,
    /// Total width of the scrollable content (`scrollWidth`).
    pub scroll_width: f64,
    /// Visible width of the container (`clientWidth`).
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    pub fn with_scroll_left(self, scroll_left: f64) -> Self {
        Self {
            scroll_left,
            ..self
        }
    }

    /// The largest reachable scroll offset. Never negative.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn is_scrollable(&self) -> bool {
        self.scroll_width > self.client_width
    }

    pub fn at_start(&self) -> bool {
        self.scroll_left <= 0.0
    }

    /// `true` once the offset is within [`EDGE_TOLERANCE`] of the end.
    ///
    /// Browsers report fractional offsets on scaled displays, so the last pixel counts as the end.
    pub fn at_end(&self) -> bool {
        self.scroll_left >= self.scroll_width - self.client_width - EDGE_TOLERANCE
    }

    pub fn clamp_scroll_left(&self, scroll_left: f64) -> f64 {
        scroll_left.clamp(0.0, self.max_scroll())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Backward,
    Forward,
}

impl ScrollDirection {
    /// `-1.0` for backward, `1.0` for forward.
    pub fn sign(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }

    pub fn delta(self, step: f64) -> f64 {
        self.sign() * step
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump straight to the target offset.
    #[default]
    Instant,
    /// Animate towards the target offset. A new request retargets a running animation.
    Smooth,
}

impl ScrollBehavior {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Instant => "auto",
            Self::Smooth => "smooth",
        }
    }
}

/// Pointer affordance shown over a draggable container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// An axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// The overlapping box, or `None` when the boxes do not touch.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }
}
