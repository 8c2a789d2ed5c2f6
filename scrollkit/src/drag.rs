use crate::DRAG_MULTIPLIER;

/// Pointer-drag state of one region.
///
/// `Idle -> Dragging -> Idle`. A pointer-down always starts a fresh session; drags never nest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        /// Pointer X at pointer-down, relative to the container.
        start_x: f64,
        /// Container scroll offset at pointer-down.
        start_scroll: f64,
    },
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn begin(&mut self, x: f64, scroll_left: f64) {
        ktrace!(x, scroll_left, "DragSession::begin");
        *self = Self::Dragging {
            start_x: x,
            start_scroll: scroll_left,
        };
    }

    /// The scroll offset the container should take for a pointer at `x`.
    ///
    /// Returns `None` while idle.
    pub fn drag_to(&self, x: f64) -> Option<f64> {
        match *self {
            Self::Idle => None,
            Self::Dragging {
                start_x,
                start_scroll,
            } => Some(start_scroll - (x - start_x) * DRAG_MULTIPLIER),
        }
    }

    /// Ends the session. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Idle;
        was_active
    }
}
