use crate::{DISABLED_OPACITY, ScrollDirection, ScrollMetrics};

/// Enabled/disabled state of a region's previous and next controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl NavState {
    /// Previous is disabled at the start of the content, next within one pixel of the end.
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self {
            prev_disabled: metrics.at_start(),
            next_disabled: metrics.at_end(),
        }
    }

    pub fn is_disabled(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Backward => self.prev_disabled,
            ScrollDirection::Forward => self.next_disabled,
        }
    }

    pub fn can_scroll(&self, direction: ScrollDirection) -> bool {
        !self.is_disabled(direction)
    }
}

/// Opacity of a control given its disabled state.
pub fn control_opacity(disabled: bool) -> f64 {
    if disabled { DISABLED_OPACITY } else { 1.0 }
}
