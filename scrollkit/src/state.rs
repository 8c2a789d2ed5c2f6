use crate::{DragSession, NavState, ScrollMetrics, scroll_progress};

/// A lightweight snapshot of one region, useful for diagnostics and restoring UI state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionState {
    pub metrics: ScrollMetrics,
    pub nav: NavState,
    /// Scroll progress in percent.
    pub progress: f64,
    pub dragging: bool,
}

impl RegionState {
    pub fn capture(metrics: ScrollMetrics, drag: &DragSession) -> Self {
        Self {
            metrics,
            nav: NavState::from_metrics(metrics),
            progress: scroll_progress(metrics),
            dragging: drag.is_active(),
        }
    }
}
