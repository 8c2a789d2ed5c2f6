use alloc::format;
use alloc::string::String;

use crate::ScrollMetrics;

/// Custom style property carrying the scroll percentage of a region.
pub const PROGRESS_PROPERTY: &str = "--scroll-percentage";

/// Scroll progress of a region in percent, within `[0, 100]`.
///
/// Content that fits without scrolling reports `0`. Overscroll (negative or past-the-end
/// offsets during elastic bounce) is clamped.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    if !metrics.is_scrollable() {
        return 0.0;
    }
    let pct = metrics.scroll_left / metrics.max_scroll() * 100.0;
    if !pct.is_finite() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

/// Renders a percentage as a style value, e.g. `45.5%`.
pub fn progress_css_value(pct: f64) -> String {
    format!("{pct}%")
}
