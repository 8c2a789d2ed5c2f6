use scrollkit::ScrollBehavior;

use crate::{Element, Environment};

/// Accessible name given to every scroll region.
pub const SCROLL_REGION_LABEL: &str = "Horizontally scrollable content. Use arrow keys to scroll.";

/// Makes a scroll region focusable and announces it as a labelled region.
pub fn mark_scrollable_region<E: Element>(container: &E) {
    container.set_attribute("tabindex", "0");
    container.set_attribute("role", "region");
    container.set_attribute("aria-label", SCROLL_REGION_LABEL);
}

/// Enables smooth document scrolling unless the user prefers reduced motion.
///
/// Returns whether smooth scrolling was enabled.
pub fn apply_motion_preference<E, Env>(root: &E, env: &Env) -> bool
where
    E: Element,
    Env: Environment,
{
    if env.prefers_reduced_motion() {
        kdebug!("reduced motion preferred: keeping instant document scrolling");
        return false;
    }
    root.set_style_property("scroll-behavior", ScrollBehavior::Smooth.as_css());
    true
}
