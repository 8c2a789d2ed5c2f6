use scrollkit::{Fragment, ScrollBehavior};

use crate::{Block, ClickEvent, Document, Element, FocusOptions, History};

/// Selector of links pointing into the current page.
pub const SAME_PAGE_LINK: &str = "a[href^=\"#\"]";

/// Smooth same-page navigation with focus management.
///
/// A click inside a same-page link is taken over: the default jump is prevented, the target
/// receives focus without a scroll jump, is smoothly scrolled to the top of the viewport, and
/// its fragment is pushed onto the history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorNavigator;

impl AnchorNavigator {
    pub fn new() -> Self {
        Self
    }

    /// Handles a click. Returns the navigated-to element.
    ///
    /// Links without a resolvable target still have their default prevented, but cause no focus
    /// change and no history entry.
    pub fn on_click<D, H>(
        &self,
        doc: &D,
        history: &H,
        event: &mut ClickEvent<D::Element>,
    ) -> Option<D::Element>
    where
        D: Document,
        H: History,
    {
        let link = event.target.closest(SAME_PAGE_LINK)?;
        event.prevent_default();

        let href = link.attribute("href")?;
        let Some(fragment) = Fragment::parse(&href) else {
            kdebug!(%href, "ignored malformed fragment link");
            return None;
        };
        let Some(target) = doc.element_by_id(fragment.id()) else {
            kdebug!(%href, "fragment link has no target");
            return None;
        };

        target.focus(FocusOptions {
            prevent_scroll: true,
        });
        target.scroll_into_view(ScrollBehavior::Smooth, Block::Start);

        if history.supports_push_state() {
            history.push_state(fragment.as_str());
        }
        ktrace!(%href, "anchor navigation");
        Some(target)
    }
}
