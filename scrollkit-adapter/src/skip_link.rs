use alloc::string::String;

use crate::{ClickEvent, Document, Element, FocusOptions};

/// The "skip to content" link.
///
/// Activating it focuses the main landmark through a temporary `tabindex="-1"`, which is
/// removed the first time the landmark loses focus.
#[derive(Clone, Debug)]
pub struct SkipLink<E> {
    selector: String,
    link: E,
    main: Option<E>,
    awaiting_blur: bool,
}

impl<E: Element> SkipLink<E> {
    /// Returns `None` when the page has no skip link. A missing landmark leaves the link
    /// inert apart from suppressing its default jump.
    pub fn mount<D>(doc: &D, link_selector: &str, main_selector: &str) -> Option<Self>
    where
        D: Document<Element = E>,
    {
        let link = doc.query_selector(link_selector)?;
        Some(Self {
            selector: String::from(link_selector),
            link,
            main: doc.query_selector(main_selector),
            awaiting_blur: false,
        })
    }

    pub fn link(&self) -> &E {
        &self.link
    }

    pub fn main(&self) -> Option<&E> {
        self.main.as_ref()
    }

    /// Whether the landmark still carries the temporary `tabindex`.
    pub fn is_awaiting_blur(&self) -> bool {
        self.awaiting_blur
    }

    pub fn on_click(&mut self, event: &mut ClickEvent<E>) -> bool {
        let Some(link) = event.target.closest(&self.selector) else {
            return false;
        };
        if !link.is_same_node(&self.link) {
            return false;
        }
        event.prevent_default();
        let Some(main) = &self.main else {
            return false;
        };
        main.set_attribute("tabindex", "-1");
        main.focus(FocusOptions::default());
        self.awaiting_blur = true;
        true
    }

    /// Call when `element` loses focus.
    pub fn on_blur(&mut self, element: &E) -> bool {
        if !self.awaiting_blur {
            return false;
        }
        let Some(main) = &self.main else {
            return false;
        };
        if !main.is_same_node(element) {
            return false;
        }
        main.remove_attribute("tabindex");
        self.awaiting_blur = false;
        true
    }
}
