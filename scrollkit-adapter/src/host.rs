use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use scrollkit::{Bounds, ScrollBehavior, ScrollMetrics};

use crate::{RegistrationError, WorkerRegistration};

/// Options for moving input focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusOptions {
    /// Move focus without scrolling the element into view.
    pub prevent_scroll: bool,
}

/// Vertical alignment for [`Element::scroll_into_view`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// A handle to a host element.
///
/// Handles are cheap to clone and share the underlying node, so every method takes `&self`.
pub trait Element: Clone + fmt::Debug {
    fn is_same_node(&self, other: &Self) -> bool;

    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    /// The nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn add_class(&self, class: &str);

    /// Sets an inline style property, including custom properties such as `--name`.
    fn set_style_property(&self, property: &str, value: &str);

    fn set_disabled(&self, disabled: bool);

    fn scroll_metrics(&self) -> ScrollMetrics;
    /// Horizontal offset of the element in page coordinates.
    fn offset_left(&self) -> f64;
    /// Bounds of the element in viewport coordinates.
    fn bounding_rect(&self) -> Bounds;

    fn set_scroll_left(&self, scroll_left: f64);
    fn scroll_by(&self, delta: f64, behavior: ScrollBehavior);
    fn scroll_into_view(&self, behavior: ScrollBehavior, block: Block);

    fn focus(&self, options: FocusOptions);
    fn blur(&self);
}

/// Element lookup in a host document.
pub trait Document {
    type Element: Element;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// The root element (`<html>`).
    fn root(&self) -> Self::Element;
    fn active_element(&self) -> Option<Self::Element>;
}

/// Session history of the host.
pub trait History {
    /// Some hosts have no `pushState`; navigation then leaves the URL untouched.
    fn supports_push_state(&self) -> bool {
        true
    }

    /// Appends an entry for `url` without navigating.
    fn push_state(&self, url: &str);
}

/// Facts about the environment the page runs in.
pub trait Environment {
    fn prefers_reduced_motion(&self) -> bool;
    fn is_secure_origin(&self) -> bool;
    fn supports_workers(&self) -> bool;
}

/// Registers a background worker script.
pub trait WorkerRegistrar {
    fn register(&self, script_url: &str) -> Result<WorkerRegistration, RegistrationError>;
}
