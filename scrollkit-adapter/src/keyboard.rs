use alloc::string::String;

use scrollkit::{KEYBOARD_STEP, ScrollBehavior, ScrollDirection};

use crate::{Element, Key, KeyEvent};

/// What a key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyAction {
    None,
    /// `Escape` released focus.
    Blurred,
    /// An arrow key scrolled the focused region.
    Scrolled(ScrollDirection),
}

/// Document-level arrow-key handling for scroll regions.
///
/// The router knows the container selectors of every region and scrolls whichever one encloses
/// the focused element. It does not need the region's controls, so a region with missing
/// buttons still scrolls from the keyboard.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardRouter {
    regions: String,
    step: f64,
}

impl KeyboardRouter {
    pub fn new<'a>(containers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut regions = String::new();
        for selector in containers {
            if selector.is_empty() {
                continue;
            }
            if !regions.is_empty() {
                regions.push_str(", ");
            }
            regions.push_str(selector);
        }
        Self {
            regions,
            step: KEYBOARD_STEP,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// The combined selector matching every region container.
    pub fn selector(&self) -> &str {
        &self.regions
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// The region container enclosing `element`, if any.
    pub fn region_of<E: Element>(&self, element: &E) -> Option<E> {
        if self.regions.is_empty() {
            return None;
        }
        element.closest(&self.regions)
    }

    pub fn on_keydown<E: Element>(&self, focused: Option<&E>, event: &mut KeyEvent) -> KeyAction {
        let Some(focused) = focused else {
            return KeyAction::None;
        };
        let direction = match event.key {
            Key::Escape => {
                focused.blur();
                return KeyAction::Blurred;
            }
            Key::ArrowLeft => ScrollDirection::Backward,
            Key::ArrowRight => ScrollDirection::Forward,
            Key::Other => return KeyAction::None,
        };
        let Some(region) = self.region_of(focused) else {
            return KeyAction::None;
        };
        event.prevent_default();
        region.scroll_by(direction.delta(self.step), ScrollBehavior::Smooth);
        ktrace!(?direction, step = self.step, "keyboard scroll");
        KeyAction::Scrolled(direction)
    }
}
