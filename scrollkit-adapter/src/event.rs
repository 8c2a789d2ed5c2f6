/// A pointer (mouse) event over a scroll region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer X in page coordinates.
    pub page_x: f64,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(page_x: f64) -> Self {
        Self {
            page_x,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A click on `target`, before the host applies its default action.
#[derive(Clone, Debug)]
pub struct ClickEvent<E> {
    pub target: E,
    default_prevented: bool,
}

impl<E> ClickEvent<E> {
    pub fn new(target: E) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// One result of the host's viewport intersection observer.
#[derive(Clone, Debug)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

impl<E> IntersectionEntry<E> {
    pub fn new(target: E, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}
