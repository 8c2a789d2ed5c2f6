//! Headless state and arithmetic for horizontal carousels.
//!
//! For host bindings (element handles, event dispatch, reveal animation, anchor navigation),
//! see the `scrollkit-adapter` crate.
//!
//! This crate holds no UI objects. It covers the pieces of a scroll region that are pure
//! functions of geometry and input: previous/next enabled state, scroll progress, pointer
//! drag sessions, one-shot visibility watches, and eased smooth scrolling for hosts
//! that have no native smooth scroll.
//!
//! A host layer is expected to provide:
//! - scroll metrics (`scrollLeft`, `scrollWidth`, `clientWidth`)
//! - pointer positions and key presses
//! - intersection results or element/viewport bounds
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod debounce;
mod drag;
mod fragment;
mod nav;
mod options;
mod progress;
mod reveal;
mod smooth;
mod state;
mod types;


pub use debounce::Debounce;
pub use drag::DragSession;
pub use fragment::{Fragment, is_same_page_link};
pub use nav::{NavState, control_opacity};
pub use options::{
    CARD_STEP, DISABLED_OPACITY, DRAG_MULTIPLIER, EDGE_TOLERANCE, KEYBOARD_STEP, Margin,
    PORTFOLIO_STEP, RegionOptions, RevealOptions,
};
pub use progress::{PROGRESS_PROPERTY, progress_css_value, scroll_progress};
pub use reveal::{VisibilityWatch, intersection_ratio};
pub use smooth::SmoothScroll;
pub use state::RegionState;
pub use types::{Bounds, Cursor, ScrollBehavior, ScrollDirection, ScrollMetrics};
