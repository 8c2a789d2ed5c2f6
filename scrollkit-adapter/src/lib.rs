//! Host bindings for the `scrollkit` crate.
//!
//! `scrollkit` holds the geometry and state machines. This crate wires them to a host document
//! through small capability traits ([`Element`], [`Document`], [`History`], [`Environment`])
//! and exposes one event-driven component per concern:
//!
//! - [`CarouselController`]: previous/next buttons, drag scrolling, control state, progress
//! - [`KeyboardRouter`]: arrow keys for whichever region holds focus
//! - [`RevealAnimator`]: one-shot reveal of sections entering the viewport
//! - [`AnchorNavigator`] and [`SkipLink`]: same-page navigation with focus management
//!
//! Components receive only the elements they operate on. Nothing here registers listeners; the
//! host forwards its events to the component that owns the element.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod a11y;
mod anchor;
mod controller;
mod error;
mod event;
mod host;
mod keyboard;
mod reveal;
mod skip_link;
mod worker;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use a11y::{SCROLL_REGION_LABEL, apply_motion_preference, mark_scrollable_region};
pub use anchor::{AnchorNavigator, SAME_PAGE_LINK};
pub use controller::CarouselController;
pub use error::RegistrationError;
pub use event::{ClickEvent, IntersectionEntry, Key, KeyEvent, PointerEvent};
pub use host::{Block, Document, Element, Environment, FocusOptions, History, WorkerRegistrar};
pub use keyboard::{KeyAction, KeyboardRouter};
pub use reveal::RevealAnimator;
pub use skip_link::SkipLink;
pub use worker::{WORKER_SCRIPT, WorkerOutcome, WorkerRegistration, register_offline_worker};
