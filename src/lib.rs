//! Interactive behavior of a static portfolio page.
//!
//! The page has three horizontal carousels (portfolio, testimonials, services), sections that
//! fade in as they scroll into view, same-page anchor navigation and a skip link. This crate
//! is the explicit assembly of those pieces: [`Page::mount`] resolves the markup contract in
//! [`PageOptions`] once, builds one component per concern from `scrollkit-adapter`, and the
//! host forwards its events to the returned [`Page`].
//!
//! Missing markup never fails: a carousel whose container or controls are absent simply has no
//! behavior.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod page;


pub use options::PageOptions;
pub use page::Page;

pub use scrollkit;
pub use scrollkit_adapter;
