use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use scrollkit::{KEYBOARD_STEP, RegionOptions, RevealOptions};
use scrollkit_adapter::WORKER_SCRIPT;

/// Configuration for [`crate::Page`].
///
/// `Default` is the page's markup contract: `.portfolio-scroll`, `.testimonials-scroll` and
/// `.services-scroll` with controls under the matching `*-nav`, `.fade-in-section` sections,
/// `.skip-link` and `#main`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageOptions {
    pub regions: Vec<RegionOptions>,
    /// Arrow-key step, shared by all regions.
    pub keyboard_step: f64,
    pub reveal: RevealOptions,
    pub skip_link: String,
    /// Selector of the main content landmark.
    pub main: String,
    pub worker_script: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            regions: vec![
                RegionOptions::portfolio(),
                RegionOptions::testimonials(),
                RegionOptions::services(),
            ],
            keyboard_step: KEYBOARD_STEP,
            reveal: RevealOptions::default(),
            skip_link: String::from(".skip-link"),
            main: String::from("#main"),
            worker_script: String::from(WORKER_SCRIPT),
        }
    }
}

impl PageOptions {
    pub fn with_region(mut self, region: RegionOptions) -> Self {
        self.regions.push(region);
        self
    }

    pub fn with_regions(mut self, regions: Vec<RegionOptions>) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_keyboard_step(mut self, step: f64) -> Self {
        self.keyboard_step = step;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealOptions) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn with_worker_script(mut self, script: impl Into<String>) -> Self {
        self.worker_script = script.into();
        self
    }
}
