//! Optional animate-on-scroll library hookup.

use crate::config::AosConfig;
use crate::effect::Effect;
use crate::page::Page;

/// Name the host registers the library under.
pub const AOS_LIBRARY: &str = "AOS";

#[derive(Clone, Debug)]
pub struct ScrollRevealLibrary {
    settings: AosConfig,
    initialized: bool,
}

impl ScrollRevealLibrary {
    pub fn new(settings: &AosConfig) -> Self {
        Self {
            settings: settings.clone(),
            initialized: false,
        }
    }

    /// Initialises the library if the page has it; otherwise does nothing.
    pub fn on_dom_content_loaded(&mut self, page: &mut Page) {
        if self.initialized || !page.has_library(AOS_LIBRARY) {
            return;
        }
        page.push_effect(Effect::InitScrollReveal(self.settings.clone()));
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
