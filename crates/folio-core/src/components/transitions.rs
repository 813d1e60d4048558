//! Whole-page fade in on first paint and fade out on unload.

use std::time::Duration;

use crate::config::TransitionConfig;
use crate::page::{ElementId, Page};
use crate::scheduler::{Job, Scheduler};

#[derive(Clone, Debug)]
pub struct PageTransitions {
    body: ElementId,
    fade_in_delay: Duration,
    fade: String,
}

impl PageTransitions {
    pub fn setup(page: &Page, config: &TransitionConfig) -> Self {
        Self {
            body: page.body(),
            fade_in_delay: config.fade_in_delay(),
            fade: config.fade.clone(),
        }
    }

    pub fn on_dom_content_loaded(&self, page: &mut Page, scheduler: &mut dyn Scheduler) {
        page.set_style(self.body, "opacity", "0");
        page.set_style(self.body, "transition", self.fade.clone());
        scheduler.schedule_after(self.fade_in_delay, Job::FadeInBody);
    }

    pub fn fade_in(&self, page: &mut Page) {
        page.set_style(self.body, "opacity", "1");
    }

    pub fn on_before_unload(&self, page: &mut Page) {
        page.set_style(self.body, "opacity", "0");
    }
}
