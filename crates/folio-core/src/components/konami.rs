//! Easter egg: typing the secret key sequence flips the page's hue.

use std::time::Duration;

use crate::buffer::BoundedQueue;
use crate::config::EasterEggConfig;
use crate::page::{ElementId, Page};
use crate::scheduler::{Job, Scheduler};

#[derive(Clone, Debug)]
pub struct EasterEgg {
    body: ElementId,
    sequence: Vec<String>,
    buffer: BoundedQueue<String>,
    duration: Duration,
    filter: String,
    activations: u64,
}

impl EasterEgg {
    pub fn setup(page: &Page, config: &EasterEggConfig) -> Self {
        Self {
            body: page.body(),
            sequence: config.sequence.clone(),
            buffer: BoundedQueue::new(config.sequence.len()),
            duration: config.duration(),
            filter: config.filter.clone(),
            activations: 0,
        }
    }

    /// Records a key press. Returns whether it completed the sequence.
    pub fn on_key(&mut self, page: &mut Page, scheduler: &mut dyn Scheduler, code: &str) -> bool {
        self.buffer.push(code.to_string());
        if self.sequence.is_empty() || !self.buffer.matches(&self.sequence) {
            return false;
        }

        page.set_style(self.body, "filter", self.filter.clone());
        scheduler.schedule_after(self.duration, Job::EndEasterEgg);
        self.buffer.clear();
        self.activations += 1;
        tracing::info!("Easter egg activated");
        true
    }

    pub fn end(&self, page: &mut Page) {
        page.set_style(self.body, "filter", "none");
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn activations(&self) -> u64 {
        self.activations
    }
}
