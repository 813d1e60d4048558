//! Page loader overlay: hide after load, then remove.

use std::time::Duration;

use crate::config::LoaderConfig;
use crate::error::{FolioError, FolioResult};
use crate::page::{ElementId, Page, Selector};
use crate::scheduler::{Job, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    /// Load seen, hide timer pending
    Waiting,
    /// `hidden` class applied, removal timer pending
    Hiding,
    Removed,
}

#[derive(Clone, Debug)]
pub struct PageLoader {
    overlay: ElementId,
    hide_after: Duration,
    remove_after: Duration,
    phase: LoaderPhase,
}

impl PageLoader {
    pub fn setup(page: &Page, config: &LoaderConfig) -> FolioResult<Self> {
        let overlay = page
            .query(Selector::Class("page-loader"))
            .ok_or(FolioError::MissingElement(".page-loader"))?;
        Ok(Self {
            overlay,
            hide_after: config.hide_after(),
            remove_after: config.remove_after(),
            phase: LoaderPhase::Visible,
        })
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn on_load(&mut self, scheduler: &mut dyn Scheduler) {
        if self.phase != LoaderPhase::Visible {
            return;
        }
        scheduler.schedule_after(self.hide_after, Job::HideLoader);
        self.phase = LoaderPhase::Waiting;
    }

    pub fn hide(&mut self, page: &mut Page, scheduler: &mut dyn Scheduler) {
        if self.phase == LoaderPhase::Removed {
            return;
        }
        page.add_class(self.overlay, "hidden");
        scheduler.schedule_after(self.remove_after, Job::RemoveLoader);
        self.phase = LoaderPhase::Hiding;
        tracing::debug!("Loader hidden");
    }

    pub fn remove(&mut self, page: &mut Page) {
        page.remove(self.overlay);
        self.phase = LoaderPhase::Removed;
        tracing::debug!("Loader removed");
    }
}
