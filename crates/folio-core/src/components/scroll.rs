//! Scroll-driven navbar state and parallax shapes, coalesced to one
//! recomputation per animation frame.

use crate::config::{NavConfig, ParallaxConfig};
use crate::page::{px, ElementId, Page, Selector};
use crate::scheduler::{Job, Scheduler};

const SCROLLED: &str = "scrolled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarState {
    Default,
    Scrolled,
}

impl NavbarState {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavbarState::Scrolled
        } else {
            NavbarState::Default
        }
    }
}

/// Vertical parallax offset of shape `index` at scroll offset `scroll`.
pub fn parallax_offset(scroll: f64, index: usize, base_speed: f64, speed_step: f64) -> f64 {
    let speed = base_speed + (index as f64 * speed_step);
    -(scroll * speed)
}

/// Single-flag gate: at most one frame request outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Requests `job` on the next frame unless a request is already
    /// pending. Returns whether a new request was made.
    pub fn request(&mut self, scheduler: &mut dyn Scheduler, job: Job) -> bool {
        if self.ticking {
            return false;
        }
        scheduler.schedule_next_frame(job);
        self.ticking = true;
        true
    }

    pub fn release(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

#[derive(Clone, Debug)]
pub struct ScrollEffects {
    gate: FrameGate,
    navbar: Option<ElementId>,
    threshold: f64,
    parallax: ParallaxConfig,
    state: NavbarState,
    recomputations: u64,
    coalesced: u64,
}

impl ScrollEffects {
    pub fn setup(page: &Page, nav: &NavConfig, parallax: &ParallaxConfig) -> Self {
        let navbar = page.query(Selector::Class("navbar"));
        if navbar.is_none() {
            tracing::warn!("No .navbar on page, scroll effects drive parallax only");
        }
        Self {
            gate: FrameGate::default(),
            navbar,
            threshold: nav.scrolled_threshold,
            parallax: parallax.clone(),
            state: NavbarState::Default,
            recomputations: 0,
            coalesced: 0,
        }
    }

    pub fn on_scroll(&mut self, scheduler: &mut dyn Scheduler) {
        if !self.gate.request(scheduler, Job::ScrollFrame) {
            self.coalesced += 1;
        }
    }

    /// Frame callback: recompute both outputs from the current offset.
    pub fn on_frame(&mut self, page: &mut Page) {
        let offset = page.scroll_y();

        self.state = NavbarState::for_offset(offset, self.threshold);
        if let Some(navbar) = self.navbar {
            match self.state {
                NavbarState::Scrolled => page.add_class(navbar, SCROLLED),
                NavbarState::Default => page.remove_class(navbar, SCROLLED),
            }
        }

        // Index is the shape's current document order
        let shapes = page.query_all(Selector::ClassPrefix("shape-"));
        for (index, shape) in shapes.into_iter().enumerate() {
            let y = parallax_offset(
                offset,
                index,
                self.parallax.base_speed,
                self.parallax.speed_step,
            );
            page.set_style(shape, "transform", format!("translateY({})", px(y)));
        }

        self.recomputations += 1;
        self.gate.release();
        tracing::trace!(offset, state = ?self.state, "Scroll frame");
    }

    pub fn navbar_state(&self) -> NavbarState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Frames that actually recomputed state.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Scroll events absorbed by an outstanding frame request.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}
