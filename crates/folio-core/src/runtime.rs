//! The page runtime.
//!
//! [`Portfolio`] owns the page, the scheduler and one context object per
//! behavior group. The host calls [`Portfolio::dispatch`] for every event
//! and [`Portfolio::run_job`] for every job the scheduler hands back; both
//! run to completion before returning.
//!
//! ```ignore
//! let (page, _layout) = PageLayout::build(&config.content, Viewport::default());
//! let mut folio = Portfolio::new(page, ManualClock::new(), &config);
//! folio.dispatch(PageEvent::Load);
//! folio.advance(Duration::from_millis(2800));
//! ```

use std::time::Duration;

use crate::components::{
    ContactForm, CursorRenderer, EasterEgg, HoverEffects, NavigationMenu, PageLoader,
    PageTransitions, ScrollEffects, ScrollRevealLibrary, SkillBars, SmoothScroll, TextReveal,
};
use crate::config::FolioConfig;
use crate::effect::Effect;
use crate::error::FolioResult;
use crate::event::{EventOutcome, PageEvent};
use crate::page::{Page, Viewport};
use crate::scheduler::{Job, ManualClock, Scheduler};

pub struct Portfolio<S> {
    page: Page,
    scheduler: S,
    loader: Option<PageLoader>,
    cursor: Option<CursorRenderer>,
    hover: Option<HoverEffects>,
    nav: Option<NavigationMenu>,
    scroll: ScrollEffects,
    skills: Option<SkillBars>,
    text: TextReveal,
    contact: Option<ContactForm>,
    easter_egg: EasterEgg,
    anchors: SmoothScroll,
    transitions: PageTransitions,
    aos: ScrollRevealLibrary,
}

/// Keeps a component whose markup is present; logs and skips the rest.
fn optional<T>(component: &str, result: FolioResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(component, "Skipping component: {}", e);
            None
        }
    }
}

impl<S: Scheduler> Portfolio<S> {
    pub fn new(mut page: Page, scheduler: S, config: &FolioConfig) -> Self {
        let loader = optional("loader", PageLoader::setup(&page, &config.loader));
        let cursor = optional("cursor", CursorRenderer::setup(&page, &config.cursor));
        let hover = optional("hover", HoverEffects::setup(&page, &config.cursor));
        let nav = optional("nav", NavigationMenu::setup(&page));
        let scroll = ScrollEffects::setup(&page, &config.nav, &config.parallax);
        let skills = optional("skills", SkillBars::setup(&page, &config.skills));
        let text = TextReveal::setup(&mut page, &config.reveal);
        let contact = optional("contact", ContactForm::setup(&page, &config.contact));
        let easter_egg = EasterEgg::setup(&page, &config.easter_egg);
        let transitions = PageTransitions::setup(&page, &config.transitions);
        let aos = ScrollRevealLibrary::new(&config.aos);

        tracing::info!(
            loader = loader.is_some(),
            cursor = cursor.is_some(),
            nav = nav.is_some(),
            skills = skills.is_some(),
            contact = contact.is_some(),
            text_blocks = text.observed(),
            "Portfolio initialised"
        );

        let mut portfolio = Self {
            page,
            scheduler,
            loader,
            cursor,
            hover,
            nav,
            scroll,
            skills,
            text,
            contact,
            easter_egg,
            anchors: SmoothScroll,
            transitions,
            aos,
        };
        portfolio.observe_visibility();
        portfolio
    }

    pub fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        tracing::trace!(?event, "Dispatch");
        match event {
            PageEvent::DomContentLoaded => {
                self.aos.on_dom_content_loaded(&mut self.page);
                self.transitions
                    .on_dom_content_loaded(&mut self.page, &mut self.scheduler);
            }
            PageEvent::Load => {
                if let Some(loader) = &mut self.loader {
                    loader.on_load(&mut self.scheduler);
                }
            }
            PageEvent::Scroll { y } => {
                self.page.set_scroll_y(y);
                self.scroll.on_scroll(&mut self.scheduler);
                self.observe_visibility();
            }
            PageEvent::Resize { width, height } => {
                self.page.set_viewport(Viewport { width, height });
                self.observe_visibility();
            }
            PageEvent::Layout { rects } => {
                for rect in rects {
                    self.page.set_rect(rect.id, rect.rect());
                }
                self.observe_visibility();
            }
            PageEvent::MouseMove { x, y } => {
                if let Some(cursor) = &mut self.cursor {
                    cursor.on_move(&mut self.page, x, y);
                }
            }
            PageEvent::PointerEnter { target } => {
                if let Some(hover) = &self.hover {
                    hover.on_enter(&mut self.page, target);
                }
            }
            PageEvent::PointerLeave { target } => {
                if let Some(hover) = &self.hover {
                    hover.on_leave(&mut self.page, target);
                }
            }
            PageEvent::Click { target } => {
                if let Some(nav) = &self.nav {
                    nav.on_click(&mut self.page, target);
                }
                if self.anchors.on_click(&mut self.page, target) {
                    return EventOutcome::prevented();
                }
            }
            PageEvent::Input { target, value } => {
                self.page.set_value(target, value);
            }
            PageEvent::Submit { form } => {
                let Some(contact) = &mut self.contact else {
                    return EventOutcome::default();
                };
                if contact.form() != form {
                    return EventOutcome::default();
                }
                match contact.on_submit(&mut self.page, &mut self.scheduler) {
                    Ok(_) => {}
                    Err(e) => tracing::debug!("Contact form not sent: {}", e),
                }
                return EventOutcome::prevented();
            }
            PageEvent::KeyDown { code } => {
                self.easter_egg
                    .on_key(&mut self.page, &mut self.scheduler, &code);
            }
            PageEvent::BeforeUnload => {
                self.transitions.on_before_unload(&mut self.page);
            }
        }
        EventOutcome::default()
    }

    pub fn run_job(&mut self, job: Job) {
        tracing::trace!(?job, "Run job");
        match job {
            Job::HideLoader => {
                if let Some(loader) = &mut self.loader {
                    loader.hide(&mut self.page, &mut self.scheduler);
                }
            }
            Job::RemoveLoader => {
                if let Some(loader) = &mut self.loader {
                    loader.remove(&mut self.page);
                }
            }
            Job::ScrollFrame => self.scroll.on_frame(&mut self.page),
            Job::FadeInBody => self.transitions.fade_in(&mut self.page),
            Job::FinishSubmission => {
                if let Some(contact) = &mut self.contact {
                    contact.finish(&mut self.page);
                }
            }
            Job::EndEasterEgg => self.easter_egg.end(&mut self.page),
        }
    }

    fn observe_visibility(&mut self) {
        if let Some(skills) = &mut self.skills {
            skills.on_visibility_change(&mut self.page);
        }
        self.text.on_visibility_change(&mut self.page);
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.page.drain_effects()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn loader(&self) -> Option<&PageLoader> {
        self.loader.as_ref()
    }

    pub fn cursor(&self) -> Option<&CursorRenderer> {
        self.cursor.as_ref()
    }

    pub fn hover(&self) -> Option<&HoverEffects> {
        self.hover.as_ref()
    }

    pub fn nav(&self) -> Option<&NavigationMenu> {
        self.nav.as_ref()
    }

    pub fn scroll(&self) -> &ScrollEffects {
        &self.scroll
    }

    pub fn skills(&self) -> Option<&SkillBars> {
        self.skills.as_ref()
    }

    pub fn text(&self) -> &TextReveal {
        &self.text
    }

    pub fn contact(&self) -> Option<&ContactForm> {
        self.contact.as_ref()
    }

    pub fn easter_egg(&self) -> &EasterEgg {
        &self.easter_egg
    }

    pub fn aos(&self) -> &ScrollRevealLibrary {
        &self.aos
    }
}

impl Portfolio<ManualClock> {
    /// Moves the fake clock forward, running every timer that comes due
    /// (including timers scheduled by those timers) in order.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now().checked_add(by).unwrap_or(Duration::MAX);
        while let Some(job) = self.scheduler.pop_due(until) {
            self.run_job(job);
        }
        self.scheduler.settle(until);
    }

    /// Runs the jobs waiting on the next frame. Returns how many ran.
    pub fn render_frame(&mut self) -> usize {
        let jobs = self.scheduler.take_frame();
        let count = jobs.len();
        for job in jobs {
            self.run_job(job);
        }
        count
    }
}
