//! Viewport-triggered one-shot animations.
//!
//! - [`SkillBars`] grows every `.skill-progress` bar to its `data-width`
//!   the first time the `.about` section is half visible, then stops
//!   observing.
//! - [`TextReveal`] fades titles and descriptions in as they approach the
//!   viewport. It keeps observing after the reveal; repeat deliveries
//!   rewrite the same end state.

use crate::config::{RevealConfig, SkillsConfig};
use crate::error::{FolioError, FolioResult};
use crate::observer::{ObserverOptions, VisibilityObserver};
use crate::page::{px, ElementId, Page, Selector};

/// Per-element animation state; only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Triggered,
}

#[derive(Clone, Debug)]
pub struct SkillBars {
    section: ElementId,
    bars: Vec<(ElementId, RevealState)>,
    observer: VisibilityObserver,
}

impl SkillBars {
    pub fn setup(page: &Page, config: &SkillsConfig) -> FolioResult<Self> {
        let section = page
            .query(Selector::Class("about"))
            .ok_or(FolioError::MissingElement(".about"))?;
        let bars = page
            .query_all(Selector::Class("skill-progress"))
            .into_iter()
            .map(|bar| (bar, RevealState::Pending))
            .collect();
        let mut observer = VisibilityObserver::new(ObserverOptions::threshold(config.threshold));
        observer.observe(section);
        Ok(Self {
            section,
            bars,
            observer,
        })
    }

    pub fn state(&self, bar: ElementId) -> Option<RevealState> {
        self.bars
            .iter()
            .find(|(id, _)| *id == bar)
            .map(|(_, state)| *state)
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_observing(self.section)
    }

    pub fn on_visibility_change(&mut self, page: &mut Page) {
        let crossed = self
            .observer
            .evaluate(page)
            .iter()
            .any(|entry| entry.is_intersecting);
        if !crossed {
            return;
        }

        for (bar, state) in &mut self.bars {
            if *state == RevealState::Triggered {
                continue;
            }
            if let Some(width) = page.attr(*bar, "data-width").map(str::to_string) {
                page.set_style(*bar, "width", width);
            }
            *state = RevealState::Triggered;
        }
        self.observer.unobserve(self.section);
        tracing::debug!(bars = self.bars.len(), "Skill bars animated");
    }
}

#[derive(Clone, Debug)]
pub struct TextReveal {
    blocks: Vec<(ElementId, RevealState)>,
    observer: VisibilityObserver,
    deliveries: u64,
}

impl TextReveal {
    /// Puts every text block in its pre-reveal state and starts observing.
    pub fn setup(page: &mut Page, config: &RevealConfig) -> Self {
        let options = ObserverOptions::threshold(config.threshold)
            .with_bottom_margin(config.root_margin_bottom);
        let mut observer = VisibilityObserver::new(options);

        let blocks: Vec<_> = page
            .query_any(&[
                Selector::Class("section-title"),
                Selector::Class("hero-title"),
                Selector::Class("about-description"),
            ])
            .into_iter()
            .map(|block| {
                page.set_style(block, "opacity", "0");
                page.set_style(
                    block,
                    "transform",
                    format!("translateY({})", px(config.offset_px)),
                );
                page.set_style(block, "transition", config.transition.clone());
                observer.observe(block);
                (block, RevealState::Pending)
            })
            .collect();

        Self {
            blocks,
            observer,
            deliveries: 0,
        }
    }

    pub fn state(&self, block: ElementId) -> Option<RevealState> {
        self.blocks
            .iter()
            .find(|(id, _)| *id == block)
            .map(|(_, state)| *state)
    }

    pub fn observed(&self) -> usize {
        self.observer.len()
    }

    /// Intersecting entries delivered so far, repeats included.
    pub fn deliveries(&self) -> u64 {
        self.deliveries
    }

    pub fn on_visibility_change(&mut self, page: &mut Page) {
        for entry in self.observer.evaluate(page) {
            if !entry.is_intersecting {
                continue;
            }
            self.deliveries += 1;
            page.set_style(entry.target, "opacity", "1");
            page.set_style(entry.target, "transform", "translateY(0)");

            if let Some((_, state)) = self.blocks.iter_mut().find(|(id, _)| *id == entry.target) {
                if *state == RevealState::Triggered {
                    tracing::trace!(block = %entry.target, "Text block re-delivered");
                }
                *state = RevealState::Triggered;
            }
        }
    }
}
