//! In-page anchor links scroll smoothly instead of jumping.

use crate::effect::{Effect, ScrollBlock};
use crate::page::{ElementId, Page, Selector};

#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScroll;

impl SmoothScroll {
    /// Returns whether the click landed on a `#` link (and so must not
    /// navigate).
    pub fn on_click(&self, page: &mut Page, target: ElementId) -> bool {
        let Some(anchor) = page.closest(target, Selector::AttrPrefix("a", "href", "#")) else {
            return false;
        };
        let fragment = page
            .attr(anchor, "href")
            .and_then(|href| href.strip_prefix('#'))
            .unwrap_or_default()
            .to_string();
        if fragment.is_empty() {
            return true;
        }
        if let Some(section) = page.query(Selector::Id(&fragment)) {
            page.push_effect(Effect::ScrollIntoView {
                target: section,
                smooth: true,
                block: ScrollBlock::Start,
            });
        }
        true
    }
}
