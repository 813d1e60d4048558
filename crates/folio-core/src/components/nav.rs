//! Mobile menu: the toggle opens and closes it, any nav link closes it.

use crate::error::{FolioError, FolioResult};
use crate::page::{ElementId, Page, Selector};

const ACTIVE: &str = "active";

#[derive(Clone, Debug)]
pub struct NavigationMenu {
    toggle: ElementId,
    menu: ElementId,
    links: Vec<ElementId>,
}

impl NavigationMenu {
    pub fn setup(page: &Page) -> FolioResult<Self> {
        let toggle = page
            .query(Selector::Class("nav-toggle"))
            .ok_or(FolioError::MissingElement(".nav-toggle"))?;
        let menu = page
            .query(Selector::Class("nav-menu"))
            .ok_or(FolioError::MissingElement(".nav-menu"))?;
        let links = page.query_all(Selector::Class("nav-link"));
        Ok(Self {
            toggle,
            menu,
            links,
        })
    }

    pub fn is_open(&self, page: &Page) -> bool {
        page.has_class(self.menu, ACTIVE)
    }

    /// Returns whether the click hit the toggle or a nav link.
    pub fn on_click(&self, page: &mut Page, target: ElementId) -> bool {
        if page.is_within(target, self.toggle) {
            page.toggle_class(self.menu, ACTIVE);
            page.toggle_class(self.toggle, ACTIVE);
            tracing::debug!(open = self.is_open(page), "Menu toggled");
            return true;
        }
        if self.links.iter().any(|link| page.is_within(target, *link)) {
            page.remove_class(self.menu, ACTIVE);
            page.remove_class(self.toggle, ACTIVE);
            return true;
        }
        false
    }
}
