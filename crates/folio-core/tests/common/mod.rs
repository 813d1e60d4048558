//! Shared fixtures for integration tests.

#![allow(dead_code)]

use folio_core::{
    ElementRect, FolioConfig, ManualClock, PageEvent, PageLayout, Portfolio, PortfolioContent,
    Viewport,
};

pub const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

/// Stock portfolio page on a fake clock, not yet laid out.
pub fn portfolio() -> (Portfolio<ManualClock>, PageLayout) {
    portfolio_with(&FolioConfig::default())
}

pub fn portfolio_with(config: &FolioConfig) -> (Portfolio<ManualClock>, PageLayout) {
    let (page, layout) = PageLayout::build(&PortfolioContent::default(), VIEWPORT);
    (Portfolio::new(page, ManualClock::new(), config), layout)
}

/// Stock portfolio with section geometry delivered:
///
/// - hero 0..800 (title at 300)
/// - about 900..1500 (title at 950, description at 1020)
/// - work 1600..2200, contact 2300..3000
pub fn laid_out() -> (Portfolio<ManualClock>, PageLayout) {
    let (mut folio, layout) = portfolio();
    folio.dispatch(layout_event(&layout));
    (folio, layout)
}

pub fn layout_event(layout: &PageLayout) -> PageEvent {
    let rect = |id, top, height| ElementRect { id, top, height };
    PageEvent::Layout {
        rects: vec![
            rect(layout.hero, 0.0, 800.0),
            rect(layout.hero_title, 300.0, 80.0),
            rect(layout.about, 900.0, 600.0),
            rect(layout.about_title, 950.0, 50.0),
            rect(layout.about_description, 1020.0, 80.0),
            rect(layout.work, 1600.0, 600.0),
            rect(layout.work_title, 1650.0, 50.0),
            rect(layout.contact, 2300.0, 700.0),
            rect(layout.contact_title, 2350.0, 50.0),
        ],
    }
}

pub fn key(code: &str) -> PageEvent {
    PageEvent::KeyDown {
        code: code.to_string(),
    }
}

pub fn type_into(folio: &mut Portfolio<ManualClock>, target: folio_core::ElementId, value: &str) {
    folio.dispatch(PageEvent::Input {
        target,
        value: value.to_string(),
    });
}
