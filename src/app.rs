use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{PageLayout, Portfolio, TokioScheduler, Viewport};

use crate::bridge::use_bridge;
use crate::context::{Dispatcher, Folio};
use crate::get_config;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Builds the page model once, hosts it in a signal and starts the bridge
/// that feeds window events and timer wakeups into it.
#[component]
pub fn App() -> Element {
    let (portfolio, layout, wakeups) = use_hook(|| {
        let config = get_config();
        let (page, layout) = PageLayout::build(&config.content, Viewport::default());
        let (scheduler, wakeups) = TokioScheduler::new();
        let portfolio: Signal<Folio> = Signal::new(Portfolio::new(page, scheduler, config));
        (portfolio, Rc::new(layout), Rc::new(RefCell::new(Some(wakeups))))
    });

    let bridge = use_bridge(portfolio, wakeups);

    // Provide runtime context to all child components
    use_context_provider(|| portfolio);
    use_context_provider(|| layout.clone());
    use_context_provider(|| Dispatcher::new(portfolio, bridge));

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
