//! Portfolio context for the desktop shell.
//!
//! The [`Portfolio`] lives in a signal so every section re-renders from the
//! page model after an event or job mutates it.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let portfolio = use_portfolio();
//! let layout = use_layout();
//! let dispatcher = use_dispatcher();
//!
//! rsx! { a { onclick: move |evt| dispatcher.click(evt, layout.nav_logo) } }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{ElementId, ElementView, EventOutcome, PageEvent, PageLayout, Portfolio, TokioScheduler};

use crate::bridge::BridgeCommand;

/// The runtime as hosted by the desktop app.
pub type Folio = Portfolio<TokioScheduler>;

/// Hook to access the portfolio runtime from context.
pub fn use_portfolio() -> Signal<Folio> {
    use_context::<Signal<Folio>>()
}

/// Hook to access the element handles of the built page.
pub fn use_layout() -> Rc<PageLayout> {
    use_context::<Rc<PageLayout>>()
}

pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}

/// Render snapshot of `id`; removed elements render as an empty view.
pub fn view_of(folio: &Folio, id: ElementId) -> ElementView {
    folio.page().view(id).unwrap_or_default()
}

/// Routes UI events into the runtime and asks the bridge to play back
/// whatever effects they queued.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    portfolio: Signal<Folio>,
    bridge: Coroutine<BridgeCommand>,
}

impl Dispatcher {
    pub fn new(portfolio: Signal<Folio>, bridge: Coroutine<BridgeCommand>) -> Self {
        Self { portfolio, bridge }
    }

    pub fn send(self, event: PageEvent) -> EventOutcome {
        let mut portfolio = self.portfolio;
        let outcome = portfolio.write().dispatch(event);
        self.bridge.send(BridgeCommand::Flush);
        outcome
    }

    pub fn click(self, evt: MouseEvent, target: ElementId) {
        if self.send(PageEvent::Click { target }).default_prevented {
            evt.prevent_default();
        }
    }

    pub fn submit(self, evt: FormEvent, form: ElementId) {
        if self.send(PageEvent::Submit { form }).default_prevented {
            evt.prevent_default();
        }
    }

    pub fn input(self, target: ElementId, value: String) {
        self.send(PageEvent::Input { target, value });
    }

    pub fn enter(self, target: ElementId) {
        self.send(PageEvent::PointerEnter { target });
    }

    pub fn leave(self, target: ElementId) {
        self.send(PageEvent::PointerLeave { target });
    }
}
