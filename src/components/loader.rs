use dioxus::prelude::*;

use crate::context::{use_layout, use_portfolio};

/// Full-screen overlay shown until shortly after load.
///
/// Renders nothing once the page model has removed it.
#[component]
pub fn LoaderOverlay() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();

    let Some(view) = portfolio.read().page().view(layout.loader) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "{view.class}",
            style: "{view.style}",
            "data-folio-id": "{view.id}",
            div { class: "loader-ring" }
        }
    }
}
