use dioxus::prelude::*;

use crate::context::{use_layout, use_portfolio, view_of};

/// Dot and easing outline that follow the pointer
#[component]
pub fn Cursor() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();
    let folio = portfolio.read();
    let dot = view_of(&folio, layout.cursor_dot);
    let outline = view_of(&folio, layout.cursor_outline);

    rsx! {
        div {
            class: "{dot.class}",
            style: "{dot.style}",
            "data-folio-id": "{dot.id}",
            "data-cursor-dot": "",
        }
        div {
            class: "{outline.class}",
            style: "{outline.style}",
            "data-folio-id": "{outline.id}",
            "data-cursor-outline": "",
        }
    }
}
