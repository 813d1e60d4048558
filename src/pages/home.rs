use dioxus::prelude::*;

use crate::components::{About, Contact, Cursor, Hero, LoaderOverlay, Navbar, Work};
use crate::context::{use_portfolio, view_of};

/// The single portfolio page.
///
/// The wrapper stands in for the document body: fade-in opacity and the
/// easter-egg filter are applied to it.
#[component]
pub fn Home() -> Element {
    let portfolio = use_portfolio();
    let body = {
        let folio = portfolio.read();
        view_of(&folio, folio.page().body())
    };

    rsx! {
        div {
            class: "page {body.class}",
            style: "{body.style}",
            "data-folio-id": "{body.id}",

            LoaderOverlay {}
            Cursor {}
            Navbar {}
            main {
                Hero {}
                About {}
                Work {}
                Contact {}
            }
        }
    }
}
