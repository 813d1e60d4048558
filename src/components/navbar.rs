//! Fixed navigation bar with the mobile menu toggle.

use dioxus::prelude::*;

use crate::context::{use_dispatcher, use_layout, use_portfolio, view_of};

#[component]
pub fn Navbar() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();
    let dispatcher = use_dispatcher();

    let folio = portfolio.read();
    let navbar = view_of(&folio, layout.navbar);
    let logo = view_of(&folio, layout.nav_logo);
    let menu = view_of(&folio, layout.nav_menu);
    let toggle = view_of(&folio, layout.nav_toggle);
    let links: Vec<_> = layout
        .nav_links
        .iter()
        .map(|link| (link.id, link.href.clone(), view_of(&folio, link.id)))
        .collect();

    let logo_id = logo.id;
    let toggle_id = toggle.id;

    rsx! {
        nav {
            class: "{navbar.class}",
            style: "{navbar.style}",
            "data-folio-id": "{navbar.id}",

            a {
                class: "{logo.class}",
                href: "#home",
                "data-folio-id": "{logo.id}",
                onclick: move |evt| dispatcher.click(evt, logo_id),
                "{logo.text}"
            }

            ul {
                class: "{menu.class}",
                "data-folio-id": "{menu.id}",
                for (id, href, view) in links {
                    li { key: "{id}",
                        a {
                            class: "{view.class}",
                            href: "{href}",
                            "data-folio-id": "{id}",
                            onclick: move |evt| dispatcher.click(evt, id),
                            "{view.text}"
                        }
                    }
                }
            }

            div {
                class: "{toggle.class}",
                "data-folio-id": "{toggle.id}",
                "aria-label": "Toggle menu",
                onclick: move |evt| dispatcher.click(evt, toggle_id),
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }
        }
    }
}
