//! Landing section with the parallax shapes.

use dioxus::prelude::*;
use folio_ui::ButtonLink;

use crate::context::{use_dispatcher, use_layout, use_portfolio, view_of};

#[component]
pub fn Hero() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();
    let dispatcher = use_dispatcher();

    let folio = portfolio.read();
    let hero = view_of(&folio, layout.hero);
    let title = view_of(&folio, layout.hero_title);
    let subtitle = view_of(&folio, layout.hero_subtitle);
    let shapes: Vec<_> = layout
        .shapes
        .iter()
        .filter_map(|&id| folio.page().view(id))
        .collect();
    let cta = view_of(&folio, layout.hero_cta);
    let cta_href = folio
        .page()
        .attr(layout.hero_cta, "href")
        .unwrap_or("#contact")
        .to_string();
    let cta_id = cta.id;

    rsx! {
        section {
            id: "home",
            class: "{hero.class}",
            "data-folio-id": "{hero.id}",

            div { class: "hero-shapes",
                for shape in shapes {
                    div {
                        key: "{shape.id}",
                        class: "{shape.class}",
                        style: "{shape.style}",
                        "data-folio-id": "{shape.id}",
                    }
                }
            }

            div { class: "hero-content",
                h1 {
                    class: "{title.class}",
                    style: "{title.style}",
                    "data-folio-id": "{title.id}",
                    "{title.text}"
                }
                p {
                    class: "{subtitle.class}",
                    "data-folio-id": "{subtitle.id}",
                    "{subtitle.text}"
                }
                ButtonLink {
                    view: cta,
                    href: cta_href,
                    onclick: move |evt| dispatcher.click(evt, cta_id),
                    onmouseenter: move |_| dispatcher.enter(cta_id),
                    onmouseleave: move |_| dispatcher.leave(cta_id),
                }
            }
        }
    }
}
