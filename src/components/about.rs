//! About section with the animated skill bars.

use dioxus::prelude::*;
use folio_ui::SkillBar;

use crate::context::{use_layout, use_portfolio, view_of};

#[component]
pub fn About() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();

    let folio = portfolio.read();
    let section = view_of(&folio, layout.about);
    let title = view_of(&folio, layout.about_title);
    let description = view_of(&folio, layout.about_description);
    let skills: Vec<_> = layout
        .skills
        .iter()
        .map(|handle| {
            let name = view_of(&folio, handle.name).text;
            let target = folio
                .page()
                .attr(handle.progress, "data-width")
                .unwrap_or("0%")
                .to_string();
            (name, target, view_of(&folio, handle.progress))
        })
        .collect();

    rsx! {
        section {
            id: "about",
            class: "{section.class}",
            "data-folio-id": "{section.id}",

            h2 {
                class: "{title.class}",
                style: "{title.style}",
                "data-folio-id": "{title.id}",
                "{title.text}"
            }
            div { class: "about-grid",
                p {
                    class: "{description.class}",
                    style: "{description.style}",
                    "data-folio-id": "{description.id}",
                    "{description.text}"
                }
                div { class: "skills",
                    for (name, target, progress) in skills {
                        SkillBar { key: "{progress.id}", name, target, progress }
                    }
                }
            }
        }
    }
}
