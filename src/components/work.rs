use dioxus::prelude::*;

use crate::context::{use_dispatcher, use_layout, use_portfolio, view_of};

/// Selected work grid; items grow the cursor outline on hover.
#[component]
pub fn Work() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();
    let dispatcher = use_dispatcher();

    let folio = portfolio.read();
    let section = view_of(&folio, layout.work);
    let title = view_of(&folio, layout.work_title);
    let items: Vec<_> = layout
        .work_items
        .iter()
        .map(|handle| {
            (
                view_of(&folio, handle.item),
                view_of(&folio, handle.title),
                view_of(&folio, handle.body),
            )
        })
        .collect();

    rsx! {
        section {
            id: "work",
            class: "{section.class}",
            "data-folio-id": "{section.id}",

            h2 {
                class: "{title.class}",
                style: "{title.style}",
                "data-folio-id": "{title.id}",
                "{title.text}"
            }
            div { class: "work-grid",
                for (item, heading, body) in items {
                    div {
                        key: "{item.id}",
                        class: "{item.class}",
                        style: "{item.style}",
                        "data-folio-id": "{item.id}",
                        onmouseenter: move |_| dispatcher.enter(item.id),
                        onmouseleave: move |_| dispatcher.leave(item.id),
                        h3 { class: "{heading.class}", "{heading.text}" }
                        p { class: "{body.class}", "{body.text}" }
                    }
                }
            }
        }
    }
}
