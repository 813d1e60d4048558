//! Contact section: channels plus the mock message form.

use dioxus::prelude::*;
use folio_ui::{FormInput, FormTextArea, SubmitButton};

use crate::context::{use_dispatcher, use_layout, use_portfolio, view_of};

#[component]
pub fn Contact() -> Element {
    let portfolio = use_portfolio();
    let layout = use_layout();
    let dispatcher = use_dispatcher();

    let folio = portfolio.read();
    let page = folio.page();
    let section = view_of(&folio, layout.contact);
    let title = view_of(&folio, layout.contact_title);
    let channels: Vec<_> = layout
        .contact_items
        .iter()
        .map(|handle| {
            (
                view_of(&folio, handle.item),
                view_of(&folio, handle.title),
                view_of(&folio, handle.body),
            )
        })
        .collect();
    let placeholder = |id| page.attr(id, "placeholder").unwrap_or_default().to_string();

    let form_id = layout.form;
    let name_id = layout.name_input;
    let email_id = layout.email_input;
    let message_id = layout.message_input;
    let submit_id = layout.submit;

    rsx! {
        section {
            id: "contact",
            class: "{section.class}",
            "data-folio-id": "{section.id}",

            h2 {
                class: "{title.class}",
                style: "{title.style}",
                "data-folio-id": "{title.id}",
                "{title.text}"
            }
            div { class: "contact-grid",
                div { class: "contact-info",
                    for (item, label, value) in channels {
                        div {
                            key: "{item.id}",
                            class: "{item.class}",
                            "data-folio-id": "{item.id}",
                            onmouseenter: move |_| dispatcher.enter(item.id),
                            onmouseleave: move |_| dispatcher.leave(item.id),
                            h3 { class: "{label.class}", "{label.text}" }
                            p { class: "{value.class}", "{value.text}" }
                        }
                    }
                }
                form {
                    class: "form",
                    "data-folio-id": "{form_id}",
                    onsubmit: move |evt| dispatcher.submit(evt, form_id),
                    FormInput {
                        view: view_of(&folio, name_id),
                        placeholder: placeholder(name_id),
                        oninput: move |value| dispatcher.input(name_id, value),
                    }
                    FormInput {
                        view: view_of(&folio, email_id),
                        input_type: "email".to_string(),
                        placeholder: placeholder(email_id),
                        oninput: move |value| dispatcher.input(email_id, value),
                    }
                    FormTextArea {
                        view: view_of(&folio, message_id),
                        placeholder: placeholder(message_id),
                        oninput: move |value| dispatcher.input(message_id, value),
                    }
                    SubmitButton {
                        view: view_of(&folio, submit_id),
                        onmouseenter: move |_| dispatcher.enter(submit_id),
                        onmouseleave: move |_| dispatcher.leave(submit_id),
                    }
                }
            }
        }
    }
}
