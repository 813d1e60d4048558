//! Input Field Components
//!
//! Contact form fields. The value shown is always the page model's value,
//! so a form reset on the model clears the rendered field too.

use dioxus::prelude::*;
use folio_core::ElementView;

/// Properties for the FormInput component
#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    pub view: ElementView,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input type (text, email)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: String,
}

/// Single-line contact field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormInput {
///         view: page.view(layout.email_input).unwrap_or_default(),
///         input_type: "email".to_string(),
///         placeholder: "Your Email".to_string(),
///         oninput: move |value| input(layout.email_input, value),
///     }
/// }
/// ```
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let view = &props.view;
    rsx! {
        div { class: "form-group",
            input {
                class: "form-input",
                r#type: "{props.input_type}",
                value: "{view.value}",
                placeholder: "{props.placeholder}",
                required: true,
                "data-folio-id": "{view.id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the FormTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct FormTextAreaProps {
    pub view: ElementView,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: String,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
}

#[component]
pub fn FormTextArea(props: FormTextAreaProps) -> Element {
    let view = &props.view;
    rsx! {
        div { class: "form-group",
            textarea {
                class: "form-input",
                rows: "{props.rows}",
                placeholder: "{props.placeholder}",
                required: true,
                value: "{view.value}",
                "data-folio-id": "{view.id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
