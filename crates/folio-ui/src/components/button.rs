//! Button Components
//!
//! Both render the `.btn` style and report hover so the cursor outline can
//! grow over them:
//! - ButtonLink: in-page call to action (`a.btn`)
//! - SubmitButton: the contact form's submit control

use dioxus::prelude::*;
use folio_core::ElementView;

/// Properties for the ButtonLink component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonLinkProps {
    /// Current render state of the link
    pub view: ElementView,
    /// Fragment or URL the link points at
    pub href: String,
    /// Click handler; the caller decides whether to prevent navigation
    pub onclick: EventHandler<MouseEvent>,
    pub onmouseenter: EventHandler<()>,
    pub onmouseleave: EventHandler<()>,
}

/// Anchor styled as a button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ButtonLink {
///         view: page.view(layout.hero_cta).unwrap_or_default(),
///         href: "#contact".to_string(),
///         onclick: move |evt| click(evt, layout.hero_cta),
///         onmouseenter: move |_| enter(layout.hero_cta),
///         onmouseleave: move |_| leave(layout.hero_cta),
///     }
/// }
/// ```
#[component]
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let view = &props.view;
    rsx! {
        a {
            class: "{view.class}",
            style: "{view.style}",
            href: "{props.href}",
            "data-folio-id": "{view.id}",
            onclick: move |evt| props.onclick.call(evt),
            onmouseenter: move |_| props.onmouseenter.call(()),
            onmouseleave: move |_| props.onmouseleave.call(()),
            "{view.text}"
        }
    }
}

/// Properties for the SubmitButton component
#[derive(Clone, PartialEq, Props)]
pub struct SubmitButtonProps {
    pub view: ElementView,
    pub onmouseenter: EventHandler<()>,
    pub onmouseleave: EventHandler<()>,
}

/// Form submit control; label and disabled state come from the page model.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let view = &props.view;
    rsx! {
        button {
            class: "{view.class}",
            style: "{view.style}",
            r#type: "submit",
            disabled: view.disabled,
            "aria-busy": if view.disabled { "true" } else { "false" },
            "data-folio-id": "{view.id}",
            onmouseenter: move |_| props.onmouseenter.call(()),
            onmouseleave: move |_| props.onmouseleave.call(()),
            "{view.text}"
        }
    }
}
