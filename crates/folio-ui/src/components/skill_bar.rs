//! Skill Bar Component
//!
//! Label plus a track whose fill grows once the page model assigns the
//! bar its width (see the CSS `transition: width`).

use dioxus::prelude::*;
use folio_core::ElementView;

/// Parses a CSS percentage such as `"85%"` into `85`.
pub fn percent(width: &str) -> Option<u8> {
    let digits = width.trim().strip_suffix('%')?;
    let value: f64 = digits.trim().parse().ok()?;
    if (0.0..=100.0).contains(&value) {
        Some(value.round() as u8)
    } else {
        None
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    pub name: String,
    /// Declared target width (`data-width`)
    pub target: String,
    pub progress: ElementView,
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let progress = &props.progress;
    let level = percent(&props.target).unwrap_or(0);

    rsx! {
        div { class: "skill",
            div { class: "skill-info",
                span { class: "skill-name", "{props.name}" }
                span { class: "skill-level", "{props.target}" }
            }
            div {
                class: "skill-bar",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{level}",
                div {
                    class: "{progress.class}",
                    style: "{progress.style}",
                    "data-width": "{props.target}",
                    "data-folio-id": "{progress.id}",
                }
            }
        }
    }
}
