//! Folio UI Components
//!
//! Dioxus components for the portfolio page. They hold no state of their
//! own: classes, inline styles, labels and field values all come from the
//! `folio_core` page model, and every interaction is reported back through
//! an event handler.

pub mod components;

pub use components::*;
