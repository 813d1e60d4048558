//! Reusable UI components for the portfolio page
//!
//! Every component renders an `ElementView` snapshot of the page model
//! and tags its root with `data-folio-id` so the host bridge can measure
//! and animate it.

mod button;
mod input;
mod skill_bar;

pub use button::*;
pub use input::*;
pub use skill_bar::*;
