//! Page behaviors, one context object per behavior group.
//!
//! Each component caches the element handles it needs at setup and is
//! handed the page (and a scheduler, when it defers work) per event.

pub mod anchors;
pub mod aos;
pub mod contact;
pub mod cursor;
pub mod konami;
pub mod loader;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod transitions;

pub use anchors::SmoothScroll;
pub use aos::{ScrollRevealLibrary, AOS_LIBRARY};
pub use contact::{ContactForm, Submission};
pub use cursor::{CursorRenderer, HoverEffects};
pub use konami::EasterEgg;
pub use loader::{LoaderPhase, PageLoader};
pub use nav::NavigationMenu;
pub use reveal::{RevealState, SkillBars, TextReveal};
pub use scroll::{parallax_offset, FrameGate, NavbarState, ScrollEffects};
pub use transitions::PageTransitions;
