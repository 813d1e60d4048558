//! Page sections for the portfolio.
//!
//! Each section re-reads the page model on render; ids come from the
//! shared [`PageLayout`](folio_core::PageLayout).

mod about;
mod contact;
mod cursor;
mod hero;
mod loader;
mod navbar;
mod work;

pub use about::About;
pub use contact::Contact;
pub use cursor::Cursor;
pub use hero::Hero;
pub use loader::LoaderOverlay;
pub use navbar::Navbar;
pub use work::Work;
