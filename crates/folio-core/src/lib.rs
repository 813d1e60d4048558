//! Folio Core Library
//!
//! Decorative behaviors of a personal portfolio page, driven by host events.
//!
//! ## Overview
//!
//! The page is modelled as an in-memory document ([`Page`]). A host (the
//! desktop shell, or a test) delivers [`PageEvent`]s to a [`Portfolio`],
//! which mutates element classes and inline styles and queues [`Effect`]s
//! for things only the host can do (alerts, platform animations,
//! scrolling). Deferred work goes through an injected [`Scheduler`], so a
//! [`ManualClock`] makes every timing deterministic.
//!
//! ## Behaviors
//!
//! - **Loader**: overlay hidden 2s after load, removed 800ms later
//! - **Cursor**: dot + easing outline following the pointer, hover emphasis
//! - **Navigation**: `scrolled` navbar past 100px, mobile menu toggle
//! - **Parallax**: shapes drift at increasing speeds, one update per frame
//! - **Reveal**: skill bars and text blocks animate in when visible
//! - **Contact**: mock submission with validation and a simulated delay
//! - **Easter egg**: the Konami code flips the page's hue for 3s
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{FolioConfig, ManualClock, PageEvent, PageLayout, Portfolio, Viewport};
//!
//! let config = FolioConfig::default();
//! let (page, layout) = PageLayout::build(&config.content, Viewport::default());
//! let mut folio = Portfolio::new(page, ManualClock::new(), &config);
//!
//! folio.dispatch(PageEvent::Scroll { y: 240.0 });
//! folio.render_frame();
//! assert!(folio.page().has_class(layout.navbar, "scrolled"));
//! ```

pub mod buffer;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod event;
pub mod layout;
pub mod logging;
pub mod observer;
pub mod page;
pub mod runtime;
pub mod scheduler;

// Re-exports
pub use buffer::BoundedQueue;
pub use config::{FolioConfig, KONAMI_SEQUENCE};
pub use effect::{AnimationRequest, Effect, Fill, ScrollBlock};
pub use error::{FolioError, FolioResult};
pub use event::{ElementRect, EventOutcome, PageEvent};
pub use layout::{PageLayout, PortfolioContent};
pub use observer::{ObserverOptions, RootMargin, VisibilityEntry, VisibilityObserver};
pub use page::{Element, ElementId, ElementView, Page, Rect, Selector, Viewport};
pub use runtime::Portfolio;
pub use scheduler::{Job, ManualClock, Scheduler, TokioScheduler, Wakeup};
