//! Events delivered by the host.

use serde::Deserialize;

use crate::page::{ElementId, Rect};

/// Measured geometry for one element
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ElementRect {
    pub id: ElementId,
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn rect(&self) -> Rect {
        Rect::new(self.top, self.height)
    }
}

/// Browser-style events, tagged by `kind` so the JS bridge can send them
/// as plain objects.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageEvent {
    DomContentLoaded,
    Load,
    Scroll { y: f64 },
    Resize { width: f64, height: f64 },
    Layout { rects: Vec<ElementRect> },
    MouseMove { x: f64, y: f64 },
    PointerEnter { target: ElementId },
    PointerLeave { target: ElementId },
    Click { target: ElementId },
    Input { target: ElementId, value: String },
    Submit { form: ElementId },
    /// `code` is the physical key code (`KeyboardEvent.code`)
    KeyDown { code: String },
    BeforeUnload,
}

/// What the host should do with the native event after dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }
}
