//! Host effects.
//!
//! Things the page model cannot express as element state: blocking notices,
//! platform animations, scrolling and third-party library calls. They are
//! queued on the [`Page`](crate::page::Page) and played back by the host.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::AosConfig;
use crate::page::ElementId;

/// How an animation holds its end state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    Forwards,
}

/// Request for a platform-driven interpolation towards `keyframe`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationRequest {
    pub target: ElementId,
    pub keyframe: BTreeMap<String, String>,
    pub duration_ms: u64,
    pub fill: Fill,
}

/// Vertical alignment for [`Effect::ScrollIntoView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Blocking user-facing message
    Notice { message: String },
    Animate(AnimationRequest),
    ScrollIntoView {
        target: ElementId,
        smooth: bool,
        block: ScrollBlock,
    },
    /// Initialise the animate-on-scroll library
    InitScrollReveal(AosConfig),
}

impl Effect {
    pub fn notice(message: impl Into<String>) -> Self {
        Effect::Notice {
            message: message.into(),
        }
    }
}
