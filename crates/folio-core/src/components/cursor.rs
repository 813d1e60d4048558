//! Custom cursor: a dot pinned to the pointer and an outline that eases
//! after it, plus hover emphasis over interactive elements.

use std::collections::BTreeMap;

use crate::config::CursorConfig;
use crate::effect::{AnimationRequest, Effect, Fill};
use crate::error::{FolioError, FolioResult};
use crate::page::{px, ElementId, Page, Selector};

#[derive(Clone, Debug)]
pub struct CursorRenderer {
    dot: ElementId,
    outline: ElementId,
    animation_ms: u64,
    position: Option<(f64, f64)>,
}

impl CursorRenderer {
    pub fn setup(page: &Page, config: &CursorConfig) -> FolioResult<Self> {
        let dot = page
            .query(Selector::Attr("data-cursor-dot"))
            .ok_or(FolioError::MissingElement("[data-cursor-dot]"))?;
        let outline = page
            .query(Selector::Attr("data-cursor-outline"))
            .ok_or(FolioError::MissingElement("[data-cursor-outline]"))?;
        Ok(Self {
            dot,
            outline,
            animation_ms: config.outline_animation_ms,
            position: None,
        })
    }

    /// Last pointer position seen.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn on_move(&mut self, page: &mut Page, x: f64, y: f64) {
        self.position = Some((x, y));
        let (left, top) = (px(x), px(y));

        page.set_style(self.dot, "left", left.clone());
        page.set_style(self.dot, "top", top.clone());
        page.set_style(self.outline, "left", left.clone());
        page.set_style(self.outline, "top", top.clone());

        let mut keyframe = BTreeMap::new();
        keyframe.insert("left".to_string(), left);
        keyframe.insert("top".to_string(), top);
        page.push_effect(Effect::Animate(AnimationRequest {
            target: self.outline,
            keyframe,
            duration_ms: self.animation_ms,
            fill: Fill::Forwards,
        }));
    }
}

/// Scales the cursor outline while the pointer is over a `.btn`,
/// `.work-item` or `.contact-item`.
#[derive(Clone, Debug)]
pub struct HoverEffects {
    outline: ElementId,
    targets: Vec<ElementId>,
    scale: f64,
    accent: String,
}

impl HoverEffects {
    pub fn setup(page: &Page, config: &CursorConfig) -> FolioResult<Self> {
        let outline = page
            .query(Selector::Attr("data-cursor-outline"))
            .ok_or(FolioError::MissingElement("[data-cursor-outline]"))?;
        let targets = page.query_any(&[
            Selector::Class("btn"),
            Selector::Class("work-item"),
            Selector::Class("contact-item"),
        ]);
        Ok(Self {
            outline,
            targets,
            scale: config.hover_scale,
            accent: config.accent.clone(),
        })
    }

    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    pub fn on_enter(&self, page: &mut Page, target: ElementId) -> bool {
        if !self.targets.contains(&target) {
            return false;
        }
        page.set_style(self.outline, "transform", format!("scale({})", self.scale));
        page.set_style(self.outline, "border-color", self.accent.clone());
        true
    }

    pub fn on_leave(&self, page: &mut Page, target: ElementId) -> bool {
        if !self.targets.contains(&target) {
            return false;
        }
        page.set_style(self.outline, "transform", "scale(1)");
        page.set_style(self.outline, "border-color", self.accent.clone());
        true
    }
}
