//! Visibility observers.
//!
//! A [`VisibilityObserver`] watches a set of elements and reports a
//! [`VisibilityEntry`] whenever an element moves across its threshold
//! (including the first evaluation after it starts being observed).
//! Elements without measured geometry are skipped until the host lays
//! them out.

use crate::page::{ElementId, Page, Rect};

/// Offsets applied to the viewport before intersecting. Positive values
/// grow the root, negative values shrink it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction (0.0..=1.0) an element must reach
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: RootMargin::default(),
        }
    }

    pub fn with_bottom_margin(mut self, bottom: f64) -> Self {
        self.root_margin.bottom = bottom;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub target: ElementId,
    pub ratio: f64,
    /// Whether `ratio` is at or above the observer's threshold
    pub is_intersecting: bool,
}

#[derive(Clone, Debug)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    /// Observed targets with the last reported state (`None` = never reported)
    targets: Vec<(ElementId, Option<bool>)>,
}

impl VisibilityObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn observe(&mut self, target: ElementId) {
        if !self.is_observing(target) {
            self.targets.push((target, None));
        }
    }

    pub fn unobserve(&mut self, target: ElementId) {
        self.targets.retain(|(id, _)| *id != target);
    }

    pub fn is_observing(&self, target: ElementId) -> bool {
        self.targets.iter().any(|(id, _)| *id == target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Measures every observed target against the current viewport and
    /// returns entries for those whose state changed.
    pub fn evaluate(&mut self, page: &Page) -> Vec<VisibilityEntry> {
        let viewport = page.viewport();
        let scroll_y = page.scroll_y();
        let options = self.options;

        let mut entries = Vec::new();
        for (target, last) in &mut self.targets {
            let Some(rect) = page.rect(*target) else {
                continue;
            };
            let ratio = intersection_ratio(rect, scroll_y, viewport.height, options.root_margin);
            let is_intersecting = ratio > 0.0 && ratio >= options.threshold;
            if *last != Some(is_intersecting) {
                *last = Some(is_intersecting);
                entries.push(VisibilityEntry {
                    target: *target,
                    ratio,
                    is_intersecting,
                });
            }
        }
        entries
    }
}

/// Fraction of `rect` inside the (margin-adjusted) viewport.
pub fn intersection_ratio(rect: Rect, scroll_y: f64, viewport_height: f64, margin: RootMargin) -> f64 {
    let root_top = scroll_y - margin.top;
    let root_bottom = scroll_y + viewport_height + margin.bottom;
    if root_bottom <= root_top {
        return 0.0;
    }

    if rect.height <= 0.0 {
        return if rect.top >= root_top && rect.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = rect.bottom().min(root_bottom) - rect.top.max(root_top);
    (overlap / rect.height).clamp(0.0, 1.0)
}
