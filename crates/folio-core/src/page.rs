//! In-memory document model.
//!
//! The page is a flat arena of elements in document order. Each element
//! carries its tag, class list, inline style, attributes, form state and
//! (once the host has measured it) its geometry in document coordinates.
//! Behaviors mutate the page; the host renders it and plays back the
//! [`Effect`]s queued on it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effect::Effect;

/// Handle to an element on a [`Page`].
///
/// Handles are indices into the page arena and stay valid after removal;
/// lookups through a removed handle return `None`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Visible region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// A single element of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    default_value: String,
    disabled: bool,
    parent: Option<ElementId>,
    rect: Option<Rect>,
    removed: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            style: Vec::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            default_value: String::new(),
            disabled: false,
            parent: None,
            rect: None,
            removed: false,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets both the live value and the value a form reset returns to.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.default_value = self.value.clone();
        self
    }

    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.put_style(property, value.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The `class` attribute as the markup would spell it.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// The inline `style` attribute, declarations in first-set order.
    pub fn style_attr(&self) -> String {
        self.style
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    fn put_style(&mut self, property: &str, value: String) {
        match self.style.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value,
            None => self.style.push((property.to_string(), value)),
        }
    }
}

/// The subset of CSS selectors the behaviors query with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `tag`
    Tag(&'a str),
    /// `.class`
    Class(&'a str),
    /// `[class^="prefix"]`, matched against the whole class attribute
    ClassPrefix(&'a str),
    /// `[attr]`
    Attr(&'a str),
    /// `tag[attr^="prefix"]`
    AttrPrefix(&'a str, &'a str, &'a str),
    /// `tag[type="kind"]`
    Typed(&'a str, &'a str),
    /// `#id`
    Id(&'a str),
}

impl Selector<'_> {
    pub fn matches(&self, el: &Element) -> bool {
        match *self {
            Selector::Tag(tag) => el.tag == tag,
            Selector::Class(class) => el.has_class(class),
            Selector::ClassPrefix(prefix) => el.class_attr().starts_with(prefix),
            Selector::Attr(name) => el.attrs.contains_key(name),
            Selector::AttrPrefix(tag, name, prefix) => {
                el.tag == tag && el.attr(name).is_some_and(|v| v.starts_with(prefix))
            }
            Selector::Typed(tag, kind) => el.tag == tag && el.attr("type") == Some(kind),
            Selector::Id(id) => el.attr("id") == Some(id),
        }
    }
}

/// Render snapshot of one element, as the UI consumes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementView {
    pub id: ElementId,
    pub class: String,
    pub style: String,
    pub text: String,
    pub value: String,
    pub disabled: bool,
}

/// The document: element arena, viewport state and pending host effects.
#[derive(Clone, Debug)]
pub struct Page {
    elements: Vec<Element>,
    body: ElementId,
    viewport: Viewport,
    scroll_y: f64,
    libraries: BTreeSet<String>,
    effects: Vec<Effect>,
}

impl Page {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elements: vec![Element::new("body")],
            body: ElementId(0),
            viewport,
            scroll_y: 0.0,
            libraries: BTreeSet::new(),
            effects: Vec::new(),
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Appends `element` as the last child of `parent`.
    ///
    /// Callers build the tree depth-first, so arena order is document order.
    pub fn append(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        debug_assert!(parent.0 < self.elements.len(), "unknown parent {}", parent);
        element.parent = Some(parent);
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0).filter(|el| !el.removed)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0).filter(|el| !el.removed)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// First live element matching `selector`, in document order.
    pub fn query(&self, selector: Selector<'_>) -> Option<ElementId> {
        self.live().find(|(_, el)| selector.matches(el)).map(|(id, _)| id)
    }

    /// All live elements matching `selector`, in document order.
    pub fn query_all(&self, selector: Selector<'_>) -> Vec<ElementId> {
        self.query_any(&[selector])
    }

    /// All live elements matching any of `selectors` (a selector list).
    pub fn query_any(&self, selectors: &[Selector<'_>]) -> Vec<ElementId> {
        self.live()
            .filter(|(_, el)| selectors.iter().any(|s| s.matches(el)))
            .map(|(id, _)| id)
            .collect()
    }

    /// First live descendant of `root` matching `selector`.
    pub fn query_within(&self, root: ElementId, selector: Selector<'_>) -> Option<ElementId> {
        self.live()
            .find(|(id, el)| *id != root && selector.matches(el) && self.is_within(*id, root))
            .map(|(id, _)| id)
    }

    /// Whether `id` is `ancestor` or one of its descendants.
    pub fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.elements.get(current.0).and_then(|el| el.parent);
        }
        false
    }

    /// `id` itself or its nearest ancestor matching `selector`.
    pub fn closest(&self, id: ElementId, selector: Selector<'_>) -> Option<ElementId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let el = self.get(current)?;
            if selector.matches(el) {
                return Some(current);
            }
            cursor = el.parent;
        }
        None
    }

    /// Detaches `id` and its subtree from the document.
    pub fn remove(&mut self, id: ElementId) {
        if !self.contains(id) {
            return;
        }
        let doomed: Vec<usize> = (0..self.elements.len())
            .filter(|&i| self.is_within(ElementId(i), id))
            .collect();
        for i in doomed {
            self.elements[i].removed = true;
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.style(property))
    }

    pub fn set_style(&mut self, id: ElementId, property: &str, value: impl Into<String>) {
        if let Some(el) = self.get_mut(id) {
            el.put_style(property, value.into());
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attr(name))
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(Element::text)
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(el) = self.get_mut(id) {
            el.text = text.into();
        }
    }

    pub fn value(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(Element::value)
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(el) = self.get_mut(id) {
            el.value = value.into();
        }
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.get(id).is_some_and(Element::is_disabled)
    }

    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(el) = self.get_mut(id) {
            el.disabled = disabled;
        }
    }

    /// Restores every control inside `form` to its default value.
    pub fn reset_form(&mut self, form: ElementId) {
        let fields: Vec<usize> = self
            .live()
            .filter(|(id, _)| *id != form && self.is_within(*id, form))
            .map(|(id, _)| id.0)
            .collect();
        for i in fields {
            let el = &mut self.elements[i];
            el.value = el.default_value.clone();
        }
    }

    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id).and_then(Element::rect)
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(el) = self.get_mut(id) {
            el.rect = Some(rect);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Declares a script library as loaded in the hosting page.
    pub fn provide_library(&mut self, name: impl Into<String>) {
        self.libraries.insert(name.into());
    }

    pub fn has_library(&self, name: &str) -> bool {
        self.libraries.contains(name)
    }

    pub fn push_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn view(&self, id: ElementId) -> Option<ElementView> {
        self.get(id).map(|el| ElementView {
            id,
            class: el.class_attr(),
            style: el.style_attr(),
            text: el.text.clone(),
            value: el.value.clone(),
            disabled: el.disabled,
        })
    }

    fn live(&self) -> impl Iterator<Item = (ElementId, &Element)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| !el.removed)
            .map(|(i, el)| (ElementId(i), el))
    }
}

/// Formats a pixel length the way a JS template literal would
/// (`-0` prints as `0`, integral values without a fraction).
pub fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Page, ElementId, ElementId, ElementId) {
        let mut page = Page::new(Viewport::default());
        let body = page.body();
        let form = page.append(body, Element::new("form").with_class("form"));
        let name = page.append(
            form,
            Element::new("input").with_attr("type", "text").with_value(""),
        );
        let shape = page.append(body, Element::new("div").with_class("shape-1").with_class("blob"));
        (page, form, name, shape)
    }

    #[test]
    fn query_matches_selectors_in_document_order() {
        let (page, form, name, shape) = sample();
        assert_eq!(page.query(Selector::Class("form")), Some(form));
        assert_eq!(page.query(Selector::Typed("input", "text")), Some(name));
        assert_eq!(page.query_all(Selector::ClassPrefix("shape-")), vec![shape]);
        assert_eq!(page.query(Selector::ClassPrefix("blob")), None);
        assert_eq!(page.query_within(form, Selector::Tag("input")), Some(name));
        assert_eq!(page.query_within(name, Selector::Tag("input")), None);
    }

    #[test]
    fn remove_detaches_subtree() {
        let (mut page, form, name, shape) = sample();
        page.remove(form);
        assert!(!page.contains(form));
        assert!(!page.contains(name));
        assert!(page.contains(shape));
        assert_eq!(page.query(Selector::Tag("input")), None);
        page.add_class(name, "ghost");
        assert!(!page.has_class(name, "ghost"));
    }

    #[test]
    fn style_overwrites_in_place() {
        let (mut page, _, _, shape) = sample();
        page.set_style(shape, "opacity", "0");
        page.set_style(shape, "transform", "translateY(30px)");
        page.set_style(shape, "opacity", "1");
        assert_eq!(page.style(shape, "opacity"), Some("1"));
        assert_eq!(
            page.view(shape).unwrap().style,
            "opacity: 1; transform: translateY(30px);"
        );
    }

    #[test]
    fn toggle_and_closest() {
        let (mut page, form, name, _) = sample();
        assert!(page.toggle_class(form, "active"));
        assert!(!page.toggle_class(form, "active"));
        assert_eq!(page.closest(name, Selector::Class("form")), Some(form));
        assert!(page.is_within(name, page.body()));
    }

    #[test]
    fn reset_form_restores_defaults() {
        let (mut page, form, name, _) = sample();
        page.set_value(name, "Ada");
        page.reset_form(form);
        assert_eq!(page.value(name), Some(""));
    }

    #[test]
    fn px_formats_like_template_literals() {
        assert_eq!(px(120.0), "120px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(-55.5), "-55.5px");
    }
}
