//! Portfolio markup.
//!
//! Builds the [`Page`] every behavior expects (loader overlay, cursor
//! markers, navbar, hero with parallax shapes, about/skills, work, contact
//! form) from [`PortfolioContent`], and hands back typed handles so the
//! renderer never has to query by selector.

use serde::{Deserialize, Serialize};

use crate::page::{Element, ElementId, Page, Viewport};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// CSS width the bar grows to, e.g. `"90%"`
    pub width: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
}

/// Text shown on the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub owner: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<Skill>,
    pub works: Vec<Work>,
    pub contacts: Vec<ContactChannel>,
    /// Number of floating parallax shapes in the hero
    pub shapes: usize,
    pub submit_label: String,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        let skill = |name: &str, width: &str| Skill {
            name: name.to_string(),
            width: width.to_string(),
        };
        let work = |title: &str, summary: &str| Work {
            title: title.to_string(),
            summary: summary.to_string(),
        };
        Self {
            owner: "Jordan Avery".to_string(),
            headline: "Building calm software for loud problems".to_string(),
            tagline: "Full-stack developer & interface tinkerer".to_string(),
            about: "I design and build fast, accessible web experiences, from the first \
                    sketch to the last deploy."
                .to_string(),
            skills: vec![
                skill("Rust", "90%"),
                skill("TypeScript", "85%"),
                skill("UI Design", "75%"),
                skill("DevOps", "65%"),
            ],
            works: vec![
                work("Tidewatch", "Realtime harbour traffic dashboard"),
                work("Paperboat", "Offline-first notes for field researchers"),
                work("Lumen", "Design tokens pipeline for a product studio"),
            ],
            contacts: vec![
                ContactChannel {
                    label: "Email".to_string(),
                    value: "hello@example.com".to_string(),
                },
                ContactChannel {
                    label: "Location".to_string(),
                    value: "Remote".to_string(),
                },
            ],
            shapes: 4,
            submit_label: "Send Message".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub id: ElementId,
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillHandle {
    pub skill: ElementId,
    pub name: ElementId,
    pub progress: ElementId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TitledHandle {
    pub item: ElementId,
    pub title: ElementId,
    pub body: ElementId,
}

/// Handles to every element of the portfolio page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub loader: ElementId,
    pub cursor_dot: ElementId,
    pub cursor_outline: ElementId,

    pub navbar: ElementId,
    pub nav_logo: ElementId,
    pub nav_toggle: ElementId,
    pub nav_menu: ElementId,
    pub nav_links: Vec<NavLink>,

    pub hero: ElementId,
    pub shapes: Vec<ElementId>,
    pub hero_title: ElementId,
    pub hero_subtitle: ElementId,
    pub hero_cta: ElementId,

    pub about: ElementId,
    pub about_title: ElementId,
    pub about_description: ElementId,
    pub skills: Vec<SkillHandle>,

    pub work: ElementId,
    pub work_title: ElementId,
    pub work_items: Vec<TitledHandle>,

    pub contact: ElementId,
    pub contact_title: ElementId,
    pub contact_items: Vec<TitledHandle>,
    pub form: ElementId,
    pub name_input: ElementId,
    pub email_input: ElementId,
    pub message_input: ElementId,
    pub submit: ElementId,
}

const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("work", "Work"),
    ("contact", "Contact"),
];

impl PageLayout {
    pub fn build(content: &PortfolioContent, viewport: Viewport) -> (Page, PageLayout) {
        let mut page = Page::new(viewport);
        let body = page.body();

        let loader = page.append(body, Element::new("div").with_class("page-loader"));
        let cursor_dot = page.append(
            body,
            Element::new("div")
                .with_class("cursor-dot")
                .with_attr("data-cursor-dot", ""),
        );
        let cursor_outline = page.append(
            body,
            Element::new("div")
                .with_class("cursor-outline")
                .with_attr("data-cursor-outline", ""),
        );

        let navbar = page.append(body, Element::new("nav").with_class("navbar"));
        let nav_logo = page.append(
            navbar,
            Element::new("a")
                .with_class("nav-logo")
                .with_attr("href", "#home")
                .with_text(content.owner.clone()),
        );
        let nav_menu = page.append(navbar, Element::new("ul").with_class("nav-menu"));
        let nav_links = SECTIONS
            .iter()
            .map(|(anchor, label)| {
                let href = format!("#{}", anchor);
                let id = page.append(
                    nav_menu,
                    Element::new("a")
                        .with_class("nav-link")
                        .with_attr("href", href.clone())
                        .with_text(*label),
                );
                NavLink {
                    id,
                    label: label.to_string(),
                    href,
                }
            })
            .collect();
        let nav_toggle = page.append(navbar, Element::new("div").with_class("nav-toggle"));

        let hero = page.append(
            body,
            Element::new("section")
                .with_class("hero")
                .with_attr("id", "home"),
        );
        let shapes = (1..=content.shapes)
            .map(|n| {
                page.append(
                    hero,
                    Element::new("div")
                        .with_class(format!("shape-{}", n))
                        .with_class("shape"),
                )
            })
            .collect();
        let hero_title = page.append(
            hero,
            Element::new("h1")
                .with_class("hero-title")
                .with_text(content.headline.clone()),
        );
        let hero_subtitle = page.append(
            hero,
            Element::new("p")
                .with_class("hero-subtitle")
                .with_text(content.tagline.clone()),
        );
        let hero_cta = page.append(
            hero,
            Element::new("a")
                .with_class("btn")
                .with_attr("href", "#contact")
                .with_text("Get in touch"),
        );

        let about = page.append(
            body,
            Element::new("section")
                .with_class("about")
                .with_attr("id", "about"),
        );
        let about_title = page.append(
            about,
            Element::new("h2")
                .with_class("section-title")
                .with_text("About Me"),
        );
        let about_description = page.append(
            about,
            Element::new("p")
                .with_class("about-description")
                .with_text(content.about.clone()),
        );
        let skills = content
            .skills
            .iter()
            .map(|skill| {
                let item = page.append(about, Element::new("div").with_class("skill"));
                let name = page.append(
                    item,
                    Element::new("span")
                        .with_class("skill-name")
                        .with_text(skill.name.clone()),
                );
                let bar = page.append(item, Element::new("div").with_class("skill-bar"));
                let progress = page.append(
                    bar,
                    Element::new("div")
                        .with_class("skill-progress")
                        .with_attr("data-width", skill.width.clone()),
                );
                SkillHandle {
                    skill: item,
                    name,
                    progress,
                }
            })
            .collect();

        let work = page.append(
            body,
            Element::new("section")
                .with_class("work")
                .with_attr("id", "work"),
        );
        let work_title = page.append(
            work,
            Element::new("h2")
                .with_class("section-title")
                .with_text("Selected Work"),
        );
        let work_items = content
            .works
            .iter()
            .map(|w| titled(&mut page, work, "work-item", &w.title, &w.summary))
            .collect();

        let contact = page.append(
            body,
            Element::new("section")
                .with_class("contact")
                .with_attr("id", "contact"),
        );
        let contact_title = page.append(
            contact,
            Element::new("h2")
                .with_class("section-title")
                .with_text("Get In Touch"),
        );
        let contact_items = content
            .contacts
            .iter()
            .map(|c| titled(&mut page, contact, "contact-item", &c.label, &c.value))
            .collect();
        let form = page.append(contact, Element::new("form").with_class("form"));
        let name_input = page.append(
            form,
            Element::new("input")
                .with_attr("type", "text")
                .with_attr("placeholder", "Your Name")
                .with_value(""),
        );
        let email_input = page.append(
            form,
            Element::new("input")
                .with_attr("type", "email")
                .with_attr("placeholder", "Your Email")
                .with_value(""),
        );
        let message_input = page.append(
            form,
            Element::new("textarea")
                .with_attr("placeholder", "Your Message")
                .with_value(""),
        );
        let submit = page.append(
            form,
            Element::new("button")
                .with_class("btn")
                .with_attr("type", "submit")
                .with_text(content.submit_label.clone()),
        );

        let layout = PageLayout {
            loader,
            cursor_dot,
            cursor_outline,
            navbar,
            nav_logo,
            nav_toggle,
            nav_menu,
            nav_links,
            hero,
            shapes,
            hero_title,
            hero_subtitle,
            hero_cta,
            about,
            about_title,
            about_description,
            skills,
            work,
            work_title,
            work_items,
            contact,
            contact_title,
            contact_items,
            form,
            name_input,
            email_input,
            message_input,
            submit,
        };
        (page, layout)
    }
}

fn titled(page: &mut Page, parent: ElementId, class: &str, title: &str, body: &str) -> TitledHandle {
    let item = page.append(parent, Element::new("div").with_class(class));
    let title = page.append(item, Element::new("h3").with_text(title));
    let body = page.append(item, Element::new("p").with_text(body));
    TitledHandle { item, title, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Selector;

    #[test]
    fn build_exposes_every_consumed_selector() {
        let (page, layout) = PageLayout::build(&PortfolioContent::default(), Viewport::default());

        assert_eq!(page.query(Selector::Class("page-loader")), Some(layout.loader));
        assert_eq!(page.query(Selector::Attr("data-cursor-dot")), Some(layout.cursor_dot));
        assert_eq!(
            page.query(Selector::Attr("data-cursor-outline")),
            Some(layout.cursor_outline)
        );
        assert_eq!(page.query(Selector::Class("nav-toggle")), Some(layout.nav_toggle));
        assert_eq!(page.query_all(Selector::Class("nav-link")).len(), 4);
        assert_eq!(page.query_all(Selector::ClassPrefix("shape-")), layout.shapes);
        assert_eq!(page.query_all(Selector::Class("skill-progress")).len(), 4);
        assert_eq!(page.query(Selector::Id("contact")), Some(layout.contact));
        assert_eq!(
            page.query_within(layout.form, Selector::Typed("button", "submit")),
            Some(layout.submit)
        );
    }

    #[test]
    fn content_round_trips_through_toml() {
        let content: PortfolioContent = toml::from_str(
            r#"
            owner = "Sam"
            shapes = 2

            [[skills]]
            name = "Go"
            width = "40%"
            "#,
        )
        .unwrap();
        assert_eq!(content.owner, "Sam");
        assert_eq!(content.skills.len(), 1);
        assert_eq!(content.works, PortfolioContent::default().works);

        let (page, layout) = PageLayout::build(&content, Viewport::default());
        assert_eq!(layout.shapes.len(), 2);
        assert_eq!(page.attr(layout.skills[0].progress, "data-width"), Some("40%"));
    }
}
