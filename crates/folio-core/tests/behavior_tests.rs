//! End-to-end behavior tests on the stock portfolio page.
//!
//! Every test drives a `Portfolio` on a `ManualClock`, so timings are exact.

mod common;

use std::time::Duration;

use common::{key, laid_out, portfolio, type_into};
use folio_core::components::{LoaderPhase, NavbarState, RevealState};
use folio_core::{Effect, Fill, PageEvent, ScrollBlock, KONAMI_SEQUENCE};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Page Loader
// ============================================================================

#[test]
fn test_loader_hides_then_removes() {
    let (mut folio, layout) = portfolio();
    folio.dispatch(PageEvent::Load);
    assert_eq!(folio.loader().unwrap().phase(), LoaderPhase::Waiting);

    folio.advance(ms(1999));
    assert!(!folio.page().has_class(layout.loader, "hidden"));

    folio.advance(ms(1));
    assert!(folio.page().has_class(layout.loader, "hidden"));
    assert_eq!(folio.loader().unwrap().phase(), LoaderPhase::Hiding);

    folio.advance(ms(799));
    assert!(folio.page().contains(layout.loader));

    folio.advance(ms(1));
    assert!(!folio.page().contains(layout.loader));
    assert_eq!(folio.loader().unwrap().phase(), LoaderPhase::Removed);
    assert_eq!(folio.scheduler().now(), ms(2800));
}

#[test]
fn test_loader_chain_runs_in_one_advance() {
    let (mut folio, layout) = portfolio();
    folio.dispatch(PageEvent::Load);
    folio.advance(ms(5000));
    assert!(!folio.page().contains(layout.loader));
    assert_eq!(folio.scheduler().pending_timers(), 0);
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn test_cursor_follows_pointer() {
    let (mut folio, layout) = portfolio();
    folio.dispatch(PageEvent::MouseMove { x: 120.0, y: 48.5 });

    let page = folio.page();
    assert_eq!(page.style(layout.cursor_dot, "left"), Some("120px"));
    assert_eq!(page.style(layout.cursor_dot, "top"), Some("48.5px"));
    assert_eq!(page.style(layout.cursor_outline, "left"), Some("120px"));
    assert_eq!(page.style(layout.cursor_outline, "top"), Some("48.5px"));
    assert_eq!(folio.cursor().unwrap().position(), Some((120.0, 48.5)));

    let effects = folio.drain_effects();
    let [Effect::Animate(animation)] = effects.as_slice() else {
        panic!("expected one animation, got {:?}", effects);
    };
    assert_eq!(animation.target, layout.cursor_outline);
    assert_eq!(animation.duration_ms, 500);
    assert_eq!(animation.fill, Fill::Forwards);
    assert_eq!(animation.keyframe["left"], "120px");
    assert_eq!(animation.keyframe["top"], "48.5px");
}

#[test]
fn test_every_move_requests_an_animation() {
    let (mut folio, _) = portfolio();
    for i in 0..5 {
        folio.dispatch(PageEvent::MouseMove {
            x: i as f64,
            y: 0.0,
        });
    }
    assert_eq!(folio.drain_effects().len(), 5);
}

#[test]
fn test_hover_scales_outline() {
    let (mut folio, layout) = portfolio();
    let card = layout.work_items[0].item;

    folio.dispatch(PageEvent::PointerEnter { target: card });
    assert_eq!(folio.page().style(layout.cursor_outline, "transform"), Some("scale(1.5)"));
    assert_eq!(
        folio.page().style(layout.cursor_outline, "border-color"),
        Some("#6366f1")
    );

    folio.dispatch(PageEvent::PointerLeave { target: card });
    assert_eq!(folio.page().style(layout.cursor_outline, "transform"), Some("scale(1)"));

    folio.dispatch(PageEvent::PointerEnter {
        target: layout.about_description,
    });
    assert_eq!(folio.page().style(layout.cursor_outline, "transform"), Some("scale(1)"));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_menu_toggle_opens_and_closes() {
    let (mut folio, layout) = portfolio();
    folio.dispatch(PageEvent::Click {
        target: layout.nav_toggle,
    });
    assert!(folio.page().has_class(layout.nav_menu, "active"));
    assert!(folio.page().has_class(layout.nav_toggle, "active"));

    let outcome = folio.dispatch(PageEvent::Click {
        target: layout.nav_toggle,
    });
    assert!(!outcome.default_prevented);
    assert!(!folio.nav().unwrap().is_open(folio.page()));
    assert!(!folio.page().has_class(layout.nav_toggle, "active"));
}

#[test]
fn test_nav_link_closes_menu_and_scrolls() {
    let (mut folio, layout) = portfolio();
    folio.dispatch(PageEvent::Click {
        target: layout.nav_toggle,
    });

    let about_link = layout.nav_links[1].id;
    let outcome = folio.dispatch(PageEvent::Click { target: about_link });
    assert!(outcome.default_prevented);
    assert!(!folio.page().has_class(layout.nav_menu, "active"));
    assert!(!folio.page().has_class(layout.nav_toggle, "active"));
    assert_eq!(
        folio.drain_effects(),
        vec![Effect::ScrollIntoView {
            target: layout.about,
            smooth: true,
            block: ScrollBlock::Start,
        }]
    );
}

#[test]
fn test_hero_button_scrolls_to_contact() {
    let (mut folio, layout) = portfolio();
    let outcome = folio.dispatch(PageEvent::Click {
        target: layout.hero_cta,
    });
    assert!(outcome.default_prevented);
    assert!(matches!(
        folio.drain_effects().as_slice(),
        [Effect::ScrollIntoView { target, .. }] if *target == layout.contact
    ));
}

// ============================================================================
// Scroll effects
// ============================================================================

#[test]
fn test_scroll_burst_recomputes_once_with_last_offset() {
    let (mut folio, layout) = portfolio();
    for y in [10.0, 60.0, 150.0, 90.0, 240.0] {
        folio.dispatch(PageEvent::Scroll { y });
    }
    assert_eq!(folio.scheduler().pending_frames(), 1);
    assert_eq!(folio.scroll().coalesced(), 4);
    assert_eq!(folio.scroll().recomputations(), 0);

    assert_eq!(folio.render_frame(), 1);
    assert_eq!(folio.scroll().recomputations(), 1);
    assert_eq!(folio.scroll().navbar_state(), NavbarState::Scrolled);
    assert!(folio.page().has_class(layout.navbar, "scrolled"));
    assert_eq!(
        folio.page().style(layout.shapes[0], "transform"),
        Some("translateY(-120px)")
    );
    assert_eq!(
        folio.page().style(layout.shapes[1], "transform"),
        Some(format!("translateY({}px)", -(240.0 * (0.5 + 0.1))).as_str())
    );

    assert_eq!(folio.render_frame(), 0);
    assert_eq!(folio.scroll().recomputations(), 1);
}

#[test]
fn test_navbar_returns_to_default() {
    let (mut folio, layout) = portfolio();
    folio.dispatch(PageEvent::Scroll { y: 300.0 });
    folio.render_frame();
    assert!(folio.page().has_class(layout.navbar, "scrolled"));

    folio.dispatch(PageEvent::Scroll { y: 100.0 });
    folio.render_frame();
    assert!(!folio.page().has_class(layout.navbar, "scrolled"));
    assert_eq!(
        folio.page().style(layout.shapes[0], "transform"),
        Some("translateY(-50px)")
    );
}

#[test]
fn test_scroll_after_frame_schedules_again() {
    let (mut folio, _) = portfolio();
    folio.dispatch(PageEvent::Scroll { y: 1.0 });
    folio.render_frame();
    assert!(!folio.scroll().is_pending());

    folio.dispatch(PageEvent::Scroll { y: 2.0 });
    assert!(folio.scroll().is_pending());
    assert_eq!(folio.render_frame(), 1);
    assert_eq!(folio.scroll().recomputations(), 2);
}

// ============================================================================
// Visibility animations
// ============================================================================

#[test]
fn test_skill_bars_fill_once_half_visible() {
    let (mut folio, layout) = laid_out();
    let first = layout.skills[0].progress;

    folio.dispatch(PageEvent::Scroll { y: 300.0 });
    assert_eq!(folio.page().style(first, "width"), None);
    assert_eq!(folio.skills().unwrap().state(first), Some(RevealState::Pending));

    folio.dispatch(PageEvent::Scroll { y: 400.0 });
    for skill in &layout.skills {
        let declared = folio.page().attr(skill.progress, "data-width").unwrap().to_string();
        assert_eq!(folio.page().style(skill.progress, "width"), Some(declared.as_str()));
    }
    assert_eq!(folio.skills().unwrap().state(first), Some(RevealState::Triggered));
    assert!(!folio.skills().unwrap().is_observing());

    folio.dispatch(PageEvent::Scroll { y: 0.0 });
    assert_eq!(folio.page().style(first, "width"), Some("90%"));
}

#[test]
fn test_text_blocks_start_hidden() {
    let (folio, layout) = portfolio();
    let page = folio.page();
    for block in [layout.hero_title, layout.about_title, layout.about_description] {
        assert_eq!(page.style(block, "opacity"), Some("0"));
        assert_eq!(page.style(block, "transform"), Some("translateY(30px)"));
        assert_eq!(page.style(block, "transition"), Some("all 0.6s ease"));
    }
    assert_eq!(folio.text().observed(), 5);
}

#[test]
fn test_text_reveal_on_approach() {
    let (mut folio, layout) = laid_out();
    assert_eq!(folio.page().style(layout.hero_title, "opacity"), Some("1"));
    assert_eq!(folio.page().style(layout.hero_title, "transform"), Some("translateY(0)"));
    assert_eq!(folio.page().style(layout.about_title, "opacity"), Some("0"));

    // 950 is below the 750px line drawn by the -50px bottom margin
    folio.dispatch(PageEvent::Scroll { y: 190.0 });
    assert_eq!(folio.page().style(layout.about_title, "opacity"), Some("0"));

    folio.dispatch(PageEvent::Scroll { y: 400.0 });
    assert_eq!(folio.page().style(layout.about_title, "opacity"), Some("1"));
    assert_eq!(
        folio.text().state(layout.about_description),
        Some(RevealState::Triggered)
    );
}

#[test]
fn test_text_reveal_keeps_observing() {
    let (mut folio, layout) = laid_out();
    let before = folio.text().deliveries();

    folio.dispatch(PageEvent::Scroll { y: 2000.0 });
    folio.dispatch(PageEvent::Scroll { y: 0.0 });

    assert!(folio.text().deliveries() > before);
    assert_eq!(folio.text().observed(), 5);
    assert_eq!(folio.page().style(layout.hero_title, "opacity"), Some("1"));
    assert_eq!(folio.text().state(layout.hero_title), Some(RevealState::Triggered));
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn test_contact_submission_round_trip() {
    let (mut folio, layout) = portfolio();
    type_into(&mut folio, layout.name_input, "Ada");
    type_into(&mut folio, layout.email_input, "ada@example.com");
    type_into(&mut folio, layout.message_input, "Hello!");

    let outcome = folio.dispatch(PageEvent::Submit { form: layout.form });
    assert!(outcome.default_prevented);
    assert!(folio.page().is_disabled(layout.submit));
    assert_eq!(folio.page().text(layout.submit), Some("Sending..."));
    assert!(folio.drain_effects().is_empty());

    folio.advance(ms(1999));
    assert!(folio.page().is_disabled(layout.submit));

    folio.advance(ms(1));
    assert!(!folio.page().is_disabled(layout.submit));
    assert_eq!(folio.page().text(layout.submit), Some("Send Message"));
    for field in [layout.name_input, layout.email_input, layout.message_input] {
        assert_eq!(folio.page().value(field), Some(""));
    }
    assert_eq!(
        folio.drain_effects(),
        vec![Effect::notice(
            "Thank you for your message! I'll get back to you soon."
        )]
    );
    assert_eq!(folio.contact().unwrap().sent(), 1);
}

#[test]
fn test_contact_rejects_missing_field() {
    let (mut folio, layout) = portfolio();
    type_into(&mut folio, layout.name_input, "Ada");
    type_into(&mut folio, layout.message_input, "Hello!");

    let outcome = folio.dispatch(PageEvent::Submit { form: layout.form });
    assert!(outcome.default_prevented);
    assert!(!folio.page().is_disabled(layout.submit));
    assert_eq!(folio.page().text(layout.submit), Some("Send Message"));
    assert_eq!(folio.page().value(layout.name_input), Some("Ada"));
    assert_eq!(
        folio.drain_effects(),
        vec![Effect::notice("Please fill in all fields")]
    );
    assert_eq!(folio.scheduler().pending_timers(), 0);
}

// ============================================================================
// Easter egg
// ============================================================================

#[test]
fn test_konami_code_flips_hue() {
    let (mut folio, _) = portfolio();
    let body = folio.page().body();

    for code in KONAMI_SEQUENCE {
        folio.dispatch(key(code));
    }
    assert_eq!(folio.page().style(body, "filter"), Some("hue-rotate(180deg)"));
    assert_eq!(folio.easter_egg().activations(), 1);
    assert_eq!(folio.easter_egg().buffered(), 0);

    folio.advance(ms(2999));
    assert_eq!(folio.page().style(body, "filter"), Some("hue-rotate(180deg)"));
    folio.advance(ms(1));
    assert_eq!(folio.page().style(body, "filter"), Some("none"));
}

#[test]
fn test_konami_after_noise_and_retrigger() {
    let (mut folio, _) = portfolio();
    for code in ["KeyX", "ArrowUp", "Space"] {
        folio.dispatch(key(code));
    }
    for code in KONAMI_SEQUENCE {
        folio.dispatch(key(code));
    }
    assert_eq!(folio.easter_egg().activations(), 1);

    // The tail of the last run must not count towards the next one
    for code in &KONAMI_SEQUENCE[..9] {
        folio.dispatch(key(code));
    }
    assert_eq!(folio.easter_egg().activations(), 1);
    folio.dispatch(key("KeyA"));
    assert_eq!(folio.easter_egg().activations(), 2);
}

// ============================================================================
// Page transitions and AOS
// ============================================================================

#[test]
fn test_body_fades_in_and_out() {
    let (mut folio, _) = portfolio();
    let body = folio.page().body();

    folio.dispatch(PageEvent::DomContentLoaded);
    assert_eq!(folio.page().style(body, "opacity"), Some("0"));
    assert_eq!(folio.page().style(body, "transition"), Some("opacity 0.5s ease"));

    folio.advance(ms(100));
    assert_eq!(folio.page().style(body, "opacity"), Some("1"));

    folio.dispatch(PageEvent::BeforeUnload);
    assert_eq!(folio.page().style(body, "opacity"), Some("0"));
}

#[test]
fn test_aos_initialised_only_when_present() {
    let (mut folio, _) = portfolio();
    folio.dispatch(PageEvent::DomContentLoaded);
    assert!(folio.drain_effects().is_empty());
    assert!(!folio.aos().is_initialized());

    let (mut folio, _) = portfolio();
    folio.page_mut().provide_library("AOS");
    folio.dispatch(PageEvent::DomContentLoaded);
    let effects = folio.drain_effects();
    let [Effect::InitScrollReveal(settings)] = effects.as_slice() else {
        panic!("expected AOS init, got {:?}", effects);
    };
    assert_eq!(settings.duration, 1000);
    assert!(settings.once);
    assert_eq!(settings.offset, 100);
    assert_eq!(settings.easing, "ease-out-cubic");
}
