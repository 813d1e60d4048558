//! Property-based tests for the scroll, reveal and key-sequence behaviors
//!
//! Uses proptest to verify the invariants over arbitrary event streams.

mod common;

use common::{key, laid_out, portfolio};
use folio_core::components::{parallax_offset, NavbarState, RevealState};
use folio_core::{BoundedQueue, PageEvent, KONAMI_SEQUENCE};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn offset_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => 0.0..400.0f64,
        1 => Just(100.0),
        1 => 0.0..5000.0f64,
    ]
}

/// A scroll event, or the display painting a frame
#[derive(Debug, Clone)]
enum ScrollOp {
    Scroll(f64),
    Frame,
}

fn scroll_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ScrollOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => offset_strategy().prop_map(ScrollOp::Scroll),
            1 => Just(ScrollOp::Frame),
        ],
        0..max_ops,
    )
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(KONAMI_SEQUENCE.to_vec()).prop_map(str::to_string),
        1 => prop::sample::select(vec!["KeyX", "Space", "Enter", "ArrowUp"]).prop_map(str::to_string),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After a frame the navbar is scrolled iff the last offset exceeds 100
    #[test]
    fn navbar_tracks_last_processed_offset(ops in scroll_ops_strategy(60)) {
        let (mut folio, layout) = portfolio();
        let mut last_processed: Option<f64> = None;
        let mut last_seen = 0.0;

        for op in ops {
            match op {
                ScrollOp::Scroll(y) => {
                    folio.dispatch(PageEvent::Scroll { y });
                    last_seen = y;
                }
                ScrollOp::Frame => {
                    if folio.render_frame() > 0 {
                        last_processed = Some(last_seen);
                    }
                }
            }
            let scrolled = folio.page().has_class(layout.navbar, "scrolled");
            let expected = last_processed.is_some_and(|y| y > 100.0);
            prop_assert_eq!(scrolled, expected);
            prop_assert_eq!(
                folio.scroll().navbar_state() == NavbarState::Scrolled,
                expected
            );
        }
    }

    /// A burst of N scroll events inside one frame recomputes exactly once
    #[test]
    fn burst_coalesces_to_one_recomputation(
        burst in prop::collection::vec(offset_strategy(), 1..50)
    ) {
        let (mut folio, layout) = portfolio();
        for y in &burst {
            folio.dispatch(PageEvent::Scroll { y: *y });
        }
        prop_assert_eq!(folio.scheduler().pending_frames(), 1);
        prop_assert_eq!(folio.scroll().coalesced(), burst.len() as u64 - 1);

        prop_assert_eq!(folio.render_frame(), 1);
        prop_assert_eq!(folio.scroll().recomputations(), 1);

        let last = *burst.last().unwrap();
        let expected = format!("translateY({})", folio_core::page::px(-(last * 0.5)));
        prop_assert_eq!(
            folio.page().style(layout.shapes[0], "transform"),
            Some(expected.as_str())
        );
    }

    /// Shape i moves by exactly -(s * (0.5 + i * 0.1))
    #[test]
    fn parallax_offset_formula(s in 0.0..10_000.0f64, i in 0usize..16) {
        prop_assert_eq!(parallax_offset(s, i, 0.5, 0.1), -(s * (0.5 + i as f64 * 0.1)));
    }

    /// Skill bars fill at most once and never revert
    #[test]
    fn skill_bars_fill_once(offsets in prop::collection::vec(0.0..3000.0f64, 1..40)) {
        let (mut folio, layout) = laid_out();
        let bar = layout.skills[0].progress;
        let mut filled = false;

        for y in offsets {
            folio.dispatch(PageEvent::Scroll { y });
            // about spans 900..1500; half of it is visible from 400 to 1200
            let half_visible = (400.0..=1200.0).contains(&y);
            filled |= half_visible;

            let width = folio.page().style(bar, "width");
            if filled {
                prop_assert_eq!(width, Some("90%"));
                prop_assert_eq!(folio.skills().unwrap().state(bar), Some(RevealState::Triggered));
            } else {
                prop_assert_eq!(width, None);
            }
        }
    }

    /// The key buffer never holds more than ten codes
    #[test]
    fn key_buffer_is_bounded(keys in prop::collection::vec(key_strategy(), 0..200)) {
        let (mut folio, _) = portfolio();
        for code in keys {
            folio.dispatch(key(&code));
            prop_assert!(folio.easter_egg().buffered() <= 10);
        }
    }

    /// Any single substitution in the sequence prevents activation
    #[test]
    fn single_substitution_never_activates(
        position in 0usize..10,
        replacement in prop::sample::select(vec!["KeyX", "KeyA", "KeyB", "ArrowUp", "ArrowDown"]),
    ) {
        prop_assume!(KONAMI_SEQUENCE[position] != replacement);
        let (mut folio, _) = portfolio();
        for (i, code) in KONAMI_SEQUENCE.iter().enumerate() {
            let code = if i == position { replacement } else { *code };
            folio.dispatch(key(code));
        }
        prop_assert_eq!(folio.easter_egg().activations(), 0);
    }

    /// BoundedQueue keeps exactly the newest `capacity` items
    #[test]
    fn bounded_queue_keeps_newest(
        capacity in 1usize..16,
        items in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut queue = BoundedQueue::new(capacity);
        for item in &items {
            queue.push(*item);
        }
        let start = items.len().saturating_sub(capacity);
        prop_assert_eq!(queue.iter().copied().collect::<Vec<_>>(), items[start..].to_vec());
    }
}

#[test]
fn konami_sequence_activates_once_and_empties_buffer() {
    let (mut folio, _) = portfolio();
    for (i, code) in KONAMI_SEQUENCE.iter().enumerate() {
        folio.dispatch(key(code));
        let expected = if i == 9 { 0 } else { i + 1 };
        assert_eq!(folio.easter_egg().buffered(), expected);
    }
    assert_eq!(folio.easter_egg().activations(), 1);
}
