//! Property-based tests for marker extraction and hover geometry.
//!
//! Tests validate:
//! 1. Well-formed markers extract to their values in order
//! 2. Extraction never panics and never exceeds the marker count
//! 3. A resolved hover position is always inside the icon list

use pethover::hover::{hovered_icon_position, IconMetrics};
use pethover::model::{Bounds, Point};
use pethover::parser::extract_icon_ids;
use proptest::prelude::*;

// ===== Property 1: Well-formed markers =====

proptest! {
    #[test]
    fn well_formed_markers_extract_in_order(
        ids in prop::collection::vec(0..=i32::MAX, 0..20),
        filler in "[a-zA-Z :()]{0,8}",
    ) {
        let text: String = ids
            .iter()
            .map(|id| format!("{filler}<img={id}>"))
            .collect();

        prop_assert_eq!(extract_icon_ids(&text), ids);
    }

    #[test]
    fn text_without_equals_yields_nothing(text in "[^=]*") {
        prop_assert!(extract_icon_ids(&text).is_empty());
    }

    #[test]
    fn unclosed_trailing_marker_is_dropped(
        ids in prop::collection::vec(0..1000i32, 0..5),
        tail in "[0-9]{0,6}",
    ) {
        let mut text: String = ids.iter().map(|id| format!("<img={id}>")).collect();
        text.push_str("<img=");
        text.push_str(&tail);

        prop_assert_eq!(extract_icon_ids(&text), ids);
    }
}

// ===== Property 2: Robustness =====

proptest! {
    #[test]
    fn extraction_is_total_and_bounded(text in any::<String>()) {
        let ids = extract_icon_ids(&text);
        let closers = text.matches('>').count();

        prop_assert!(ids.len() <= closers);
        prop_assert!(ids.iter().all(|id| *id >= 0));
    }

    #[test]
    fn long_digit_runs_never_wrap(digits in "[1-9][0-9]{10,30}") {
        let ids = extract_icon_ids(&format!("<img={digits}>"));

        prop_assert_eq!(ids.len(), 1);
        // The kept value is a decimal prefix of the run.
        prop_assert!(digits.starts_with(&ids[0].to_string()));
    }
}

// ===== Property 3: Hover geometry =====

proptest! {
    #[test]
    fn resolved_position_is_within_count(
        mx in -500..1000i32,
        my in -50..100i32,
        width in 0..600i32,
        height in prop_oneof![Just(14i32), Just(28i32)],
        offset in 0..200i32,
        count in 0..40usize,
    ) {
        let bounds = Bounds::new(0, 0, width, height);
        if let Some(position) =
            hovered_icon_position(Point::new(mx, my), bounds, offset, count, IconMetrics::DEFAULT)
        {
            prop_assert!(position < count);
        }
    }

    #[test]
    fn first_row_single_line_matches_floor_formula(
        slot in 0..10i32,
        within in 0..21i32,
        offset in 0..100i32,
    ) {
        let bounds = Bounds::new(0, 0, 1_000, 14);
        let mouse = Point::new(offset + slot * 21 + within, 7);

        prop_assert_eq!(
            hovered_icon_position(mouse, bounds, offset, 10, IconMetrics::DEFAULT),
            Some(slot as usize)
        );
    }
}
