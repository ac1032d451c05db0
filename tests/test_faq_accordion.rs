//! Tests for the FAQ accordion state machine.
//!
//! Tests cover:
//! - The at-most-one-open invariant under arbitrary toggle sequences
//! - Forced collapse of other items when a collapsed item is opened
//! - Toggling the open item collapsing everything
//! - Out-of-range and empty-accordion edge cases

mod common;

use common::*;

fn test_accordion(count: usize) -> FaqAccordion {
    let items = (0..count)
        .map(|i| FaqItem::new(format!("Pregunta {}", i + 1), format!("Respuesta {}", i + 1)))
        .collect();
    FaqAccordion::new(items)
}

fn open_count(accordion: &FaqAccordion) -> usize {
    (0..accordion.len())
        .filter(|&i| accordion.is_expanded(i))
        .count()
}

#[test]
fn test_all_items_start_collapsed() {
    let accordion = test_accordion(4);
    assert_eq!(accordion.expanded(), None);
    assert_eq!(open_count(&accordion), 0);
}

#[test]
fn test_toggle_collapsed_item_expands_only_it() {
    let mut accordion = test_accordion(4);

    accordion.toggle(2);

    assert!(accordion.is_expanded(2));
    assert_eq!(open_count(&accordion), 1, "exactly one item should be open");
}

#[test]
fn test_toggle_other_item_collapses_previous() {
    let mut accordion = test_accordion(4);

    // 1. Open item 0, then click item 3
    accordion.toggle(0);
    accordion.toggle(3);

    // 2. Item 3 is the only open item
    assert!(!accordion.is_expanded(0), "previous item should have collapsed");
    assert!(accordion.is_expanded(3));
    assert_eq!(open_count(&accordion), 1);
}

#[test]
fn test_toggle_open_item_collapses_everything() {
    let mut accordion = test_accordion(4);

    accordion.toggle(1);
    accordion.toggle(1);

    assert_eq!(accordion.expanded(), None);
    assert_eq!(open_count(&accordion), 0);
}

#[test]
fn test_double_toggle_round_trips_from_collapsed() {
    let mut accordion = test_accordion(3);
    let initial = accordion.clone();

    accordion.toggle(0);
    accordion.toggle(0);

    assert_eq!(accordion, initial);
}

#[test]
fn test_invariant_holds_under_arbitrary_sequences() {
    let mut accordion = test_accordion(5);

    // Deterministic but messy click sequence, including repeats
    let clicks = [0, 1, 1, 4, 2, 2, 2, 0, 3, 4, 4, 1, 0, 0, 3];
    for &click in &clicks {
        accordion.toggle(click);
        assert!(
            open_count(&accordion) <= 1,
            "more than one item open after clicking {}",
            click
        );
    }
}

#[test]
fn test_out_of_range_toggle_is_noop() {
    let mut accordion = test_accordion(2);
    accordion.toggle(0);
    let before = accordion.clone();

    accordion.toggle(7);

    assert_eq!(accordion, before);
}

#[test]
fn test_empty_accordion() {
    let mut accordion = FaqAccordion::new(vec![]);
    assert!(accordion.is_empty());

    accordion.toggle(0);
    assert_eq!(accordion.expanded(), None);
}

#[test]
fn test_collapse_all() {
    let mut accordion = test_accordion(3);
    accordion.toggle(1);

    accordion.collapse_all();

    assert_eq!(accordion.expanded(), None);
}

#[test]
fn test_default_faq_is_populated() {
    let items = default_faq();
    assert!(!items.is_empty(), "built-in FAQ should have entries");
    for item in &items {
        assert!(!item.question.is_empty());
        assert!(!item.answer.is_empty());
    }
}
