#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(950)), "$950.00");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_rounds_half_away_from_zero() {
    assert_eq!(format_amount(dec!(0.125)), "$0.13");
    assert_eq!(format_amount(dec!(-0.125)), "-$0.13");
    assert_eq!(format_amount(dec!(2.004)), "$2.00");
}

#[test]
fn test_format_amount_tiny_negative_is_zero() {
    assert_eq!(format_amount(dec!(-0.001)), "$0.00");
}

// ── cycle ───────────────────────────────────────────────────

#[test]
fn test_cycle_wraps_both_ways() {
    let all = [1, 2, 3];
    assert_eq!(cycle(1, &all, 1), 2);
    assert_eq!(cycle(3, &all, 1), 1);
    assert_eq!(cycle(1, &all, -1), 3);
    assert_eq!(cycle(9, &[], 1), 9);
}

#[test]
fn test_cycle_optional_passes_through_none() {
    let all = ['a', 'b'];
    assert_eq!(cycle_optional(None, &all), Some('a'));
    assert_eq!(cycle_optional(Some('a'), &all), Some('b'));
    assert_eq!(cycle_optional(Some('b'), &all), None);
}

// ── scrolling ───────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 10);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_up_and_jumps() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_expand_home_leaves_plain_paths() {
    assert_eq!(expand_home("/tmp/out.csv"), "/tmp/out.csv");
    assert_eq!(expand_home("out.csv"), "out.csv");
}
