#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_money ──────────────────────────────────────────────

#[test]
fn test_money_small() {
    assert_eq!(format_money(dec!(0)), "₹0.00");
    assert_eq!(format_money(dec!(69)), "₹69.00");
    assert_eq!(format_money(dec!(999.5)), "₹999.50");
}

#[test]
fn test_money_indian_grouping() {
    assert_eq!(format_money(dec!(1000)), "₹1,000.00");
    assert_eq!(format_money(dec!(10000)), "₹10,000.00");
    assert_eq!(format_money(dec!(123456)), "₹1,23,456.00");
    assert_eq!(format_money(dec!(1234567.891)), "₹12,34,567.89");
    assert_eq!(format_money(dec!(100000000)), "₹10,00,00,000.00");
}

#[test]
fn test_money_rounds_to_cents() {
    assert_eq!(format_money(dec!(116.666666)), "₹116.67");
}

#[test]
fn test_money_negative() {
    assert_eq!(format_money(dec!(-1500)), "-₹1,500.00");
    assert_eq!(format_money(dec!(-0.001)), "₹0.00");
}

#[test]
fn test_money_non_finite_is_zero() {
    assert_eq!(format_money_opt(None), "₹0.00");
    assert_eq!(format_money_opt(Some(dec!(3736))), "₹3,736.00");
}

#[test]
fn test_percent() {
    assert_eq!(format_percent(dec!(100)), "100.0%");
    assert_eq!(format_percent(dec!(37.25)), "37.2%");
    assert_eq!(format_percent(dec!(0)), "0.0%");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Fruits", 10), "Fruits");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Vegitable shopping", 5), "Vegi…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Milk", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("₹₹₹₹₹₹", 4), "₹₹₹…");
}

// ── scrolling ─────────────────────────────────────────────────

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
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 11, 4);
    assert_eq!((index, scroll), (10, 7));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_clamp_cursor_after_shrink() {
    let (mut index, mut scroll) = (9, 7);
    clamp_cursor(&mut index, &mut scroll, 4);
    assert_eq!((index, scroll), (3, 3));
    clamp_cursor(&mut index, &mut scroll, 0);
    assert_eq!((index, scroll), (0, 0));
}
