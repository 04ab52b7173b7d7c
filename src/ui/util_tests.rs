use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Salary", 10), "Salary");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Salary", 6), "Salary");
}

#[test]
fn test_truncate_long_title() {
    assert_eq!(truncate("Website hosting", 8), "Website…");
}

#[test]
fn test_truncate_zero_and_one() {
    assert_eq!(truncate("Rent", 0), "");
    assert_eq!(truncate("Rent", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("Alimentação", 6), "Alime…");
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_within_page() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (1, 0));
}

#[test]
fn test_scroll_down_moves_page() {
    let (mut index, mut scroll) = (3, 0);
    scroll_down(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (4, 1));
}

#[test]
fn test_scroll_down_stops_at_last_row() {
    let (mut index, mut scroll) = (9, 6);
    scroll_down(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
}

#[test]
fn test_scroll_down_empty_table() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_up_pulls_page() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));

    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_edges() {
    let (mut index, mut scroll) = (5, 3);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_short_table() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 3, 10);
    assert_eq!((index, scroll), (2, 0));
}
