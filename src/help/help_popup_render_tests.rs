//! Tests for help/help_popup_render

use super::*;
use crate::test_utils::test_helpers::{minimal_app, render_app, screen_rows};

#[test]
fn test_help_popup_is_centered() {
    let mut app = minimal_app();
    app.help.visible = true;

    render_app(&mut app, 100, 40);

    let area = app.layout_regions.help_popup.unwrap();
    assert_eq!(area.width, HELP_POPUP_WIDTH);
    assert_eq!(area.x, (100 - HELP_POPUP_WIDTH) / 2);
}

#[test]
fn test_help_popup_lists_entries() {
    let mut app = minimal_app();
    app.help.visible = true;

    let rows = screen_rows(&render_app(&mut app, 100, 40)).join("\n");

    assert!(rows.contains("GLOBAL"));
    assert!(rows.contains("Jump to product by number"));
    assert!(rows.contains(HELP_FOOTER));
}

#[test]
fn test_help_popup_scroll_bounds_on_short_terminal() {
    let mut app = minimal_app();
    app.help.visible = true;

    render_app(&mut app, 80, 16);

    // Entries plus blank and footer, 14 visible rows
    let expected_lines = HELP_ENTRIES.len() as u16 + 2;
    assert_eq!(app.help.scroll.max_offset, expected_lines - 14);
}

#[test]
fn test_help_popup_hidden_on_tiny_terminal() {
    let mut app = minimal_app();
    app.help.visible = true;

    render_app(&mut app, 18, 8);

    assert!(app.layout_regions.help_popup.is_none());
}
