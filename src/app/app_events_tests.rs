//! Tests for app/app_events

use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::catalog::SectionTab;
use crate::test_utils::test_helpers::{
    key, key_with_mods, left_click, minimal_app, mouse, render_app, term_cell, test_app,
};
use crate::tooltip::TooltipState;

#[test]
fn test_q_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_help_open() {
    let mut app = test_app();
    app.help.visible = true;
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));

    assert!(!app.should_quit());
}

#[test]
fn test_arrow_keys_cycle_products() {
    let mut app = test_app();
    let count = app.catalog.products.len();

    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.active_product, 1);
    app.handle_key_event(key(KeyCode::Char('h')));
    app.handle_key_event(key(KeyCode::Left));
    assert_eq!(app.active_product, count - 1);
}

#[test]
fn test_tab_and_backtab_cycle_products() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('l')));
    assert_eq!(app.active_product, 2);
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.active_product, 1);
}

#[test]
fn test_number_keys_jump_to_product() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('4')));
    assert_eq!(app.product().unwrap().key, "radar");

    app.handle_key_event(key(KeyCode::Char('1')));
    assert_eq!(app.active_product, 0);
}

#[test]
fn test_number_key_past_last_product_is_ignored() {
    let mut app = minimal_app();
    app.handle_key_event(key(KeyCode::Char('5')));
    assert_eq!(app.active_product, 0);
}

#[test]
fn test_section_shortcuts() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('a')));
    assert_eq!(app.active_tab, SectionTab::Apis);
    app.handle_key_event(key(KeyCode::Char('i')));
    assert_eq!(app.active_tab, SectionTab::Integration);
    app.handle_key_event(key(KeyCode::Char('o')));
    assert_eq!(app.active_tab, SectionTab::Overview);
}

#[test]
fn test_brackets_cycle_sections() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char(']')));
    assert_eq!(app.active_tab, SectionTab::Apis);
    app.handle_key_event(key(KeyCode::Char('[')));
    app.handle_key_event(key(KeyCode::Char('[')));
    assert_eq!(app.active_tab, SectionTab::Integration);
}

#[test]
fn test_scroll_keys() {
    let mut app = test_app();
    app.scroll.update_bounds(200, 20);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.scroll.offset, 2);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.scroll.offset, 1);

    app.handle_key_event(key_with_mods(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.scroll.offset, 11);

    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(app.scroll.offset, 1);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.scroll.offset, 180);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_esc_closes_tooltip() {
    let mut app = minimal_app();
    render_app(&mut app, 80, 24);
    let (column, row) = term_cell(&app, "Webhooks").unwrap();
    app.handle_mouse_event(left_click(column, row));
    assert!(app.tooltip.is_open());

    app.handle_key_event(key(KeyCode::Esc));

    assert_eq!(app.tooltip, TooltipState::Closed);
}

#[test]
fn test_question_mark_toggles_help() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('?')));
    assert!(app.help.visible);

    app.handle_key_event(key(KeyCode::F(1)));
    assert!(!app.help.visible);
}

#[test]
fn test_help_swallows_navigation_keys() {
    let mut app = test_app();
    app.help.visible = true;

    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Char('a')));

    assert_eq!(app.active_product, 0);
    assert_eq!(app.active_tab, SectionTab::Overview);
    assert!(app.help.visible);
}

#[test]
fn test_q_closes_help_instead_of_quitting() {
    let mut app = test_app();
    app.help.visible = true;

    app.handle_key_event(key(KeyCode::Char('q')));

    assert!(!app.help.visible);
    assert!(!app.should_quit());
}

#[test]
fn test_help_scroll_keys() {
    let mut app = test_app();
    app.help.visible = true;
    app.help.scroll.update_bounds(40, 10);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.help.scroll.offset, 2);
    assert_eq!(app.scroll.offset, 0);

    app.handle_key_event(key(KeyCode::End));
    assert_eq!(app.help.scroll.offset, 30);
}

#[test]
fn test_mouse_wheel_scrolls_content() {
    let mut app = test_app();
    app.scroll.update_bounds(200, 20);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 10));
    assert_eq!(app.scroll.offset, 3);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, 10, 10));
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_mouse_wheel_scrolls_help_when_open() {
    let mut app = test_app();
    app.scroll.update_bounds(200, 20);
    app.help.visible = true;
    app.help.scroll.update_bounds(40, 10);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 10));

    assert_eq!(app.help.scroll.offset, 3);
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_mouse_event_routed_through_handle_event() {
    let mut app = minimal_app();
    render_app(&mut app, 80, 24);
    let (column, row) = term_cell(&app, "Idempotency").unwrap();

    app.handle_event(Event::Mouse(left_click(column, row)));

    assert_eq!(app.tooltip.active_term().unwrap().as_str(), "Idempotency");
}
