//! Tests for help_content

use super::*;

fn keys() -> Vec<&'static str> {
    HELP_ENTRIES
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !key.is_empty())
        .collect()
}

#[test]
fn test_help_entries_not_empty() {
    assert!(!HELP_ENTRIES.is_empty());
}

#[test]
fn test_help_starts_with_category_header() {
    let (key, desc) = HELP_ENTRIES[0];
    assert!(key.is_empty());
    assert!(!desc.is_empty());
}

#[test]
fn test_help_lists_every_section_shortcut() {
    let keys = keys();
    for shortcut in ["o", "a", "i"] {
        assert!(keys.contains(&shortcut), "missing shortcut {shortcut}");
    }
}

#[test]
fn test_help_mentions_tooltip_dismissal() {
    assert!(
        HELP_ENTRIES
            .iter()
            .any(|(key, desc)| *key == "Esc" && desc.contains("tooltip"))
    );
}

#[test]
fn test_help_footer_mentions_toggle_keys() {
    assert!(HELP_FOOTER.contains('?'));
    assert!(HELP_FOOTER.contains("F1"));
}

#[test]
fn test_tab_cycles_products_forward() {
    let (_, desc) = HELP_ENTRIES
        .iter()
        .find(|(key, _)| *key == "Tab/Shift+Tab")
        .unwrap();
    assert!(desc.starts_with("Next"));
}
