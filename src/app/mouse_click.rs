//! Mouse click handling
//!
//! Routes left clicks to navigation or to the tooltip depending on the
//! region under the cursor.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    // The help popup is modal
    if app.help.visible {
        return;
    }

    match region {
        Some(Region::ProductBar) => click_product_bar(app, mouse),
        Some(Region::SectionTabs) => click_section_tabs(app, mouse),
        Some(Region::Content) => click_content(app, mouse),
        Some(Region::TooltipClose) => app.close_tooltip(),
        // Clicks inside the tooltip or help body do nothing
        Some(Region::Tooltip) | Some(Region::HelpPopup) | None => {}
    }
}

fn click_product_bar(app: &mut App, mouse: MouseEvent) {
    if let Some(index) = app.layout_regions.product_at(mouse.column, mouse.row) {
        app.select_product(index);
    }
}

fn click_section_tabs(app: &mut App, mouse: MouseEvent) {
    if let Some(tab) = app.layout_regions.tab_at(mouse.column, mouse.row) {
        app.select_tab(tab);
    }
}

/// A term opens (or switches) the tooltip; anything else dismisses it
fn click_content(app: &mut App, mouse: MouseEvent) {
    if !app.open_term_at(mouse.column, mouse.row) {
        app.close_tooltip();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
