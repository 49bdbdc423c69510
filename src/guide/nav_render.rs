//! Product bar and section tab rendering
//!
//! Both bars record the screen area of every label they draw so clicks can
//! select the product or section under the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::catalog::SectionTab;

const ACTIVE_PRODUCT_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);
const ACTIVE_TAB_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Magenta)
    .add_modifier(Modifier::BOLD);
const INACTIVE_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR: &str = "│";

/// Label for product `index`; only the first nine get a number key
pub fn product_label(index: usize, title: &str) -> String {
    if index < 9 {
        format!(" {} {} ", index + 1, title)
    } else {
        format!(" {} ", title)
    }
}

pub fn tab_label(tab: SectionTab) -> String {
    format!(" {} ({}) ", tab.name(), tab.shortcut())
}

/// First label to draw so that `active` fits within `available` columns
///
/// Labels are separated by one column.
pub fn first_visible(widths: &[usize], active: usize, available: usize) -> usize {
    let mut start = 0;
    while start < active {
        let needed: usize = widths[start..=active].iter().sum::<usize>() + (active - start);
        if needed <= available {
            break;
        }
        start += 1;
    }
    start
}

pub fn render_product_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(format!(" {} ", app.catalog.title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    let labels: Vec<String> = app
        .catalog
        .products
        .iter()
        .enumerate()
        .map(|(index, product)| product_label(index, &product.title))
        .collect();
    let widths: Vec<usize> = labels.iter().map(|label| label.width()).collect();
    let active = app.active_product.min(labels.len().saturating_sub(1));
    let start = first_visible(&widths, active, inner.width as usize);

    let mut spans = Vec::new();
    let mut x = inner.x;
    for (index, label) in labels.into_iter().enumerate().skip(start) {
        let width = widths[index] as u16;
        let gap = u16::from(index > start);
        if x.saturating_add(gap).saturating_add(width) > inner.right() {
            break;
        }
        if gap > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            x += gap;
        }

        app.layout_regions
            .product_labels
            .push((Rect::new(x, inner.y, width, 1), index));
        let style = if index == app.active_product {
            ACTIVE_PRODUCT_STYLE
        } else {
            INACTIVE_STYLE
        };
        spans.push(Span::styled(label, style));
        x += width;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    app.layout_regions.product_bar = Some(area);
}

pub fn render_section_tabs(app: &mut App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x.saturating_add(1);

    for &tab in SectionTab::all() {
        let label = tab_label(tab);
        let width = label.width() as u16;
        if x.saturating_add(width) > area.right() {
            break;
        }

        app.layout_regions
            .tab_labels
            .push((Rect::new(x, area.y, width, 1), tab));
        let style = if tab == app.active_tab {
            ACTIVE_TAB_STYLE
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    app.layout_regions.section_tabs = Some(area);
}

#[cfg(test)]
#[path = "nav_render_tests.rs"]
mod nav_render_tests;
