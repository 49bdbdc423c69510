//! Content pane rendering
//!
//! Draws the visible slice of the laid-out document and highlights every
//! fragment of the term whose tooltip is open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::app::App;

const ACTIVE_TERM_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

pub fn render_content(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = app
        .product()
        .map(|product| format!(" {} · {} ", product.title, app.active_tab.name()))
        .unwrap_or_else(|| format!(" {} ", app.catalog.title));
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    let line_count = app.ensure_document(inner.width).line_count() as u32;
    app.scroll.update_bounds(line_count, inner.height);

    let offset = app.scroll.offset as usize;
    let visible_rows = offset..offset + inner.height as usize;
    let document = app.document();

    let visible: Vec<Line> = document
        .lines
        .iter()
        .skip(offset)
        .take(inner.height as usize)
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible).block(block), area);

    if let Some(term) = app.tooltip.active_term() {
        for hit in document
            .hits
            .iter()
            .filter(|hit| &hit.key == term && visible_rows.contains(&hit.row))
        {
            let highlight = Rect::new(
                inner.x.saturating_add(hit.col),
                inner.y + (hit.row - offset) as u16,
                hit.width,
                1,
            )
            .intersection(inner);
            frame.buffer_mut().set_style(highlight, ACTIVE_TERM_STYLE);
        }
    }

    app.layout_regions.content = Some(inner);
}

#[cfg(test)]
#[path = "content_render_tests.rs"]
mod content_render_tests;
