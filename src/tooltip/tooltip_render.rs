//! Tooltip rendering
//!
//! Draws the open tooltip below the clicked term, translated by the current
//! scroll and kept below the navigation bars. A term scrolled out of the
//! content pane takes its tooltip with it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::app::App;
use crate::glossary::TermEntry;
use crate::guide::wrap_styled;
use crate::tooltip::{Anchor, ScrollOffset};
use crate::widgets::popup;

pub const MIN_TOOLTIP_WIDTH: u16 = 20;
pub const CLOSE_LABEL: &str = "[x]";
/// Borders (2) plus horizontal padding (2)
const TOOLTIP_CHROME_WIDTH: u16 = 4;

const BODY_STYLE: Style = Style::new().fg(Color::White);
const DETAIL_STYLE: Style = Style::new().fg(Color::Gray);

/// Body of the tooltip wrapped to `width` columns
pub fn tooltip_lines(entry: &TermEntry, width: usize) -> Vec<Line<'static>> {
    let mut lines = wrap_styled(&entry.definition, width, BODY_STYLE);

    lines.push(Line::default());
    lines.push(section_heading("Context", Color::Yellow));
    lines.extend(wrap_styled(&entry.context, width, DETAIL_STYLE));

    lines.push(Line::default());
    lines.push(section_heading("Why This Matters", Color::Green));
    lines.extend(wrap_styled(&entry.importance, width, DETAIL_STYLE));

    lines
}

fn section_heading(text: &'static str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Cells of the `[x]` label in the top border of `tooltip`
pub fn close_button_area(tooltip: Rect) -> Rect {
    Rect {
        x: tooltip.right().saturating_sub(CLOSE_LABEL.len() as u16 + 1),
        y: tooltip.y,
        width: CLOSE_LABEL.len() as u16,
        height: 1,
    }
}

/// Screen row of the term an anchor was opened for, if still inside `content`
pub fn term_row_on_screen(
    anchor: Anchor,
    offset: u16,
    scroll: ScrollOffset,
    content: Rect,
) -> Option<u16> {
    let row = anchor
        .y
        .checked_sub(offset.saturating_add(1))?
        .checked_sub(scroll.y)?;
    (row >= content.y && row < content.bottom()).then_some(row)
}

pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let catalog = app.catalog;
    let Some(entry) = app.tooltip.active_entry(&catalog.glossary) else {
        return;
    };
    let Some(anchor) = app.tooltip.anchor() else {
        return;
    };

    let Some(content) = app.layout_regions.content else {
        return;
    };
    let scroll = app.scroll_offset();
    if term_row_on_screen(anchor, app.presenter.offset(), scroll, content).is_none() {
        return;
    }

    let frame_area = frame.area();
    if frame_area.width < MIN_TOOLTIP_WIDTH || frame_area.height < 6 {
        return;
    }
    // Everything from the top of the content pane down
    let bounds = Rect {
        x: frame_area.x,
        y: content.y,
        width: frame_area.width,
        height: frame_area.bottom().saturating_sub(content.y),
    };

    let width = app
        .tooltip_width
        .clamp(MIN_TOOLTIP_WIDTH, frame_area.width);
    let lines = tooltip_lines(entry, width.saturating_sub(TOOLTIP_CHROME_WIDTH) as usize);
    let height = (lines.len() as u16).saturating_add(2);

    let (x, y) = anchor.to_screen(scroll);
    let area = popup::popup_at(bounds, x, y, width, height);

    popup::clear_area(frame, area);

    let block = Block::bordered()
        .title(Line::from(Span::styled(
            format!(" {} ", entry.title),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )))
        .title_top(
            Line::from(Span::styled(CLOSE_LABEL, Style::default().fg(Color::Red))).right_aligned(),
        )
        .border_style(Style::default().fg(Color::LightBlue))
        .style(Style::default().bg(Color::Black))
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(lines).block(block), area);

    app.layout_regions.tooltip = Some(area);
    app.layout_regions.tooltip_close = Some(close_button_area(area));
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
