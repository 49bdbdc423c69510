//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

pub const BROWSING_HINT: &str =
    " ?: Help | ←/→: Product | o/a/i: Section | Click a term for details | q: Quit";
pub const TOOLTIP_HINT: &str =
    " Esc/[x]: Close tooltip | Click another term to switch | ?: Help | q: Quit";

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = if app.tooltip.is_open() {
        TOOLTIP_HINT
    } else {
        BROWSING_HINT
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
