use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;

impl App<'_> {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [product_area, tabs_area, content_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        crate::guide::nav_render::render_product_bar(self, frame, product_area);
        crate::guide::nav_render::render_section_tabs(self, frame, tabs_area);
        crate::guide::content_render::render_content(self, frame, content_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.tooltip.is_open() {
            crate::tooltip::tooltip_render::render_popup(self, frame);
        }

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
