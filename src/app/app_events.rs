use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::catalog::SectionTab;
use crate::layout::region_at;

const WHEEL_LINES: u16 = 3;

impl App<'_> {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only key presses, to avoid duplicates on terminals reporting releases
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.help.visible {
            self.handle_help_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') | KeyCode::F(1) => self.help.toggle(),
            KeyCode::Esc => self.close_tooltip(),

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.next_product(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.prev_product(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_product(index);
            }

            KeyCode::Char(']') => self.select_tab(self.active_tab.next()),
            KeyCode::Char('[') => self.select_tab(self.active_tab.prev()),
            KeyCode::Char(c) if !ctrl && section_for_shortcut(c).is_some() => {
                if let Some(tab) = section_for_shortcut(c) {
                    self.select_tab(tab);
                }
            }

            KeyCode::Char('d') if ctrl => self.scroll.page_down(),
            KeyCode::Char('u') if ctrl => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_up(1),
            KeyCode::Char('g') | KeyCode::Home => self.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll.jump_to_bottom(),
            _ => {}
        }
    }

    /// Keys while the help popup is open; everything else is swallowed
    fn handle_help_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.help.visible = false;
                self.help.scroll.reset();
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
            KeyCode::Char('d') if ctrl => self.help.scroll.page_down(),
            KeyCode::Char('u') if ctrl => self.help.scroll.page_up(),
            KeyCode::PageDown => self.help.scroll.page_down(),
            KeyCode::PageUp => self.help.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.help.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.help.scroll.jump_to_bottom(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse);
            }
            MouseEventKind::ScrollDown => {
                if self.help.visible {
                    self.help.scroll.scroll_down(WHEEL_LINES);
                } else {
                    self.scroll.scroll_down(WHEEL_LINES);
                }
            }
            MouseEventKind::ScrollUp => {
                if self.help.visible {
                    self.help.scroll.scroll_up(WHEEL_LINES);
                } else {
                    self.scroll.scroll_up(WHEEL_LINES);
                }
            }
            _ => {}
        }
    }
}

fn section_for_shortcut(c: char) -> Option<SectionTab> {
    SectionTab::all()
        .iter()
        .copied()
        .find(|tab| tab.shortcut() == c)
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
