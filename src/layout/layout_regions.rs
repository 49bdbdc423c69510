use ratatui::layout::{Position, Rect};

use crate::catalog::SectionTab;

/// Clickable UI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ProductBar,
    SectionTabs,
    Content,
    Tooltip,
    TooltipClose,
    HelpPopup,
}

/// Screen areas from the most recent render
///
/// `None` means the component was not drawn.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub product_bar: Option<Rect>,
    pub section_tabs: Option<Rect>,
    pub content: Option<Rect>,
    pub tooltip: Option<Rect>,
    pub tooltip_close: Option<Rect>,
    pub help_popup: Option<Rect>,
    /// Label area of each product, with its index
    pub product_labels: Vec<(Rect, usize)>,
    /// Label area of each section tab
    pub tab_labels: Vec<(Rect, SectionTab)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; called at the start of each render
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn product_at(&self, x: u16, y: u16) -> Option<usize> {
        self.product_labels
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, index)| *index)
    }

    pub fn tab_at(&self, x: u16, y: u16) -> Option<SectionTab> {
        self.tab_labels
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, tab)| *tab)
    }
}
