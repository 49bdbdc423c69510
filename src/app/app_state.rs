use crate::catalog::{Catalog, Product, SectionTab};
use crate::config::Config;
use crate::error::GuideError;
use crate::guide::{RenderedDocument, layout_document};
use crate::help::HelpPopupState;
use crate::layout::LayoutRegions;
use crate::scroll::ScrollState;
use crate::tooltip::{Bounds, ScrollOffset, TooltipPresenter, TooltipState};

/// Application state
pub struct App<'g> {
    pub catalog: &'g Catalog,
    pub presenter: TooltipPresenter,
    pub tooltip: TooltipState,
    pub tooltip_width: u16,
    pub active_product: usize,
    pub active_tab: SectionTab,
    pub scroll: ScrollState,
    pub help: HelpPopupState,
    pub layout_regions: LayoutRegions,
    document: RenderedDocument,
    /// (product, tab, width) the cached document was laid out for
    document_key: Option<(usize, SectionTab, u16)>,
    pub(super) should_quit: bool,
}

impl<'g> App<'g> {
    /// Create the app showing the configured product and tab
    ///
    /// An unknown product in the config falls back to the first product.
    pub fn new(catalog: &'g Catalog, config: &Config) -> Self {
        let active_product = match config.guide.product.as_deref() {
            Some(key) => catalog.product_index(key).unwrap_or_else(|| {
                log::warn!("Unknown product '{}' in config, showing the first one", key);
                0
            }),
            None => 0,
        };

        Self {
            catalog,
            presenter: TooltipPresenter::new(config.tooltip.offset),
            tooltip: TooltipState::Closed,
            tooltip_width: config.tooltip.width,
            active_product,
            active_tab: config.guide.tab,
            scroll: ScrollState::new(),
            help: HelpPopupState::new(),
            layout_regions: LayoutRegions::new(),
            document: RenderedDocument::default(),
            document_key: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn product(&self) -> Option<&'g Product> {
        self.catalog.products.get(self.active_product)
    }

    pub fn select_product(&mut self, index: usize) {
        if index >= self.catalog.products.len() || index == self.active_product {
            return;
        }
        log::debug!("Selecting product {}", self.catalog.products[index].key);
        self.active_product = index;
        self.reset_view();
    }

    pub fn select_product_key(&mut self, key: &str) -> Result<(), GuideError> {
        let index = self
            .catalog
            .product_index(key)
            .ok_or_else(|| GuideError::UnknownProduct(key.to_string()))?;
        self.select_product(index);
        Ok(())
    }

    pub fn next_product(&mut self) {
        let count = self.catalog.products.len();
        if count > 0 {
            self.select_product((self.active_product + 1) % count);
        }
    }

    pub fn prev_product(&mut self) {
        let count = self.catalog.products.len();
        if count > 0 {
            self.select_product((self.active_product + count - 1) % count);
        }
    }

    pub fn select_tab(&mut self, tab: SectionTab) {
        if tab == self.active_tab {
            return;
        }
        log::debug!("Selecting section {}", tab.name());
        self.active_tab = tab;
        self.reset_view();
    }

    pub fn close_tooltip(&mut self) {
        if self.tooltip.is_open() {
            log::debug!("Closing tooltip");
        }
        self.tooltip = self.presenter.close();
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset {
            x: 0,
            y: self.scroll.offset,
        }
    }

    /// Lay out the active page for `width` columns unless already cached
    pub fn ensure_document(&mut self, width: u16) -> &RenderedDocument {
        let key = (self.active_product, self.active_tab, width);
        if self.document_key != Some(key) {
            // Anchors point into the old layout
            if let Some((_, _, old_width)) = self.document_key
                && old_width != width
            {
                self.close_tooltip();
            }
            let annotated = self
                .catalog
                .document(self.active_product, self.active_tab)
                .annotate(&self.catalog.glossary);
            self.document = layout_document(&annotated, width);
            self.document_key = Some(key);
            log::debug!(
                "Laid out {} lines with {} term hits at width {}",
                self.document.line_count(),
                self.document.hits.len(),
                width
            );
        }
        &self.document
    }

    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    /// Open the tooltip for the term drawn at screen cell (`column`, `row`)
    ///
    /// Returns false when no term is there. Relies on the content area
    /// recorded by the last render.
    pub fn open_term_at(&mut self, column: u16, row: u16) -> bool {
        let Some(content) = self.layout_regions.content else {
            return false;
        };
        if column < content.x
            || column >= content.right()
            || row < content.y
            || row >= content.bottom()
        {
            return false;
        }

        let doc_row = (row - content.y) as usize + self.scroll.offset as usize;
        let Some(hit) = self.document.hit_at(doc_row, column - content.x) else {
            return false;
        };

        let left = content.x.saturating_add(hit.col);
        let trigger = Bounds {
            left,
            top: row,
            right: left.saturating_add(hit.width),
            bottom: row.saturating_add(1),
        };

        self.tooltip = self.presenter.open(
            &self.tooltip,
            &self.catalog.glossary,
            hit.key.as_str(),
            trigger,
            self.scroll_offset(),
        );
        true
    }

    /// Scroll back to the top and drop the tooltip
    fn reset_view(&mut self) {
        self.scroll.reset();
        self.close_tooltip();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
