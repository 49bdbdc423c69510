use ratatui::layout::Rect;

use crate::glossary::{Glossary, TermEntry, TermKey};

/// Rows between the bottom of the clicked term and the tooltip
pub const DEFAULT_ANCHOR_OFFSET: u16 = 1;

/// Screen-cell bounding box of a clicked term fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.x,
            top: rect.y,
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

/// Scroll position of the content at the moment of the click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

/// Tooltip position in document coordinates (screen position plus scroll)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

impl Anchor {
    /// Where the anchor lands on screen once the content is scrolled by `scroll`
    pub fn to_screen(self, scroll: ScrollOffset) -> (u16, u16) {
        (self.x.saturating_sub(scroll.x), self.y.saturating_sub(scroll.y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Closed,
    Open { term: TermKey, anchor: Anchor },
}

impl TooltipState {
    pub fn is_open(&self) -> bool {
        matches!(self, TooltipState::Open { .. })
    }

    pub fn active_term(&self) -> Option<&TermKey> {
        match self {
            TooltipState::Closed => None,
            TooltipState::Open { term, .. } => Some(term),
        }
    }

    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            TooltipState::Closed => None,
            TooltipState::Open { anchor, .. } => Some(*anchor),
        }
    }

    /// Entry for the open term, looked up fresh on every call
    pub fn active_entry<'g>(&self, glossary: &'g Glossary) -> Option<&'g TermEntry> {
        self.active_term()
            .and_then(|term| glossary.get(term.as_str()))
    }
}

/// Opens and closes glossary tooltips
///
/// Transitions: `Closed -> Open(t)` and `Open(t1) -> Open(t2)` on a term
/// click, `Open(_) -> Closed` on dismiss. Requests for keys missing from the
/// glossary leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipPresenter {
    offset: u16,
}

impl TooltipPresenter {
    pub fn new(offset: u16) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn anchor_for(&self, trigger: Bounds, scroll: ScrollOffset) -> Anchor {
        Anchor {
            x: trigger.left.saturating_add(scroll.x),
            y: trigger
                .bottom
                .saturating_add(scroll.y)
                .saturating_add(self.offset),
        }
    }

    pub fn open(
        &self,
        state: &TooltipState,
        glossary: &Glossary,
        key: &str,
        trigger: Bounds,
        scroll: ScrollOffset,
    ) -> TooltipState {
        let Some(entry) = glossary.get(key) else {
            log::warn!("Ignoring tooltip request for unknown term '{}'", key);
            return state.clone();
        };

        let anchor = self.anchor_for(trigger, scroll);
        log::debug!(
            "Opening tooltip for '{}' at ({}, {})",
            entry.key,
            anchor.x,
            anchor.y
        );

        TooltipState::Open {
            term: entry.key.clone(),
            anchor,
        }
    }

    pub fn close(&self) -> TooltipState {
        TooltipState::Closed
    }
}

impl Default for TooltipPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR_OFFSET)
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
