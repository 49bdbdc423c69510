//! Tooltip module
//!
//! Glossary tooltips: clicking a highlighted term opens a panel with the
//! term's title, definition, context and importance, anchored just below the
//! clicked text. At most one tooltip is open at a time.

mod tooltip_state;
pub mod tooltip_render;

pub use tooltip_state::{
    Anchor, Bounds, DEFAULT_ANCHOR_OFFSET, ScrollOffset, TooltipPresenter, TooltipState,
};
