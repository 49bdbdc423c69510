//! Guide module
//!
//! Lays the annotated content tree out as terminal lines and renders the
//! navigation bars and the scrollable content pane. Layout records where each
//! term fragment lands so clicks can be mapped back to glossary terms.

pub mod content_render;
mod document_layout;
pub mod nav_render;
mod wrap;

pub use document_layout::{RenderedDocument, TermHit, layout_document};
pub use wrap::{LineFlow, Placement, wrap_styled};
