//! Glossary module
//!
//! Holds the term dictionary and the annotator that splits display text into
//! plain runs and clickable term runs.

mod annotator;
mod dictionary;
mod term;

pub use annotator::{Segment, annotate, to_markup};
pub use dictionary::Glossary;
pub use term::{TermEntry, TermKey};
