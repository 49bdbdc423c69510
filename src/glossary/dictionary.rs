use std::collections::HashMap;

use super::term::TermEntry;
use crate::error::GuideError;

/// Immutable term dictionary
///
/// Entries keep the order they were authored in; that order is the order in
/// which the annotator tries keys, so it decides overlaps. Lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: Vec<TermEntry>,
    index: HashMap<String, usize>,
}

impl Glossary {
    /// Build a glossary, rejecting blank fields and case-insensitive duplicates
    pub fn new(entries: Vec<TermEntry>) -> Result<Self, GuideError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            for (field, value) in entry.fields() {
                if value.trim().is_empty() {
                    return Err(GuideError::MissingTermField {
                        key: entry.key.to_string(),
                        field,
                    });
                }
            }

            if index.insert(entry.key.folded(), position).is_some() {
                return Err(GuideError::DuplicateTerm(entry.key.to_string()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Look up an entry by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&TermEntry> {
        self.index
            .get(&key.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in authored order
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod dictionary_tests;
