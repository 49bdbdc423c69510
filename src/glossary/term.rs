use std::fmt;

use serde::Deserialize;

/// Canonical key of a glossary term, as authored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TermKey(String);

impl TermKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded form used for lookups
    pub(crate) fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TermKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Explanatory metadata for one glossary term
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermEntry {
    pub key: TermKey,
    pub title: String,
    pub definition: String,
    pub context: String,
    pub importance: String,
}

impl TermEntry {
    /// Named text fields, in display order, for validation
    pub(crate) fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("key", self.key.as_str()),
            ("title", &self.title),
            ("definition", &self.definition),
            ("context", &self.context),
            ("importance", &self.importance),
        ]
    }
}
