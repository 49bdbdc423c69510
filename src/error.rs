use thiserror::Error;

/// Custom error types for payguide
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Glossary entry '{key}' has an empty {field}")]
    MissingTermField { key: String, field: &'static str },

    #[error("Duplicate glossary term: '{0}'")]
    DuplicateTerm(String),

    #[error("Unknown product '{0}'")]
    UnknownProduct(String),

    #[error("Unknown term '{0}'")]
    UnknownTerm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
