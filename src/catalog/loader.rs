//! Catalog loading
//!
//! Parses the JSON catalog and validates it before anything is rendered.
//! Any problem fails the load; nothing is repaired silently.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::Catalog;
use super::product::{ArchitecturePattern, ProTip, Product};
use crate::error::GuideError;
use crate::glossary::{Glossary, TermEntry};

/// Catalog compiled into the binary
pub const BUILTIN_CATALOG: &str = include_str!("builtin_catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    title: String,
    intro: String,
    glossary: Vec<TermEntry>,
    products: Vec<Product>,
    #[serde(default)]
    architecture_patterns: Vec<ArchitecturePattern>,
    #[serde(default)]
    pro_tips: Vec<ProTip>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, GuideError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, GuideError> {
        log::debug!("Loading catalog from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| GuideError::InvalidCatalog(e.to_string()))?;

        if file.products.is_empty() {
            return Err(GuideError::InvalidCatalog(
                "catalog has no products".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for product in &file.products {
            if product.key.trim().is_empty() {
                return Err(GuideError::InvalidCatalog(format!(
                    "product '{}' has an empty key",
                    product.title
                )));
            }
            if !seen.insert(product.key.to_ascii_lowercase()) {
                return Err(GuideError::InvalidCatalog(format!(
                    "duplicate product key '{}'",
                    product.key
                )));
            }
        }

        let glossary = Glossary::new(file.glossary)?;

        log::debug!(
            "Catalog loaded: {} products, {} glossary terms",
            file.products.len(),
            glossary.len()
        );

        Ok(Catalog {
            title: file.title,
            intro: file.intro,
            glossary,
            products: file.products,
            architecture_patterns: file.architecture_patterns,
            pro_tips: file.pro_tips,
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
