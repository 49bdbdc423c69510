//! Catalog module
//!
//! The static guide content: glossary, products, architecture patterns and
//! pro tips. Loaded once at startup and shared by reference afterwards.

mod loader;
mod node;
mod product;

pub use loader::BUILTIN_CATALOG;
pub use node::{AnnotatedNode, ContentNode, NodeVisitor};
pub use product::{
    ApiDoc, ArchitecturePattern, Integration, IntegrationStep, Overview, ProTip, Product,
    SectionTab,
};

use crate::glossary::Glossary;

/// Immutable guide content
#[derive(Debug, Clone)]
pub struct Catalog {
    pub title: String,
    pub intro: String,
    pub glossary: Glossary,
    pub products: Vec<Product>,
    pub architecture_patterns: Vec<ArchitecturePattern>,
    pub pro_tips: Vec<ProTip>,
}

impl Catalog {
    /// Index of the product with `key`, ignoring case
    pub fn product_index(&self, key: &str) -> Option<usize> {
        self.products
            .iter()
            .position(|product| product.key.eq_ignore_ascii_case(key))
    }

    /// The whole scrollable page for one product and section
    ///
    /// Intro first, then the product, then the architecture patterns and pro
    /// tips that follow every product.
    pub fn document(&self, product_index: usize, tab: SectionTab) -> ContentNode {
        let mut fields = vec![(String::new(), ContentNode::text(&self.intro))];

        if let Some(product) = self.products.get(product_index) {
            fields.push((product.title.clone(), product.node(tab)));
        }

        if !self.architecture_patterns.is_empty() {
            fields.push((
                "Architecture Patterns".to_string(),
                ContentNode::Sequence(
                    self.architecture_patterns
                        .iter()
                        .map(ArchitecturePattern::node)
                        .collect(),
                ),
            ));
        }

        if !self.pro_tips.is_empty() {
            fields.push((
                "Solution Architect Pro Tips".to_string(),
                ContentNode::Sequence(
                    self.pro_tips
                        .iter()
                        .map(|tip| {
                            ContentNode::record([(tip.title.as_str(), ContentNode::text(&tip.body))])
                        })
                        .collect(),
                ),
            ));
        }

        ContentNode::Record(fields)
    }
}
