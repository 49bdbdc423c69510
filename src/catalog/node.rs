//! Content tree
//!
//! Documentation is described as a small closed set of node variants.
//! Annotation walks the tree with a [`NodeVisitor`] and replaces every
//! annotatable leaf with its segments.

use crate::glossary::{Glossary, Segment, TermKey, annotate};

/// One piece of documentation content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Prose that is scanned for glossary terms
    Text(String),
    /// Endpoints, code and diagrams, shown exactly as authored
    Verbatim(String),
    Sequence(Vec<ContentNode>),
    /// Labeled children; an empty label renders without a heading
    Record(Vec<(String, ContentNode)>),
}

/// Content tree after annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotatedNode {
    Text(Vec<Segment>),
    Verbatim(String),
    Sequence(Vec<AnnotatedNode>),
    Record(Vec<(String, AnnotatedNode)>),
}

pub trait NodeVisitor {
    type Output;

    fn visit_text(&mut self, text: &str) -> Self::Output;
    fn visit_verbatim(&mut self, text: &str) -> Self::Output;
    fn visit_sequence(&mut self, items: &[ContentNode]) -> Self::Output;
    fn visit_record(&mut self, fields: &[(String, ContentNode)]) -> Self::Output;
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text(text.into())
    }

    pub fn verbatim(text: impl Into<String>) -> Self {
        ContentNode::Verbatim(text.into())
    }

    /// Record with one field per `(label, node)` pair
    pub fn record<L: Into<String>>(fields: impl IntoIterator<Item = (L, ContentNode)>) -> Self {
        ContentNode::Record(
            fields
                .into_iter()
                .map(|(label, node)| (label.into(), node))
                .collect(),
        )
    }

    /// Sequence of prose items (rendered as a bullet list)
    pub fn bullets<S: AsRef<str>>(items: &[S]) -> Self {
        ContentNode::Sequence(
            items
                .iter()
                .map(|item| ContentNode::text(item.as_ref()))
                .collect(),
        )
    }

    pub fn accept<V: NodeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            ContentNode::Text(text) => visitor.visit_text(text),
            ContentNode::Verbatim(text) => visitor.visit_verbatim(text),
            ContentNode::Sequence(items) => visitor.visit_sequence(items),
            ContentNode::Record(fields) => visitor.visit_record(fields),
        }
    }

    /// Annotate every prose leaf against `glossary`
    pub fn annotate(&self, glossary: &Glossary) -> AnnotatedNode {
        self.accept(&mut Annotator { glossary })
    }
}

struct Annotator<'g> {
    glossary: &'g Glossary,
}

impl NodeVisitor for Annotator<'_> {
    type Output = AnnotatedNode;

    fn visit_text(&mut self, text: &str) -> AnnotatedNode {
        AnnotatedNode::Text(annotate(text, self.glossary))
    }

    fn visit_verbatim(&mut self, text: &str) -> AnnotatedNode {
        AnnotatedNode::Verbatim(text.to_string())
    }

    fn visit_sequence(&mut self, items: &[ContentNode]) -> AnnotatedNode {
        AnnotatedNode::Sequence(items.iter().map(|item| item.accept(self)).collect())
    }

    fn visit_record(&mut self, fields: &[(String, ContentNode)]) -> AnnotatedNode {
        AnnotatedNode::Record(
            fields
                .iter()
                .map(|(label, node)| (label.clone(), node.accept(self)))
                .collect(),
        )
    }
}

impl AnnotatedNode {
    /// Term keys referenced anywhere in the tree, in document order
    pub fn term_keys(&self) -> Vec<&TermKey> {
        let mut keys = Vec::new();
        self.collect_term_keys(&mut keys);
        keys
    }

    fn collect_term_keys<'a>(&'a self, keys: &mut Vec<&'a TermKey>) {
        match self {
            AnnotatedNode::Text(segments) => {
                keys.extend(segments.iter().filter_map(Segment::term_key));
            }
            AnnotatedNode::Verbatim(_) => {}
            AnnotatedNode::Sequence(items) => {
                for item in items {
                    item.collect_term_keys(keys);
                }
            }
            AnnotatedNode::Record(fields) => {
                for (_, node) in fields {
                    node.collect_term_keys(keys);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
