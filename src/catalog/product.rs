use serde::Deserialize;

use super::node::ContentNode;

/// Section shown for the active product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SectionTab {
    #[default]
    Overview,
    Apis,
    Integration,
}

impl SectionTab {
    pub fn all() -> &'static [SectionTab] {
        &[SectionTab::Overview, SectionTab::Apis, SectionTab::Integration]
    }

    pub fn index(self) -> usize {
        match self {
            SectionTab::Overview => 0,
            SectionTab::Apis => 1,
            SectionTab::Integration => 2,
        }
    }

    /// Out of range falls back to Overview
    pub fn from_index(index: usize) -> Self {
        Self::all()
            .get(index)
            .copied()
            .unwrap_or(SectionTab::Overview)
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionTab::Overview => "Overview",
            SectionTab::Apis => "APIs",
            SectionTab::Integration => "Integration",
        }
    }

    /// Key that selects this tab
    pub fn shortcut(self) -> char {
        match self {
            SectionTab::Overview => 'o',
            SectionTab::Apis => 'a',
            SectionTab::Integration => 'i',
        }
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::all().len())
    }

    pub fn prev(self) -> Self {
        let count = Self::all().len();
        Self::from_index((self.index() + count - 1) % count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Overview {
    pub content: String,
    #[serde(default)]
    pub key_features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDoc {
    pub key: String,
    pub title: String,
    pub description: String,
    pub endpoint: String,
    pub example: String,
    #[serde(default)]
    pub best_practices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IntegrationStep {
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Integration {
    #[serde(default)]
    pub steps: Vec<IntegrationStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub key: String,
    pub title: String,
    pub description: String,
    pub overview: Overview,
    #[serde(default)]
    pub apis: Vec<ApiDoc>,
    #[serde(default)]
    pub integration: Integration,
}

impl Product {
    /// Product description followed by the requested section
    pub fn node(&self, tab: SectionTab) -> ContentNode {
        ContentNode::record([
            ("", ContentNode::text(&self.description)),
            (tab.name(), self.section_node(tab)),
        ])
    }

    pub fn section_node(&self, tab: SectionTab) -> ContentNode {
        match tab {
            SectionTab::Overview => ContentNode::record([
                ("", ContentNode::text(&self.overview.content)),
                ("Key Features", ContentNode::bullets(&self.overview.key_features)),
            ]),
            SectionTab::Apis => ContentNode::Sequence(
                self.apis
                    .iter()
                    .map(|api| ContentNode::record([(api.title.as_str(), api.node())]))
                    .collect(),
            ),
            SectionTab::Integration => ContentNode::record([(
                "Integration Steps",
                ContentNode::Sequence(
                    self.integration
                        .steps
                        .iter()
                        .map(|step| {
                            ContentNode::record([(
                                step.title.as_str(),
                                ContentNode::text(&step.details),
                            )])
                        })
                        .collect(),
                ),
            )]),
        }
    }
}

impl ApiDoc {
    fn node(&self) -> ContentNode {
        ContentNode::record([
            ("", ContentNode::text(&self.description)),
            ("Endpoint", ContentNode::verbatim(&self.endpoint)),
            ("Example Implementation", ContentNode::verbatim(&self.example)),
            ("Best Practices", ContentNode::bullets(&self.best_practices)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArchitecturePattern {
    pub key: String,
    pub title: String,
    pub description: String,
    pub diagram: String,
    pub implementation: String,
}

impl ArchitecturePattern {
    pub fn node(&self) -> ContentNode {
        ContentNode::record([(
            self.title.as_str(),
            ContentNode::record([
                ("", ContentNode::text(&self.description)),
                ("Architecture Diagram", ContentNode::verbatim(&self.diagram)),
                (
                    "Implementation Example",
                    ContentNode::verbatim(&self.implementation),
                ),
            ]),
        )])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProTip {
    pub title: String,
    pub body: String,
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod product_tests;
