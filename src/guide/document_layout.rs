use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap::LineFlow;
use crate::catalog::AnnotatedNode;
use crate::glossary::{Segment, TermKey};

const TEXT_STYLE: Style = Style::new().fg(Color::Gray);
const TERM_STYLE: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::UNDERLINED);
const BULLET_STYLE: Style = Style::new().fg(Color::Green);
const CODE_STYLE: Style = Style::new().fg(Color::DarkGray);
const CODE_INDENT: &str = "  ";

/// Clickable region of one term fragment, in document rows and pane columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermHit {
    pub row: usize,
    pub col: u16,
    pub width: u16,
    pub key: TermKey,
}

impl TermHit {
    pub fn contains(&self, row: usize, col: u16) -> bool {
        self.row == row && col >= self.col && col < self.col.saturating_add(self.width)
    }
}

/// Document laid out for one pane width
#[derive(Debug, Clone, Default)]
pub struct RenderedDocument {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<TermHit>,
}

impl RenderedDocument {
    pub fn hit_at(&self, row: usize, col: u16) -> Option<&TermHit> {
        self.hits.iter().find(|hit| hit.contains(row, col))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Lay out `node` for a pane `width` columns wide
pub fn layout_document(node: &AnnotatedNode, width: u16) -> RenderedDocument {
    let mut builder = DocumentBuilder {
        width: width as usize,
        doc: RenderedDocument::default(),
    };
    builder.node(node, 0);
    builder.doc
}

struct DocumentBuilder {
    width: usize,
    doc: RenderedDocument,
}

impl DocumentBuilder {
    fn node(&mut self, node: &AnnotatedNode, depth: usize) {
        match node {
            AnnotatedNode::Text(segments) => {
                self.paragraph(segments, Span::raw(""), 0);
                self.blank();
            }
            AnnotatedNode::Verbatim(text) => {
                self.verbatim(text);
                self.blank();
            }
            AnnotatedNode::Sequence(items) if is_bullet_list(items) => {
                for item in items {
                    if let AnnotatedNode::Text(segments) = item {
                        self.paragraph(segments, Span::styled("• ", BULLET_STYLE), 2);
                    }
                }
                self.blank();
            }
            AnnotatedNode::Sequence(items) => {
                for item in items {
                    self.node(item, depth);
                }
            }
            AnnotatedNode::Record(fields) => {
                for (label, child) in fields {
                    if !label.is_empty() {
                        self.heading(label, depth);
                    }
                    self.node(child, depth + 1);
                }
            }
        }
    }

    fn paragraph(&mut self, segments: &[Segment], prefix: Span<'static>, indent: usize) {
        let first_row = self.doc.lines.len();
        let mut flow = LineFlow::new(self.width, prefix, indent);

        let runs: Vec<(&str, Style)> = segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(text) => (text.as_str(), TEXT_STYLE),
                Segment::Term { text, .. } => (text.as_str(), TERM_STYLE),
            })
            .collect();

        for (segment, placements) in segments.iter().zip(flow.push_runs(&runs)) {
            let Segment::Term { key, .. } = segment else {
                continue;
            };
            for placement in placements {
                self.doc.hits.push(TermHit {
                    row: first_row + placement.line,
                    col: placement.col.min(u16::MAX as usize) as u16,
                    width: placement.width.min(u16::MAX as usize) as u16,
                    key: key.clone(),
                });
            }
        }

        self.doc.lines.extend(flow.finish());
    }

    fn heading(&mut self, label: &str, depth: usize) {
        if depth == 0 {
            self.blank();
        }
        self.doc
            .lines
            .push(Line::from(Span::styled(label.to_string(), heading_style(depth))));
    }

    fn verbatim(&mut self, text: &str) {
        for line in text.lines() {
            self.doc.lines.push(Line::from(Span::styled(
                format!("{}{}", CODE_INDENT, line),
                CODE_STYLE,
            )));
        }
    }

    /// Separator line; never doubled and never at the top
    fn blank(&mut self) {
        let last_is_blank = self
            .doc
            .lines
            .last()
            .is_none_or(|line| line.width() == 0);
        if !last_is_blank {
            self.doc.lines.push(Line::default());
        }
    }
}

fn is_bullet_list(items: &[AnnotatedNode]) -> bool {
    !items.is_empty() && items.iter().all(|item| matches!(item, AnnotatedNode::Text(_)))
}

fn heading_style(depth: usize) -> Style {
    let color = match depth {
        0 => Color::Magenta,
        1 => Color::Cyan,
        2 => Color::Yellow,
        _ => Color::White,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
#[path = "document_layout_tests.rs"]
mod document_layout_tests;
