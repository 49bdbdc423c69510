//! Word wrapping with placement tracking
//!
//! Text is broken into chunks of one word plus its trailing whitespace and
//! flowed into lines no wider than the target width (display width, not
//! bytes). Words wider than a whole line are split by character.
//!
//! A paragraph is pushed as a list of styled runs. A word may span several
//! runs ("Webhooks" then "."), and wraps as one unit.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Where a pushed run of text ended up: line index, start column, width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub line: usize,
    pub col: usize,
    pub width: usize,
}

/// Accumulates styled text into wrapped lines
pub struct LineFlow {
    width: usize,
    indent: usize,
    lines: Vec<Vec<Span<'static>>>,
    col: usize,
}

impl LineFlow {
    /// Start a flow whose first line begins with `prefix`; continuation
    /// lines are indented by `indent` columns
    pub fn new(width: usize, prefix: Span<'static>, indent: usize) -> Self {
        let col = prefix.content.width();
        let first = if prefix.content.is_empty() {
            Vec::new()
        } else {
            vec![prefix]
        };

        Self {
            width: width.max(1),
            indent,
            lines: vec![first],
            col,
        }
    }

    /// Add `text` in `style`, returning the placement of its visible words
    /// merged per line
    pub fn push(&mut self, text: &str, style: Style) -> Vec<Placement> {
        self.push_runs(&[(text, style)]).pop().unwrap_or_default()
    }

    /// Add consecutive styled runs, returning the placements of each run in
    /// the same order
    pub fn push_runs(&mut self, runs: &[(&str, Style)]) -> Vec<Vec<Placement>> {
        let mut placements = vec![Vec::new(); runs.len()];

        for token in tokens(runs) {
            match token {
                Token::Break => self.new_line(),
                Token::Chunk(pieces) => self.push_chunk(&pieces, runs, &mut placements),
            }
        }

        placements
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn finish(self) -> Vec<Line<'static>> {
        self.lines.into_iter().map(Line::from).collect()
    }

    fn push_chunk(
        &mut self,
        pieces: &[Piece],
        runs: &[(&str, Style)],
        placements: &mut [Vec<Placement>],
    ) {
        let word_width: usize = pieces.iter().map(|piece| piece.word().width()).sum();

        if word_width == 0 {
            // Whitespace at the start of a line is dropped
            if self.col > self.indent {
                for piece in pieces {
                    self.append(piece.text, runs[piece.run].1);
                }
            }
            return;
        }

        if self.col + word_width > self.width && self.col > self.indent {
            self.new_line();
        }

        let available = self.width.saturating_sub(self.indent).max(1);
        for piece in pieces {
            let style = runs[piece.run].1;
            let word = piece.word();
            if word_width > available {
                self.push_long_word(word, style, &mut placements[piece.run]);
                self.append(&piece.text[word.len()..], style);
            } else {
                if !word.is_empty() {
                    record(&mut placements[piece.run], self.current_line(), self.col, word.width());
                }
                self.append(piece.text, style);
            }
        }
    }

    fn push_long_word(&mut self, word: &str, style: Style, placements: &mut Vec<Placement>) {
        let mut piece = String::new();
        let mut piece_start = self.col;
        let mut piece_width = 0;

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if piece_start + piece_width + char_width > self.width
                && piece_start + piece_width > self.indent
            {
                if !piece.is_empty() {
                    record(placements, self.current_line(), piece_start, piece_width);
                    self.append(&piece, style);
                }
                self.new_line();
                piece.clear();
                piece_start = self.col;
                piece_width = 0;
            }
            piece.push(c);
            piece_width += char_width;
        }

        if !piece.is_empty() {
            record(placements, self.current_line(), piece_start, piece_width);
            self.append(&piece, style);
        }
    }

    fn append(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.col += text.width();
        if let Some(line) = self.lines.last_mut() {
            line.push(Span::styled(text.to_string(), style));
        }
    }

    fn new_line(&mut self) {
        let mut line = Vec::new();
        if self.indent > 0 {
            line.push(Span::raw(" ".repeat(self.indent)));
        }
        self.lines.push(line);
        self.col = self.indent;
    }

    fn current_line(&self) -> usize {
        self.lines.len() - 1
    }
}

/// Record a placement, extending the previous one when on the same line
fn record(placements: &mut Vec<Placement>, line: usize, col: usize, width: usize) {
    if let Some(last) = placements.last_mut() {
        if last.line == line {
            last.width = col + width - last.col;
            return;
        }
    }
    placements.push(Placement { line, col, width });
}

/// Part of a chunk that falls inside one run
struct Piece<'a> {
    run: usize,
    text: &'a str,
}

impl<'a> Piece<'a> {
    /// Visible part; only the last word piece of a chunk carries whitespace
    fn word(&self) -> &'a str {
        self.text.trim_end()
    }
}

enum Token<'a> {
    Chunk(Vec<Piece<'a>>),
    Break,
}

/// Split runs into chunks of leading whitespace, or a word plus trailing
/// whitespace, and line breaks. A chunk only ends where whitespace is
/// followed by a visible character, so run boundaries inside a word do not
/// split it.
fn tokens<'a>(runs: &[(&'a str, Style)]) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut current: Vec<Piece<'a>> = Vec::new();
    let mut prev_whitespace = false;

    for (run, (text, _)) in runs.iter().enumerate() {
        for (index, part) in text.split('\n').enumerate() {
            if index > 0 {
                if !current.is_empty() {
                    tokens.push(Token::Chunk(std::mem::take(&mut current)));
                }
                tokens.push(Token::Break);
                prev_whitespace = false;
            }

            let mut start = 0;
            for (offset, c) in part.char_indices() {
                let whitespace = c.is_whitespace();
                if !whitespace && prev_whitespace {
                    if offset > start {
                        current.push(Piece {
                            run,
                            text: &part[start..offset],
                        });
                    }
                    if !current.is_empty() {
                        tokens.push(Token::Chunk(std::mem::take(&mut current)));
                    }
                    start = offset;
                }
                prev_whitespace = whitespace;
            }
            if start < part.len() {
                current.push(Piece {
                    run,
                    text: &part[start..],
                });
            }
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Chunk(current));
    }

    tokens
}

/// Wrap plain text in one style
pub fn wrap_styled(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let mut flow = LineFlow::new(width, Span::raw(""), 0);
    flow.push(text, style);
    flow.finish()
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod wrap_tests;
