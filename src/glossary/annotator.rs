//! Glossary term annotation
//!
//! Splits display text into plain runs and term runs. Keys are tried in
//! glossary order; a candidate that overlaps text already claimed by an
//! earlier key (or an earlier occurrence) is rejected, so the first match at
//! a position wins.

use super::dictionary::Glossary;
use super::term::TermKey;

/// A contiguous run of display text, optionally tagged with a term key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Term { text: String, key: TermKey },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Term { text, .. } => text,
        }
    }

    pub fn term_key(&self) -> Option<&TermKey> {
        match self {
            Segment::Plain(_) => None,
            Segment::Term { key, .. } => Some(key),
        }
    }
}

/// Byte range of `text` claimed by a term
struct Claim<'g> {
    start: usize,
    end: usize,
    key: &'g TermKey,
}

/// Annotate `text` with every whole-word, case-insensitive glossary match
///
/// Matched runs keep the casing found in `text` and carry the canonical key.
/// Non-empty text without matches yields a single plain segment; empty text
/// yields no segments. Concatenating the segment texts always gives back
/// `text`.
pub fn annotate(text: &str, glossary: &Glossary) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut claims: Vec<Claim> = Vec::new();

    for entry in glossary.iter() {
        let key: Vec<char> = entry.key.as_str().chars().collect();
        let mut from = 0;

        while let Some((start, end)) = find_whole_word(text, &key, from) {
            if claims
                .iter()
                .any(|claim| start < claim.end && claim.start < end)
            {
                from = next_char_boundary(text, start);
                continue;
            }

            claims.push(Claim {
                start,
                end,
                key: &entry.key,
            });
            from = end;
        }
    }

    claims.sort_by_key(|claim| claim.start);

    let mut segments = Vec::with_capacity(claims.len() * 2 + 1);
    let mut cursor = 0;

    for claim in claims {
        if claim.start > cursor {
            segments.push(Segment::Plain(text[cursor..claim.start].to_string()));
        }
        segments.push(Segment::Term {
            text: text[claim.start..claim.end].to_string(),
            key: claim.key.clone(),
        });
        cursor = claim.end;
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }

    segments
}

/// Render segments as `plain [term] plain`
pub fn to_markup(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Term { text, .. } => format!("[{}]", text),
        })
        .collect()
}

/// Find the next whole-word occurrence of `key` at or after byte offset `from`
fn find_whole_word(text: &str, key: &[char], from: usize) -> Option<(usize, usize)> {
    if key.is_empty() {
        return None;
    }

    let mut start = from;
    while start < text.len() {
        if let Some(end) = match_at(text, start, key) {
            if is_whole_word(text, start, end, key) {
                return Some((start, end));
            }
        }
        start = next_char_boundary(text, start);
    }

    None
}

/// Case-insensitive match of `key` starting at `start`; returns the end offset
fn match_at(text: &str, start: usize, key: &[char]) -> Option<usize> {
    let mut chars = text[start..].char_indices();

    for &expected in key {
        let (_, actual) = chars.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }

    Some(
        chars
            .next()
            .map_or(text.len(), |(offset, _)| start + offset),
    )
}

/// Boundaries only apply on the sides where the key itself has a word char
fn is_whole_word(text: &str, start: usize, end: usize, key: &[char]) -> bool {
    let first = key[0];
    let last = key[key.len() - 1];

    let left_ok = !is_word_char(first)
        || text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
    let right_ok = !is_word_char(last)
        || text[end..]
            .chars()
            .next()
            .is_none_or(|c| !is_word_char(c));

    left_ok && right_ok
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn next_char_boundary(text: &str, offset: usize) -> usize {
    offset + text[offset..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
#[path = "annotator_tests.rs"]
mod annotator_tests;
