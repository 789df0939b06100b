//! Pattern rules for syntax highlighting
//!
//! This module wraps compiled regexes with a name for diagnostics and the
//! match walks the highlighters need: plain, per capture group, and
//! guarded (a neighbour check standing in for look-around, which the
//! `regex` crate does not support).

use std::ops::Range;

use regex::{Captures, Regex, RegexBuilder};

use crate::error::{HighlightError, Result};

/// A named, compiled pattern
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for diagnostics
    pub name: &'static str,
    /// Compiled regex pattern
    pub pattern: Regex,
}

impl PatternRule {
    /// Compile a pattern; `^`/`$` match at text boundaries only
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Self::build(name, pattern, false)
    }

    /// Compile a pattern where `^`/`$` match at line boundaries (LF or CRLF)
    pub fn multiline(name: &'static str, pattern: &str) -> Result<Self> {
        Self::build(name, pattern, true)
    }

    /// Compile an alternation of literal words bounded by `\b`
    ///
    /// Returns `None` for an empty word list.
    pub fn words<'a, I>(name: &'static str, words: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let alternation = words
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Ok(None);
        }
        Self::new(name, &format!(r"\b(?:{alternation})\b")).map(Some)
    }

    fn build(name: &'static str, pattern: &str, multi_line: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(multi_line)
            .crlf(multi_line)
            .build()
            .map_err(|source| HighlightError::InvalidPattern {
                name: name.to_string(),
                source,
            })?;
        Ok(Self {
            name,
            pattern: regex,
        })
    }

    /// Ranges of every whole match
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern.find_iter(text).map(|m| m.range()).collect()
    }

    /// First match starting at or after `start`, with `^`/`\b` seeing the
    /// whole text
    pub fn find_at(&self, text: &str, start: usize) -> Option<Range<usize>> {
        if start > text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| m.range())
    }

    /// Ranges of a capture group across every match
    pub fn group_all(&self, text: &str, group: usize) -> Vec<Range<usize>> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(group).map(|m| m.range()))
            .collect()
    }

    /// Every match whose captures pass `accept`
    ///
    /// A rejected candidate does not consume its text: scanning resumes one
    /// char after the candidate's start, as a look-around failure would.
    pub fn captures_guarded<'t, F>(&self, text: &'t str, mut accept: F) -> Vec<Captures<'t>>
    where
        F: FnMut(&str, &Captures<'t>) -> bool,
    {
        let mut found = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let (start, end) = (whole.start(), whole.end());
            if accept(text, &caps) {
                found.push(caps);
                pos = if end > start { end } else { next_char(text, end) };
            } else {
                pos = next_char(text, start);
            }
        }
        found
    }
}

/// Byte offset of the char after `pos` (or one past the end)
pub fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Char immediately before a byte offset
pub fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

/// Char starting at a byte offset
pub fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}
