//! Code block records
//!
//! Fenced and indented code is located before any other pass runs; the
//! recorded spans keep later structural passes out of code.

use std::ops::Range;

use crate::syntax::intersects;

/// Length of a ``` fence
pub const FENCE_LEN: usize = 3;

/// A ```lang ... ``` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Whole match, both fences included
    pub range: Range<usize>,
    /// Language tag after the opening fence
    pub language: Option<Range<usize>>,
    /// Text between the opening line and the closing fence
    pub content: Range<usize>,
}

impl FencedBlock {
    /// Language tag, lowercased
    pub fn language_name(&self, text: &str) -> Option<String> {
        self.language
            .as_ref()
            .and_then(|range| text.get(range.clone()))
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }

    pub fn code<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.content.clone()).unwrap_or_default()
    }

    /// The opening ``` marker
    pub fn opening_fence(&self) -> Range<usize> {
        self.range.start..self.range.start + FENCE_LEN
    }

    /// The closing ``` marker, when it starts the block's last line
    pub fn closing_fence(&self, text: &str) -> Option<Range<usize>> {
        let block = text.get(self.range.clone())?;
        let last_line = block.rfind('\n').map_or(0, |nl| nl + 1);
        if last_line == 0 || !block[last_line..].starts_with("```") {
            return None;
        }
        let start = self.range.start + last_line;
        Some(start..start + FENCE_LEN)
    }
}

/// Every span claimed by code, sorted and disjoint per kind
#[derive(Debug, Clone, Default)]
pub struct CodeRegions {
    pub fenced: Vec<FencedBlock>,
    pub indented: Vec<Range<usize>>,
}

impl CodeRegions {
    /// Whether a range touches any fenced block
    pub fn in_fenced(&self, range: &Range<usize>) -> bool {
        let idx = self.fenced.partition_point(|b| b.range.end <= range.start);
        self.fenced
            .get(idx)
            .is_some_and(|b| intersects(&b.range, range))
    }

    /// Whether an offset lies inside a fenced block
    pub fn starts_in_fenced(&self, pos: usize) -> bool {
        let idx = self.fenced.partition_point(|b| b.range.end <= pos);
        self.fenced
            .get(idx)
            .is_some_and(|b| b.range.contains(&pos))
    }

    /// Whether a range touches any fenced or indented code
    pub fn in_code(&self, range: &Range<usize>) -> bool {
        if self.in_fenced(range) {
            return true;
        }
        let idx = self.indented.partition_point(|r| r.end <= range.start);
        self.indented
            .get(idx)
            .is_some_and(|r| intersects(r, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> FencedBlock {
        let lang_end = text.find('\n').unwrap();
        let close = text.rfind("```").unwrap();
        FencedBlock {
            range: 0..text.len(),
            language: (lang_end > 3).then_some(3..lang_end),
            content: lang_end + 1..close,
        }
    }

    #[test]
    fn test_fences_and_language() {
        let text = "```JS\nx\n```";
        let b = block(text);
        assert_eq!(b.language_name(text).as_deref(), Some("js"));
        assert_eq!(b.code(text), "x\n");
        assert_eq!(b.opening_fence(), 0..3);
        assert_eq!(b.closing_fence(text), Some(8..11));
    }

    #[test]
    fn test_closing_fence_on_code_line_is_not_styled() {
        let text = "```\nx```";
        let b = FencedBlock {
            range: 0..text.len(),
            language: None,
            content: 4..5,
        };
        assert_eq!(b.language_name(text), None);
        assert_eq!(b.closing_fence(text), None);
    }

    #[test]
    fn test_regions() {
        let text = "```\nx\n```";
        let regions = CodeRegions {
            fenced: vec![block(text)],
            indented: vec![20..30],
        };
        assert!(regions.in_fenced(&(2..4)));
        assert!(!regions.in_fenced(&(9..12)));
        assert!(regions.in_code(&(25..26)));
        assert!(!regions.in_code(&(12..20)));
        assert!(regions.starts_in_fenced(0));
        assert!(!regions.starts_in_fenced(9));
    }
}
