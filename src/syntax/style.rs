//! Style types for text rendering
//!
//! This module provides the attribute vocabulary handed to the rendering
//! surface, the partial styles each highlighting pass produces, and the
//! fold that merges ordered passes into final runs.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::{HighlightError, Result};

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA"
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(HighlightError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| HighlightError::InvalidColor(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(HighlightError::InvalidColor(s.to_string())),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when translucent
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Platform colors the built-in theme is expressed in (light appearance)
pub mod system {
    use super::Color;

    pub const LABEL: Color = Color::rgba(0, 0, 0, 217);
    pub const CONTROL_BACKGROUND: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 122, 255);
    pub const RED: Color = Color::rgb(255, 59, 48);
    pub const ORANGE: Color = Color::rgb(255, 149, 0);
    pub const PURPLE: Color = Color::rgb(175, 82, 222);
    pub const PINK: Color = Color::rgb(255, 45, 85);
    pub const YELLOW: Color = Color::rgb(255, 204, 0);
    pub const GRAY: Color = Color::rgb(142, 142, 147);
}

/// Font family class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Monospace,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slant {
    Upright,
    Italic,
}

/// A complete font selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub size: f32,
    pub weight: Weight,
    pub slant: Slant,
}

impl Font {
    pub const fn monospace(size: f32) -> Self {
        Self {
            family: FontFamily::Monospace,
            size,
            weight: Weight::Regular,
            slant: Slant::Upright,
        }
    }

    pub const fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: Weight::Regular,
            slant: Slant::Upright,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.slant = Slant::Italic;
        self
    }
}

/// A partial set of text attributes
///
/// Every key is optional. Merging is per key: a later style overrides only
/// the keys it sets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub family: Option<FontFamily>,
    pub size: Option<f32>,
    pub weight: Option<Weight>,
    pub slant: Option<Slant>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with just background color
    pub fn bg(color: Color) -> Self {
        Self {
            bg: Some(color),
            ..Default::default()
        }
    }

    /// Create a style that selects a whole font
    pub fn font(font: Font) -> Self {
        Self::default().with_font(font)
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: set every font key
    pub fn with_font(mut self, font: Font) -> Self {
        self.family = Some(font.family);
        self.size = Some(font.size);
        self.weight = Some(font.weight);
        self.slant = Some(font.slant);
        self
    }

    /// Builder: set bold, leaving family and size alone
    pub fn with_bold(mut self) -> Self {
        self.weight = Some(Weight::Bold);
        self
    }

    /// Builder: set italic, leaving family and size alone
    pub fn with_italic(mut self) -> Self {
        self.slant = Some(Slant::Italic);
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    /// Builder: set strikethrough
    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = Some(true);
        self
    }

    /// Merge `other` on top of this style, key by key
    pub fn merge(&mut self, other: &Style) {
        fn over<T: Copy>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        over(&mut self.fg, other.fg);
        over(&mut self.bg, other.bg);
        over(&mut self.family, other.family);
        over(&mut self.size, other.size);
        over(&mut self.weight, other.weight);
        over(&mut self.slant, other.slant);
        over(&mut self.underline, other.underline);
        over(&mut self.strikethrough, other.strikethrough);
    }

    /// Check if this style sets nothing
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled byte range over some text
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Byte offsets, half-open
    pub range: Range<usize>,
    pub style: Style,
}

impl Annotation {
    /// Create a new annotation
    pub fn new(range: Range<usize>, style: Style) -> Self {
        Self { range, style }
    }

    /// Shift into another coordinate space
    pub fn offset(mut self, by: usize) -> Self {
        self.range = self.range.start + by..self.range.end + by;
        self
    }

    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }
}

/// Half-open range intersection with non-zero overlap
pub fn intersects(a: &Range<usize>, b: &Range<usize>) -> bool {
    !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
}

/// A run of text with its final merged style
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub range: Range<usize>,
    pub style: Style,
}

/// Final per-position style assignment, stored as coalesced runs
///
/// Runs cover `0..len` with no gaps and no overlaps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledRuns {
    len: usize,
    runs: Vec<StyledRun>,
}

impl StyledRuns {
    /// Fold ordered annotations left to right into runs
    pub fn fold<'a, I>(len: usize, annotations: I) -> Self
    where
        I: IntoIterator<Item = &'a Annotation>,
    {
        // Keyed by run start; each run extends to the next key (or len)
        let mut starts: BTreeMap<usize, Style> = BTreeMap::new();
        if len > 0 {
            starts.insert(0, Style::default());
        }

        for ann in annotations {
            let start = ann.range.start.min(len);
            let end = ann.range.end.min(len);
            if start >= end {
                continue;
            }
            split_at(&mut starts, start);
            if end < len {
                split_at(&mut starts, end);
            }
            for (_, style) in starts.range_mut(start..end) {
                style.merge(&ann.style);
            }
        }

        let mut runs: Vec<StyledRun> = Vec::with_capacity(starts.len());
        let mut iter = starts.into_iter().peekable();
        while let Some((start, style)) = iter.next() {
            let end = iter.peek().map_or(len, |(next, _)| *next);
            match runs.last_mut() {
                Some(last) if last.style == style => last.range.end = end,
                _ => runs.push(StyledRun {
                    range: start..end,
                    style,
                }),
            }
        }

        Self { len, runs }
    }

    /// Text length the runs cover
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All runs in order
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Merged style at a byte offset
    pub fn style_at(&self, pos: usize) -> Option<&Style> {
        if pos >= self.len {
            return None;
        }
        let idx = self.runs.partition_point(|run| run.range.end <= pos);
        self.runs.get(idx).map(|run| &run.style)
    }
}

fn split_at(starts: &mut BTreeMap<usize, Style>, pos: usize) {
    if starts.contains_key(&pos) {
        return;
    }
    if let Some((_, style)) = starts.range(..pos).next_back() {
        let style = *style;
        starts.insert(pos, style);
    }
}
