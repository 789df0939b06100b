//! Style tag to color resolution
//!
//! Each tag's scopes are tried in order against the theme's scope table;
//! the first hit wins. With no hit (or no table) the tag's fixed palette
//! color is used, so resolution is total.

use super::file::ScopeTable;
use crate::syntax::{system, Color, Paint, StyleTag};

/// Fixed color for mapping keys (YAML, JSON); not themed
pub const KEY_COLOR: Color = system::BLUE;

/// Resolved colors for every style tag of one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorResolver {
    colors: [Color; StyleTag::ALL.len()],
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ColorResolver {
    /// Resolve every tag up front against an optional scope table
    pub fn new(scopes: Option<&ScopeTable>) -> Self {
        let colors = StyleTag::ALL.map(|tag| resolve(tag, scopes));
        Self { colors }
    }

    /// Color for a tag
    pub fn resolve(&self, tag: StyleTag) -> Color {
        let idx = StyleTag::ALL.iter().position(|t| *t == tag).unwrap_or_default();
        self.colors[idx]
    }

    /// Color for a classifier token's paint
    pub fn paint(&self, paint: Paint) -> Color {
        match paint {
            Paint::Tag(tag) => self.resolve(tag),
            Paint::Key => KEY_COLOR,
        }
    }
}

/// Resolve one tag without caching
pub fn resolve(tag: StyleTag, scopes: Option<&ScopeTable>) -> Color {
    scopes
        .and_then(|table| tag.scopes().iter().find_map(|scope| table.lookup(scope)))
        .unwrap_or_else(|| tag.default_color())
}
