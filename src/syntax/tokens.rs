//! Style tags for embedded code highlighting
//!
//! This module defines the semantic categories the code classifier
//! assigns, the theme scopes each one is looked up under, and the fixed
//! palette used when no theme provides a color.

use super::style::Color;

/// Semantic highlighting category, independent of any color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Source code comments
    Comment,
    /// String literals
    String,
    /// Language keywords
    Keyword,
    /// Declaration keywords (class, let, def, import, ...)
    Storage,
    /// Type tokens (CSS selectors, YAML anchors)
    Type,
    /// Declared or referenced class/type names
    Entity,
    /// Constants (CSS hex colors)
    Constant,
    /// Sigil variables ($name)
    Variable,
    /// Function and method calls
    Function,
    /// Numeric literals
    Number,
    Operator,
    Punctuation,
    /// Built-in types
    Support,
}

/// GitHub Light palette used when a theme has no matching scope
pub mod palette {
    use super::Color;

    pub const GRAY: Color = Color::rgb(0x6a, 0x73, 0x7d);
    pub const DARK_BLUE: Color = Color::rgb(0x03, 0x2f, 0x62);
    pub const RED: Color = Color::rgb(0xd7, 0x3a, 0x49);
    pub const PURPLE: Color = Color::rgb(0x6f, 0x42, 0xc1);
    pub const BLUE: Color = Color::rgb(0x00, 0x5c, 0xc5);
    pub const ORANGE: Color = Color::rgb(0xe3, 0x62, 0x09);
    pub const FOREGROUND: Color = Color::rgb(0x24, 0x29, 0x2e);
}

impl StyleTag {
    pub const ALL: [StyleTag; 13] = [
        StyleTag::Comment,
        StyleTag::String,
        StyleTag::Keyword,
        StyleTag::Storage,
        StyleTag::Type,
        StyleTag::Entity,
        StyleTag::Constant,
        StyleTag::Variable,
        StyleTag::Function,
        StyleTag::Number,
        StyleTag::Operator,
        StyleTag::Punctuation,
        StyleTag::Support,
    ];

    /// Theme scopes to try for this tag, most specific first
    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            StyleTag::Comment => &["comment", "punctuation.definition.comment"],
            StyleTag::String => &["string", "punctuation.definition.string"],
            StyleTag::Keyword => &["keyword"],
            StyleTag::Storage => &["storage", "storage.type", "storage.modifier"],
            StyleTag::Type => &["support.type", "support.class", "entity.name.type"],
            StyleTag::Entity => &["entity", "entity.name", "entity.name.class", "entity.name.type"],
            StyleTag::Constant => &["constant", "entity.name.constant", "variable.other.constant"],
            StyleTag::Variable => &["variable", "variable.other"],
            StyleTag::Function => &["entity.name.function", "support.function"],
            StyleTag::Number => &["constant.numeric"],
            StyleTag::Operator => &["keyword.operator"],
            StyleTag::Punctuation => &["punctuation"],
            StyleTag::Support => &["support", "support.constant", "support.variable"],
        }
    }

    /// Color used when no theme scope matches
    pub fn default_color(&self) -> Color {
        match self {
            StyleTag::Comment => palette::GRAY,
            StyleTag::String => palette::DARK_BLUE,
            StyleTag::Keyword | StyleTag::Storage | StyleTag::Operator => palette::RED,
            StyleTag::Entity | StyleTag::Function | StyleTag::Type => palette::PURPLE,
            StyleTag::Constant | StyleTag::Number | StyleTag::Support => palette::BLUE,
            StyleTag::Variable => palette::ORANGE,
            StyleTag::Punctuation => palette::FOREGROUND,
        }
    }

    /// Get a human-readable name for this tag
    pub fn name(&self) -> &'static str {
        match self {
            StyleTag::Comment => "comment",
            StyleTag::String => "string",
            StyleTag::Keyword => "keyword",
            StyleTag::Storage => "storage",
            StyleTag::Type => "type",
            StyleTag::Entity => "entity",
            StyleTag::Constant => "constant",
            StyleTag::Variable => "variable",
            StyleTag::Function => "function",
            StyleTag::Number => "number",
            StyleTag::Operator => "operator",
            StyleTag::Punctuation => "punctuation",
            StyleTag::Support => "support",
        }
    }

    /// Parse a tag from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_has_scopes() {
        for tag in StyleTag::ALL {
            assert!(!tag.scopes().is_empty(), "{} has no scopes", tag.name());
        }
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(StyleTag::Comment.default_color(), Color::rgb(0x6a, 0x73, 0x7d));
        assert_eq!(StyleTag::Keyword.default_color(), StyleTag::Storage.default_color());
        assert_eq!(StyleTag::Entity.default_color(), StyleTag::Function.default_color());
        assert_eq!(StyleTag::Number.default_color(), StyleTag::Constant.default_color());
        assert_eq!(StyleTag::Variable.default_color(), palette::ORANGE);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for tag in StyleTag::ALL {
            assert_eq!(StyleTag::from_name(tag.name()), Some(tag));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(StyleTag::from_name("Comment"), None);
        assert_eq!(StyleTag::from_name(""), None);
    }
}
