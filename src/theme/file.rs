//! VS Code style theme files
//!
//! Only the parts the highlighter reads are modeled: the UI `colors` map and
//! the `tokenColors` scope list. Everything else in the file is ignored.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::syntax::Color;

/// A parsed theme file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFile {
    #[serde(default)]
    pub name: String,
    /// UI element to `#RRGGBB` / `#RRGGBBAA`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub token_colors: Vec<TokenColor>,
}

/// One `tokenColors` entry
#[derive(Debug, Clone, Deserialize)]
pub struct TokenColor {
    #[serde(default)]
    pub scope: ScopeList,
    #[serde(default)]
    pub settings: TokenSettings,
}

/// `scope` is either a single string or a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScopeList {
    One(String),
    Many(Vec<String>),
}

impl Default for ScopeList {
    fn default() -> Self {
        ScopeList::Many(Vec::new())
    }
}

impl ScopeList {
    pub fn as_slice(&self) -> &[String] {
        match self {
            ScopeList::One(scope) => std::slice::from_ref(scope),
            ScopeList::Many(scopes) => scopes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub font_style: Option<String>,
}

impl ThemeFile {
    /// Parse theme JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a theme file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// A UI color, if present and well-formed
    pub fn ui_color(&self, key: &str) -> Option<Color> {
        self.colors.get(key).and_then(|hex| Color::from_hex(hex).ok())
    }

    /// Build the scope lookup table
    pub fn scope_table(&self) -> ScopeTable {
        ScopeTable::new(&self.token_colors)
    }
}

/// Scope to foreground lookup
///
/// Entries whose foreground is missing or unparseable are dropped up front,
/// so a lookup never stops on an entry it cannot use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeTable {
    entries: Vec<(Vec<String>, Color)>,
}

impl ScopeTable {
    pub fn new(token_colors: &[TokenColor]) -> Self {
        let entries = token_colors
            .iter()
            .filter_map(|entry| {
                let hex = entry.settings.foreground.as_deref()?;
                let color = Color::from_hex(hex).ok()?;
                Some((entry.scope.as_slice().to_vec(), color))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color for a scope: exact match first, then a prefix match in
    /// either direction, each in file order
    pub fn lookup(&self, scope: &str) -> Option<Color> {
        let exact = self
            .entries
            .iter()
            .find(|(scopes, _)| scopes.iter().any(|s| s == scope));
        let found = exact.or_else(|| {
            self.entries.iter().find(|(scopes, _)| {
                scopes
                    .iter()
                    .any(|s| scope.starts_with(s.as_str()) || s.starts_with(scope))
            })
        });
        found.map(|(_, color)| *color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = r##"{
        "name": "Test",
        "colors": { "editor.foreground": "#112233", "broken": "nope" },
        "semanticHighlighting": true,
        "tokenColors": [
            { "scope": "comment", "settings": { "foreground": "#6a737d", "fontStyle": "italic" } },
            { "scope": ["string", "string.quoted"], "settings": { "foreground": "#032f62" } },
            { "scope": "keyword", "settings": { "foreground": "not-a-color" } },
            { "scope": "keyword.control", "settings": { "foreground": "#d73a49" } },
            { "settings": { "foreground": "#ffffff" } }
        ]
    }"##;

    #[test]
    fn test_parse_theme_file() {
        let file = ThemeFile::from_json(THEME).unwrap();
        assert_eq!(file.name, "Test");
        assert_eq!(file.token_colors.len(), 5);
        assert_eq!(file.token_colors[1].scope.as_slice().len(), 2);
        assert_eq!(file.token_colors[0].settings.font_style.as_deref(), Some("italic"));
        assert_eq!(file.ui_color("editor.foreground"), Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(file.ui_color("broken"), None);
        assert_eq!(file.ui_color("missing"), None);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(ThemeFile::from_json("{ not json").is_err());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let file = ThemeFile::from_json("{}").unwrap();
        assert!(file.scope_table().is_empty());
    }

    #[test]
    fn test_scope_lookup_exact_then_prefix() {
        let table = ThemeFile::from_json(THEME).unwrap().scope_table();
        // The unparseable keyword entry is dropped
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("string.quoted"), Some(Color::rgb(0x03, 0x2f, 0x62)));
        // Query longer than a cataloged scope
        assert_eq!(table.lookup("comment.line.double-slash"), Some(Color::rgb(0x6a, 0x73, 0x7d)));
        // Query shorter than a cataloged scope
        assert_eq!(table.lookup("keyword"), Some(Color::rgb(0xd7, 0x3a, 0x49)));
        assert_eq!(table.lookup("constant.numeric"), None);
    }

    #[test]
    fn test_exact_beats_earlier_prefix() {
        let json = r##"{ "tokenColors": [
            { "scope": "entity", "settings": { "foreground": "#000001" } },
            { "scope": "entity.name", "settings": { "foreground": "#000002" } }
        ] }"##;
        let table = ThemeFile::from_json(json).unwrap().scope_table();
        assert_eq!(table.lookup("entity.name"), Some(Color::rgb(0, 0, 2)));
        assert_eq!(table.lookup("entity.name.class"), Some(Color::rgb(0, 0, 1)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, THEME).unwrap();
        assert_eq!(ThemeFile::load(&path).unwrap().name, "Test");
        assert!(ThemeFile::load(&dir.path().join("missing.json")).is_err());
    }
}
