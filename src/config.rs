//! Configuration file support
//!
//! Loads settings from ~/.mdhighlight.toml (or %USERPROFILE%\.mdhighlight.toml
//! on Windows)
//!
//! Format: TOML, flat keys. Unknown keys are ignored and out-of-range
//! numbers are clamped.
//!
//! Example:
//! ```text
//! # mdhighlight configuration
//! theme = "light"
//! base-font-size = 14
//! line-height-multiple = 1.2
//! live-highlighting = true
//! focus-on-appear = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::Result;
use crate::theme::{Theme, ThemeCache, DEFAULT_FONT_SIZE};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme file name, e.g. "light"; `None` for the standard theme
    pub theme: Option<String>,
    /// Body text size in points
    pub base_font_size: f32,
    /// Line spacing for the rendering surface
    pub line_height_multiple: f32,
    /// Re-highlight on every edit
    pub live_highlighting: bool,
    /// Focus the editor when it appears
    pub focus_on_appear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            base_font_size: DEFAULT_FONT_SIZE,
            line_height_multiple: 1.2,
            live_highlighting: true,
            focus_on_appear: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".mdhighlight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".mdhighlight.toml"))
        }
    }

    /// Load configuration from the default path
    ///
    /// A missing file gives defaults; a malformed one is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load configuration from a file; a missing file gives defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse TOML config contents
    pub fn parse(contents: &str) -> Result<Self> {
        let settings: Table = contents.parse()?;
        let mut config = Self::default();
        config.apply(&settings);
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, settings: &Table) {
        if let Some(value) = settings.get("theme").and_then(Value::as_str) {
            let name = value.trim();
            self.theme = (!name.is_empty()).then(|| name.to_string());
        }

        if let Some(n) = settings.get("base-font-size").and_then(as_number) {
            self.base_font_size = n.clamp(8.0, 72.0);
        }

        if let Some(n) = settings.get("line-height-multiple").and_then(as_number) {
            self.line_height_multiple = n.clamp(1.0, 3.0);
        }

        if let Some(value) = settings.get("live-highlighting").and_then(as_bool) {
            self.live_highlighting = value;
        }

        if let Some(value) = settings.get("focus-on-appear").and_then(as_bool) {
            self.focus_on_appear = value;
        }
    }

    /// The configured theme, or the standard theme when it is unset or fails
    /// to load
    pub fn resolve_theme(&self, cache: &ThemeCache) -> Theme {
        self.theme
            .as_deref()
            .and_then(|name| cache.theme(name, self.base_font_size))
            .unwrap_or_else(|| Theme::standard(self.base_font_size))
    }
}

/// Integers and finite floats both count as numbers
fn as_number(value: &Value) -> Option<f32> {
    let n = match value {
        Value::Integer(n) => *n as f32,
        Value::Float(n) => *n as f32,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Booleans, or the strings true/yes/on/1 and false/no/off/0
fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
theme = "light"
base-font-size = 16
line-height-multiple = 1.5
live-highlighting = false
focus-on-appear = "no"
        "#;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.base_font_size, 16.0);
        assert_eq!(config.line_height_multiple, 1.5);
        assert!(!config.live_highlighting);
        assert!(!config.focus_on_appear);
    }

    #[test]
    fn test_defaults_and_unknown_keys() {
        let config = Config::parse("tab-width = 4\n").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_clamping() {
        let config = Config::parse("base-font-size = 200\nline-height-multiple = 0.5").unwrap();
        assert_eq!(config.base_font_size, 72.0);
        assert_eq!(config.line_height_multiple, 1.0);
    }

    #[test]
    fn test_wrong_types_are_ignored() {
        let config =
            Config::parse("base-font-size = \"big\"\nlive-highlighting = \"maybe\"").unwrap();
        assert_eq!(config.base_font_size, DEFAULT_FONT_SIZE);
        assert!(config.live_highlighting);
    }

    #[test]
    fn test_non_finite_numbers_are_ignored() {
        let config = Config::parse("base-font-size = nan\nline-height-multiple = inf").unwrap();
        assert_eq!(config.base_font_size, DEFAULT_FONT_SIZE);
        assert_eq!(config.line_height_multiple, Config::default().line_height_multiple);

        let config = Config::parse("base-font-size = -inf").unwrap();
        assert_eq!(config.base_font_size, DEFAULT_FONT_SIZE);
        assert!(Theme::standard(config.base_font_size).base_font.size.is_finite());
    }

    #[test]
    fn test_blank_theme_is_none() {
        let config = Config::parse("theme = \"  \"").unwrap();
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(Config::parse("theme = ").is_err());
    }

    #[test]
    fn test_as_bool() {
        for s in ["true", "True", "YES", "on", "1"] {
            assert_eq!(as_bool(&Value::String(s.to_string())), Some(true));
        }
        for s in ["false", "no", "OFF", "0"] {
            assert_eq!(as_bool(&Value::String(s.to_string())), Some(false));
        }
        assert_eq!(as_bool(&Value::Integer(1)), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        fs::write(&path, "base-font-size = 12").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().base_font_size, 12.0);

        fs::write(&path, "= broken").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_theme() {
        let cache = ThemeCache::default();

        let standard = Config::default().resolve_theme(&cache);
        assert_eq!(standard.name, "standard");

        let light = Config::parse("theme = \"light\"\nbase-font-size = 18").unwrap();
        let theme = light.resolve_theme(&cache);
        assert_eq!(theme.name, "GitHub Light");
        assert_eq!(theme.base_font.size, 18.0);

        let missing = Config::parse("theme = \"nope\"").unwrap();
        assert_eq!(missing.resolve_theme(&cache).name, "standard");
    }
}
