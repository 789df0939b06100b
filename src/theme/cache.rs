//! Theme file cache
//!
//! Readers share a read lock and never block each other. A miss loads the
//! file with no lock held, then inserts under the write lock; if another
//! thread got there first its entry is kept. Entries are never evicted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::file::ThemeFile;
use super::Theme;
use crate::error::{HighlightError, Result};

/// GitHub Light, served as `"light"`
pub const LIGHT_THEME_JSON: &str = include_str!("../../themes/light.json");

/// Where theme files come from
pub trait ThemeLoader: Send + Sync {
    /// Load a theme file by name
    fn load(&self, name: &str) -> Result<ThemeFile>;

    /// Names this loader can serve, sorted
    fn available(&self) -> Vec<String>;
}

/// Themes compiled into the library
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinThemes;

impl BuiltinThemes {
    const THEMES: &'static [(&'static str, &'static str)] = &[("light", LIGHT_THEME_JSON)];
}

impl ThemeLoader for BuiltinThemes {
    fn load(&self, name: &str) -> Result<ThemeFile> {
        let (_, json) = Self::THEMES
            .iter()
            .find(|(id, _)| *id == name)
            .ok_or_else(|| HighlightError::ThemeNotFound(name.to_string()))?;
        ThemeFile::from_json(json)
    }

    fn available(&self) -> Vec<String> {
        Self::THEMES.iter().map(|(id, _)| id.to_string()).collect()
    }
}

/// `<dir>/<name>.json`, falling back to the built-in themes
#[derive(Debug, Clone)]
pub struct ThemeDir {
    dir: PathBuf,
}

impl ThemeDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl ThemeLoader for ThemeDir {
    fn load(&self, name: &str) -> Result<ThemeFile> {
        // Names are file stems, never paths
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(HighlightError::ThemeNotFound(name.to_string()));
        }
        let path = self.dir.join(format!("{name}.json"));
        if path.is_file() {
            return ThemeFile::load(&path);
        }
        BuiltinThemes.load(name)
    }

    fn available(&self) -> Vec<String> {
        let mut names = BuiltinThemes.available();
        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }
}

/// Name to parsed theme file, shared across highlight passes
pub struct ThemeCache {
    themes: RwLock<HashMap<String, Arc<ThemeFile>>>,
    loader: Box<dyn ThemeLoader>,
}

impl Default for ThemeCache {
    fn default() -> Self {
        Self::new(Box::new(BuiltinThemes))
    }
}

impl std::fmt::Debug for ThemeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeCache")
            .field("cached", &self.themes.read().len())
            .finish_non_exhaustive()
    }
}

impl ThemeCache {
    pub fn new(loader: Box<dyn ThemeLoader>) -> Self {
        Self {
            themes: RwLock::new(HashMap::new()),
            loader,
        }
    }

    /// Cache over a theme directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(ThemeDir::new(dir)))
    }

    /// Get a theme file, loading it on first use
    ///
    /// A missing or corrupt theme is `None`; the caller falls back to the
    /// default palette.
    pub fn get(&self, name: &str) -> Option<Arc<ThemeFile>> {
        if let Some(theme) = self.themes.read().get(name).cloned() {
            return Some(theme);
        }

        let loaded = match self.loader.load(name) {
            Ok(file) => Arc::new(file),
            Err(err) => {
                tracing::warn!(theme = name, error = %err, "failed to load theme");
                return None;
            }
        };

        let mut themes = self.themes.write();
        let theme = themes.entry(name.to_string()).or_insert(loaded).clone();
        tracing::info!(theme = name, cached = themes.len(), "cached theme");
        Some(theme)
    }

    /// Build a markdown theme from a cached file
    pub fn theme(&self, name: &str, base_font_size: f32) -> Option<Theme> {
        self.get(name)
            .map(|file| Theme::from_file(&file, base_font_size))
    }

    /// Whether a theme is already cached
    pub fn contains(&self, name: &str) -> bool {
        self.themes.read().contains_key(name)
    }

    /// Number of cached themes
    pub fn len(&self) -> usize {
        self.themes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.read().is_empty()
    }

    /// Theme names the loader can serve
    pub fn available(&self) -> Vec<String> {
        self.loader.available()
    }
}
