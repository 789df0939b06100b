//! Language catalog
//!
//! Maps every lowercase language name or alias to its compiled
//! definition. Built once at startup and read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use super::builtin;
use super::language::{LanguageDefinition, LanguageSpec};
use crate::error::Result;

/// Name/alias to definition lookup
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    /// Compiled definitions, shared by all their aliases
    languages: Vec<Arc<LanguageDefinition>>,
    /// Lowercase name to index into `languages`
    names: HashMap<String, usize>,
}

impl LanguageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with every built-in language
    ///
    /// Fails only if a built-in pattern does not compile, which is a bug.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for spec in builtin::ALL_LANGUAGES {
            catalog.add_language(spec)?;
        }
        tracing::debug!(
            languages = catalog.languages.len(),
            names = catalog.names.len(),
            "compiled built-in language catalog"
        );
        Ok(catalog)
    }

    /// Compile a spec and register all of its names
    ///
    /// A name already present keeps its earlier definition.
    pub fn add_language(&mut self, spec: &LanguageSpec) -> Result<()> {
        let lang = Arc::new(LanguageDefinition::compile(spec)?);
        let idx = self.languages.len();
        self.languages.push(lang);
        for name in spec.names {
            self.names.entry(name.to_lowercase()).or_insert(idx);
        }
        Ok(())
    }

    /// Look up a language by name, case-insensitively
    pub fn lookup(&self, name: &str) -> Option<&Arc<LanguageDefinition>> {
        let idx = self.names.get(&name.trim().to_lowercase())?;
        self.languages.get(*idx)
    }

    /// Whether a language name is known
    pub fn supports(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// List every registered name, sorted
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.names.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::Family;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = LanguageCatalog::builtin().unwrap();
        assert!(catalog.supports("Rust"));
        assert!(catalog.supports("PY"));
        assert!(catalog.supports("c#"));
        assert_eq!(catalog.lookup("JavaScript").unwrap().name, "javascript");
    }

    #[test]
    fn test_aliases_share_definition() {
        let catalog = LanguageCatalog::builtin().unwrap();
        let pairs = [
            ("js", "javascript"),
            ("ts", "typescript"),
            ("py", "python"),
            ("rs", "rust"),
            ("yml", "yaml"),
            ("cs", "csharp"),
        ];
        for (a, b) in pairs {
            let left = catalog.lookup(a).unwrap();
            let right = catalog.lookup(b).unwrap();
            assert!(Arc::ptr_eq(left, right), "{a} and {b} differ");
        }
    }

    #[test]
    fn test_families() {
        let catalog = LanguageCatalog::builtin().unwrap();
        assert_eq!(catalog.lookup("patch").unwrap().family, Family::Diff);
        assert_eq!(catalog.lookup("html").unwrap().family, Family::Markup);
        assert_eq!(catalog.lookup("css").unwrap().family, Family::Stylesheet);
        assert_eq!(catalog.lookup("yaml").unwrap().family, Family::KeyValue);
        assert_eq!(catalog.lookup("json").unwrap().family, Family::Json);
        assert_eq!(catalog.lookup("go").unwrap().family, Family::Generic);
    }

    #[test]
    fn test_unknown_language() {
        let catalog = LanguageCatalog::builtin().unwrap();
        assert!(catalog.lookup("no-such-lang").is_none());
        assert!(!catalog.supports(""));
    }

    #[test]
    fn test_adding_language_keeps_existing() {
        let mut catalog = LanguageCatalog::builtin().unwrap();
        let before = catalog.lookup("rs").unwrap().clone();
        catalog
            .add_language(&LanguageSpec::generic(&["zig", "rs"], &["fn"]))
            .unwrap();
        assert!(catalog.supports("zig"));
        assert!(Arc::ptr_eq(&before, catalog.lookup("rs").unwrap()));
    }

    #[test]
    fn test_list_names() {
        let catalog = LanguageCatalog::builtin().unwrap();
        let names = catalog.list_names();
        assert_eq!(names.len(), 38);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"osascript"));
    }
}
