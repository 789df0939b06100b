//! Language definitions for embedded code highlighting
//!
//! A `LanguageSpec` is plain static data (names, word lists, pattern
//! sources). `LanguageDefinition::compile` turns it into the compiled
//! form the classifier runs. Adding a language is adding a spec; the
//! classifier never changes.

use std::collections::HashSet;

use super::rules::PatternRule;
use crate::error::Result;

/// Double- or single-quoted string on one line, with backslash escapes
pub const QUOTED_STRING: &str = r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#;

/// Quoted string on one line, or a backtick string that may span lines
pub const QUOTED_OR_TEMPLATE_STRING: &str =
    r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\.)*`"#;

/// Double-quoted string on one line, with backslash escapes
pub const DOUBLE_QUOTED_STRING: &str = r#""(?:[^"\\\n]|\\.)*""#;

/// Line and block comments in the C family
pub const C_COMMENTS: &[&str] = &[r"//.*$", r"/\*[\s\S]*?\*/"];

/// Shell-style comments
pub const HASH_COMMENTS: &[&str] = &[r"#.*$"];

/// Integers and decimals
pub const DECIMAL_NUMBER: &str = r"\b\d+(?:\.\d+)?\b";

/// Decimals with an optional leading minus
pub const SIGNED_NUMBER: &str = r"-?\b\d+(?:\.\d+)?\b";

/// How a language is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Comment/string/number/keyword passes plus name heuristics
    Generic,
    /// Generic passes plus `"key":` detection
    Json,
    /// Whole-line coloring by prefix (diff, patch)
    Diff,
    /// Tags, attributes and comments (HTML)
    Markup,
    /// Selectors, properties, at-rules (CSS)
    Stylesheet,
    /// Keys, anchors and literals (YAML)
    KeyValue,
}

/// Declarative language data
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    /// Lowercase names this definition is looked up by
    pub names: &'static [&'static str],
    pub family: Family,
    pub keywords: &'static [&'static str],
    pub types: Option<&'static [&'static str]>,
    pub string: &'static str,
    /// Swept together with `string`, earliest match first; `^`/`$` at line
    /// boundaries
    pub comments: &'static [&'static str],
    pub variable: Option<&'static str>,
    pub number: &'static str,
}

impl LanguageSpec {
    /// Defaults shared by most C-like languages
    pub const fn generic(
        names: &'static [&'static str],
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            names,
            family: Family::Generic,
            keywords,
            types: None,
            string: QUOTED_STRING,
            comments: C_COMMENTS,
            variable: None,
            number: DECIMAL_NUMBER,
        }
    }

    /// A language handled entirely by its family's own passes
    pub const fn special(names: &'static [&'static str], family: Family) -> Self {
        Self {
            names,
            family,
            keywords: &[],
            types: None,
            string: QUOTED_STRING,
            comments: &[],
            variable: None,
            number: DECIMAL_NUMBER,
        }
    }
}

/// Declaration keywords tagged `storage` instead of `keyword`
pub const STORAGE_KEYWORDS: &[&str] = &[
    "class", "public", "private", "protected", "static", "final", "abstract", "interface",
    "struct", "enum", "var", "let", "const", "function", "func", "def", "import", "package",
    "namespace",
];

/// A compiled language definition
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Primary name (first of `names`)
    pub name: &'static str,
    pub family: Family,
    pub keywords: HashSet<&'static str>,
    pub types: Option<HashSet<&'static str>>,
    pub string: PatternRule,
    pub comments: Vec<PatternRule>,
    pub variable: Option<PatternRule>,
    pub number: PatternRule,
    /// Keywords that are also storage keywords
    pub storage_words: Option<PatternRule>,
    /// Remaining keywords
    pub keyword_words: Option<PatternRule>,
    pub type_words: Option<PatternRule>,
}

impl LanguageDefinition {
    /// Compile a spec; fails only if a pattern is invalid
    pub fn compile(spec: &LanguageSpec) -> Result<Self> {
        let comments = spec
            .comments
            .iter()
            .map(|pattern| PatternRule::multiline("comment", pattern))
            .collect::<Result<Vec<_>>>()?;
        let variable = spec
            .variable
            .map(|pattern| PatternRule::new("variable", pattern))
            .transpose()?;

        let storage = STORAGE_KEYWORDS
            .iter()
            .copied()
            .filter(|word| spec.keywords.contains(word));
        let regular = spec
            .keywords
            .iter()
            .copied()
            .filter(|word| !STORAGE_KEYWORDS.contains(word));

        Ok(Self {
            name: spec.names.first().copied().unwrap_or_default(),
            family: spec.family,
            keywords: spec.keywords.iter().copied().collect(),
            types: spec.types.map(|types| types.iter().copied().collect()),
            string: PatternRule::new("string", spec.string)?,
            comments,
            variable,
            number: PatternRule::new("number", spec.number)?,
            storage_words: PatternRule::words("storage", storage)?,
            keyword_words: PatternRule::words("keyword", regular)?,
            type_words: PatternRule::words("type", spec.types.unwrap_or_default().iter().copied())?,
        })
    }

    /// Whether a word is a keyword of this language
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Whether a word is a built-in type of this language
    pub fn is_type(&self, word: &str) -> bool {
        self.types.as_ref().is_some_and(|types| types.contains(word))
    }
}
