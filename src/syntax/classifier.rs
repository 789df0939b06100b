//! Embedded code classifier
//!
//! Assigns `StyleTag`s to byte ranges of a code snippet. Passes run in a
//! fixed order and later passes win on overlap, except that nothing may
//! paint over a comment. Comments and strings are found together in one
//! left-to-right sweep, so a `//` inside a string stays string and a quote
//! inside a comment stays comment. Comment ranges are then claimed, and
//! every later token is clipped to the parts outside them.

use std::ops::Range;
use std::sync::Arc;

use super::catalog::LanguageCatalog;
use super::language::{Family, LanguageDefinition};
use super::rules::{char_before, next_char, PatternRule};
use super::tokens::StyleTag;
use crate::error::Result;

/// How a token is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Resolved through the theme
    Tag(StyleTag),
    /// Mapping key (YAML/JSON); fixed color, never themed
    Key,
}

/// A classified byte range of a code snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub range: Range<usize>,
    pub paint: Paint,
}

impl Token {
    pub fn tag(range: Range<usize>, tag: StyleTag) -> Self {
        Self {
            range,
            paint: Paint::Tag(tag),
        }
    }
}

/// Ordered token output with comment protection
#[derive(Debug, Default)]
struct TokenSink {
    tokens: Vec<Token>,
    /// Sorted, disjoint comment ranges
    protected: Vec<Range<usize>>,
}

impl TokenSink {
    fn protect(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.tokens.push(Token::tag(range.clone(), StyleTag::Comment));
        self.protected.push(range);
    }

    /// Sort and merge protected ranges; call once all comments are in
    fn seal(&mut self) {
        self.protected.sort_by_key(|r| r.start);
        let mut merged: Vec<Range<usize>> = Vec::with_capacity(self.protected.len());
        for range in self.protected.drain(..) {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }
        self.protected = merged;
    }

    /// Push the parts of `range` outside every protected range
    fn paint(&mut self, range: Range<usize>, paint: Paint) {
        let mut start = range.start;
        let mut idx = self.protected.partition_point(|p| p.end <= start);
        while let Some(p) = self.protected.get(idx) {
            if p.start >= range.end {
                break;
            }
            if p.start > start {
                self.tokens.push(Token {
                    range: start..p.start,
                    paint,
                });
            }
            start = start.max(p.end);
            idx += 1;
        }
        if start < range.end {
            self.tokens.push(Token {
                range: start..range.end,
                paint,
            });
        }
    }

    fn paint_all(&mut self, ranges: Vec<Range<usize>>, tag: StyleTag) {
        for range in ranges {
            self.paint(range, Paint::Tag(tag));
        }
    }
}

/// Patterns shared by all languages of a family
#[derive(Debug, Clone)]
struct FamilyPatterns {
    declaration: PatternRule,
    inheritance: PatternRule,
    constructor: PatternRule,
    type_annotation: PatternRule,
    call: PatternRule,
    method_call: PatternRule,
    json_key: PatternRule,
    html_tag: PatternRule,
    html_attribute: PatternRule,
    css_at_rule: PatternRule,
    css_property: PatternRule,
    css_hex_color: PatternRule,
    css_selector: PatternRule,
    yaml_key: PatternRule,
    yaml_literal: PatternRule,
    yaml_anchor: PatternRule,
}

impl FamilyPatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            declaration: PatternRule::new(
                "declaration",
                r"\b(?:class|interface|struct|enum)\s+([A-Z][A-Za-z0-9_]*)",
            )?,
            inheritance: PatternRule::new(
                "inheritance",
                r"\b(?:implements|extends)\s+([A-Z][A-Za-z0-9_]*)",
            )?,
            constructor: PatternRule::new("constructor", r"\bnew\s+([A-Z][A-Za-z0-9_]*)\s*\(")?,
            type_annotation: PatternRule::new(
                "type_annotation",
                r"\b([A-Z][A-Za-z0-9_]*)\s+([a-z_][A-Za-z0-9_]*)\s*[;=,)]",
            )?,
            call: PatternRule::new("call", r"\b([A-Za-z_][A-Za-z0-9_]*)\b\s*\(")?,
            method_call: PatternRule::new("method_call", r"\.([A-Za-z_][A-Za-z0-9_]*)\b\s*\(")?,
            json_key: PatternRule::multiline("json_key", r#"^[ \t]*("[^"\n]+?")[ \t]*:"#)?,
            html_tag: PatternRule::new("html_tag", r"</?([a-zA-Z][a-zA-Z0-9:-]*)\b")?,
            html_attribute: PatternRule::new(
                "html_attribute",
                r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*("[^"]*"|'[^']*')"#,
            )?,
            css_at_rule: PatternRule::multiline("css_at_rule", r"^[ \t]*@\w+")?,
            css_property: PatternRule::multiline(
                "css_property",
                r"^[ \t]*([A-Za-z_-][A-Za-z0-9_-]*)[ \t]*:",
            )?,
            css_hex_color: PatternRule::new("css_hex_color", r"#[0-9a-fA-F]{3,8}\b")?,
            css_selector: PatternRule::new("css_selector", r"\.[-\w]+|#[-\w]+|::?[-\w]+")?,
            yaml_key: PatternRule::multiline("yaml_key", r"^[ \t]*([^\s:#][^:\n]*?)[ \t]*:")?,
            yaml_literal: PatternRule::new(
                "yaml_literal",
                r"(?i)\b(?:true|false|null|yes|no|on|off)\b",
            )?,
            yaml_anchor: PatternRule::new("yaml_anchor", r"[&*][A-Za-z0-9_-]+")?,
        })
    }
}

/// Classifies code snippets by language name
#[derive(Debug, Clone)]
pub struct CodeClassifier {
    catalog: Arc<LanguageCatalog>,
    patterns: FamilyPatterns,
}

impl CodeClassifier {
    /// Create a classifier over a catalog
    pub fn new(catalog: Arc<LanguageCatalog>) -> Result<Self> {
        Ok(Self {
            catalog,
            patterns: FamilyPatterns::new()?,
        })
    }

    /// The catalog languages are looked up in
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Classify `code` as `language`
    ///
    /// Offsets are bytes into `code`. Tokens are in application order; fold
    /// them left to right. Unknown languages yield no tokens.
    pub fn classify(&self, code: &str, language: &str) -> Vec<Token> {
        let Some(lang) = self.catalog.lookup(language) else {
            tracing::trace!(language, "no definition for fenced language");
            return Vec::new();
        };

        let mut sink = TokenSink::default();
        match lang.family {
            Family::Diff => classify_diff(code, &mut sink),
            Family::Markup => self.classify_markup(code, lang, &mut sink),
            Family::Stylesheet => self.classify_stylesheet(code, lang, &mut sink),
            Family::KeyValue => self.classify_key_value(code, lang, &mut sink),
            Family::Generic | Family::Json => self.classify_generic(code, lang, &mut sink),
        }
        sink.tokens
    }

    fn classify_markup(&self, code: &str, lang: &LanguageDefinition, sink: &mut TokenSink) {
        claim_comments(code, lang, None, sink);

        let p = &self.patterns;
        sink.paint_all(p.html_tag.group_all(code, 1), StyleTag::Keyword);
        for caps in p.html_attribute.pattern.captures_iter(code) {
            if let Some(name) = caps.get(1) {
                sink.paint(name.range(), Paint::Tag(StyleTag::Function));
            }
            if let Some(value) = caps.get(2) {
                sink.paint(value.range(), Paint::Tag(StyleTag::String));
            }
        }
    }

    fn classify_stylesheet(&self, code: &str, lang: &LanguageDefinition, sink: &mut TokenSink) {
        let strings = claim_comments(code, lang, Some(&lang.string), sink);
        sink.paint_all(strings, StyleTag::String);

        let p = &self.patterns;
        sink.paint_all(p.css_at_rule.find_all(code), StyleTag::Keyword);
        sink.paint_all(p.css_property.group_all(code, 1), StyleTag::Function);
        sink.paint_all(p.css_hex_color.find_all(code), StyleTag::Constant);
        sink.paint_all(p.css_selector.find_all(code), StyleTag::Type);
        sink.paint_all(lang.number.find_all(code), StyleTag::Number);
    }

    fn classify_key_value(&self, code: &str, lang: &LanguageDefinition, sink: &mut TokenSink) {
        let strings = claim_comments(code, lang, Some(&lang.string), sink);
        sink.paint_all(strings, StyleTag::String);

        let p = &self.patterns;
        sink.paint_all(lang.number.find_all(code), StyleTag::Number);
        for range in p.yaml_key.group_all(code, 1) {
            sink.paint(range, Paint::Key);
        }
        sink.paint_all(p.yaml_literal.find_all(code), StyleTag::Keyword);
        sink.paint_all(p.yaml_anchor.find_all(code), StyleTag::Type);
    }

    fn classify_generic(&self, code: &str, lang: &LanguageDefinition, sink: &mut TokenSink) {
        let strings = claim_comments(code, lang, Some(&lang.string), sink);

        sink.paint_all(strings, StyleTag::String);
        sink.paint_all(lang.number.find_all(code), StyleTag::Number);
        if let Some(variable) = &lang.variable {
            sink.paint_all(variable.find_all(code), StyleTag::Variable);
        }
        if let Some(storage) = &lang.storage_words {
            sink.paint_all(storage.find_all(code), StyleTag::Storage);
        }
        if let Some(keywords) = &lang.keyword_words {
            sink.paint_all(keywords.find_all(code), StyleTag::Keyword);
        }
        if let Some(types) = &lang.type_words {
            sink.paint_all(types.find_all(code), StyleTag::Support);
        }

        self.paint_entities(code, lang, sink);
        self.paint_calls(code, lang, sink);

        if lang.family == Family::Json {
            for range in self.patterns.json_key.group_all(code, 1) {
                sink.paint(range, Paint::Key);
            }
        }
    }

    /// Class names after declaring keywords, `extends`/`implements`, `new`,
    /// and `Type name;`-shaped annotations
    fn paint_entities(&self, code: &str, lang: &LanguageDefinition, sink: &mut TokenSink) {
        let p = &self.patterns;
        sink.paint_all(p.declaration.group_all(code, 1), StyleTag::Entity);
        sink.paint_all(p.inheritance.group_all(code, 1), StyleTag::Entity);
        sink.paint_all(p.constructor.group_all(code, 1), StyleTag::Entity);

        // Approximate: any `Capitalized lowercase;` pair qualifies
        for caps in p.type_annotation.pattern.captures_iter(code) {
            let Some(name) = caps.get(1) else { continue };
            if lang.is_keyword(name.as_str()) || lang.is_type(name.as_str()) {
                continue;
            }
            sink.paint(name.range(), Paint::Tag(StyleTag::Entity));
        }
    }

    /// `name(` calls that are not keywords, then `.name(` method calls
    fn paint_calls(&self, code: &str, lang: &LanguageDefinition, sink: &mut TokenSink) {
        let p = &self.patterns;
        let calls = p.call.captures_guarded(code, |text, caps| {
            caps.get(1)
                .is_some_and(|name| char_before(text, name.start()) != Some('.'))
        });
        for caps in calls {
            let Some(name) = caps.get(1) else { continue };
            if lang.is_keyword(name.as_str()) {
                continue;
            }
            sink.paint(name.range(), Paint::Tag(StyleTag::Function));
        }
        sink.paint_all(p.method_call.group_all(code, 1), StyleTag::Function);
    }
}

/// Next match of one rule in the comment/string sweep
struct Pending<'r> {
    rule: &'r PatternRule,
    comment: bool,
    next: Option<Range<usize>>,
}

/// Claim comments and collect strings in one leftmost-first sweep
///
/// At each step the earliest match of any rule wins (comment rules first
/// on a tie) and the sweep resumes at its end. Comments are protected;
/// string ranges are returned for the caller's string pass.
fn claim_comments(
    code: &str,
    lang: &LanguageDefinition,
    strings: Option<&PatternRule>,
    sink: &mut TokenSink,
) -> Vec<Range<usize>> {
    let mut pending: Vec<Pending> = lang
        .comments
        .iter()
        .map(|rule| (rule, true))
        .chain(strings.map(|rule| (rule, false)))
        .map(|(rule, comment)| Pending {
            rule,
            comment,
            next: rule.find_at(code, 0),
        })
        .collect();

    let mut found = Vec::new();
    let mut pos = 0;
    loop {
        for p in &mut pending {
            if p.next.as_ref().is_some_and(|r| r.start < pos) {
                p.next = p.rule.find_at(code, pos);
            }
        }
        let Some((range, comment)) = pending
            .iter()
            .filter_map(|p| p.next.clone().map(|range| (range, p.comment)))
            .min_by_key(|(range, _)| range.start)
        else {
            break;
        };
        if range.is_empty() {
            pos = next_char(code, range.end);
            continue;
        }
        pos = range.end;
        if comment {
            sink.protect(range);
        } else {
            found.push(range);
        }
    }
    sink.seal();
    found
}

/// Whole-line coloring by prefix; no sub-line tokens
fn classify_diff(code: &str, sink: &mut TokenSink) {
    let mut start = 0;
    for line in code.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        let tag = if body.starts_with("@@") {
            Some(StyleTag::Number)
        } else if body.starts_with("+++") || body.starts_with("---") {
            Some(StyleTag::Function)
        } else if body.starts_with('+') {
            Some(StyleTag::String)
        } else if body.starts_with('-') {
            Some(StyleTag::Keyword)
        } else if body.starts_with("diff ") || body.starts_with("index ") {
            Some(StyleTag::Comment)
        } else {
            None
        };
        if let Some(tag) = tag {
            sink.paint(start..start + body.len(), Paint::Tag(tag));
        }
        start += line.len();
    }
}

/// Byte ranges of `0..len` no token covers
pub fn unstyled_gaps(len: usize, tokens: &[Token]) -> Vec<Range<usize>> {
    let mut covered: Vec<&Range<usize>> = tokens.iter().map(|t| &t.range).collect();
    covered.sort_by_key(|r| r.start);

    let mut gaps = Vec::new();
    let mut pos = 0;
    for range in covered {
        if range.start > pos {
            gaps.push(pos..range.start.min(len));
        }
        pos = pos.max(range.end);
        if pos >= len {
            break;
        }
    }
    if pos < len {
        gaps.push(pos..len);
    }
    gaps.retain(|gap| !gap.is_empty());
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CodeClassifier {
        CodeClassifier::new(Arc::new(LanguageCatalog::builtin().unwrap())).unwrap()
    }

    /// Last paint covering `needle`'s first occurrence, as the fold would see it
    fn paint_of(code: &str, tokens: &[Token], needle: &str) -> Option<Paint> {
        let start = code.find(needle)?;
        let range = start..start + needle.len();
        tokens
            .iter()
            .rev()
            .find(|t| t.range.start <= range.start && t.range.end >= range.end)
            .map(|t| t.paint)
    }

    #[test]
    fn test_unknown_language_is_empty() {
        let c = classifier();
        assert!(c.classify("let x = 1;", "no-such-lang").is_empty());
        assert!(c.classify("", "rust").is_empty());
    }

    #[test]
    fn test_js_method_call_and_number() {
        let c = classifier();
        let code = "console.log(1)\n";
        let tokens = c.classify(code, "js");
        assert_eq!(paint_of(code, &tokens, "console"), Some(Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, "log"), Some(Paint::Tag(StyleTag::Function)));
        assert_eq!(paint_of(code, &tokens, "1"), Some(Paint::Tag(StyleTag::Number)));
    }

    #[test]
    fn test_storage_versus_keyword() {
        let c = classifier();
        let code = "const x = await f();";
        let tokens = c.classify(code, "javascript");
        assert_eq!(paint_of(code, &tokens, "const"), Some(Paint::Tag(StyleTag::Storage)));
        assert_eq!(paint_of(code, &tokens, "await"), Some(Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, "f"), Some(Paint::Tag(StyleTag::Function)));
    }

    #[test]
    fn test_comment_wins_over_later_passes() {
        let c = classifier();
        let code = "x = 1 // return foo(2) \"s\"\n";
        let tokens = c.classify(code, "java");
        let comment_start = code.find("//").unwrap();
        for token in &tokens {
            if token.range.end > comment_start {
                assert_eq!(token.paint, Paint::Tag(StyleTag::Comment), "{token:?}");
            }
        }
        assert_eq!(paint_of(code, &tokens, "1"), Some(Paint::Tag(StyleTag::Number)));
    }

    #[test]
    fn test_comment_marker_inside_string() {
        let c = classifier();
        let code = "fetch(\"http://x.com\"); foo(1);\n";
        let tokens = c.classify(code, "js");
        assert!(tokens.iter().all(|t| t.paint != Paint::Tag(StyleTag::Comment)));
        assert_eq!(
            paint_of(code, &tokens, "\"http://x.com\""),
            Some(Paint::Tag(StyleTag::String))
        );
        assert_eq!(paint_of(code, &tokens, "foo"), Some(Paint::Tag(StyleTag::Function)));
        assert_eq!(paint_of(code, &tokens, "1"), Some(Paint::Tag(StyleTag::Number)));
    }

    #[test]
    fn test_quote_inside_comment() {
        let c = classifier();
        let code = "// it's \"here\"\nlet y = 'z';\n";
        let tokens = c.classify(code, "js");
        let line = code.find('\n').unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.range == (0..line) && t.paint == Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "'z'"), Some(Paint::Tag(StyleTag::String)));
        assert_eq!(paint_of(code, &tokens, "let"), Some(Paint::Tag(StyleTag::Storage)));
    }

    #[test]
    fn test_rust_lifetimes_are_not_strings() {
        let c = classifier();
        let code = "fn f<'a>(x: &'a str) -> char { 'c' } // it's\n";
        let tokens = c.classify(code, "rust");
        assert_eq!(paint_of(code, &tokens, "// it's"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "'c'"), Some(Paint::Tag(StyleTag::String)));
        assert_eq!(paint_of(code, &tokens, "str"), Some(Paint::Tag(StyleTag::Support)));
    }

    #[test]
    fn test_yaml_hash_inside_quotes() {
        let c = classifier();
        let code = "color: \"#ff0000\"  # red\n";
        let tokens = c.classify(code, "yaml");
        assert_eq!(paint_of(code, &tokens, "\"#ff0000\""), Some(Paint::Tag(StyleTag::String)));
        assert_eq!(paint_of(code, &tokens, "# red"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "color"), Some(Paint::Key));
    }

    #[test]
    fn test_paint_is_clipped_around_comments() {
        let mut sink = TokenSink::default();
        sink.protect(4..8);
        sink.protect(10..12);
        sink.seal();
        sink.paint(0..14, Paint::Key);
        sink.paint(5..7, Paint::Tag(StyleTag::Number));
        let painted: Vec<_> = sink
            .tokens
            .iter()
            .filter(|t| t.paint == Paint::Key)
            .map(|t| t.range.clone())
            .collect();
        assert_eq!(painted, vec![0..4, 8..10, 12..14]);
        assert!(sink.tokens.iter().all(|t| t.paint != Paint::Tag(StyleTag::Number)));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let c = classifier();
        let code = "/* class Foo\n return */ int y;";
        let tokens = c.classify(code, "java");
        assert_eq!(paint_of(code, &tokens, "class"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "return"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "int"), Some(Paint::Tag(StyleTag::Keyword)));
    }

    #[test]
    fn test_entity_heuristics() {
        let c = classifier();
        let code = "class Widget extends Base implements Drawable {\n  Widget w = new Widget();\n}";
        let tokens = c.classify(code, "java");
        assert_eq!(paint_of(code, &tokens, "Base"), Some(Paint::Tag(StyleTag::Entity)));
        assert_eq!(paint_of(code, &tokens, "Drawable"), Some(Paint::Tag(StyleTag::Entity)));
        let decl = code.find("Widget").unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.range == (decl..decl + 6) && t.paint == Paint::Tag(StyleTag::Entity)));
        let annotated = code.find("Widget w").unwrap();
        assert!(tokens.iter().any(|t| t.range == (annotated..annotated + 6)));
    }

    #[test]
    fn test_type_annotation_skips_known_types() {
        let c = classifier();
        let code = "String name;";
        let tokens = c.classify(code, "java");
        assert_eq!(paint_of(code, &tokens, "String"), Some(Paint::Tag(StyleTag::Support)));
    }

    #[test]
    fn test_type_annotation_false_positive_is_kept() {
        // Two capitalised words then a terminator: the heuristic still fires
        let c = classifier();
        let code = "Hello world;";
        let tokens = c.classify(code, "java");
        assert_eq!(paint_of(code, &tokens, "Hello"), Some(Paint::Tag(StyleTag::Entity)));
    }

    #[test]
    fn test_keyword_call_is_not_function() {
        let c = classifier();
        let code = "if (x) { print(y) }";
        let tokens = c.classify(code, "python");
        assert_eq!(paint_of(code, &tokens, "if"), Some(Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, "print"), Some(Paint::Tag(StyleTag::Keyword)));
    }

    #[test]
    fn test_php_variables() {
        let c = classifier();
        let code = "$count = 3;";
        let tokens = c.classify(code, "php");
        assert_eq!(paint_of(code, &tokens, "$count"), Some(Paint::Tag(StyleTag::Variable)));
    }

    #[test]
    fn test_shell_comment_and_variable() {
        let c = classifier();
        let code = "echo ${HOME} # echo $PATH\n";
        let tokens = c.classify(code, "sh");
        assert_eq!(paint_of(code, &tokens, "${HOME}"), Some(Paint::Tag(StyleTag::Variable)));
        assert_eq!(paint_of(code, &tokens, "$PATH"), Some(Paint::Tag(StyleTag::Comment)));
    }

    #[test]
    fn test_vb_rem_comment() {
        let c = classifier();
        let code = "Dim x As Integer\nrem note here\n";
        let tokens = c.classify(code, "vb");
        assert_eq!(paint_of(code, &tokens, "rem note here"), Some(Paint::Tag(StyleTag::Comment)));
    }

    #[test]
    fn test_diff_lines() {
        let c = classifier();
        let code = concat!(
            "diff --git a/x b/x\n--- a/x\n+++ b/x\n",
            "@@ -1 +1 @@\n-removed\n+added\n context\n",
        );
        let tokens = c.classify(code, "diff");
        assert_eq!(paint_of(code, &tokens, "-removed"), Some(Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, "+added"), Some(Paint::Tag(StyleTag::String)));
        assert_eq!(paint_of(code, &tokens, "--- a/x"), Some(Paint::Tag(StyleTag::Function)));
        assert_eq!(paint_of(code, &tokens, "@@ -1 +1 @@"), Some(Paint::Tag(StyleTag::Number)));
        assert_eq!(paint_of(code, &tokens, "diff --git"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, " context"), None);
        // Line tokens never include the newline
        assert!(tokens.iter().all(|t| !code[t.range.clone()].contains('\n')));
    }

    #[test]
    fn test_html() {
        let c = classifier();
        let code = "<!-- <b> -->\n<a href=\"/x\" class='y'>link</a>";
        let tokens = c.classify(code, "html");
        assert_eq!(paint_of(code, &tokens, "<b>"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "a href"), None);
        let a = code.find("<a").unwrap() + 1;
        assert!(tokens
            .iter()
            .any(|t| t.range == (a..a + 1) && t.paint == Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, "href"), Some(Paint::Tag(StyleTag::Function)));
        assert_eq!(paint_of(code, &tokens, "\"/x\""), Some(Paint::Tag(StyleTag::String)));
        assert_eq!(paint_of(code, &tokens, "'y'"), Some(Paint::Tag(StyleTag::String)));
    }

    #[test]
    fn test_css() {
        let c = classifier();
        let code = "@media screen {\n.btn:hover {\n  color: #fff;\n  margin: 10px;\n}\n}\n/* .x */";
        let tokens = c.classify(code, "css");
        assert_eq!(paint_of(code, &tokens, "@media"), Some(Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, ".btn"), Some(Paint::Tag(StyleTag::Type)));
        assert_eq!(paint_of(code, &tokens, ":hover"), Some(Paint::Tag(StyleTag::Type)));
        assert_eq!(paint_of(code, &tokens, "margin"), Some(Paint::Tag(StyleTag::Function)));
        assert_eq!(paint_of(code, &tokens, "10px"), Some(Paint::Tag(StyleTag::Number)));
        assert_eq!(paint_of(code, &tokens, ".x"), Some(Paint::Tag(StyleTag::Comment)));
    }

    #[test]
    fn test_yaml_key_and_comment() {
        let c = classifier();
        let code = "key: value  # comment on\n";
        let tokens = c.classify(code, "yaml");
        assert_eq!(paint_of(code, &tokens, "key"), Some(Paint::Key));
        assert_eq!(paint_of(code, &tokens, "# comment on"), Some(Paint::Tag(StyleTag::Comment)));
        assert_eq!(paint_of(code, &tokens, "value"), None);
    }

    #[test]
    fn test_yaml_literals_and_anchors() {
        let c = classifier();
        let code = "base: &defaults\n  enabled: Yes\n  port: 8080\nprod: *defaults\n";
        let tokens = c.classify(code, "yml");
        assert_eq!(paint_of(code, &tokens, "&defaults"), Some(Paint::Tag(StyleTag::Type)));
        assert_eq!(paint_of(code, &tokens, "*defaults"), Some(Paint::Tag(StyleTag::Type)));
        assert_eq!(paint_of(code, &tokens, "Yes"), Some(Paint::Tag(StyleTag::Keyword)));
        assert_eq!(paint_of(code, &tokens, "8080"), Some(Paint::Tag(StyleTag::Number)));
        assert_eq!(paint_of(code, &tokens, "enabled"), Some(Paint::Key));
    }

    #[test]
    fn test_json_keys() {
        let c = classifier();
        let code = "{\n  \"name\": \"value\",\n  \"n\": -1.5e3,\n  \"ok\": true\n}";
        let tokens = c.classify(code, "json");
        assert_eq!(paint_of(code, &tokens, "\"name\""), Some(Paint::Key));
        assert_eq!(paint_of(code, &tokens, "\"value\""), Some(Paint::Tag(StyleTag::String)));
        assert_eq!(paint_of(code, &tokens, "-1.5e3"), Some(Paint::Tag(StyleTag::Number)));
        assert_eq!(paint_of(code, &tokens, "true"), Some(Paint::Tag(StyleTag::Keyword)));
    }

    #[test]
    fn test_python_docstring() {
        let c = classifier();
        let code = "def f():\n    \"\"\"Doc \"quoted\" here\"\"\"\n";
        let tokens = c.classify(code, "py");
        assert_eq!(
            paint_of(code, &tokens, "Doc \"quoted\" here"),
            Some(Paint::Tag(StyleTag::String))
        );
        assert_eq!(paint_of(code, &tokens, "def"), Some(Paint::Tag(StyleTag::Storage)));
    }

    #[test]
    fn test_unstyled_gaps() {
        let tokens = vec![
            Token::tag(2..4, StyleTag::String),
            Token::tag(3..6, StyleTag::Number),
            Token::tag(8..9, StyleTag::Keyword),
        ];
        assert_eq!(unstyled_gaps(10, &tokens), vec![0..2, 6..8, 9..10]);
        assert_eq!(unstyled_gaps(3, &[]), vec![0..3]);
        assert!(unstyled_gaps(0, &[]).is_empty());
    }
}
