//! Highlighting entry point
//!
//! Ties the markdown scanner, the code classifier and the theme together.
//! A pass is a pure function of (text, theme): the full annotation list is
//! rebuilt every time and folded into runs.

use std::sync::Arc;

use crate::error::Result;
use crate::markdown::{FencedBlock, MarkdownScanner};
use crate::syntax::{
    system, unstyled_gaps, Annotation, CodeClassifier, LanguageCatalog, Style, StyledRun,
    StyledRuns,
};
use crate::theme::Theme;

/// Document text with its final per-position styles
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedText {
    runs: StyledRuns,
}

impl HighlightedText {
    /// Merged style at a byte offset
    pub fn style_at(&self, pos: usize) -> Option<&Style> {
        self.runs.style_at(pos)
    }

    /// Coalesced runs covering the whole text
    pub fn runs(&self) -> &[StyledRun] {
        self.runs.runs()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Markdown highlighter with embedded code support
#[derive(Debug, Clone)]
pub struct Highlighter {
    scanner: MarkdownScanner,
    classifier: CodeClassifier,
}

impl Highlighter {
    /// Compile every built-in pattern
    ///
    /// An error here is a bug in a built-in pattern; abort startup.
    pub fn new() -> Result<Self> {
        let catalog = Arc::new(LanguageCatalog::builtin()?);
        Self::with_catalog(catalog)
    }

    /// Highlighter over a custom language catalog
    pub fn with_catalog(catalog: Arc<LanguageCatalog>) -> Result<Self> {
        Ok(Self {
            scanner: MarkdownScanner::new()?,
            classifier: CodeClassifier::new(catalog)?,
        })
    }

    pub fn classifier(&self) -> &CodeClassifier {
        &self.classifier
    }

    pub fn scanner(&self) -> &MarkdownScanner {
        &self.scanner
    }

    /// Ordered annotations for `text`
    ///
    /// Base style, structural passes, then fenced blocks and indented code.
    pub fn annotations(&self, text: &str, theme: &Theme) -> Vec<Annotation> {
        let scan = self.scanner.scan(text, theme);
        let mut annotations = scan.annotations;

        for block in &scan.code.fenced {
            self.fenced_block(text, block, theme, &mut annotations);
        }

        let indented = Style::fg(theme.code_fg)
            .with_bg(theme.code_bg)
            .with_font(theme.code_font);
        annotations.extend(
            scan.code
                .indented
                .iter()
                .map(|line| Annotation::new(line.clone(), indented)),
        );

        tracing::debug!(
            len = text.len(),
            annotations = annotations.len(),
            fenced = scan.code.fenced.len(),
            indented = scan.code.indented.len(),
            "highlighted document"
        );
        annotations
    }

    /// Highlight `text` and fold the result
    pub fn highlight(&self, text: &str, theme: &Theme) -> HighlightedText {
        let annotations = self.annotations(text, theme);
        HighlightedText {
            runs: StyledRuns::fold(text.len(), &annotations),
        }
    }

    fn fenced_block(
        &self,
        text: &str,
        block: &FencedBlock,
        theme: &Theme,
        out: &mut Vec<Annotation>,
    ) {
        out.push(Annotation::new(block.range.clone(), Style::bg(theme.code_bg)));

        let content = block.content.clone();
        if !content.is_empty() {
            out.push(Annotation::new(content.clone(), Style::font(theme.code_font)));
            let code = block.code(text);
            let language = block.language_name(text);
            match language.filter(|name| self.classifier.catalog().supports(name)) {
                Some(language) => {
                    let tokens = self.classifier.classify(code, &language);
                    let colors = &theme.code_colors;
                    out.extend(tokens.iter().map(|token| {
                        Annotation::new(token.range.clone(), Style::fg(colors.paint(token.paint)))
                            .offset(content.start)
                    }));
                    out.extend(unstyled_gaps(code.len(), &tokens).into_iter().map(|gap| {
                        Annotation::new(gap, Style::fg(theme.code_fg)).offset(content.start)
                    }));
                }
                None => out.push(Annotation::new(content, Style::fg(theme.code_fg))),
            }
        }

        let fence = Style::fg(system::GRAY).with_font(theme.code_font);
        out.push(Annotation::new(block.opening_fence(), fence));
        if let Some(tag) = &block.language {
            out.push(Annotation::new(
                tag.clone(),
                Style::fg(system::ORANGE).with_font(theme.code_font),
            ));
        }
        if let Some(closing) = block.closing_fence(text) {
            out.push(Annotation::new(closing, fence));
        }
    }
}
