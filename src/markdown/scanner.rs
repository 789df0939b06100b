//! Markdown structure scanner
//!
//! Runs the structural passes over a whole document in a fixed order and
//! returns them as an ordered annotation list (fold it left to right).
//! Code blocks are located first; every later pass skips matches that
//! touch code. Styling of the code blocks themselves is left to the
//! caller, which applies it after everything here.

use std::ops::Range;

use super::blocks::{CodeRegions, FencedBlock};
use crate::error::Result;
use crate::syntax::{char_at, char_before, Annotation, PatternRule, Style};
use crate::theme::Theme;

/// Structural annotations plus the code spans they avoided
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Base style first, then one entry per styled match in pass order
    pub annotations: Vec<Annotation>,
    pub code: CodeRegions,
}

/// Compiled markdown patterns
#[derive(Debug, Clone)]
pub struct MarkdownScanner {
    fenced: PatternRule,
    indented: PatternRule,
    header: PatternRule,
    alt_header_1: PatternRule,
    alt_header_2: PatternRule,
    bold_italic: PatternRule,
    bold: PatternRule,
    italic_star: PatternRule,
    italic_underscore: PatternRule,
    inline_code: PatternRule,
    image: PatternRule,
    link: PatternRule,
    autolink: PatternRule,
    email: PatternRule,
    strike: PatternRule,
    bullet: PatternRule,
    numbered: PatternRule,
    blockquote: PatternRule,
    rule: PatternRule,
    escape: PatternRule,
    html: PatternRule,
}

impl MarkdownScanner {
    /// Compile all patterns; fails only on a bad built-in pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            fenced: PatternRule::new(
                "fenced_code",
                r"```([a-zA-Z0-9_+#.-]+)?\s*\n([\s\S]*?)```",
            )?,
            indented: PatternRule::multiline("indented_code", r"^(    |\t)(.*)$")?,
            header: PatternRule::multiline("header", r"^(#{1,6})[ \t]+(.*)$")?,
            alt_header_1: PatternRule::multiline("alt_header_1", r"^(.+)\n=+[ \t]*$")?,
            alt_header_2: PatternRule::multiline("alt_header_2", r"^(.+)\n-+[ \t]*$")?,
            bold_italic: PatternRule::new(
                "bold_italic",
                r"\*\*\*([^*\n]+?)\*\*\*|___([^_\n]+?)___",
            )?,
            bold: PatternRule::new("bold", r"\*\*([^*\n]+?)\*\*|__([^_\n]+?)__")?,
            italic_star: PatternRule::new("italic", r"\*([^*\n]+)\*")?,
            italic_underscore: PatternRule::new("italic", r"_([^_\n]+)_")?,
            inline_code: PatternRule::new("inline_code", r"`([^`\n]+)`")?,
            image: PatternRule::new("image", r"!\[([^\]]*)\]\(([^)]+)\)")?,
            link: PatternRule::new("link", r"\[([^\]]+)\]\(([^)]+)\)")?,
            autolink: PatternRule::new("autolink", r"<(https?://[^>]+)>")?,
            email: PatternRule::new(
                "email",
                r"<([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})>",
            )?,
            strike: PatternRule::new("strikethrough", r"~~(.*?)~~")?,
            bullet: PatternRule::multiline("bullet_list", r"^([ \t]*)[-*+][ \t]")?,
            numbered: PatternRule::multiline("numbered_list", r"^([ \t]*)\d+\.[ \t]")?,
            blockquote: PatternRule::multiline("blockquote", r"^(>+)[ \t].*$")?,
            rule: PatternRule::multiline("horizontal_rule", r"^[ \t]*(-{3,}|\*{3,}|_{3,})[ \t]*$")?,
            escape: PatternRule::new("escape", r"\\([\\`*_{}\[\]()#+\-.!])")?,
            html: PatternRule::new("html", r"<[^>]+>")?,
        })
    }

    /// Locate fenced blocks, then indented lines outside them
    pub fn code_regions(&self, text: &str) -> CodeRegions {
        let fenced: Vec<FencedBlock> = self
            .fenced
            .pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let content = caps.get(2)?;
                Some(FencedBlock {
                    range: whole.range(),
                    language: caps.get(1).map(|m| m.range()),
                    content: content.range(),
                })
            })
            .collect();

        let mut regions = CodeRegions {
            fenced,
            indented: Vec::new(),
        };
        regions.indented = self
            .indented
            .find_all(text)
            .into_iter()
            .filter(|line| !regions.in_fenced(line))
            .collect();
        regions
    }

    /// Run every structural pass over `text`
    pub fn scan(&self, text: &str, theme: &Theme) -> Scan {
        let code = self.code_regions(text);
        let mut pass = Pass {
            code: &code,
            annotations: Vec::new(),
        };

        if !text.is_empty() {
            pass.annotations.push(Annotation::new(
                0..text.len(),
                Style::fg(theme.base_color).with_font(theme.base_font),
            ));
        }

        for caps in self.header.pattern.captures_iter(text) {
            let (Some(whole), Some(hashes)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            pass.paint(whole.range(), header_style(theme, hashes.len()));
        }
        pass.paint_all(self.alt_header_1.find_all(text), header_style(theme, 1));
        pass.paint_all(self.alt_header_2.find_all(text), header_style(theme, 2));

        pass.paint_all(
            self.bold_italic.find_all(text),
            Style::default().with_bold().with_italic(),
        );
        pass.paint_all(self.bold.find_all(text), Style::default().with_bold());
        let italic = Style::default().with_italic();
        pass.paint_all(emphasis(&self.italic_star, text, '*'), italic);
        pass.paint_all(emphasis(&self.italic_underscore, text, '_'), italic);

        // Inline code is only suppressed by fenced blocks, by start offset
        let inline_style = Style::fg(theme.code_fg)
            .with_bg(theme.code_bg)
            .with_font(theme.code_font);
        for range in self.inline_code.find_all(text) {
            if !code.starts_in_fenced(range.start) {
                pass.annotations.push(Annotation::new(range, inline_style));
            }
        }

        pass.paint_all(
            self.image.find_all(text),
            Style::fg(theme.image_color).with_bold(),
        );
        let link = Style::fg(theme.link_color).with_underline();
        for rule in [&self.link, &self.autolink, &self.email] {
            pass.paint_all(rule.find_all(text), link);
        }
        pass.paint_all(
            self.strike.find_all(text),
            Style::fg(theme.strike_color).with_strikethrough(),
        );

        let list = Style::fg(theme.list_color).with_font(theme.list_font);
        pass.paint_all(self.bullet.find_all(text), list);
        pass.paint_all(self.numbered.find_all(text), list);
        pass.paint_all(
            self.blockquote.find_all(text),
            Style::fg(theme.blockquote_color).with_font(theme.blockquote_font),
        );
        pass.paint_all(
            self.rule.find_all(text),
            Style::fg(theme.rule_color).with_bold(),
        );
        pass.paint_all(self.escape.find_all(text), Style::fg(theme.escape_color));
        pass.paint_all(
            self.html.find_all(text),
            Style::fg(theme.html_color).with_font(theme.html_font),
        );

        let annotations = pass.annotations;
        Scan { annotations, code }
    }
}

/// Accumulates one scan's annotations, skipping anything touching code
struct Pass<'a> {
    code: &'a CodeRegions,
    annotations: Vec<Annotation>,
}

impl Pass<'_> {
    fn paint(&mut self, range: Range<usize>, style: Style) {
        if range.is_empty() || self.code.in_code(&range) {
            return;
        }
        self.annotations.push(Annotation::new(range, style));
    }

    fn paint_all(&mut self, ranges: Vec<Range<usize>>, style: Style) {
        for range in ranges {
            self.paint(range, style);
        }
    }
}

fn header_style(theme: &Theme, level: usize) -> Style {
    Style::fg(theme.header_color).with_font(theme.header_font(level))
}

/// Single-marker emphasis not directly touching another `marker`
fn emphasis(rule: &PatternRule, text: &str, marker: char) -> Vec<Range<usize>> {
    rule.captures_guarded(text, |text, caps| {
        caps.get(0).is_some_and(|m| {
            char_before(text, m.start()) != Some(marker) && char_at(text, m.end()) != Some(marker)
        })
    })
    .iter()
    .filter_map(|caps| caps.get(0).map(|m| m.range()))
    .collect()
}
