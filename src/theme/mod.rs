//! Markdown themes
//!
//! A `Theme` bundles the colors and fonts of every markdown construct
//! together with the resolved colors for embedded code. Themes come either
//! from the built-in standard set or from a VS Code style theme file.

mod cache;
mod file;
mod resolver;

pub use cache::{BuiltinThemes, ThemeCache, ThemeDir, ThemeLoader, LIGHT_THEME_JSON};
pub use file::{ScopeList, ScopeTable, ThemeFile, TokenColor, TokenSettings};
pub use resolver::{resolve, ColorResolver, KEY_COLOR};

use crate::syntax::{system, Color, Font};

/// Default body text size
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Level 1 headers are this much larger than body text
const HEADER_SIZE_STEP: f32 = 6.0;

/// Colors and fonts for every markdown construct
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub base_font: Font,
    pub base_color: Color,

    pub header_color: Color,
    /// Size of a level 1 header; each level below is 2 points smaller
    pub header_base_size: f32,

    pub code_font: Font,
    pub code_fg: Color,
    pub code_bg: Color,

    pub link_color: Color,
    pub image_color: Color,
    pub list_color: Color,
    pub list_font: Font,
    pub blockquote_color: Color,
    pub blockquote_font: Font,
    pub rule_color: Color,
    pub strike_color: Color,
    pub escape_color: Color,
    pub html_color: Color,
    pub html_font: Font,

    /// Embedded code colors
    pub code_colors: ColorResolver,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard(DEFAULT_FONT_SIZE)
    }
}

impl Theme {
    /// The built-in light theme
    pub fn standard(base_font_size: f32) -> Self {
        let size = base_font_size;
        let small = (size - 2.0).max(1.0);
        Self {
            name: "standard".to_string(),
            base_font: Font::monospace(size),
            base_color: system::LABEL,
            header_color: system::BLUE,
            header_base_size: size + HEADER_SIZE_STEP,
            code_font: Font::monospace(small),
            code_fg: system::RED,
            code_bg: system::CONTROL_BACKGROUND,
            link_color: system::BLUE,
            image_color: system::PURPLE,
            list_color: system::ORANGE,
            list_font: Font::system(size).bold(),
            blockquote_color: system::GRAY,
            blockquote_font: Font::monospace(size).italic(),
            rule_color: system::GRAY,
            strike_color: system::GRAY,
            escape_color: system::YELLOW,
            html_color: system::PINK,
            html_font: Font::monospace(small),
            code_colors: ColorResolver::default(),
        }
    }

    /// Derive a theme from a VS Code style theme file
    ///
    /// Every color has a GitHub Light default for when the file lacks it.
    pub fn from_file(file: &ThemeFile, base_font_size: f32) -> Self {
        let size = base_font_size;
        let scopes = file.scope_table();
        let ui = |key: &str, default: Color| file.ui_color(key).unwrap_or(default);
        let scoped = |scope: &str, default: Color| scopes.lookup(scope).unwrap_or(default);
        let code_font = Font::monospace(size);

        Self {
            name: file.name.clone(),
            base_font: Font::monospace(size),
            base_color: ui("editor.foreground", Color::rgb(0x24, 0x29, 0x2e)),
            header_color: scoped("markup.heading", Color::rgb(0x00, 0x5c, 0xc5)),
            header_base_size: size + HEADER_SIZE_STEP,
            code_font,
            code_fg: ui("editor.foreground", Color::rgb(0x24, 0x29, 0x2e)),
            code_bg: ui("textCodeBlock.background", Color::rgb(0xf6, 0xf8, 0xfa)),
            link_color: ui("textLink.foreground", Color::rgb(0x03, 0x66, 0xd6)),
            image_color: scoped("markup.inserted", Color::rgb(0x6f, 0x42, 0xc1)),
            list_color: scoped(
                "punctuation.definition.list.begin.markdown",
                Color::rgb(0xe3, 0x62, 0x09),
            ),
            list_font: Font::system(size).bold(),
            blockquote_color: scoped("markup.quote", Color::rgb(0x22, 0x86, 0x3a)),
            blockquote_font: Font::monospace(size),
            rule_color: ui("textSeparator.foreground", Color::rgb(0xd1, 0xd5, 0xda)),
            strike_color: scoped("markup.strikethrough", Color::rgb(0x6a, 0x73, 0x7d)),
            escape_color: scoped("constant.character.escape", Color::rgb(0x22, 0x86, 0x3a)),
            html_color: scoped("meta.tag.sgml.html", Color::rgb(0x6f, 0x42, 0xc1)),
            html_font: code_font,
            code_colors: ColorResolver::new(Some(&scopes)),
        }
    }

    /// Header size for a level; never smaller than body text
    pub fn header_font_size(&self, level: usize) -> f32 {
        let level = level.clamp(1, 6);
        (self.header_base_size - 2.0 * (level - 1) as f32).max(self.base_font.size)
    }

    /// Bold system font at the level's size
    pub fn header_font(&self, level: usize) -> Font {
        Font::system(self.header_font_size(level)).bold()
    }
}
