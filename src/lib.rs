//! mdhighlight - markdown and fenced-code syntax highlighting
//!
//! Given document text and a theme, produces the style of every byte:
//! markdown structure (headers, emphasis, links, lists, ...) plus
//! per-language coloring inside fenced code blocks.
//!
//! ```no_run
//! use mdhighlight::{Config, Highlighter, ThemeCache};
//!
//! let config = Config::load();
//! let themes = ThemeCache::default();
//! let theme = config.resolve_theme(&themes);
//! let highlighter = Highlighter::new().expect("built-in patterns compile");
//! let text = "# Title\n```js\nconsole.log(1)\n```\n";
//! for run in highlighter.highlight(text, &theme).runs() {
//!     println!("{:?} {:?}", run.range, run.style.fg);
//! }
//! ```

pub mod config;
pub mod error;
pub mod highlight;
pub mod markdown;
pub mod syntax;
pub mod theme;

pub use config::Config;
pub use error::{HighlightError, Result};
pub use highlight::{HighlightedText, Highlighter};
pub use markdown::MarkdownScanner;
pub use syntax::{
    Annotation, CodeClassifier, Color, Font, LanguageCatalog, Style, StyleTag, StyledRun,
};
pub use theme::{ColorResolver, Theme, ThemeCache, ThemeFile};
