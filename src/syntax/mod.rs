//! Syntax and styling module
//!
//! This module provides the styling infrastructure used for:
//! - Markdown structure passes (style attributes and the fold)
//! - Embedded code classification (languages, patterns, tags)

mod builtin;
mod catalog;
mod classifier;
mod language;
mod rules;
mod style;
mod tokens;

pub use catalog::LanguageCatalog;
pub use classifier::{unstyled_gaps, CodeClassifier, Paint, Token};
pub use language::{Family, LanguageDefinition, LanguageSpec};
pub use rules::{char_at, char_before, PatternRule};
pub use style::{
    intersects, system, Annotation, Color, Font, FontFamily, Slant, Style, StyledRun, StyledRuns,
    Weight,
};
pub use tokens::{palette, StyleTag};
