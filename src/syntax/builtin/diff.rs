//! Diff / patch definition (line-prefix coloring)

use crate::syntax::language::{Family, LanguageSpec};

pub const DIFF: LanguageSpec = LanguageSpec::special(&["diff", "git", "patch"], Family::Diff);
