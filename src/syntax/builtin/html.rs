//! HTML definition (tags and attributes handled by the markup family)

use crate::syntax::language::{Family, LanguageSpec};

pub const HTML: LanguageSpec = LanguageSpec {
    comments: &[r"<!--[\s\S]*?-->"],
    ..LanguageSpec::special(&["html"], Family::Markup)
};
