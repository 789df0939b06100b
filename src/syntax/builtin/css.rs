//! CSS definition (selectors and properties handled by the stylesheet family)

use crate::syntax::language::{Family, LanguageSpec};

pub const CSS: LanguageSpec = LanguageSpec {
    comments: &[r"/\*[\s\S]*?\*/"],
    number: r"\b\d+(?:\.\d+)?(?:px|em|rem|vh|vw|%|s|ms)?\b",
    ..LanguageSpec::special(&["css"], Family::Stylesheet)
};
