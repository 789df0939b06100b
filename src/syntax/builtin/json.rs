//! JSON definition

use crate::syntax::language::{Family, LanguageSpec, DOUBLE_QUOTED_STRING};

pub const JSON: LanguageSpec = LanguageSpec {
    names: &["json"],
    family: Family::Json,
    keywords: &["true", "false", "null"],
    types: None,
    string: DOUBLE_QUOTED_STRING,
    comments: &[],
    variable: None,
    number: r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?",
};
