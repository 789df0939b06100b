//! YAML definition (keys, anchors and literals handled by the key-value family)

use crate::syntax::language::{Family, LanguageSpec, HASH_COMMENTS, QUOTED_STRING, SIGNED_NUMBER};

pub const YAML: LanguageSpec = LanguageSpec {
    names: &["yaml", "yml"],
    family: Family::KeyValue,
    keywords: &["true", "false", "null", "yes", "no", "on", "off"],
    types: None,
    string: QUOTED_STRING,
    comments: HASH_COMMENTS,
    variable: None,
    number: SIGNED_NUMBER,
};
