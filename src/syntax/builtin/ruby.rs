//! Ruby definition

use crate::syntax::language::{LanguageSpec, HASH_COMMENTS};

pub const RUBY: LanguageSpec = LanguageSpec {
    types: Some(&[
        "String", "Integer", "Float", "Array", "Hash", "Symbol", "Object", "NilClass",
        "TrueClass", "FalseClass",
    ]),
    comments: HASH_COMMENTS,
    ..LanguageSpec::generic(
        &["ruby", "rb"],
        &[
            "BEGIN", "END", "alias", "and", "begin", "break", "case", "class", "def",
            "defined?", "do", "else", "elsif", "end", "ensure", "false", "for", "if", "in",
            "module", "next", "nil", "not", "or", "redo", "rescue", "retry", "return", "self",
            "super", "then", "true", "undef", "unless", "until", "when", "while", "yield",
            "puts", "print", "require",
        ],
    )
};
