//! Swift definition

use crate::syntax::language::{LanguageSpec, DOUBLE_QUOTED_STRING};

pub const SWIFT: LanguageSpec = LanguageSpec {
    types: Some(&[
        "Any", "AnyObject", "AnyClass", "String", "Int", "Double", "Float", "Bool", "Array",
        "Dictionary", "Set", "Optional", "Result", "Error",
    ]),
    string: DOUBLE_QUOTED_STRING,
    ..LanguageSpec::generic(
        &["swift"],
        &[
            "associatedtype", "class", "deinit", "enum", "extension", "func", "import", "init",
            "inout", "internal", "let", "operator", "private", "protocol", "public", "static",
            "struct", "subscript", "typealias", "var", "break", "case", "continue", "default",
            "defer", "do", "else", "fallthrough", "for", "guard", "if", "in", "repeat",
            "return", "switch", "where", "while", "as", "catch", "false", "is", "nil",
            "rethrows", "super", "self", "Self", "throw", "throws", "true", "try", "async",
            "await", "print",
        ],
    )
};
