//! Python definition

use crate::syntax::language::{LanguageSpec, HASH_COMMENTS};

/// Triple-quoted strings first so a docstring is not split into `""` pairs
pub const PYTHON_STRING: &str =
    r#""""[\s\S]*?"""|'''[\s\S]*?'''|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#;

pub const PYTHON: LanguageSpec = LanguageSpec {
    types: Some(&[
        "int", "float", "str", "bool", "list", "dict", "tuple", "set", "frozenset", "bytes",
        "bytearray",
    ]),
    string: PYTHON_STRING,
    comments: HASH_COMMENTS,
    ..LanguageSpec::generic(
        &["python", "py"],
        &[
            "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
            "except", "exec", "finally", "for", "from", "global", "if", "import", "in", "is",
            "lambda", "not", "or", "pass", "print", "raise", "return", "try", "while", "with",
            "yield", "True", "False", "None", "async", "await", "nonlocal",
        ],
    )
};
