//! Go definition

use crate::syntax::language::LanguageSpec;

pub const GO: LanguageSpec = LanguageSpec {
    types: Some(&[
        "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32",
        "uint64", "uintptr", "byte", "rune", "float32", "float64", "complex64", "complex128",
        "bool", "error",
    ]),
    string: r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`[\s\S]*?`"#,
    ..LanguageSpec::generic(
        &["go"],
        &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
            "package", "range", "return", "select", "struct", "switch", "type", "var", "true",
            "false", "nil", "iota",
        ],
    )
};
