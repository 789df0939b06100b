//! C# definition

use crate::syntax::language::{LanguageSpec, DOUBLE_QUOTED_STRING};

// "chsarp" is a common misspelling that shows up in real documents
pub const CSHARP: LanguageSpec = LanguageSpec {
    types: Some(&[
        "string", "int", "double", "float", "bool", "char", "byte", "short", "long",
        "decimal", "object", "Array", "List", "Dictionary",
    ]),
    string: DOUBLE_QUOTED_STRING,
    ..LanguageSpec::generic(
        &["csharp", "c#", "cs", "chsarp"],
        &[
            "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char",
            "checked", "class", "const", "continue", "decimal", "default", "delegate", "do",
            "double", "else", "enum", "event", "explicit", "extern", "false", "finally",
            "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int",
            "interface", "internal", "is", "lock", "long", "namespace", "new", "null", "object",
            "operator", "out", "override", "params", "private", "protected", "public",
            "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc",
            "static", "string", "struct", "switch", "this", "throw", "true", "try", "typeof",
            "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual", "void",
            "volatile", "while", "Console", "WriteLine", "Write",
        ],
    )
};
