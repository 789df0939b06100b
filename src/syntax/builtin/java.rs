//! Java definition

use crate::syntax::language::{LanguageSpec, DOUBLE_QUOTED_STRING};

pub const JAVA: LanguageSpec = LanguageSpec {
    types: Some(&[
        "String", "Integer", "Double", "Float", "Boolean", "Character", "Byte", "Short",
        "Long", "Object", "Array", "List", "Map", "Set",
    ]),
    string: DOUBLE_QUOTED_STRING,
    ..LanguageSpec::generic(
        &["java"],
        &[
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
            "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
            "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
            "int", "interface", "long", "native", "new", "package", "private", "protected",
            "public", "return", "short", "static", "strictfp", "super", "switch",
            "synchronized", "this", "throw", "throws", "transient", "try", "void", "volatile",
            "while", "System", "out", "println", "print",
        ],
    )
};
