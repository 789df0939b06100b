//! JavaScript and JSX definitions

use crate::syntax::language::{LanguageSpec, QUOTED_OR_TEMPLATE_STRING};

const KEYWORDS: &[&str] = &[
    "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
    "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
    "async", "console", "log", "window", "document",
];

const TYPES: &[&str] = &[
    "Array", "Object", "String", "Number", "Boolean", "Function", "Promise", "Map", "Set",
];

const JSX_KEYWORDS: &[&str] = &[
    "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
    "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
    "async", "React", "useState", "useEffect", "useContext", "props", "state", "render",
];

const JSX_TYPES: &[&str] = &[
    "Array", "Object", "String", "Number", "Boolean", "Function", "Promise", "Map", "Set",
    "Component", "Element",
];

pub const JAVASCRIPT: LanguageSpec = LanguageSpec {
    types: Some(TYPES),
    string: QUOTED_OR_TEMPLATE_STRING,
    ..LanguageSpec::generic(&["javascript", "js"], KEYWORDS)
};

pub const JSX: LanguageSpec = LanguageSpec {
    types: Some(JSX_TYPES),
    string: QUOTED_OR_TEMPLATE_STRING,
    ..LanguageSpec::generic(&["jsx"], JSX_KEYWORDS)
};
