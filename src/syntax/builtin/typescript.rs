//! TypeScript and TSX definitions

use crate::syntax::language::{LanguageSpec, QUOTED_OR_TEMPLATE_STRING};

const KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "asserts", "async", "await", "boolean", "break", "case", "catch",
    "class", "const", "continue", "declare", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "from", "function", "get", "if",
    "implements", "import", "in", "infer", "instanceof", "interface", "is", "keyof", "let",
    "module", "namespace", "never", "new", "null", "number", "object", "of", "package",
    "private", "protected", "public", "readonly", "require", "return", "set", "static",
    "string", "super", "switch", "symbol", "this", "throw", "true", "try", "type", "typeof",
    "undefined", "unique", "unknown", "var", "void", "while", "with", "yield",
];

const TYPES: &[&str] = &[
    "Array", "Object", "String", "Number", "Boolean", "Function", "Promise", "Map", "Set",
    "any", "unknown", "never", "void",
];

const TSX_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "asserts", "async", "await", "boolean", "break", "case", "catch",
    "class", "const", "continue", "declare", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "from", "function", "get", "if",
    "implements", "import", "in", "infer", "instanceof", "interface", "is", "keyof", "let",
    "module", "namespace", "never", "new", "null", "number", "object", "of", "package",
    "private", "protected", "public", "readonly", "require", "return", "set", "static",
    "string", "super", "switch", "symbol", "this", "throw", "true", "try", "type", "typeof",
    "undefined", "unique", "unknown", "var", "void", "while", "with", "yield", "React",
    "useState", "useEffect", "useContext", "props", "state", "render",
];

const TSX_TYPES: &[&str] = &[
    "Array", "Object", "String", "Number", "Boolean", "Function", "Promise", "Map", "Set",
    "Component", "Element", "any", "unknown", "never", "void",
];

pub const TYPESCRIPT: LanguageSpec = LanguageSpec {
    types: Some(TYPES),
    string: QUOTED_OR_TEMPLATE_STRING,
    ..LanguageSpec::generic(&["typescript", "ts"], KEYWORDS)
};

pub const TSX: LanguageSpec = LanguageSpec {
    types: Some(TSX_TYPES),
    string: QUOTED_OR_TEMPLATE_STRING,
    ..LanguageSpec::generic(&["tsx"], TSX_KEYWORDS)
};
