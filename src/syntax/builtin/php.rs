//! PHP definition

use crate::syntax::language::LanguageSpec;

pub const PHP: LanguageSpec = LanguageSpec {
    types: Some(&[
        "string", "int", "float", "bool", "array", "object", "resource", "null", "mixed",
    ]),
    variable: Some(r"\$[a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*"),
    ..LanguageSpec::generic(
        &["php"],
        &[
            "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
            "clone", "const", "continue", "declare", "default", "die", "do", "echo", "else",
            "elseif", "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch",
            "endwhile", "eval", "exit", "extends", "final", "finally", "for", "foreach",
            "function", "global", "goto", "if", "implements", "include", "include_once",
            "instanceof", "insteadof", "interface", "isset", "list", "namespace", "new", "or",
            "print", "private", "protected", "public", "require", "require_once", "return",
            "static", "switch", "throw", "trait", "try", "unset", "use", "var", "while", "xor",
            "yield",
        ],
    )
};
