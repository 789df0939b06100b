//! AppleScript definition

use crate::syntax::language::{LanguageSpec, DOUBLE_QUOTED_STRING};

pub const APPLESCRIPT: LanguageSpec = LanguageSpec {
    types: Some(&[
        "integer", "real", "text", "string", "list", "record", "date", "boolean",
    ]),
    string: DOUBLE_QUOTED_STRING,
    comments: &[r"--.*$", r"\(\*[\s\S]*?\*\)"],
    ..LanguageSpec::generic(
        &["applescript", "osascript"],
        &[
            "tell", "end", "if", "then", "else", "repeat", "with", "without", "of", "to", "set",
            "get", "property", "script", "on", "try", "error", "return", "considering",
            "ignoring", "activate", "display", "do", "shell",
        ],
    )
};
