//! Rust definition

use crate::syntax::language::LanguageSpec;

pub const RUST: LanguageSpec = LanguageSpec {
    types: Some(&[
        "String", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
        "u128", "usize", "f32", "f64", "bool", "char", "Option", "Result", "Vec", "Box",
    ]),
    // A char literal holds one char or one escape, so lifetimes never match
    string: concat!(
        r#""(?:[^"\\]|\\.)*""#,
        r#"|'(?:[^'\\\n]|\\(?:u\{[0-9a-fA-F]{1,6}\}|x[0-9a-fA-F]{2}|.))'"#,
        r##"|r#?"[\s\S]*?"#?"##,
    ),
    ..LanguageSpec::generic(
        &["rust", "rs"],
        &[
            "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
            "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
            "return", "Self", "self", "static", "struct", "super", "trait", "true", "type",
            "unsafe", "use", "where", "while", "async", "await", "dyn",
        ],
    )
};
