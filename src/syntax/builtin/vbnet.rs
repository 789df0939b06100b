//! VB.NET definition

use crate::syntax::language::LanguageSpec;

pub const VBNET: LanguageSpec = LanguageSpec {
    types: Some(&[
        "Integer", "String", "Boolean", "Double", "Decimal", "Object", "List", "Dictionary",
        "DateTime", "Byte", "Short", "Long", "Char",
    ]),
    string: r#""(?:[^"]|"")*""#,
    comments: &[r"'.*$", r"(?i)\bREM\b.*$"],
    ..LanguageSpec::generic(
        &["vbnet", "vb"],
        &[
            "Dim", "As", "Integer", "String", "Boolean", "Double", "Decimal", "Sub", "Function",
            "End", "If", "Then", "Else", "ElseIf", "While", "For", "Each", "In", "Next",
            "Return", "Public", "Private", "Protected", "Friend", "Class", "Module", "Imports",
            "Namespace", "Try", "Catch", "Finally", "Throw", "Select", "Case", "New", "Me",
            "MyBase", "MyClass", "Not", "And", "Or", "True", "False", "Nothing",
        ],
    )
};
