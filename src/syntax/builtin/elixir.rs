//! Elixir definition

use crate::syntax::language::{LanguageSpec, HASH_COMMENTS};
use super::python::PYTHON_STRING;

pub const ELIXIR: LanguageSpec = LanguageSpec {
    types: Some(&["String", "Integer", "Float", "List", "Map", "Tuple", "Atom"]),
    string: PYTHON_STRING,
    comments: HASH_COMMENTS,
    ..LanguageSpec::generic(
        &["elixir", "ex", "exs"],
        &[
            "def", "defp", "defmodule", "defmacro", "defstruct", "do", "end", "fn", "when",
            "case", "cond", "if", "else", "receive", "after", "try", "catch", "rescue", "raise",
            "alias", "import", "require", "use", "with", "quote", "unquote", "true", "false",
            "nil",
        ],
    )
};
