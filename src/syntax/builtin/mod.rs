//! Built-in language definitions
//!
//! Pure data: each module exports one or more `LanguageSpec`s. The
//! catalog compiles every entry of `ALL_LANGUAGES` at startup.

mod applescript;
mod csharp;
mod css;
mod diff;
mod elixir;
mod go;
mod html;
mod java;
mod javascript;
mod json;
mod php;
mod python;
mod ruby;
mod rust;
mod shell;
mod sql;
mod swift;
mod typescript;
mod vbnet;
mod yaml;

use super::language::LanguageSpec;

/// Every built-in language
pub const ALL_LANGUAGES: &[LanguageSpec] = &[
    javascript::JAVASCRIPT,
    javascript::JSX,
    typescript::TYPESCRIPT,
    typescript::TSX,
    swift::SWIFT,
    php::PHP,
    java::JAVA,
    csharp::CSHARP,
    shell::SHELL,
    python::PYTHON,
    json::JSON,
    diff::DIFF,
    elixir::ELIXIR,
    vbnet::VBNET,
    applescript::APPLESCRIPT,
    ruby::RUBY,
    go::GO,
    rust::RUST,
    sql::SQL,
    yaml::YAML,
    html::HTML,
    css::CSS,
];
