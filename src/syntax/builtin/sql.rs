//! SQL definition

use crate::syntax::language::{LanguageSpec, SIGNED_NUMBER};

pub const SQL: LanguageSpec = LanguageSpec {
    types: Some(&[
        "INT", "INTEGER", "VARCHAR", "TEXT", "DATE", "DATETIME", "BOOLEAN", "FLOAT", "DOUBLE",
        "DECIMAL", "NUMERIC", "SERIAL", "BIGINT", "SMALLINT", "JSON", "UUID",
    ]),
    comments: &[r"--.*$", r"/\*[\s\S]*?\*/"],
    number: SIGNED_NUMBER,
    ..LanguageSpec::generic(
        &["sql"],
        &[
            "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE",
            "CREATE", "TABLE", "ALTER", "ADD", "DROP", "PRIMARY", "KEY", "FOREIGN", "NOT",
            "NULL", "JOIN", "LEFT", "RIGHT", "FULL", "OUTER", "INNER", "ON", "GROUP", "BY",
            "ORDER", "HAVING", "DISTINCT", "LIMIT", "OFFSET", "UNION", "ALL", "AND", "OR", "AS",
            "IN", "IS", "BETWEEN", "LIKE", "CASE", "WHEN", "THEN", "ELSE", "END",
        ],
    )
};
