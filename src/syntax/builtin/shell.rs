//! Bash / sh definition

use crate::syntax::language::{LanguageSpec, HASH_COMMENTS};

pub const SHELL: LanguageSpec = LanguageSpec {
    types: Some(&[]),
    comments: HASH_COMMENTS,
    variable: Some(r"\$[a-zA-Z_][a-zA-Z0-9_]*|\$\{[^}]+\}"),
    ..LanguageSpec::generic(
        &["bash", "sh"],
        &[
            "if", "then", "else", "elif", "fi", "case", "esac", "for", "select", "while",
            "until", "do", "done", "function", "time", "coproc", "in", "break", "continue",
            "return", "exit", "export", "local", "readonly", "declare", "typeset", "unset",
            "shift", "test", "eval", "exec", "source", "alias", "unalias", "history", "jobs",
            "bg", "fg", "wait", "kill", "trap", "echo", "printf", "read", "cd", "pwd", "pushd",
            "popd", "dirs", "ls", "cat", "grep", "awk", "sed", "sort", "uniq", "wc", "head",
            "tail", "find", "xargs", "chmod", "chown", "cp", "mv", "rm", "mkdir", "rmdir",
            "touch", "ln", "mount", "umount", "ps", "top", "df", "du", "free", "uname",
            "whoami", "id", "groups", "su", "sudo",
        ],
    )
};
