//! Language table: keywords, comment markers and string delimiters.
//!
//! Every supported language is one [`LanguageSpec`] entry in a single static
//! table. Lookups normalize the key (trimmed, lowercase) and fall back to
//! [`PLAIN_TEXT`] for anything unknown.

use std::collections::BTreeMap;
use std::path::Path;

/// Lexical description of one language.
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Canonical name.
    pub name: &'static str,
    /// Alternative names accepted as hints.
    pub aliases: &'static [&'static str],
    /// File extensions (lowercase, without dot).
    pub extensions: &'static [&'static str],
    /// Whole-word keywords.
    pub keywords: &'static [&'static str],
    /// Markers that comment out the rest of the line.
    pub line_comments: &'static [&'static str],
    /// Opening and closing marker of a block comment.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Characters that open and close a string literal.
    pub string_delimiters: &'static [char],
}

/// Fallback entry: no keywords, comments or strings.
pub static PLAIN_TEXT: LanguageSpec = LanguageSpec {
    name: "plaintext",
    aliases: &["text", "txt", "plain"],
    extensions: &["txt"],
    keywords: &[],
    line_comments: &[],
    block_comment: None,
    string_delimiters: &[],
};

const C_BLOCK: Option<(&str, &str)> = Some(("/*", "*/"));

static LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "javascript",
        aliases: &["js", "jsx", "node", "ecmascript"],
        extensions: &["js", "jsx", "mjs", "cjs"],
        keywords: &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
            "function", "if", "import", "in", "instanceof", "let", "new", "null", "return",
            "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined",
            "var", "void", "while", "yield",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\'', '`'],
    },
    LanguageSpec {
        name: "typescript",
        aliases: &["ts", "tsx"],
        extensions: &["ts", "tsx", "mts", "cts"],
        keywords: &[
            "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch",
            "class", "const", "continue", "declare", "default", "do", "else", "enum", "export",
            "extends", "false", "finally", "for", "from", "function", "if", "implements",
            "import", "in", "interface", "keyof", "let", "namespace", "never", "new", "null",
            "number", "private", "protected", "public", "readonly", "return", "static", "string",
            "super", "switch", "this", "throw", "true", "try", "type", "typeof", "undefined",
            "unknown", "var", "void", "while",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\'', '`'],
    },
    LanguageSpec {
        name: "python",
        aliases: &["py", "python3"],
        extensions: &["py", "pyi", "pyw"],
        keywords: &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "self", "try", "while", "with", "yield",
        ],
        line_comments: &["#"],
        block_comment: None,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "rust",
        aliases: &["rs"],
        extensions: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
            "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
            "trait", "true", "type", "unsafe", "use", "where", "while",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        // Single quotes are lifetimes as often as char literals.
        string_delimiters: &['"'],
    },
    LanguageSpec {
        name: "go",
        aliases: &["golang"],
        extensions: &["go"],
        keywords: &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "false", "for", "func", "go", "goto", "if", "import", "interface",
            "map", "nil", "package", "range", "return", "select", "struct", "switch", "true",
            "type", "var",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\'', '`'],
    },
    LanguageSpec {
        name: "java",
        aliases: &[],
        extensions: &["java"],
        keywords: &[
            "abstract", "boolean", "break", "case", "catch", "class", "continue", "default", "do",
            "double", "else", "enum", "extends", "false", "final", "finally", "for", "if",
            "implements", "import", "instanceof", "int", "interface", "long", "new", "null",
            "package", "private", "protected", "public", "return", "static", "super", "switch",
            "synchronized", "this", "throw", "throws", "true", "try", "void", "while",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "c",
        aliases: &["h"],
        extensions: &["c", "h"],
        keywords: &[
            "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
            "else", "enum", "extern", "float", "for", "goto", "if", "int", "long", "register",
            "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
            "union", "unsigned", "void", "volatile", "while",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "cpp",
        aliases: &["c++", "cxx", "hpp"],
        extensions: &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
        keywords: &[
            "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr",
            "continue", "default", "delete", "do", "double", "else", "enum", "explicit", "false",
            "float", "for", "friend", "if", "inline", "int", "long", "namespace", "new",
            "nullptr", "operator", "private", "protected", "public", "return", "static",
            "struct", "switch", "template", "this", "throw", "true", "try", "typename", "using",
            "virtual", "void", "while",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "csharp",
        aliases: &["c#", "cs"],
        extensions: &["cs"],
        keywords: &[
            "abstract", "async", "await", "bool", "break", "case", "catch", "class", "const",
            "continue", "default", "do", "else", "enum", "false", "finally", "for", "foreach",
            "if", "in", "int", "interface", "internal", "namespace", "new", "null", "override",
            "private", "protected", "public", "readonly", "return", "static", "string", "struct",
            "switch", "this", "throw", "true", "try", "using", "var", "virtual", "void", "while",
        ],
        line_comments: &["//"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "ruby",
        aliases: &["rb"],
        extensions: &["rb", "rake", "gemspec"],
        keywords: &[
            "alias", "and", "begin", "break", "case", "class", "def", "do", "else", "elsif",
            "end", "ensure", "false", "for", "if", "in", "module", "next", "nil", "not", "or",
            "raise", "redo", "require", "rescue", "retry", "return", "self", "super", "then",
            "true", "unless", "until", "when", "while", "yield",
        ],
        line_comments: &["#"],
        block_comment: None,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "php",
        aliases: &[],
        extensions: &["php"],
        keywords: &[
            "abstract", "array", "as", "break", "case", "catch", "class", "const", "continue",
            "default", "do", "echo", "else", "elseif", "extends", "false", "finally", "for",
            "foreach", "function", "if", "implements", "interface", "namespace", "new", "null",
            "private", "protected", "public", "return", "static", "switch", "throw", "true",
            "try", "use", "while",
        ],
        line_comments: &["//", "#"],
        block_comment: C_BLOCK,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "shell",
        aliases: &["sh", "bash", "zsh", "shellscript"],
        extensions: &["sh", "bash", "zsh"],
        keywords: &[
            "case", "do", "done", "elif", "else", "esac", "export", "fi", "for", "function", "if",
            "in", "local", "return", "then", "until", "while",
        ],
        line_comments: &["#"],
        block_comment: None,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "yaml",
        aliases: &["yml"],
        extensions: &["yaml", "yml"],
        keywords: &["true", "false", "null", "yes", "no", "on", "off"],
        line_comments: &["#"],
        block_comment: None,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "toml",
        aliases: &[],
        extensions: &["toml"],
        keywords: &["true", "false"],
        line_comments: &["#"],
        block_comment: None,
        string_delimiters: &['"', '\''],
    },
    LanguageSpec {
        name: "sql",
        aliases: &["postgresql", "mysql", "sqlite"],
        extensions: &["sql"],
        keywords: &[
            "and", "as", "by", "create", "delete", "drop", "from", "group", "insert", "into",
            "join", "left", "not", "null", "on", "or", "order", "select", "set", "table",
            "update", "values", "where", "AND", "AS", "BY", "CREATE", "DELETE", "DROP", "FROM",
            "GROUP", "INSERT", "INTO", "JOIN", "LEFT", "NOT", "NULL", "ON", "OR", "ORDER",
            "SELECT", "SET", "TABLE", "UPDATE", "VALUES", "WHERE",
        ],
        line_comments: &["--"],
        block_comment: C_BLOCK,
        string_delimiters: &['\'', '"'],
    },
];

fn normalize(key: &str) -> String {
    key.trim().trim_start_matches('.').to_lowercase()
}

impl LanguageSpec {
    /// Find a language by canonical name or alias.
    pub fn find(name: &str) -> Option<&'static LanguageSpec> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }
        std::iter::once(&PLAIN_TEXT)
            .chain(LANGUAGES.iter())
            .find(|spec| spec.name == key || spec.aliases.iter().any(|a| *a == key))
    }

    /// Find a language by name, falling back to plain text.
    pub fn lookup(name: &str) -> &'static LanguageSpec {
        Self::find(name).unwrap_or(&PLAIN_TEXT)
    }

    /// Find a language by file extension (with or without leading dot).
    pub fn from_extension(extension: &str) -> Option<&'static LanguageSpec> {
        let key = normalize(extension);
        std::iter::once(&PLAIN_TEXT)
            .chain(LANGUAGES.iter())
            .find(|spec| spec.extensions.iter().any(|e| *e == key))
    }

    /// All supported languages, plain text excluded.
    pub fn all() -> &'static [LanguageSpec] {
        LANGUAGES
    }

    pub fn is_plain_text(&self) -> bool {
        self.name == PLAIN_TEXT.name
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| *k == word)
    }
}

fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Pick the language for a changed file.
///
/// Order: an explicit hint naming a known language, then `overrides`
/// (extension → language name, keys matched like extensions: case and a
/// leading dot are ignored), then the built-in extension table, then
/// plain text.
pub fn resolve_language(
    hint: Option<&str>,
    path: &str,
    overrides: &BTreeMap<String, String>,
) -> &'static LanguageSpec {
    if let Some(spec) = hint.and_then(LanguageSpec::find) {
        return spec;
    }

    let Some(ext) = extension_of(path) else {
        return &PLAIN_TEXT;
    };

    overrides
        .iter()
        .find(|(key, _)| normalize(key) == ext)
        .and_then(|(_, name)| LanguageSpec::find(name))
        .or_else(|| LanguageSpec::from_extension(&ext))
        .unwrap_or(&PLAIN_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(LanguageSpec::lookup("JS").name, "javascript");
        assert_eq!(LanguageSpec::lookup(" golang ").name, "go");
        assert_eq!(LanguageSpec::lookup("c++").name, "cpp");
        assert_eq!(LanguageSpec::lookup("bash").name, "shell");
    }

    #[test]
    fn test_unknown_falls_back_to_plain_text() {
        assert!(LanguageSpec::lookup("brainfuck").is_plain_text());
        assert!(LanguageSpec::lookup("").is_plain_text());
        assert!(LanguageSpec::find("").is_none());
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageSpec::from_extension("rs").unwrap().name, "rust");
        assert_eq!(LanguageSpec::from_extension(".TSX").unwrap().name, "typescript");
        assert!(LanguageSpec::from_extension("xyz").is_none());
    }

    #[test]
    fn test_extensions_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for spec in LanguageSpec::all() {
            for ext in spec.extensions {
                assert!(seen.insert(*ext), "duplicate extension {ext}");
            }
        }
    }

    #[test]
    fn test_resolve_language_order() {
        let mut overrides = BTreeMap::new();
        overrides.insert("h".to_string(), "cpp".to_string());

        assert_eq!(resolve_language(Some("python"), "a.rs", &overrides).name, "python");
        // Unknown hint falls through to the extension.
        assert_eq!(resolve_language(Some("klingon"), "a.rs", &overrides).name, "rust");
        assert_eq!(resolve_language(None, "include/foo.h", &overrides).name, "cpp");
        assert_eq!(resolve_language(None, "src/foo.c", &overrides).name, "c");
        assert!(resolve_language(None, "Makefile", &overrides).is_plain_text());
        assert!(resolve_language(None, "logo.png", &overrides).is_plain_text());
    }

    #[test]
    fn test_override_keys_are_normalized() {
        for key in ["H", ".h", " .H "] {
            let mut overrides = BTreeMap::new();
            overrides.insert(key.to_string(), "cpp".to_string());
            assert_eq!(resolve_language(None, "include/foo.h", &overrides).name, "cpp", "{key:?}");
        }

        let mut overrides = BTreeMap::new();
        overrides.insert("TPL".to_string(), "php".to_string());
        assert_eq!(resolve_language(None, "views/page.Tpl", &overrides).name, "php");
    }
}
