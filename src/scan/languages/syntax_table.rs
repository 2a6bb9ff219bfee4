//! Concrete [`LanguageSyntax`] descriptors for languages whose line/comment
//! rules need nothing beyond what [`GenericScanner`](super::generic::GenericScanner)
//! already models.

use super::generic::LanguageSyntax;

pub const CSS: LanguageSyntax = LanguageSyntax {
    lang: "css",
    line_comments: &[],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const JAVASCRIPT: LanguageSyntax = LanguageSyntax {
    lang: "javascript",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'`",
    triple_quote_strings: false,
    escaped_newline: false,
};

const fn retagged(base: LanguageSyntax, lang: &'static str) -> LanguageSyntax {
    LanguageSyntax { lang, ..base }
}

pub const TYPESCRIPT: LanguageSyntax = retagged(JAVASCRIPT, "typescript");

pub const PHP: LanguageSyntax = LanguageSyntax {
    lang: "php",
    line_comments: &["//", "#"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const RUBY: LanguageSyntax = LanguageSyntax {
    lang: "ruby",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const PYTHON: LanguageSyntax = LanguageSyntax {
    lang: "python",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: true,
    escaped_newline: true,
};

pub const JSON: LanguageSyntax = LanguageSyntax {
    lang: "json",
    line_comments: &[],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const YAML: LanguageSyntax = LanguageSyntax {
    lang: "yaml",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const TOML: LanguageSyntax = LanguageSyntax {
    lang: "toml",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const MARKDOWN: LanguageSyntax = LanguageSyntax {
    lang: "markdown",
    line_comments: &[],
    block_comment: Some(("<!--", "-->")),
    nested_block_comments: false,
    string_delims: b"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const RUST: LanguageSyntax = LanguageSyntax {
    lang: "rust",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: true,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const GO: LanguageSyntax = LanguageSyntax {
    lang: "go",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'`",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const JAVA: LanguageSyntax = LanguageSyntax {
    lang: "java",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const PERL: LanguageSyntax = LanguageSyntax {
    lang: "perl",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const LUA: LanguageSyntax = LanguageSyntax {
    lang: "lua",
    line_comments: &["--"],
    block_comment: Some(("--[[", "]]")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const HASKELL: LanguageSyntax = LanguageSyntax {
    lang: "haskell",
    line_comments: &["--"],
    block_comment: Some(("{-", "-}")),
    nested_block_comments: true,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const OCAML: LanguageSyntax = LanguageSyntax {
    lang: "ocaml",
    line_comments: &[],
    block_comment: Some(("(*", "*)")),
    nested_block_comments: true,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const CLOJURE: LanguageSyntax = LanguageSyntax {
    lang: "clojure",
    line_comments: &[";"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const ERLANG: LanguageSyntax = LanguageSyntax {
    lang: "erlang",
    line_comments: &["%"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const SCALA: LanguageSyntax = retagged(JAVA, "scala");

pub const SWIFT: LanguageSyntax = retagged(JAVA, "swift");
pub const KOTLIN: LanguageSyntax = retagged(JAVA, "kotlin");

pub const SQL: LanguageSyntax = LanguageSyntax {
    lang: "sql",
    line_comments: &["--"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const DOCKERFILE: LanguageSyntax = LanguageSyntax {
    lang: "dockerfile",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub const MAKEFILE: LanguageSyntax = LanguageSyntax {
    lang: "makefile",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub const CMAKE: LanguageSyntax = LanguageSyntax {
    lang: "cmake",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const M4: LanguageSyntax = LanguageSyntax {
    lang: "m4",
    line_comments: &["dnl"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const CSHARP: LanguageSyntax = LanguageSyntax {
    lang: "csharp",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const CS_ASPX: LanguageSyntax = LanguageSyntax {
    lang: "cs_aspx",
    line_comments: &[],
    block_comment: Some(("<%--", "--%>")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const VB_ASPX: LanguageSyntax = LanguageSyntax {
    lang: "vb_aspx",
    line_comments: &["'"],
    block_comment: Some(("<%--", "--%>")),
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const CLASSIC_BASIC: LanguageSyntax = LanguageSyntax {
    lang: "classic_basic",
    line_comments: &["REM", "rem", "'"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const VISUALBASIC: LanguageSyntax = LanguageSyntax {
    lang: "visualbasic",
    line_comments: &["'"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub const STRUCTURED_BASIC: LanguageSyntax = LanguageSyntax {
    lang: "structured_basic",
    line_comments: &["'", "REM"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const SMALLTALK: LanguageSyntax = LanguageSyntax {
    lang: "smalltalk",
    line_comments: &[],
    block_comment: Some(("\"", "\"")),
    nested_block_comments: false,
    string_delims: b"'",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const LIMBO: LanguageSyntax = LanguageSyntax {
    lang: "limbo",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"",
    triple_quote_strings: false,
    escaped_newline: false,
};

pub const OCTAVE: LanguageSyntax = LanguageSyntax {
    lang: "octave",
    line_comments: &["%", "#"],
    block_comment: Some(("%{", "%}")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub const MATLAB: LanguageSyntax = LanguageSyntax {
    lang: "matlab",
    line_comments: &["%"],
    block_comment: Some(("%{", "%}")),
    nested_block_comments: false,
    string_delims: b"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub const SHELL: LanguageSyntax = LanguageSyntax {
    lang: "shell",
    line_comments: &["#"],
    block_comment: None,
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub const PIKE: LanguageSyntax = LanguageSyntax {
    lang: "pike",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: false,
};
