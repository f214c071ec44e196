//! Language tagging for fenced code blocks.
//!
//! Pure mapping from file name (and, for a few special names and unknown
//! extensions, file content) to a display language tag. Never fails; anything
//! unrecognized resolves to [`PLAIN_TEXT`], which the renderer treats as "no
//! annotation".

use crate::utils::{basename, extension};

/// The generic fallback tag.
pub const PLAIN_TEXT: &str = "text";

/// How a special basename maps to a tag: either a fixed tag, or a sniff over
/// the file's content when the name alone is ambiguous.
enum NameRule {
    Tag(&'static str),
    Sniff(fn(&str) -> &'static str),
}

fn special_basename_rule(name_lower: &str) -> Option<NameRule> {
    match name_lower {
        "dockerfile" => Some(NameRule::Tag("dockerfile")),
        "makefile" => Some(NameRule::Tag("makefile")),
        ".gitignore" => Some(NameRule::Tag("gitignore")),
        ".gitattributes" => Some(NameRule::Tag("git-attributes")),
        ".editorconfig" => Some(NameRule::Tag("ini")),
        ".env" => Some(NameRule::Tag("ini")),
        // .prettierrc can be JSON or YAML
        ".prettierrc" => Some(NameRule::Sniff(sniff_prettierrc)),
        _ => None,
    }
}

fn sniff_prettierrc(content: &str) -> &'static str {
    if content.trim_start().starts_with('{') {
        "json"
    } else {
        "yaml"
    }
}

/// Structured-data sniff for files without a recognized extension.
fn sniff_structured(content: &str) -> &'static str {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        "json"
    } else {
        PLAIN_TEXT
    }
}

/// Detect the display language for `path`, sniffing `content` only when the
/// name and extension are not enough.
pub fn detect(path: &str, content: &str) -> &'static str {
    let name_lower = basename(path).to_lowercase();

    if let Some(rule) = special_basename_rule(&name_lower) {
        return match rule {
            NameRule::Tag(tag) => tag,
            NameRule::Sniff(classify) => classify(content),
        };
    }

    match extension(&name_lower) {
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "php" => "php",
        "rb" => "ruby",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "hs" => "haskell",
        "sh" | "bash" | "zsh" | "ksh" => "bash",
        "ps1" => "powershell",
        "bat" | "cmd" => "bat",
        "pl" | "pm" => "perl",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" => "ini",
        "json" => "json",
        "sql" | "psql" => "sql",
        "csv" => "csv",
        "tsv" => "tsv",
        "md" => "markdown",
        _ => sniff_structured(content),
    }
}
