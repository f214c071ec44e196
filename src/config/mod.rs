//! Dump configuration: built-in rule lists, the rule set they compile into,
//! the per-file size cap, and output-target resolution.

use std::collections::BTreeSet;

use crate::domain::OutputFormat;
use crate::utils::extension;

/// Allowed extensions (lowercase, no dot). Covers major programming and
/// config files.
pub const ALLOWED_EXTENSIONS: &str = "js/jsx/mjs/cjs/ts/tsx/py/php/rb/java/kt/kts/scala/dart/\
     c/cpp/cs/go/rs/hs/sh/bash/zsh/bat/cmd/pl/pm/html/htm/css/scss/sass/less/\
     xml/yaml/yml/toml/ini/json/sql/psql/csv/tsv/md";

/// Disallowed types. A token starting with a dot is treated as a disallowed
/// basename (e.g. `.env`), anything else as an extension.
pub const DISALLOWED_TYPES: &str = "";

/// Explicitly disallowed basenames.
pub const DISALLOWED_BASENAMES: &str = "package-lock.json/yarn.lock/pnpm-lock.yaml";

/// Explicitly allowed basenames (highest priority below the disallow list).
pub const ALLOWED_BASENAMES: &str = "Dockerfile/.gitignore/.gitattributes/.editorconfig/.prettierrc";

/// Default output basename when `--fileName` is absent.
pub const DEFAULT_BASENAME: &str = "completeCodebase.md";

/// Compiled inclusion rules. Built once per run; immutable thereafter.
#[derive(Debug, Clone)]
pub struct RuleSet {
    allowed_extensions: BTreeSet<String>,
    disallowed_extensions: BTreeSet<String>,
    disallowed_basenames: BTreeSet<String>,
    allowed_basenames: BTreeSet<String>,
}

impl RuleSet {
    /// Build a rule set from four `/`-separated lists.
    ///
    /// Tokens are trimmed and empties dropped, so malformed input degrades to
    /// empty sets rather than failing. Extension tokens are lowercased with
    /// any leading dot stripped. A disallowed-types token that starts with a
    /// dot names a basename, not an extension.
    pub fn from_lists(
        allowed_ext: &str,
        disallowed_types: &str,
        disallowed_basenames: &str,
        allowed_basenames: &str,
    ) -> Self {
        let tokens = |s: &str| {
            s.split('/')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        let allowed_extensions = tokens(allowed_ext)
            .into_iter()
            .map(|t| t.to_lowercase().trim_start_matches('.').to_string())
            .collect();

        let mut disallowed_extensions = BTreeSet::new();
        let mut disallowed_names = BTreeSet::new();
        for tok in tokens(disallowed_types) {
            if tok.starts_with('.') {
                // keep the dot for basenames like `.env`
                disallowed_names.insert(tok);
            } else {
                disallowed_extensions.insert(tok.to_lowercase());
            }
        }
        disallowed_names.extend(tokens(disallowed_basenames));

        Self {
            allowed_extensions,
            disallowed_extensions,
            disallowed_basenames: disallowed_names,
            allowed_basenames: tokens(allowed_basenames).into_iter().collect(),
        }
    }

    /// The rule set compiled from the built-in lists.
    pub fn defaults() -> Self {
        Self::from_lists(
            ALLOWED_EXTENSIONS,
            DISALLOWED_TYPES,
            DISALLOWED_BASENAMES,
            ALLOWED_BASENAMES,
        )
    }

    /// Basename lookup tries the exact form first, then the lowercase form.
    pub fn is_disallowed_basename(&self, name: &str, name_lower: &str) -> bool {
        self.disallowed_basenames.contains(name) || self.disallowed_basenames.contains(name_lower)
    }

    pub fn is_allowed_basename(&self, name: &str, name_lower: &str) -> bool {
        self.allowed_basenames.contains(name) || self.allowed_basenames.contains(name_lower)
    }

    pub fn is_disallowed_extension(&self, ext: &str) -> bool {
        self.disallowed_extensions.contains(ext)
    }

    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(ext)
    }

    /// An empty allowed-extension set means "no extension restriction".
    pub fn has_allowed_extensions(&self) -> bool {
        !self.allowed_extensions.is_empty()
    }

    pub fn describe_allowed_extensions(&self) -> String {
        Self::display_list(&self.allowed_extensions)
    }

    pub fn describe_disallowed_extensions(&self) -> String {
        Self::display_list(&self.disallowed_extensions)
    }

    pub fn describe_disallowed_basenames(&self) -> String {
        Self::display_list(&self.disallowed_basenames)
    }

    pub fn describe_allowed_basenames(&self) -> String {
        Self::display_list(&self.allowed_basenames)
    }

    fn display_list(set: &BTreeSet<String>) -> String {
        if set.is_empty() {
            "(none)".to_string()
        } else {
            set.iter().cloned().collect::<Vec<_>>().join("/")
        }
    }
}

/// Per-file size cap in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCap {
    pub kb: f64,
}

impl SizeCap {
    pub const DEFAULT_KB: f64 = 200.0;

    /// Apply an optional `--maxKB` override. Non-numeric, non-finite, or
    /// non-positive values are silently ignored, keeping the default.
    pub fn parse_override(raw: Option<&str>) -> Self {
        let kb = raw
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(Self::DEFAULT_KB);
        Self { kb }
    }

    pub fn bytes(self) -> u64 {
        (self.kb * 1024.0) as u64
    }
}

impl Default for SizeCap {
    fn default() -> Self {
        Self { kb: Self::DEFAULT_KB }
    }
}

/// Resolved output basename and format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub basename: String,
    pub format: OutputFormat,
}

impl OutputTarget {
    /// Resolve `--fileName` and `--format` into a basename plus format.
    ///
    /// Directory components in the name are stripped so the dump cannot land
    /// outside the downloads directory. A recognized extension on the name
    /// (`md`/`markdown`/`txt`) decides the format unless `--format` was
    /// given; an unrecognized or missing extension gets the chosen format's
    /// extension appended.
    pub fn resolve(file_name: Option<&str>, format_flag: Option<&str>) -> Self {
        let requested = format_flag.and_then(OutputFormat::parse_flag);

        let raw = file_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASENAME);
        let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
        let name = if name.is_empty() { DEFAULT_BASENAME } else { name };

        let ext = extension(name).to_lowercase();
        match OutputFormat::from_extension(&ext) {
            Some(from_ext) => Self {
                basename: name.to_string(),
                format: requested.unwrap_or(from_ext),
            },
            None => {
                let format = requested.unwrap_or_default();
                Self {
                    basename: format!("{name}.{}", format.extension()),
                    format,
                }
            }
        }
    }
}
