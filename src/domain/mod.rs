//! Core domain types
//!
//! Defines the output format, the per-file inclusion verdict, and the records
//! carried between the listing, filtering, and rendering stages.

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
        }
    }

    /// Parse a `--format` flag value. Anything other than `md`/`txt` is
    /// rejected so the caller can fall back to its previous value.
    pub fn parse_flag(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "md" => Some(OutputFormat::Markdown),
            "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    /// Infer the format from an output file extension (lowercase, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "md" | "markdown" => Some(OutputFormat::Markdown),
            "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

/// Per-file inclusion verdict.
///
/// Pure given the file's path, its stat size, and the active rule set: the
/// same inputs always produce the same verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The file's contents go into the dump; size comes from the stat call.
    Include { size: u64 },
    /// The file is left out, with a human-readable reason.
    Skip { reason: String },
}

/// A file accepted into the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpFile {
    /// Repository-relative path as reported by the listing.
    pub path: String,
    /// Byte size recorded when the inclusion decision was made.
    pub size: u64,
}

/// A file excluded from the dump, kept for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}
