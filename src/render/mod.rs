//! Document rendering.
//!
//! Streams the dump in one pass: header, embedded instructions, table of
//! contents, then one section per file. Whole-file reads are fine here since
//! the inclusion filter already capped per-file size, but the document itself
//! is never buffered in full.

pub mod fence;

use std::fs;
use std::io::{self, Write};

use crate::domain::{DumpFile, OutputFormat};
use crate::lang;
use fence::choose_fence;

/// Guidance embedded verbatim at the top of every dump, telling the consumer
/// how to work with the file.
pub const INSTRUCTIONS_BLOCK: &str = r#"
This file contains the complete codebase dump.
Processing rules (Focused, selective for all scenarios):

## 1. Root-First, Minimal-Scope Analysis
- Always start from the project root or entrypoint.
- Identify only minimal files required for the task (do NOT assume context or filenames).
- Never load or analyze the full codebase to save tokens and time.
- Skip irrelevant parts (tests, binaries, presentation-only files, etc.) unless it is requested/required.
- If both frontend and backend exist, include only those portions that directly affect the current task.

## 2. Performance-Optimized File Handling
- Read only necessary line ranges or sections for large files.
- Use chunking/streaming to avoid OOM and increase speed.
- Limit total input to 5MB at a time; process larger data in batches (if required/possible).
- Use table of contents to locate relevant files before loading content.

## 3. Best Practices & Ambiguity Handling
- Follow industry-standard best practices.
- Avoid refactoring/reformatting unless essential.
- Use "package.json" only for dependencies/scripts/version info when needed.
- If ambiguity exists, ask one clear question; otherwise, proceed with reasonable assumptions and document them.

## 4. Patch & Default Output Standards
- Use repo-relative paths in patches.
- Diff must follow standard git format ("a/" and "b/" prefixes).
- Each hunk must include target file path and explicit line ranges ("@@ -start,count +start,count @@").
- Add a short metadata comment above each patch (filename, line ranges, SHA) for human readability and traceability.
- Include at least 3 lines of context around each diff hunk by default.
"#;

/// Write the document preamble: title, instructions, and the table of
/// contents over `files`, which must already be in final sorted order. The
/// body is rendered from the same slice, so both always agree.
pub fn write_header<W: Write>(
    out: &mut W,
    format: OutputFormat,
    files: &[DumpFile],
    generated_at: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Markdown => {
            writeln!(out, "# Codebase Dump")?;
            writeln!(out, "\n> Generated at: {generated_at}")?;
            writeln!(out, "\n## Processing Rules")?;
            writeln!(out, "```")?;
            writeln!(out, "{INSTRUCTIONS_BLOCK}")?;
            writeln!(out, "```")?;
            writeln!(out, "\n## Table of Contents")?;
            for file in files {
                writeln!(out, "- `{}`", file.path)?;
            }
            writeln!(out, "\n---")?;
            writeln!(out, "\n## Files")?;
        }
        OutputFormat::Text => {
            write!(out, "{INSTRUCTIONS_BLOCK}")?;
            writeln!(out, "\n\nTABLE OF CONTENTS (file list)")?;
            writeln!(out, "-----------------------------")?;
            for file in files {
                writeln!(out, "{}", file.path)?;
            }
            write!(out, "\n\n=================================\n\n")?;
        }
    }
    Ok(())
}

/// Write one file's section. A read failure becomes an inline placeholder
/// note; it never aborts the run.
pub fn write_file_section<W: Write>(
    out: &mut W,
    format: OutputFormat,
    path: &str,
) -> io::Result<()> {
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => format!("/* Error reading file: {err} */"),
    };

    match format {
        OutputFormat::Markdown => {
            let tag = lang::detect(path, &content);
            let fence = choose_fence(&content);
            write!(out, "\n\n### `{path}`\n\n")?;
            if tag == lang::PLAIN_TEXT {
                writeln!(out, "{fence}")?;
            } else {
                writeln!(out, "{fence}{tag}")?;
            }
            write!(out, "{content}")?;
            write!(out, "\n{fence}\n")?;
        }
        OutputFormat::Text => {
            write!(out, "\n\n===== FILE: {path} =====\n")?;
            write!(out, "{content}")?;
        }
    }
    Ok(())
}

/// Render a complete document in one pass over the sorted file list.
pub fn render_document<W: Write>(
    out: &mut W,
    format: OutputFormat,
    files: &[DumpFile],
    generated_at: &str,
) -> io::Result<()> {
    write_header(out, format, files, generated_at)?;
    for file in files {
        write_file_section(out, format, &file.path)?;
    }
    Ok(())
}
