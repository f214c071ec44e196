//! Command-line interface for code-dump.
//!
//! Parses invocation flags, resolves the output target, drives the
//! list → filter → render pipeline, and reports a run summary.

mod progress;

use std::fs;
use std::io::BufWriter;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use console::style;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{OutputTarget, RuleSet, SizeCap};
use crate::domain::SkippedFile;
use crate::render;
use crate::scan;
use crate::utils::locale_cmp;
use progress::RunContext;

/// Dump a git repository's files into a single document
#[derive(Parser)]
#[command(name = "code-dump")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Per-file size cap in kilobytes; invalid or non-positive values keep the default
    #[arg(long = "maxKB", value_name = "KB")]
    max_kb: Option<String>,

    /// Output file basename; directory components are stripped
    #[arg(long = "fileName", value_name = "NAME")]
    file_name: Option<String>,

    /// Output format: md or txt (unrecognized values are ignored)
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cap = SizeCap::parse_override(cli.max_kb.as_deref());
    let target = OutputTarget::resolve(cli.file_name.as_deref(), cli.format.as_deref());
    let rules = RuleSet::defaults();

    scan::ensure_work_tree()?;
    let listed = scan::list_repository_files()?;

    let (mut matched, skipped) = scan::partition(&listed, &rules, cap);

    // "nothing to dump" is a valid outcome, not a failure
    if matched.is_empty() {
        print_no_match(&rules, cap, &skipped);
        return Ok(());
    }

    let cwd = std::env::current_dir().context("could not determine the current directory")?;
    println!();
    println!("Getting file list from: {}", cwd.display());
    println!("Listed files: {}", listed.len());
    println!("Included (<= {}KB): {}", cap.kb, matched.len());
    if !skipped.is_empty() {
        println!("Skipped: {}", skipped.len());
        print_skip_list(&skipped);
    }

    let outfile = output_path(&target.basename)?;
    matched.sort_by(|a, b| locale_cmp(&a.path, &b.path));

    let ctx = RunContext::new(matched.len() as u64)?;
    ctx.install_interrupt_handler()?;

    let file = fs::File::create(&outfile)
        .with_context(|| format!("failed to create {}", outfile.display()))?;
    let mut out = BufWriter::new(file);
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    render::write_header(&mut out, target.format, &matched, &generated_at)?;
    for entry in &matched {
        render::write_file_section(&mut out, target.format, &entry.path)
            .with_context(|| format!("failed to write section for {}", entry.path))?;
        ctx.progress.inc(1);
    }
    out.flush().context("failed to flush the output file")?;
    ctx.progress.finish();

    let total_bytes: u64 = matched.iter().map(|f| f.size).sum();
    println!();
    println!("{} Output saved to {}", style("Done!").green().bold(), outfile.display());
    println!("Files dumped: {} ({total_bytes} bytes)", matched.len());
    println!("Total time:  {}", ctx.elapsed_hms());
    print_config_echo(&rules, cap);

    Ok(())
}

fn print_no_match(rules: &RuleSet, cap: SizeCap, skipped: &[SkippedFile]) {
    println!("No matching files found under current rules.");
    println!("Allowed extensions: {}", rules.describe_allowed_extensions());
    println!("Disallowed extensions: {}", rules.describe_disallowed_extensions());
    println!("Disallowed basenames: {}", rules.describe_disallowed_basenames());
    println!("Explicitly allowed files: {}", rules.describe_allowed_basenames());
    println!("Max size: {}KB", cap.kb);
    if !skipped.is_empty() {
        println!();
        println!("Skipped files (reason):");
        print_skip_list(skipped);
    }
}

fn print_skip_list(skipped: &[SkippedFile]) {
    for entry in skipped {
        println!(" - {}  -> {}", entry.path, entry.reason);
    }
}

fn print_config_echo(rules: &RuleSet, cap: SizeCap) {
    println!(
        "Config -> AllowedExt: {} | DisallowedExt: {} | DisallowedFiles: {} | AllowedFiles: {} | MaxKB: {}",
        rules.describe_allowed_extensions(),
        rules.describe_disallowed_extensions(),
        rules.describe_disallowed_basenames(),
        rules.describe_allowed_basenames(),
        cap.kb
    );
}

fn output_path(basename: &str) -> Result<PathBuf> {
    let dir = downloads_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir.join(basename))
}

fn downloads_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("could not determine the user's home directory")?;
    Ok(home.join("Downloads"))
}
