//! code-dump: Concatenate a git repository into one reviewable document
//!
//! Lists tracked and untracked-but-not-ignored files, filters them through
//! extension/basename/size rules, and writes a Markdown or plain-text dump
//! with a table of contents to the user's downloads directory.

use anyhow::Result;

mod cli;
mod config;
mod domain;
mod lang;
mod render;
mod scan;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
