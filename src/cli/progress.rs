//! Run-wide progress and timing state.

use std::time::Instant;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::utils::format_hms;

/// Mutable run-wide state for the dump loop: the progress bar and the
/// elapsed-time clock, passed explicitly rather than held in process globals.
pub struct RunContext {
    pub progress: ProgressBar,
    pub started: Instant,
}

impl RunContext {
    pub fn new(total_files: u64) -> Result<Self> {
        let progress = ProgressBar::new(total_files);
        progress.set_style(ProgressStyle::with_template(
            "Processing: {percent:>3}% ({pos}/{len})  Time: {elapsed_precise}",
        )?);
        Ok(Self { progress, started: Instant::now() })
    }

    /// On Ctrl-C mid-run, flush the in-progress line and terminate with the
    /// conventional interrupted exit status. Partial output stays on disk.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        let progress = self.progress.clone();
        ctrlc::set_handler(move || {
            progress.abandon();
            std::process::exit(130); // 128 + SIGINT
        })?;
        Ok(())
    }

    pub fn elapsed_hms(&self) -> String {
        format_hms(self.started.elapsed().as_secs())
    }
}
