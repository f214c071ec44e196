//! Repository file listing via the git CLI.
//!
//! Two synchronous subprocess calls: a work-tree check, then a NUL-delimited
//! listing of tracked plus untracked-but-not-ignored paths. NUL cannot appear
//! in a valid path, so names containing newlines survive the round trip.

use std::process::{Command, Stdio};

use thiserror::Error;

/// Fatal environment errors from the git invocations. Both abort the run
/// with a nonzero exit before any output file is produced.
#[derive(Debug, Error)]
pub enum GitListError {
    #[error("not inside a git repository; cd into your repo and rerun")]
    NotAWorkTree,

    #[error("failed to invoke `git {command}`: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {command}` failed: {detail}")]
    Failed { command: &'static str, detail: String },
}

/// Confirm the current working directory is inside a git working tree.
pub fn ensure_work_tree() -> Result<(), GitListError> {
    let status = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| GitListError::Spawn { command: "rev-parse", source })?;

    if status.success() {
        Ok(())
    } else {
        Err(GitListError::NotAWorkTree)
    }
}

/// Tracked plus untracked-but-not-ignored paths, in listing order with
/// empties dropped.
pub fn list_repository_files() -> Result<Vec<String>, GitListError> {
    let output = Command::new("git")
        .args(["ls-files", "-z", "--cached", "--others", "--exclude-standard"])
        .output()
        .map_err(|source| GitListError::Spawn { command: "ls-files", source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() { output.status.to_string() } else { stderr };
        return Err(GitListError::Failed { command: "ls-files", detail });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let paths: Vec<String> =
        stdout.split('\0').filter(|p| !p.is_empty()).map(str::to_string).collect();
    tracing::debug!(count = paths.len(), "listed repository files");
    Ok(paths)
}
