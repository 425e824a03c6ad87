//! Staged-file queries against system git
//!
//! Git is treated exactly like the analyzers: an opaque subprocess with a
//! command-line contract. Only one query is needed here, the paths staged
//! for the next commit.

use crate::core::error::{GateError, GateResult, ResultExt};
use std::path::PathBuf;
use std::process::Command;

/// List files staged for commit, in git's reported order.
///
/// A file can be staged and then deleted from the working tree; such paths
/// are dropped since there is nothing left on disk to analyze.
pub fn staged_files() -> GateResult<Vec<PathBuf>> {
  let output = Command::new("git")
    .args(["diff", "--name-only", "--cached"])
    .output()
    .context("Failed to run git diff")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    return Err(GateError::Git {
      command: "git diff --name-only --cached".to_string(),
      detail: stderr.trim().to_string(),
    });
  }

  let files = String::from_utf8_lossy(&output.stdout)
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(PathBuf::from)
    .filter(|path| path.exists())
    .collect();

  Ok(files)
}
