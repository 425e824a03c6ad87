//! Process runner for external analyzer tools
//!
//! Arguments are passed literally to the OS, never through a shell, so file
//! paths cannot inject into a command line. A non-zero exit code is normal
//! output here: several analyzers exit non-zero to signal "issues found",
//! and interpreting that is the adapter's job, not the runner's.

use std::io;
use std::process::Command;

/// Captured output of an analyzer process that ran to completion.
#[derive(Debug, Clone)]
pub struct ToolOutput {
  pub stdout: String,
  pub stderr: String,
  /// Exit code; `None` when the process was terminated by a signal.
  /// Captured but never interpreted: exit conventions are tool-specific.
  #[allow(dead_code)]
  pub status: Option<i32>,
}

/// Outcome of one tool invocation.
#[derive(Debug)]
pub enum ToolOutcome {
  /// The process started and ran to completion (any exit code).
  Completed(ToolOutput),
  /// The executable was not found on PATH.
  Missing,
  /// The process failed to start or run for another reason.
  Failed(String),
}

/// Run `command` and capture stdout, stderr, and exit status.
///
/// There is no timeout: a hung analyzer blocks the gate until the operator
/// kills it. Pre-commit runs are expected to be short, so this is a known
/// limitation rather than a handled case.
pub fn run_tool(command: &[String]) -> ToolOutcome {
  let Some((program, args)) = command.split_first() else {
    return ToolOutcome::Failed("empty command".to_string());
  };

  match Command::new(program).args(args).output() {
    Ok(output) => ToolOutcome::Completed(ToolOutput {
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      status: output.status.code(),
    }),
    Err(err) if err.kind() == io::ErrorKind::NotFound => ToolOutcome::Missing,
    Err(err) => ToolOutcome::Failed(err.to_string()),
  }
}
