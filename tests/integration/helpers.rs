//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Every analyzer disable switch. Set for most tests so runs stay
/// deterministic on machines where some analyzers happen to be installed.
pub const DISABLE_ALL: &[&str] = &[
  "DISABLE_LIZARD",
  "DISABLE_BANDIT",
  "DISABLE_ESLINT",
  "DISABLE_SEMGREP",
];

/// A temporary git repository to stage files in
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create an empty repository with commit identity configured
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    Ok(Self { _root: root, path })
  }

  /// Write a file and stage it
  pub fn stage_file(&self, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = self.path.join(name);
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    git(&self.path, &["add", name])?;
    Ok(file_path)
  }

  /// Delete a file from the working tree without unstaging it
  pub fn delete_file(&self, name: &str) -> Result<()> {
    std::fs::remove_file(self.path.join(name))?;
    Ok(())
  }
}

/// Run git in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the commit-gate binary with every analyzer disabled
pub fn run_gate(cwd: &Path, args: &[&str]) -> Result<Output> {
  run_gate_with_env(cwd, args, DISABLE_ALL)
}

/// Run the commit-gate binary with the given disable switches set to "1".
///
/// Unlike the git helper this never bails on a non-zero exit: exit code 1 is
/// the gate's verdict, which tests assert on.
pub fn run_gate_with_env(cwd: &Path, args: &[&str], disabled: &[&str]) -> Result<Output> {
  let mut command = gate_command(cwd, disabled);
  command.args(args);
  command.output().context("Failed to run commit-gate")
}

/// Preconfigured gate invocation for tests that need extra environment
pub fn gate_command(cwd: &Path, disabled: &[&str]) -> Command {
  let mut command = Command::new(env!("CARGO_BIN_EXE_commit-gate"));
  command.current_dir(cwd);
  for var in disabled {
    command.env(var, "1");
  }
  command
}

/// Path to a checked-in fixture source file
pub fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("tests/fixtures")
    .join(name)
}

pub fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}
