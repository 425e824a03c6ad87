//! Lizard adapter: cyclomatic complexity, function length, argument count
//!
//! Lizard prints one plain-text line per violation, location included.
//! Complexity issues are advisory only; they never block the gate.

use super::trait_def::Analyzer;
use crate::files::CODE_EXTENSIONS;
use crate::process::ToolOutput;
use crate::report::{AnalysisRun, Finding, Tool};
use std::path::PathBuf;

/// Maximum cyclomatic complexity before lizard reports a function.
const MAX_CCN: &str = "10";
/// Maximum function length in lines.
const MAX_LENGTH: &str = "100";
/// Maximum number of function arguments.
const MAX_ARGUMENTS: &str = "5";

pub struct Lizard;

impl Analyzer for Lizard {
  fn name(&self) -> &str {
    "Lizard"
  }

  fn disable_var(&self) -> &str {
    "DISABLE_LIZARD"
  }

  fn extensions(&self) -> &'static [&'static str] {
    CODE_EXTENSIONS
  }

  fn install_hint(&self) -> &str {
    "pip install lizard"
  }

  fn command(&self, files: &[PathBuf]) -> Vec<String> {
    let mut cmd = vec![
      "lizard".to_string(),
      "--warnings_only".to_string(),
      "--CCN".to_string(),
      MAX_CCN.to_string(),
      "--length".to_string(),
      MAX_LENGTH.to_string(),
      "--arguments".to_string(),
      MAX_ARGUMENTS.to_string(),
    ];
    cmd.extend(files.iter().map(|file| file.display().to_string()));
    cmd
  }

  fn collect(&self, output: &ToolOutput, run: &mut AnalysisRun) {
    for line in output.stdout.lines() {
      let line = line.trim();
      if !line.is_empty() {
        run.push(Finding::raw(Tool::Lizard, line));
      }
    }
  }
}
