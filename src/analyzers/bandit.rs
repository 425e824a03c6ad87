//! Bandit adapter: security analysis for Python sources
//!
//! Bandit emits `{"results": [...]}` in JSON mode. HIGH severity findings
//! block the gate; every other tier is advisory.

use super::trait_def::Analyzer;
use crate::files::PYTHON_EXTENSIONS;
use crate::process::ToolOutput;
use crate::report::{AnalysisRun, Finding, Severity, Tool};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct BanditReport {
  #[serde(default)]
  results: Vec<BanditIssue>,
}

#[derive(Debug, Deserialize)]
struct BanditIssue {
  #[serde(default)]
  issue_severity: String,
  #[serde(default = "super::unknown_issue")]
  issue_text: String,
  #[serde(default = "super::unknown_file")]
  filename: String,
  #[serde(default)]
  line_number: u64,
}

pub struct Bandit;

impl Analyzer for Bandit {
  fn name(&self) -> &str {
    "Bandit"
  }

  fn disable_var(&self) -> &str {
    "DISABLE_BANDIT"
  }

  fn extensions(&self) -> &'static [&'static str] {
    PYTHON_EXTENSIONS
  }

  fn install_hint(&self) -> &str {
    "pip install bandit"
  }

  fn command(&self, files: &[PathBuf]) -> Vec<String> {
    let mut cmd = vec!["bandit".to_string(), "-f".to_string(), "json".to_string()];
    cmd.extend(files.iter().map(|file| file.display().to_string()));
    cmd
  }

  fn collect(&self, output: &ToolOutput, run: &mut AnalysisRun) {
    let Some(report) = super::parse_json_output::<BanditReport>(self.name(), output, run) else {
      return;
    };

    for issue in report.results {
      run.push(Finding::located(
        Tool::Bandit,
        Severity::from_bandit(&issue.issue_severity),
        issue.filename,
        issue.line_number,
        issue.issue_text,
      ));
    }
  }
}
