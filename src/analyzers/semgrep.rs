//! Semgrep adapter: general security scan across the broad code set
//!
//! Run with the automatic ruleset in JSON error-on-finding mode. ERROR and
//! HIGH severities block the gate; anything else, including the "medium"
//! default for results without a severity, is advisory.

use super::trait_def::Analyzer;
use crate::files::CODE_EXTENSIONS;
use crate::process::ToolOutput;
use crate::report::{AnalysisRun, Finding, Severity, Tool};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct SemgrepReport {
  #[serde(default)]
  results: Vec<SemgrepResult>,
}

#[derive(Debug, Deserialize)]
struct SemgrepResult {
  #[serde(default = "super::unknown_file")]
  path: String,
  #[serde(default)]
  start: SemgrepSpan,
  #[serde(default)]
  extra: SemgrepExtra,
}

#[derive(Debug, Default, Deserialize)]
struct SemgrepSpan {
  #[serde(default)]
  line: u64,
}

#[derive(Debug, Deserialize)]
struct SemgrepExtra {
  #[serde(default = "default_severity")]
  severity: String,
  #[serde(default = "super::unknown_issue")]
  message: String,
}

impl Default for SemgrepExtra {
  fn default() -> Self {
    SemgrepExtra {
      severity: default_severity(),
      message: super::unknown_issue(),
    }
  }
}

fn default_severity() -> String {
  "medium".to_string()
}

pub struct Semgrep;

impl Analyzer for Semgrep {
  fn name(&self) -> &str {
    "Semgrep"
  }

  fn disable_var(&self) -> &str {
    "DISABLE_SEMGREP"
  }

  fn extensions(&self) -> &'static [&'static str] {
    CODE_EXTENSIONS
  }

  fn install_hint(&self) -> &str {
    "pip install semgrep"
  }

  fn command(&self, files: &[PathBuf]) -> Vec<String> {
    let mut cmd = vec![
      "semgrep".to_string(),
      "--config".to_string(),
      "auto".to_string(),
      "--json".to_string(),
      "--error".to_string(),
    ];
    cmd.extend(files.iter().map(|file| file.display().to_string()));
    cmd
  }

  fn collect(&self, output: &ToolOutput, run: &mut AnalysisRun) {
    let Some(report) = super::parse_json_output::<SemgrepReport>(self.name(), output, run) else {
      return;
    };

    for result in report.results {
      run.push(Finding::located(
        Tool::Semgrep,
        Severity::from_semgrep(&result.extra.severity),
        result.path,
        result.start.line,
        result.extra.message,
      ));
    }
  }
}
