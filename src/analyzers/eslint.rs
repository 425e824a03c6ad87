//! ESLint adapter: lint for JavaScript and TypeScript sources
//!
//! Invoked through npx so a project-local eslint wins over a global one.
//! JSON mode emits an array of per-file objects; numeric severity 2 and
//! above blocks the gate, 1 is advisory.

use super::trait_def::Analyzer;
use crate::files::JAVASCRIPT_EXTENSIONS;
use crate::process::ToolOutput;
use crate::report::{AnalysisRun, Finding, Severity, Tool};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct EslintFile {
  #[serde(rename = "filePath", default = "super::unknown_file")]
  file_path: String,
  #[serde(default)]
  messages: Vec<EslintMessage>,
}

#[derive(Debug, Deserialize)]
struct EslintMessage {
  #[serde(default)]
  severity: i64,
  #[serde(default = "super::unknown_issue")]
  message: String,
  #[serde(default)]
  line: u64,
}

pub struct Eslint;

impl Analyzer for Eslint {
  fn name(&self) -> &str {
    "ESLint"
  }

  fn disable_var(&self) -> &str {
    "DISABLE_ESLINT"
  }

  fn extensions(&self) -> &'static [&'static str] {
    JAVASCRIPT_EXTENSIONS
  }

  fn install_hint(&self) -> &str {
    "npm install eslint"
  }

  fn command(&self, files: &[PathBuf]) -> Vec<String> {
    let mut cmd = vec![
      "npx".to_string(),
      "eslint".to_string(),
      "--format".to_string(),
      "json".to_string(),
    ];
    cmd.extend(files.iter().map(|file| file.display().to_string()));
    cmd
  }

  fn collect(&self, output: &ToolOutput, run: &mut AnalysisRun) {
    let Some(files) = super::parse_json_output::<Vec<EslintFile>>(self.name(), output, run) else {
      return;
    };

    for file in files {
      for message in file.messages {
        run.push(Finding::located(
          Tool::Eslint,
          Severity::from_eslint(message.severity),
          file.file_path.clone(),
          message.line,
          message.message,
        ));
      }
    }
  }
}
