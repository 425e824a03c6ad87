//! Normalized finding model, per-run aggregate, and report rendering
//!
//! The analyzers speak four different severity vocabularies; everything is
//! folded into a two-level model here. `Error` entries fail the gate,
//! `Warning` entries are informational. The native-severity mapping for
//! every tool lives in `Severity::from_*` so the whole table is auditable
//! in one place.

use crate::core::error::GateResult;
use serde::Serialize;
use std::path::PathBuf;

/// The analyzer a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
  Lizard,
  Bandit,
  Eslint,
  Semgrep,
}

impl Tool {
  /// Label used on report lines.
  pub fn label(&self) -> &'static str {
    match self {
      Tool::Lizard => "Complexity",
      Tool::Bandit => "Security",
      Tool::Eslint => "ESLint",
      Tool::Semgrep => "Semgrep",
    }
  }
}

/// Two-level severity: `Error` blocks the commit, `Warning` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Warning,
  Error,
}

impl Severity {
  /// Classify a bandit `issue_severity` value. Only HIGH blocks.
  pub fn from_bandit(native: &str) -> Severity {
    if native == "HIGH" {
      Severity::Error
    } else {
      Severity::Warning
    }
  }

  /// Classify an eslint numeric severity (1 = warning, 2 = error).
  pub fn from_eslint(native: i64) -> Severity {
    if native >= 2 {
      Severity::Error
    } else {
      Severity::Warning
    }
  }

  /// Classify a semgrep `extra.severity` value.
  pub fn from_semgrep(native: &str) -> Severity {
    if native == "ERROR" || native == "HIGH" {
      Severity::Error
    } else {
      Severity::Warning
    }
  }
}

/// Location a finding points at, when the tool reports one.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRef {
  pub file: String,
  /// 1-based line; 0 when the tool did not report one.
  pub line: u64,
}

/// A single normalized finding from one analyzer.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
  pub tool: Tool,
  pub severity: Severity,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source: Option<SourceRef>,
  pub message: String,
}

impl Finding {
  /// A finding with a file location.
  pub fn located(
    tool: Tool,
    severity: Severity,
    file: impl Into<String>,
    line: u64,
    message: impl Into<String>,
  ) -> Self {
    Finding {
      tool,
      severity,
      source: Some(SourceRef {
        file: file.into(),
        line,
      }),
      message: message.into(),
    }
  }

  /// An advisory finding carrying a tool's raw report line, which already
  /// embeds its own location.
  pub fn raw(tool: Tool, message: impl Into<String>) -> Self {
    Finding {
      tool,
      severity: Severity::Warning,
      source: None,
      message: message.into(),
    }
  }
}

/// One entry in a severity bucket: a normalized finding, or a diagnostic
/// about the analyzer itself (skipped, not installed, crashed).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportEntry {
  Finding(Finding),
  Diagnostic { message: String },
}

impl ReportEntry {
  fn render(&self) -> String {
    match self {
      ReportEntry::Finding(finding) => match &finding.source {
        Some(source) => format!(
          "  - {}: {}:{} - {}",
          finding.tool.label(),
          source.file,
          source.line,
          finding.message
        ),
        None => format!("  - {}: {}", finding.tool.label(), finding.message),
      },
      ReportEntry::Diagnostic { message } => format!("  - {}", message),
    }
  }
}

/// Aggregate state for one gate evaluation.
///
/// Created fresh per evaluation and discarded after rendering, so repeated
/// runs in one process cannot leak findings into each other. Entries keep
/// their insertion order, which is the fixed analyzer order.
#[derive(Debug, Serialize)]
pub struct AnalysisRun {
  /// Resolved candidate file list for this run.
  pub files: Vec<PathBuf>,
  errors: Vec<ReportEntry>,
  warnings: Vec<ReportEntry>,
}

impl AnalysisRun {
  pub fn new(files: Vec<PathBuf>) -> Self {
    AnalysisRun {
      files,
      errors: Vec::new(),
      warnings: Vec::new(),
    }
  }

  /// Append a finding, routed to its severity bucket.
  pub fn push(&mut self, finding: Finding) {
    let bucket = match finding.severity {
      Severity::Error => &mut self.errors,
      Severity::Warning => &mut self.warnings,
    };
    bucket.push(ReportEntry::Finding(finding));
  }

  /// Append an advisory diagnostic about an analyzer.
  pub fn diagnostic(&mut self, message: impl Into<String>) {
    self.warnings.push(ReportEntry::Diagnostic {
      message: message.into(),
    });
  }

  /// Whether the gate passes: no blocking entries.
  pub fn passed(&self) -> bool {
    self.errors.is_empty()
  }

  /// Whether any advisory entries were collected (strict mode reads this).
  pub fn has_warnings(&self) -> bool {
    !self.warnings.is_empty()
  }

  /// Render the report lines, always in the same order: blocking section,
  /// advisory section, or a single success line when both are empty.
  pub fn render(&self) -> Vec<String> {
    if self.files.is_empty() && self.errors.is_empty() && self.warnings.is_empty() {
      return vec!["No files to check".to_string()];
    }

    let mut lines = Vec::new();

    if !self.errors.is_empty() {
      lines.push("\n🚫 ERRORS:".to_string());
      lines.extend(self.errors.iter().map(ReportEntry::render));
    }

    if !self.warnings.is_empty() {
      lines.push("\n⚠️ WARNINGS:".to_string());
      lines.extend(self.warnings.iter().map(ReportEntry::render));
    }

    if self.errors.is_empty() && self.warnings.is_empty() {
      lines.push("\n✅ All quality checks passed!".to_string());
    }

    lines
  }

  /// Serialize the run for `--json` consumers.
  pub fn to_json(&self) -> GateResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}
