//! Fixed-order analyzer runner
//!
//! Implements the invocation state machine shared by every adapter:
//! disabled → not applicable → invoked → completed/missing/failed. All
//! failure is absorbed into advisory diagnostics, so nothing one analyzer
//! does can stop the remaining analyzers from running.

use super::trait_def::Analyzer;
use crate::files::filter_by_extension;
use crate::process::{self, ToolOutcome};
use crate::report::AnalysisRun;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Runs registered analyzers in registration order.
pub struct AnalyzerRunner {
  analyzers: Vec<Arc<dyn Analyzer>>,
}

impl AnalyzerRunner {
  /// Create an empty runner.
  pub fn new() -> Self {
    Self {
      analyzers: Vec::new(),
    }
  }

  /// Register an analyzer. Run order is registration order.
  pub fn register(&mut self, analyzer: Arc<dyn Analyzer>) {
    self.analyzers.push(analyzer);
  }

  /// Run every analyzer against the candidate list, appending to `run`.
  pub fn run_all(&self, files: &[PathBuf], run: &mut AnalysisRun) {
    for analyzer in &self.analyzers {
      run_one(analyzer.as_ref(), files, run);
    }
  }
}

impl Default for AnalyzerRunner {
  fn default() -> Self {
    Self::new()
  }
}

fn run_one(analyzer: &dyn Analyzer, files: &[PathBuf], run: &mut AnalysisRun) {
  if matches!(env::var(analyzer.disable_var()), Ok(value) if value == "1") {
    run.diagnostic(format!(
      "{} skipped: Disabled by {}=1 environment variable",
      analyzer.name(),
      analyzer.disable_var()
    ));
    return;
  }

  let applicable = filter_by_extension(files, analyzer.extensions());
  if applicable.is_empty() {
    // Not every tool applies to every commit; stay silent.
    return;
  }

  match process::run_tool(&analyzer.command(&applicable)) {
    ToolOutcome::Completed(output) => analyzer.collect(&output, run),
    ToolOutcome::Missing => run.diagnostic(format!(
      "Warning: {} not found. Install with '{}'",
      analyzer.name(),
      analyzer.install_hint()
    )),
    ToolOutcome::Failed(err) => run.diagnostic(format!(
      "Warning: {} failed with error: {}",
      analyzer.name(),
      err
    )),
  }
}

/// Create a runner with the four built-in analyzers in their fixed order:
/// complexity first, then security, lint, and the general scan.
pub fn create_default_runner() -> AnalyzerRunner {
  let mut runner = AnalyzerRunner::new();
  runner.register(Arc::new(super::lizard::Lizard));
  runner.register(Arc::new(super::bandit::Bandit));
  runner.register(Arc::new(super::eslint::Eslint));
  runner.register(Arc::new(super::semgrep::Semgrep));
  runner
}
