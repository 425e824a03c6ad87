//! Gate evaluation: one candidate list through all analyzers to a verdict
//!
//! Analyzers run strictly sequentially in a fixed order so report output is
//! reproducible; each one is I/O-bound on a child process and appends to the
//! same run, which nothing reads until rendering.

use crate::analyzers::{AnalyzerRunner, create_default_runner};
use crate::report::AnalysisRun;
use std::path::PathBuf;

/// The pre-commit gate: four analyzers in a fixed order over one file list.
pub struct Gate {
  runner: AnalyzerRunner,
}

impl Gate {
  /// Gate with the built-in analyzers.
  pub fn new() -> Self {
    Self {
      runner: create_default_runner(),
    }
  }

  /// Gate over a custom runner (test seam).
  #[allow(dead_code)]
  pub fn with_runner(runner: AnalyzerRunner) -> Self {
    Self { runner }
  }

  /// Evaluate one candidate file list.
  ///
  /// An empty list short-circuits to a trivially passing run: absence of
  /// input is not a failure. Every call starts from a fresh aggregate, so
  /// repeated evaluations in one process are independent.
  pub fn evaluate(&self, files: Vec<PathBuf>) -> AnalysisRun {
    let mut run = AnalysisRun::new(files);
    if run.files.is_empty() {
      return run;
    }

    let files = run.files.clone();
    self.runner.run_all(&files, &mut run);
    run
  }
}

impl Default for Gate {
  fn default() -> Self {
    Self::new()
  }
}
