//! Analyzer trait abstraction
//!
//! Each external tool is wrapped in one adapter implementing `Analyzer`.
//! The trait carries the per-tool data the runner's state machine needs
//! plus the output parser; everything else (disable switch handling,
//! extension filtering, invocation, missing-tool diagnostics) is shared.

use crate::process::ToolOutput;
use crate::report::AnalysisRun;
use std::path::PathBuf;

/// One external analyzer tool.
///
/// Adapters never return errors: parsing appends findings or advisory
/// diagnostics to the run, and a broken tool must not stop the gate.
pub trait Analyzer: Send + Sync {
  /// Display name used in diagnostics (e.g. "Bandit").
  fn name(&self) -> &str;

  /// Environment switch disabling this analyzer when set to "1".
  fn disable_var(&self) -> &str;

  /// File extensions this analyzer applies to.
  fn extensions(&self) -> &'static [&'static str];

  /// Shown in the "not found" diagnostic.
  fn install_hint(&self) -> &str;

  /// Build the argv: fixed flags first, then the filtered files in order.
  fn command(&self, files: &[PathBuf]) -> Vec<String>;

  /// Parse captured output and append findings to the run.
  fn collect(&self, output: &ToolOutput, run: &mut AnalysisRun);
}
