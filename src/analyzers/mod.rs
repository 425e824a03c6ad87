//! Analyzer adapters for the external tools the gate orchestrates
//!
//! One adapter per tool, all behind the `Analyzer` trait:
//!
//! - **lizard**: complexity metrics, plain-text output, advisory only
//! - **bandit**: Python security issues, JSON output
//! - **eslint**: JavaScript/TypeScript lint, JSON output, run through npx
//! - **semgrep**: general security scan, JSON output
//!
//! Adapters only contribute data (name, disable switch, extension set,
//! argv) and a parser. The shared invocation state machine lives in the
//! runner, so adding a fifth tool is additive.

mod bandit;
mod eslint;
mod lizard;
mod runner;
mod semgrep;
mod trait_def;

// Re-export public API; individual adapters are registered by
// create_default_runner() and stay private to the module.
pub use runner::{AnalyzerRunner, create_default_runner};
pub use trait_def::Analyzer;

use crate::process::ToolOutput;
use crate::report::AnalysisRun;
use serde::de::DeserializeOwned;

/// Parse a JSON-mode tool's stdout.
///
/// A tool that crashes often emits human text instead of JSON. On parse
/// failure any stderr becomes one advisory diagnostic; with no stderr the
/// output is dropped. The rule is the same for every JSON adapter.
fn parse_json_output<T: DeserializeOwned>(
  name: &str,
  output: &ToolOutput,
  run: &mut AnalysisRun,
) -> Option<T> {
  match serde_json::from_str(&output.stdout) {
    Ok(parsed) => Some(parsed),
    Err(_) => {
      if !output.stderr.is_empty() {
        run.diagnostic(format!("{} warning: {}", name, output.stderr));
      }
      None
    }
  }
}

fn unknown_issue() -> String {
  "Unknown issue".to_string()
}

fn unknown_file() -> String {
  "unknown".to_string()
}
