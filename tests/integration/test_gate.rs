//! End-to-end gate behavior: verdicts, disable switches, output modes

use crate::helpers::{TestRepo, fixture, run_gate, run_gate_with_env, stdout_of};
use anyhow::Result;

#[test]
fn disabled_analyzers_each_report_one_skip_line() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.stage_file("app.py", "def handler():\n    return 1\n")?;

  let output = run_gate(&repo.path, &[])?;
  assert_eq!(output.status.code(), Some(0));

  let stdout = stdout_of(&output);
  for line in [
    "Lizard skipped: Disabled by DISABLE_LIZARD=1 environment variable",
    "Bandit skipped: Disabled by DISABLE_BANDIT=1 environment variable",
    "ESLint skipped: Disabled by DISABLE_ESLINT=1 environment variable",
    "Semgrep skipped: Disabled by DISABLE_SEMGREP=1 environment variable",
  ] {
    assert_eq!(stdout.matches(line).count(), 1, "missing or duplicated: {line}");
  }
  assert!(stdout.contains("WARNINGS:"));
  assert!(stdout.contains("Quality gate passed!"));
  Ok(())
}

#[test]
fn disabling_one_analyzer_leaves_the_others_running() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.stage_file("app.js", "const answer = 42;\n")?;

  // Only eslint is disabled. The others either run clean, are missing, or
  // fail to reach their rule registry; all of those are advisory, so the
  // verdict stays deterministic even though the warnings are not.
  let output = run_gate_with_env(&repo.path, &[], &["DISABLE_ESLINT"])?;
  assert_eq!(output.status.code(), Some(0));

  let stdout = stdout_of(&output);
  assert!(stdout.contains("ESLint skipped: Disabled by DISABLE_ESLINT=1 environment variable"));
  assert!(!stdout.contains("Bandit skipped"));
  assert!(!stdout.contains("Lizard skipped"));
  assert!(!stdout.contains("Semgrep skipped"));
  Ok(())
}

#[test]
fn clean_fixture_passes_whether_or_not_tools_are_installed() -> Result<()> {
  let repo = TestRepo::new()?;
  let content = std::fs::read_to_string(fixture("clean.py"))?;
  repo.stage_file("clean.py", &content)?;

  let output = run_gate_with_env(&repo.path, &[], &[])?;
  assert_eq!(output.status.code(), Some(0));
  assert!(stdout_of(&output).contains("Quality gate passed!"));
  Ok(())
}

#[test]
fn strict_mode_turns_advisories_into_a_failure() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.stage_file("app.py", "def handler():\n    return 1\n")?;

  // All analyzers disabled: four skip advisories and nothing blocking.
  let output = run_gate(&repo.path, &["--strict"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stdout_of(&output).contains("Quality gate failed!"));
  Ok(())
}

#[test]
fn strict_mode_still_passes_a_silent_run() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_gate(&repo.path, &["--strict"])?;
  assert_eq!(output.status.code(), Some(0));
  assert!(stdout_of(&output).contains("No files to check"));
  Ok(())
}

#[test]
fn json_mode_emits_the_run_and_no_banners() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.stage_file("app.py", "def handler():\n    return 1\n")?;

  let output = run_gate(&repo.path, &["--json"])?;
  assert_eq!(output.status.code(), Some(0));

  let stdout = stdout_of(&output);
  assert!(!stdout.contains("Running Code Quality Gate"));
  assert!(!stdout.contains("Quality gate passed!"));

  let value: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(value["files"].as_array().map(Vec::len), Some(1));
  assert_eq!(value["errors"].as_array().map(Vec::len), Some(0));
  // One skip diagnostic per disabled analyzer, in the fixed run order.
  let warnings = value["warnings"].as_array().unwrap();
  assert_eq!(warnings.len(), 4);
  assert!(warnings.iter().all(|w| w["kind"] == "diagnostic"));
  assert!(
    warnings[0]["message"]
      .as_str()
      .unwrap()
      .starts_with("Lizard skipped")
  );
  Ok(())
}

#[test]
fn report_output_is_byte_identical_across_runs() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.stage_file("app.py", "def handler():\n    return 1\n")?;

  let first = run_gate(&repo.path, &[])?;
  let second = run_gate(&repo.path, &[])?;
  assert_eq!(first.stdout, second.stdout);
  assert_eq!(first.status.code(), second.status.code());
  Ok(())
}
