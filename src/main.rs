//! commit-gate: pre-commit quality gate
//!
//! Runs complexity, security, and lint analyzers over the files staged for
//! commit (or an explicit list) and fails the commit on blocking findings.
//! The gate never analyzes code itself; it invokes external tools, folds
//! their output into one report, and decides pass or fail.

mod analyzers;
mod core;
mod files;
mod gate;
mod process;
mod report;
mod vcs;

use crate::core::error::{GateResult, print_error};
use clap::Parser;
use gate::Gate;
use std::path::PathBuf;

/// Pre-commit quality gate: complexity, security, and lint checks
#[derive(Parser)]
#[command(name = "commit-gate")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Files to check; with none given, the files staged for commit are used
  files: Vec<PathBuf>,

  /// Emit the run as JSON instead of the human-readable report
  #[arg(long)]
  json: bool,

  /// Treat advisory findings as blocking (exit code 1)
  #[arg(long)]
  strict: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  match run(&cli) {
    // 0 = clean, 1 = blocking findings, 2 = the gate itself failed
    Ok(true) => std::process::exit(0),
    Ok(false) => std::process::exit(1),
    Err(err) => {
      print_error(&err);
      std::process::exit(2);
    }
  }
}

/// Run the gate; `Ok(true)` means the commit may proceed.
fn run(cli: &Cli) -> GateResult<bool> {
  if !cli.json {
    println!("\n🔍 Running Code Quality Gate...");
  }

  let selected = files::select_files(&cli.files);
  let run = Gate::new().evaluate(selected);
  let passed = run.passed() && !(cli.strict && run.has_warnings());

  if cli.json {
    println!("{}", run.to_json()?);
  } else {
    for line in run.render() {
      println!("{}", line);
    }

    if passed {
      println!("\n✅ Quality gate passed!");
    } else {
      println!("\n❌ Quality gate failed! Please fix the errors above.");
    }
  }

  Ok(passed)
}
