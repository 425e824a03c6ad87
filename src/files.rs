//! File selection and extension filtering
//!
//! Adapters decide applicability by filename suffix alone. Matching is
//! case-sensitive with no path normalization: the candidate list comes from
//! git or the caller and is used verbatim.

use crate::vcs;
use std::path::PathBuf;

/// Python sources, checked by bandit.
pub const PYTHON_EXTENSIONS: &[&str] = &[".py"];

/// JavaScript and TypeScript sources, checked by eslint.
pub const JAVASCRIPT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// The broad source-code set shared by lizard and semgrep.
pub const CODE_EXTENSIONS: &[&str] = &[
  ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".cpp", ".c", ".go", ".rb", ".php", ".swift",
  ".kt",
];

/// Resolve the candidate file list for one gate run.
///
/// Explicit paths are trusted as intentional and returned verbatim, with no
/// existence filtering. With no explicit paths the staged files are used; if
/// the git query fails, the diagnostic goes to stderr and the gate is left
/// with nothing to check, which the caller treats as a trivial pass.
pub fn select_files(explicit: &[PathBuf]) -> Vec<PathBuf> {
  if !explicit.is_empty() {
    return explicit.to_vec();
  }

  match vcs::staged_files() {
    Ok(files) => files,
    Err(err) => {
      eprintln!("Warning: Failed to get staged files from git: {}", err);
      Vec::new()
    }
  }
}

/// Keep the files whose path ends with one of `extensions`, preserving order.
pub fn filter_by_extension(files: &[PathBuf], extensions: &[&str]) -> Vec<PathBuf> {
  files
    .iter()
    .filter(|file| {
      let path = file.to_string_lossy();
      extensions.iter().any(|ext| path.ends_with(ext))
    })
    .cloned()
    .collect()
}
