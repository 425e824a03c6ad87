//! Error types for commit-gate with contextual messages
//!
//! The gate deliberately absorbs analyzer failures into advisory report
//! entries, so this module only covers the edges that can genuinely fail the
//! program itself: the version-control query, I/O, and report serialization.

use std::fmt;
use std::io;

/// Main error type for commit-gate
#[derive(Debug)]
pub enum GateError {
  /// A git invocation failed to start or exited non-zero
  Git { command: String, detail: String },

  /// I/O errors
  Io(io::Error),

  /// Report serialization errors
  Json(serde_json::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
  },
}

impl GateError {
  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx = ctx.into();
    match self {
      GateError::Message { message, context } => GateError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx, c)).unwrap_or(ctx)),
      },
      other => GateError::Message {
        message: format!("{}: {}", ctx, other),
        context: None,
      },
    }
  }
}

impl fmt::Display for GateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GateError::Git { command, detail } => {
        write!(f, "Git command failed: {}", command)?;
        if !detail.is_empty() {
          write!(f, "\n{}", detail)?;
        }
        Ok(())
      }
      GateError::Io(e) => write!(f, "I/O error: {}", e),
      GateError::Json(e) => write!(f, "JSON error: {}", e),
      GateError::Message { message, context } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for GateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GateError::Io(e) => Some(e),
      GateError::Json(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for GateError {
  fn from(err: io::Error) -> Self {
    GateError::Io(err)
  }
}

impl From<serde_json::Error> for GateError {
  fn from(err: serde_json::Error) -> Self {
    GateError::Json(err)
  }
}

/// Result type alias for commit-gate
pub type GateResult<T> = Result<T, GateError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> GateResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<GateError>,
{
  fn context(self, ctx: impl Into<String>) -> GateResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }
}

/// Pretty-print an error to stderr
pub fn print_error(error: &GateError) {
  eprintln!("\n❌ {}\n", error);
}
