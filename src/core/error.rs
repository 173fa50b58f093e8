//! Error types for curator with contextual messages and exit codes
//!
//! Release operations report failure through typed error kinds rather than
//! `(bool, message)` pairs, so callers can branch on kind without string
//! matching. Every error renders a human-readable message and, where it
//! helps, a suggestion for resolving it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for curator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad arguments, missing module, precondition violations)
  User = 1,
  /// System error (git, network, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for curator
#[derive(Debug)]
pub enum CuratorError {
  /// Git operation errors
  Git(GitError),

  /// Release sequencing errors (preconditions, discovery)
  Release(ReleaseError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl CuratorError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    CuratorError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      CuratorError::Message { message, context, help } => CuratorError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      CuratorError::Git(_) => ExitCode::System,
      CuratorError::Release(_) => ExitCode::User,
      CuratorError::Io(_) => ExitCode::System,
      CuratorError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      CuratorError::Git(e) => e.help_message(),
      CuratorError::Release(e) => e.help_message(),
      CuratorError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for CuratorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CuratorError::Git(e) => write!(f, "{}", e),
      CuratorError::Release(e) => write!(f, "{}", e),
      CuratorError::Io(e) => write!(f, "I/O error: {}", e),
      CuratorError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for CuratorError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      CuratorError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for CuratorError {
  fn from(err: io::Error) -> Self {
    CuratorError::Io(err)
  }
}

impl From<String> for CuratorError {
  fn from(msg: String) -> Self {
    CuratorError::message(msg)
  }
}

impl From<&str> for CuratorError {
  fn from(msg: &str) -> Self {
    CuratorError::message(msg)
  }
}

impl From<toml_edit::TomlError> for CuratorError {
  fn from(err: toml_edit::TomlError) -> Self {
    CuratorError::message(format!("TOML parse error: {}", err))
  }
}

impl From<serde_json::Error> for CuratorError {
  fn from(err: serde_json::Error) -> Self {
    CuratorError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for CuratorError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    CuratorError::message(format!("UTF-8 conversion error: {}", err))
  }
}

impl From<dialoguer::Error> for CuratorError {
  fn from(err: dialoguer::Error) -> Self {
    CuratorError::message(format!("Prompt error: {}", err))
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// No repository found at or above the given path
  RepoNotFound { path: PathBuf },

  /// Push failed (local mutations remain applied; nothing is rolled back)
  PushFailed {
    remote: String,
    refname: String,
    reason: String,
  },

  /// Merge could not complete automatically
  MergeConflict { branch: String, stderr: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::PushFailed { reason, .. } => {
        if reason.contains("non-fast-forward") {
          Some("The remote has commits you don't have. Pull first or use --force (dangerous).".to_string())
        } else if reason.contains("permission denied") || reason.contains("403") {
          Some("Check your SSH key permissions and remote access.".to_string())
        } else {
          None
        }
      }
      GitError::RepoNotFound { path } => Some(format!(
        "Initialize a repository first or check the path: {}",
        path.display()
      )),
      GitError::MergeConflict { branch, .. } => Some(format!(
        "Resolve the conflicts by hand, or abort with `git merge --abort` and re-try merging '{}'.",
        branch
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
      GitError::PushFailed { remote, refname, reason } => {
        write!(f, "Push of {} to {} failed: {}", refname, remote, reason)
      }
      GitError::MergeConflict { branch, stderr } => {
        write!(f, "Merge of '{}' did not complete: {}", branch, stderr.trim())
      }
    }
  }
}

/// Release sequencing errors
#[derive(Debug)]
pub enum ReleaseError {
  /// No version-bearing module could be discovered
  ModuleNotFound { root: PathBuf },

  /// Operation requires a different active branch
  WrongBranch { expected: String, actual: String },

  /// Tag already exists; refusing to overwrite it
  TagExists { name: String },
}

impl ReleaseError {
  fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::ModuleNotFound { .. } => Some(
        "Expected a src-layout project: a module directory under the source root with a \
         version-declaration file. Check pyproject.toml or the src/ directory."
          .to_string(),
      ),
      ReleaseError::WrongBranch { expected, .. } => {
        Some(format!("Switch branches first: git checkout {}", expected))
      }
      ReleaseError::TagExists { name } => Some(format!(
        "Pick a different tag name, or delete the old one with `git tag -d {}` if it was a mistake.",
        name
      )),
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::ModuleNotFound { root } => {
        write!(f, "No version-bearing module found under {}", root.display())
      }
      ReleaseError::WrongBranch { expected, actual } => {
        write!(f, "Must be on '{}' (currently on '{}')", expected, actual)
      }
      ReleaseError::TagExists { name } => {
        write!(f, "Tag '{}' already exists", name)
      }
    }
  }
}

/// Result type alias for curator
pub type CuratorResult<T> = Result<T, CuratorError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> CuratorResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> CuratorResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<CuratorError>,
{
  fn context(self, ctx: impl Into<String>) -> CuratorResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> CuratorResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &CuratorError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
