//! Error types for depcheck with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. Expected absences (an import referencing a
//! package that was never traversed) are not errors and never appear here; they
//! are logged at debug level and skipped by the builder.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for depcheck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (lister subprocess, I/O)
  System = 2,
  /// Graph error (lookup failures, structural invariant violations)
  Graph = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for depcheck
#[derive(Debug)]
pub enum DepError {
  /// Configuration errors
  Config(ConfigError),

  /// Graph construction and analysis errors
  Graph(GraphError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

pub type DepResult<T> = Result<T, DepError>;

impl DepError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    DepError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    DepError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      DepError::Message { message, context, help } => DepError::Message {
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
      DepError::Config(_) => ExitCode::User,
      DepError::Graph(_) => ExitCode::Graph,
      DepError::Io(_) => ExitCode::System,
      DepError::Message { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      DepError::Config(e) => e.help_message(),
      DepError::Graph(e) => e.help_message(),
      DepError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for DepError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DepError::Config(e) => write!(f, "{}", e),
      DepError::Graph(e) => write!(f, "{}", e),
      DepError::Io(e) => write!(f, "I/O error: {}", e),
      DepError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for DepError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      DepError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for DepError {
  fn from(err: io::Error) -> Self {
    DepError::Io(err)
  }
}

impl From<String> for DepError {
  fn from(msg: String) -> Self {
    DepError::message(msg)
  }
}

impl From<&str> for DepError {
  fn from(msg: &str) -> Self {
    DepError::message(msg)
  }
}

impl From<ConfigError> for DepError {
  fn from(err: ConfigError) -> Self {
    DepError::Config(err)
  }
}

impl From<GraphError> for DepError {
  fn from(err: GraphError) -> Self {
    DepError::Graph(err)
  }
}

impl From<toml_edit::de::Error> for DepError {
  fn from(err: toml_edit::de::Error) -> Self {
    DepError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for DepError {
  fn from(err: serde_json::Error) -> Self {
    DepError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
///
/// All of these are detected before any graph work begins.
#[derive(Debug)]
pub enum ConfigError {
  /// Config file not found at the given path
  NotFound { path: PathBuf },

  /// No root import path specified (neither config file nor --root)
  NoRoots,

  /// No target dependency specified for analysis
  NoTargets,

  /// Two options that cannot be combined
  ConflictingOptions { first: String, second: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Pass --config with an existing deps.toml, or omit it and use --root/--exclude/--filter flags.".to_string())
      }
      ConfigError::NoRoots => Some("Specify at least one entrypoint with --root, or list roots in deps.toml.".to_string()),
      ConfigError::NoTargets => Some("Specify at least one dependency to analyze with --dep.".to_string()),
      ConfigError::ConflictingOptions { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "No depcheck configuration found at {}", path.display())
      }
      ConfigError::NoRoots => write!(f, "No root import path specified"),
      ConfigError::NoTargets => write!(f, "No dependency specified"),
      ConfigError::ConflictingOptions { first, second } => {
        write!(f, "Options {} and {} cannot be combined", first, second)
      }
    }
  }
}

/// Graph construction and analysis errors
#[derive(Debug)]
pub enum GraphError {
  /// A node with this unique name already exists in the graph
  DuplicateName { name: String },

  /// A requested import path is not present in the built graph
  NodeNotFound { name: String },

  /// An edge endpoint expected to exist in the node index is absent.
  /// Indicates the graph was built inconsistently; never ignored.
  MissingEdgeEndpoint { name: String },
}

impl GraphError {
  fn help_message(&self) -> Option<String> {
    match self {
      GraphError::NodeNotFound { name } => Some(format!(
        "'{}' is not in the traced graph. Check the spelling, and make sure it is not excluded or outside the --root tree.",
        name
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GraphError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GraphError::DuplicateName { name } => {
        write!(f, "A node named '{}' already exists in the graph", name)
      }
      GraphError::NodeNotFound { name } => {
        write!(f, "Package '{}' not found in the dependency graph", name)
      }
      GraphError::MissingEdgeEndpoint { name } => {
        write!(f, "Edge endpoint '{}' missing from node index", name)
      }
    }
  }
}

/// Extension trait for adding context to results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> DepResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> DepResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<DepError>,
{
  fn context(self, ctx: impl Into<String>) -> DepResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> DepResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &DepError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
