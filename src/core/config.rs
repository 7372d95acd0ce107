//! Configuration for depcheck (deps.toml)
//!
//! The graph engine is domain-agnostic: every exclusion list, collapse prefix,
//! and vendoring convention is injected through this configuration value, never
//! compiled in. A repository tailors depcheck by shipping its own deps.toml
//! (for example one that excludes generated client trees) and pointing the CLI
//! at it with --config. Repeatable CLI flags append to whatever the file lists.

use crate::core::error::{ConfigError, DepError, DepResult, ResultExt};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for one depcheck run
///
/// ```toml
/// roots = ["github.com/example/project"]
/// excludes = ["github.com/example/project/pkg/generated"]
/// filters = ["github.com/example/project/vendor/k8s.io/api"]
/// vendor_dirs = ["vendor"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DepsConfig {
  /// Entrypoint import paths; traversal roots, exempt from orphan pruning
  #[serde(default)]
  pub roots: Vec<String>,

  /// Import-path prefixes dropped from the graph entirely
  #[serde(default)]
  pub excludes: Vec<String>,

  /// Subtree prefixes collapsed into a single representative node
  #[serde(default)]
  pub filters: Vec<String>,

  /// Path segments that mark a package as vendored/external (default: ["vendor"])
  #[serde(default = "default_vendor_dirs")]
  pub vendor_dirs: Vec<String>,
}

fn default_vendor_dirs() -> Vec<String> {
  vec!["vendor".to_string()]
}

impl Default for DepsConfig {
  fn default() -> Self {
    Self {
      roots: Vec::new(),
      excludes: Vec::new(),
      filters: Vec::new(),
      vendor_dirs: default_vendor_dirs(),
    }
  }
}

impl DepsConfig {
  /// Load config from a TOML file
  pub fn load(path: &Path) -> DepResult<Self> {
    if !path.is_file() {
      return Err(DepError::Config(ConfigError::NotFound {
        path: path.to_path_buf(),
      }));
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: DepsConfig =
      toml_edit::de::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
  }

  /// Append CLI flag values to the config-file lists
  ///
  /// File entries keep their position; flags come after, so first-match rules
  /// (collapse prefixes) see the file order first.
  pub fn merge_flags(&mut self, roots: &[String], excludes: &[String], filters: &[String]) {
    self.roots.extend(roots.iter().cloned());
    self.excludes.extend(excludes.iter().cloned());
    self.filters.extend(filters.iter().cloned());
  }

  /// Validate that the config can drive a graph build
  pub fn validate(&self) -> DepResult<()> {
    if self.roots.is_empty() {
      return Err(DepError::Config(ConfigError::NoRoots));
    }
    Ok(())
  }
}
