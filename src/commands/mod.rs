//! CLI commands for depcheck
//!
//! - **trace**: build the dependency graph and render it (DOT or text)
//! - **analyze**: classify a target's dependencies into yours/mine/ours
//!
//! Both commands share the same input pipeline: merge deps.toml with CLI
//! flags, obtain package records (from a file, stdin, or the external lister),
//! and build the graph.

pub mod analyze;
pub mod trace;

pub use analyze::run_analyze;
pub use trace::run_trace;

use crate::core::config::DepsConfig;
use crate::core::error::{ConfigError, DepError, DepResult, ResultExt};
use crate::packages::{PackageList, golist};
use std::fs::File;
use std::io;
use std::path::Path;

/// Merge config file (if any) with repeatable CLI flags and validate
pub(crate) fn load_config(
  config_path: Option<&Path>,
  roots: &[String],
  excludes: &[String],
  filters: &[String],
) -> DepResult<DepsConfig> {
  let mut config = match config_path {
    Some(path) => DepsConfig::load(path)?,
    None => DepsConfig::default(),
  };
  config.merge_flags(roots, excludes, filters);
  config.validate()?;
  Ok(config)
}

/// Obtain package records from `--input` or the external lister
///
/// `--input -` reads stdin. `--input` and `--list-tool` are mutually
/// exclusive: a file is a snapshot, the lister is live, and silently
/// preferring one would hide the other.
pub(crate) fn load_packages(
  input: Option<&Path>,
  list_tool: Option<&str>,
  roots: &[String],
) -> DepResult<PackageList> {
  if input.is_some() && list_tool.is_some() {
    return Err(DepError::Config(ConfigError::ConflictingOptions {
      first: "--input".to_string(),
      second: "--list-tool".to_string(),
    }));
  }

  match input {
    Some(path) if path == Path::new("-") => PackageList::from_reader(io::stdin().lock()),
    Some(path) => {
      let file = File::open(path).with_context(|| format!("Failed to open package input {}", path.display()))?;
      PackageList::from_reader(file)
    }
    None => golist::list_packages(list_tool.unwrap_or("go"), roots),
  }
}
