//! Package listing via the external `go list` tool
//!
//! One subprocess call per run; the output is fully buffered and parsed into a
//! `PackageList` before any graph work begins. depcheck never resolves imports
//! itself — this output contract is the only window into the codebase.

use crate::core::error::{DepError, DepResult, ResultExt};
use crate::packages::PackageList;
use std::process::Command;

/// List all packages under the given root import paths
///
/// Runs `<tool> list -json <root>/...` for every root in one invocation.
/// `tool` is normally `go`, but any binary honoring the same contract works.
pub fn list_packages(tool: &str, roots: &[String]) -> DepResult<PackageList> {
  let mut cmd = Command::new(tool);
  cmd.arg("list").arg("-json");
  for root in roots {
    cmd.arg(format!("{}/...", root));
  }

  let output = cmd
    .output()
    .with_context(|| format!("Failed to execute package lister '{}'", tool))?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    return Err(DepError::with_help(
      format!("Package lister '{}' failed: {}", tool, stderr.trim()),
      "Run the lister manually to inspect the failure, or pass --input with pre-recorded output.",
    ));
  }

  tracing::debug!("lister produced {} bytes of package records", output.stdout.len());

  PackageList::from_reader(&output.stdout[..])
}
