//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const ROOT: &str = "example.com/repo";

/// A test fixture directory holding package records and a deps.toml
pub struct TestFixture {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestFixture {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a package-record stream (one JSON object per package)
  pub fn write_packages(&self, packages: &[(&str, &[&str])]) -> Result<PathBuf> {
    let mut stream = String::new();
    for (import_path, imports) in packages {
      let imports: Vec<String> = imports.iter().map(|i| format!("\"{}\"", i)).collect();
      stream.push_str(&format!(
        "{{\"ImportPath\": \"{}\", \"Imports\": [{}]}}\n",
        import_path,
        imports.join(", ")
      ));
    }

    let file = self.path.join("packages.json");
    std::fs::write(&file, stream)?;
    Ok(file)
  }

  /// Write a deps.toml with the given content
  pub fn write_config(&self, content: &str) -> Result<PathBuf> {
    let file = self.path.join("deps.toml");
    std::fs::write(&file, content)?;
    Ok(file)
  }

  /// A root tree importing a vendored subtree with exclusive, shared, and
  /// transitive dependencies; mirrors the unit scenario in `graph::analyze`.
  pub fn write_scenario_packages(&self) -> Result<PathBuf> {
    let one = format!("{}/one", ROOT);
    let two = format!("{}/two", ROOT);
    let v_one = format!("{}/vendor/one", ROOT);
    let v_two = format!("{}/vendor/two", ROOT);
    let v_three = format!("{}/vendor/three", ROOT);
    let v_ours = format!("{}/vendor/ours", ROOT);
    let v_mine = format!("{}/vendor/mine", ROOT);
    let v_trans = format!("{}/vendor/transitive_ours", ROOT);

    self.write_packages(&[
      (ROOT, &[&one, &two]),
      (&one, &[&v_one, &v_mine]),
      (&two, &[&v_ours]),
      (&v_one, &[&v_two, &v_three]),
      (&v_two, &["outside.org/external"]),
      (&v_three, &[&v_ours, &v_trans]),
      (&v_ours, &[&v_trans]),
      (&v_mine, &["outside.org/external"]),
      (&v_trans, &[]),
    ])
  }
}

/// Run the depcheck binary, failing the test on non-zero exit
pub fn run_depcheck(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_depcheck_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "depcheck command failed: depcheck {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the depcheck binary without asserting on the exit status
pub fn run_depcheck_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let depcheck_bin = env!("CARGO_BIN_EXE_depcheck");

  Command::new(depcheck_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run depcheck")
}
