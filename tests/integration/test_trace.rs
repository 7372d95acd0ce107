//! Integration tests for `depcheck trace`

use crate::helpers::{ROOT, TestFixture, run_depcheck, run_depcheck_raw};
use anyhow::Result;

#[test]
fn test_trace_dot_output() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_scenario_packages()?;

  let output = run_depcheck(
    &fixture.path,
    &["trace", "--root", ROOT, "--input", input.to_str().unwrap()],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.starts_with("digraph"));
  // vendored nodes render under their shortened label
  assert!(stdout.contains("label=\"vendor/one\""));
  // the root is highlighted
  assert!(stdout.contains("fillcolor=lightblue"));
  Ok(())
}

#[test]
fn test_trace_text_output() -> Result<()> {
  let fixture = TestFixture::new()?;
  let one = format!("{}/one", ROOT);
  let input = fixture.write_packages(&[(ROOT, &[&one, "fmt"]), (&one, &[])])?;

  let output = run_depcheck(
    &fixture.path,
    &[
      "trace",
      "--root",
      ROOT,
      "--input",
      input.to_str().unwrap(),
      "--output",
      "text",
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("2 packages, 1 dependency edges"));
  assert!(stdout.contains(&format!("  -> {}", one)));
  // standard-library imports never become nodes
  assert!(!stdout.contains("fmt"));
  Ok(())
}

#[test]
fn test_trace_with_config_file() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_scenario_packages()?;
  let config = fixture.write_config(&format!(
    "roots = [\"{root}\"]\nfilters = [\"{root}/vendor\"]\n",
    root = ROOT
  ))?;

  let output = run_depcheck(
    &fixture.path,
    &[
      "trace",
      "--config",
      config.to_str().unwrap(),
      "--input",
      input.to_str().unwrap(),
      "--output",
      "text",
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  // the whole vendor subtree collapsed into one node
  assert!(stdout.contains(&format!("{}/vendor\n", ROOT)));
  assert!(!stdout.contains("vendor/one"));
  Ok(())
}

#[test]
fn test_trace_excluded_prefix_absent() -> Result<()> {
  let fixture = TestFixture::new()?;
  let one = format!("{}/one", ROOT);
  let generated = format!("{}/generated", ROOT);
  let input =
    fixture.write_packages(&[(ROOT, &[&one, &generated]), (&one, &[]), (&generated, &[])])?;

  let output = run_depcheck(
    &fixture.path,
    &[
      "trace",
      "--root",
      ROOT,
      "--exclude",
      &generated,
      "--input",
      input.to_str().unwrap(),
      "--output",
      "text",
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(!stdout.contains("generated"));
  Ok(())
}

#[test]
fn test_trace_without_roots_fails() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_packages(&[(ROOT, &[])])?;

  let output = run_depcheck_raw(&fixture.path, &["trace", "--input", input.to_str().unwrap()])?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("No root import path specified"));
  Ok(())
}

#[test]
fn test_trace_input_and_list_tool_conflict() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_packages(&[(ROOT, &[])])?;

  let output = run_depcheck_raw(
    &fixture.path,
    &[
      "trace",
      "--root",
      ROOT,
      "--input",
      input.to_str().unwrap(),
      "--list-tool",
      "go",
    ],
  )?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("cannot be combined"));
  Ok(())
}

#[test]
fn test_trace_unknown_output_format_fails() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_packages(&[(ROOT, &[])])?;

  let output = run_depcheck_raw(
    &fixture.path,
    &[
      "trace",
      "--root",
      ROOT,
      "--input",
      input.to_str().unwrap(),
      "--output",
      "svg",
    ],
  )?;
  assert!(!output.status.success());
  Ok(())
}
