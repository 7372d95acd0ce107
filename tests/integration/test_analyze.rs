//! Integration tests for `depcheck analyze`

use crate::helpers::{ROOT, TestFixture, run_depcheck, run_depcheck_raw};
use anyhow::Result;

#[test]
fn test_analyze_report_sections() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_scenario_packages()?;
  let target = format!("{}/vendor/one", ROOT);

  let output = run_depcheck(
    &fixture.path,
    &[
      "analyze",
      "--root",
      ROOT,
      "--input",
      input.to_str().unwrap(),
      "--dep",
      &target,
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("\"Yours\": 2"));
  assert!(stdout.contains(&format!("  - {}/vendor/two", ROOT)));
  assert!(stdout.contains(&format!("  - {}/vendor/three", ROOT)));

  assert!(stdout.contains("\"Mine\": 2"));
  assert!(stdout.contains(&format!("  - {}/vendor/mine", ROOT)));
  assert!(stdout.contains(&format!("  - {}/vendor/one", ROOT)));

  assert!(stdout.contains("\"Ours\": 1"));
  assert!(stdout.contains(&format!("  - {}/vendor/ours", ROOT)));

  // transitively-shared nodes stay unclassified
  assert!(!stdout.contains("transitive_ours"));
  Ok(())
}

#[test]
fn test_analyze_without_dep_fails() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_scenario_packages()?;

  let output = run_depcheck_raw(
    &fixture.path,
    &["analyze", "--root", ROOT, "--input", input.to_str().unwrap()],
  )?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("No dependency specified"));
  Ok(())
}

#[test]
fn test_analyze_unknown_target_fails_with_path() -> Result<()> {
  let fixture = TestFixture::new()?;
  let input = fixture.write_scenario_packages()?;
  let target = format!("{}/vendor/gone", ROOT);

  let output = run_depcheck_raw(
    &fixture.path,
    &[
      "analyze",
      "--root",
      ROOT,
      "--input",
      input.to_str().unwrap(),
      "--dep",
      &target,
    ],
  )?;
  assert_eq!(output.status.code(), Some(3));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains(&target));
  Ok(())
}

#[test]
fn test_analyze_reads_stdin() -> Result<()> {
  use std::io::Write;
  use std::process::{Command, Stdio};

  let fixture = TestFixture::new()?;
  let input = fixture.write_scenario_packages()?;
  let records = std::fs::read(&input)?;
  let target = format!("{}/vendor/one", ROOT);

  let depcheck_bin = env!("CARGO_BIN_EXE_depcheck");
  let mut child = Command::new(depcheck_bin)
    .current_dir(&fixture.path)
    .args(["analyze", "--root", ROOT, "--input", "-", "--dep", &target])
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()?;

  child.stdin.as_mut().unwrap().write_all(&records)?;
  let output = child.wait_with_output()?;

  assert!(output.status.success());
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("\"Yours\": 2"));
  Ok(())
}
