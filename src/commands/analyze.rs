//! `depcheck analyze` - Classify a target's dependencies
//!
//! Builds the graph, then reports the three-way split relative to the given
//! `--dep` targets:
//!
//! - **Yours**: dependencies that exist only because the targets exist;
//!   removing the targets would strand them
//! - **Mine**: first-level dependencies exclusive to the rest of the tree
//! - **Ours**: first-level dependencies shared between both

use crate::commands::{load_config, load_packages};
use crate::core::error::{ConfigError, DepError, DepResult};
use crate::graph::{DependencySets, GraphOptions, build_graph, calculate_dependencies};
use std::path::PathBuf;

/// Run the analyze command
pub fn run_analyze(
  config: Option<PathBuf>,
  roots: Vec<String>,
  excludes: Vec<String>,
  filters: Vec<String>,
  input: Option<PathBuf>,
  list_tool: Option<String>,
  deps: Vec<String>,
) -> DepResult<()> {
  if deps.is_empty() {
    return Err(DepError::Config(ConfigError::NoTargets));
  }

  let config = load_config(config.as_deref(), &roots, &excludes, &filters)?;
  let packages = load_packages(input.as_deref(), list_tool.as_deref(), &config.roots)?;
  tracing::debug!("listed {} packages", packages.len());

  let opts = GraphOptions::from(&config);
  let graph = build_graph(&packages, &opts)?;
  let sets = calculate_dependencies(&graph, &opts, &deps)?;

  display_report(&deps, &sets);
  Ok(())
}

/// Print the three labeled sections, lists in discovery order
fn display_report(deps: &[String], sets: &DependencySets) {
  println!("=== Analyzing {} ===", deps.join(", "));
  println!();

  section(
    &format!("\"Yours\": {} dependencies exclusive to the targets", sets.yours.len()),
    &sets.yours,
  );
  section(
    &format!("\"Mine\": {} dependencies exclusive to the rest of the tree", sets.mine.len()),
    &sets.mine,
  );
  section(
    &format!("\"Ours\": {} dependencies shared between both", sets.ours.len()),
    &sets.ours,
  );
}

fn section(header: &str, nodes: &[crate::graph::Node]) {
  println!("{}", header);
  for node in nodes {
    println!("  - {}", node.unique_name);
  }
  println!();
}
