//! `depcheck trace` - Build and render the package dependency graph
//!
//! Builds the graph from the listed packages, optionally collapses configured
//! subtrees, and prints it as DOT (for Graphviz) or a text adjacency listing.

use crate::commands::{load_config, load_packages};
use crate::core::error::{DepError, DepResult};
use crate::graph::{GraphOptions, build_graph, to_dot};
use std::path::PathBuf;

/// Output format for the trace command
#[derive(Debug, Clone, Copy)]
enum OutputFormat {
  Dot,
  Text,
}

impl OutputFormat {
  fn from_str(s: &str) -> DepResult<Self> {
    match s.to_lowercase().as_str() {
      "dot" => Ok(Self::Dot),
      "text" => Ok(Self::Text),
      _ => Err(DepError::message(format!(
        "Unknown format '{}'. Valid formats: dot, text",
        s
      ))),
    }
  }
}

/// Run the trace command
pub fn run_trace(
  config: Option<PathBuf>,
  roots: Vec<String>,
  excludes: Vec<String>,
  filters: Vec<String>,
  input: Option<PathBuf>,
  list_tool: Option<String>,
  output: String,
) -> DepResult<()> {
  let output_format = OutputFormat::from_str(&output)?;

  let config = load_config(config.as_deref(), &roots, &excludes, &filters)?;
  let packages = load_packages(input.as_deref(), list_tool.as_deref(), &config.roots)?;
  tracing::debug!("listed {} packages", packages.len());

  let opts = GraphOptions::from(&config);
  let graph = build_graph(&packages, &opts)?;

  match output_format {
    OutputFormat::Dot => println!("{}", to_dot(&graph, &opts)),
    OutputFormat::Text => display_text(&graph),
  }

  Ok(())
}

/// Text adjacency listing: one node per line, successors indented below
fn display_text(graph: &crate::graph::DepGraph) {
  println!("{} packages, {} dependency edges", graph.node_count(), graph.edge_count());
  println!();

  for (ix, node) in graph.nodes() {
    println!("{}", node.unique_name);
    for successor in graph.successors(ix) {
      println!("  -> {}", graph.node(successor).unique_name);
    }
  }
}
