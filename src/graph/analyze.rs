//! Exclusive-dependency analysis: the yours/mine/ours classification
//!
//! Given a set of target packages, split the vendored portion of the graph
//! three ways:
//!
//! - **yours**: reachable only through the targets — remove the targets and
//!   these become unreachable from every root
//! - **mine**: first-level vendored dependencies of the root tree that no
//!   target subtree also reaches
//! - **ours**: first-level vendored dependencies of the root tree that some
//!   node in yours also reaches
//!
//! Only first-level (immediate) vendored dependencies of the non-vendored
//! tree are classified into mine/ours. Nodes reachable solely through an
//! already-classified ours node stay unclassified; the report is about direct
//! dependency boundaries, not transitive closure.

use crate::core::error::{DepResult, GraphError};
use crate::graph::builder::GraphOptions;
use crate::graph::dep_graph::{DepGraph, Node};
use petgraph::stable_graph::NodeIndex;
use std::collections::HashSet;

/// Result of one yours/mine/ours analysis, lists in discovery order
#[derive(Debug, Clone)]
pub struct DependencySets {
  /// Dependencies that exist only because the targets exist
  pub yours: Vec<Node>,

  /// First-level dependencies exclusive to the root tree
  pub mine: Vec<Node>,

  /// First-level dependencies shared between the root tree and the targets
  pub ours: Vec<Node>,
}

/// Nodes that become unreachable from every root once the targets are removed
///
/// Works on a clone, so the caller's graph is untouched. The returned set is
/// exactly the nodes whose every path back to a root passed through a target.
pub fn find_exclusive_dependencies(graph: &DepGraph, targets: &[NodeIndex]) -> Vec<Node> {
  let mut scratch = graph.clone();
  for &target in targets {
    scratch.remove_node(target);
  }
  scratch.prune_orphans()
}

/// Classify the graph's vendored dependencies relative to the target paths
///
/// Fails if any target path is not present in the graph; the graph itself
/// stays valid, only this analysis cannot proceed.
pub fn calculate_dependencies(
  graph: &DepGraph,
  opts: &GraphOptions,
  target_paths: &[String],
) -> DepResult<DependencySets> {
  let mut targets = Vec::with_capacity(target_paths.len());
  for path in target_paths {
    let ix = graph
      .node_by_name(path)
      .ok_or_else(|| GraphError::NodeNotFound { name: path.clone() })?;
    targets.push(ix);
  }

  let yours = find_exclusive_dependencies(graph, &targets);

  // First-level vendored dependencies of the non-vendored tree, deduplicated
  // in discovery order.
  let mut seen = HashSet::new();
  let mut candidates = Vec::new();
  for (ix, node) in graph.nodes() {
    if opts.is_vendored(&node.unique_name) {
      continue;
    }
    for successor in graph.successors(ix) {
      if !opts.is_vendored(&graph.node(successor).unique_name) {
        continue;
      }
      if seen.insert(successor) {
        candidates.push(successor);
      }
    }
  }

  // Union of everything reachable from any yours node on the original graph.
  // The indices in `yours` came from the clone, but clones preserve indices,
  // so the name lookup always resolves.
  let mut shared = HashSet::new();
  for node in &yours {
    if let Some(ix) = graph.node_by_name(&node.unique_name) {
      shared.extend(graph.reachable_from(ix));
    }
  }

  let mut mine = Vec::new();
  let mut ours = Vec::new();
  for ix in candidates {
    if shared.contains(&ix) {
      ours.push(graph.node(ix).clone());
    } else {
      mine.push(graph.node(ix).clone());
    }
  }

  Ok(DependencySets { yours, mine, ours })
}
