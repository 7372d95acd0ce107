//! Subtree collapsing: fold whole prefixes into single representative nodes
//!
//! Every node matching a filter prefix is replaced by one node named after the
//! prefix, and every source edge is re-mapped individually, so cross-group
//! adjacency in the result is exactly "some node in group A imports some node
//! in group B" — no reachability is invented and none is lost.

use crate::core::error::{DepResult, GraphError};
use crate::graph::builder::GraphOptions;
use crate::graph::dep_graph::{DepGraph, Node};

/// Collapse all subtrees matching `filters` into single nodes
///
/// Nodes that match no prefix pass through unchanged. The result carries the
/// same root names as the source.
pub fn filter_packages(graph: &DepGraph, filters: &[String], opts: &GraphOptions) -> DepResult<DepGraph> {
  let mut filtered = DepGraph::new(graph.root_names().to_vec());

  for (_, node) in graph.nodes() {
    let name = collapsed_name(&node.unique_name, filters);
    if filtered.node_by_name(name).is_none() {
      filtered.add_node(Node::new(name, opts.label_for(name)))?;
    }
  }

  for (from, to) in graph.edges() {
    let from_name = collapsed_name(&graph.node(from).unique_name, filters);
    let to_name = collapsed_name(&graph.node(to).unique_name, filters);

    if from_name == to_name {
      // edge is now internal to one collapsed group
      continue;
    }

    let from_ix = filtered
      .node_by_name(from_name)
      .ok_or_else(|| GraphError::MissingEdgeEndpoint {
        name: from_name.to_string(),
      })?;
    let to_ix = filtered
      .node_by_name(to_name)
      .ok_or_else(|| GraphError::MissingEdgeEndpoint {
        name: to_name.to_string(),
      })?;

    if !filtered.has_edge(from_ix, to_ix) {
      filtered.set_edge(from_ix, to_ix);
    }
  }

  Ok(filtered)
}

/// First filter prefix that owns `name`, or `name` itself
///
/// A prefix only matches on a path-segment boundary: "a.com/b" owns "a.com/b"
/// and "a.com/b/x" but never the sibling "a.com/b2". Plain string prefixing
/// would absorb it.
fn collapsed_name<'a>(name: &'a str, filters: &'a [String]) -> &'a str {
  for prefix in filters {
    if let Some(rest) = name.strip_prefix(prefix.as_str())
      && (rest.is_empty() || rest.starts_with('/'))
    {
      return prefix;
    }
  }
  name
}
