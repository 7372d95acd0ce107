//! DOT (Graphviz) rendering of a finished graph
//!
//! A thin adapter over the graph's node/successor enumeration: nodes render
//! under their display label while the graph stays keyed on full import paths.

use crate::graph::builder::GraphOptions;
use crate::graph::dep_graph::DepGraph;
use petgraph::dot::{Config, Dot};

/// Render the graph to DOT
///
/// Roots are drawn as filled boxes, vendored packages as ellipses.
///
/// ```bash
/// depcheck trace --root example.com/repo > deps.dot
/// dot -Tpng deps.dot -o deps.png
/// ```
pub fn to_dot(graph: &DepGraph, opts: &GraphOptions) -> String {
  format!(
    "{:?}",
    Dot::with_attr_getters(
      graph.inner(),
      &[Config::EdgeNoLabel, Config::NodeNoLabel],
      &|_, _| String::new(),
      &|_, (_ix, node)| {
        if graph.is_root(&node.unique_name) {
          format!("label=\"{}\" shape=box style=filled fillcolor=lightblue", node.display_name())
        } else if opts.is_vendored(&node.unique_name) {
          format!("label=\"{}\" shape=ellipse", node.display_name())
        } else {
          format!("label=\"{}\" shape=box", node.display_name())
        }
      },
    )
  )
}
