//! Mutable directed graph of package import relationships
//!
//! Built on petgraph's `StableDiGraph` so node indices survive removals: a
//! node's id is assigned at insertion and stays valid for its whole lifetime
//! in the graph, which pruning and the what-if analysis in `analyze` rely on.
//! The graph owns its node type (`Node`) from construction — no downcasting —
//! and keeps a name index maintained incrementally on every insert, so lookup
//! by import path is O(1) rather than a scan.

use crate::core::error::{DepResult, GraphError};
use petgraph::Direction;
use petgraph::algo;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::{HashMap, HashSet};

/// A vertex in the dependency graph
///
/// `unique_name` is the canonical import path (or a collapsed-prefix path) and
/// is unique within one graph. `label_name` is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
  /// Canonical import path; the graph's key for this node
  pub unique_name: String,

  /// Shortened display label (e.g. with the vendor root prefix stripped)
  pub label_name: Option<String>,
}

impl Node {
  pub fn new(unique_name: impl Into<String>, label_name: Option<String>) -> Self {
    Self {
      unique_name: unique_name.into(),
      label_name,
    }
  }

  /// Label for rendering; falls back to the unique name
  pub fn display_name(&self) -> &str {
    self.label_name.as_deref().unwrap_or(&self.unique_name)
  }
}

/// Mutable directed graph keyed by unique package names
///
/// `root_names` is fixed at construction: these are the user-declared
/// entrypoints, and orphan pruning treats them as always live no matter how
/// many inbound edges they have.
///
/// Cloning produces a structurally independent graph (fresh node and edge
/// storage, same `root_names`, preserved node indices), which is how callers
/// run destructive what-if computations without an undo mechanism.
#[derive(Debug, Clone)]
pub struct DepGraph {
  graph: StableDiGraph<Node, ()>,
  name_to_node: HashMap<String, NodeIndex>,
  root_names: Vec<String>,
}

impl DepGraph {
  pub fn new(root_names: Vec<String>) -> Self {
    Self {
      graph: StableDiGraph::new(),
      name_to_node: HashMap::new(),
      root_names,
    }
  }

  /// The entrypoint names declared at construction time
  pub fn root_names(&self) -> &[String] {
    &self.root_names
  }

  /// Whether a name is one of the declared entrypoints
  pub fn is_root(&self, name: &str) -> bool {
    self.root_names.iter().any(|root| root == name)
  }

  /// Insert a node, failing if its unique name is already present
  ///
  /// Callers that expect duplicates (e.g. the builder seeing a package twice)
  /// check `node_by_name` first and skip instead of treating this as fatal.
  pub fn add_node(&mut self, node: Node) -> DepResult<NodeIndex> {
    if self.name_to_node.contains_key(&node.unique_name) {
      return Err(GraphError::DuplicateName { name: node.unique_name }.into());
    }

    let name = node.unique_name.clone();
    let ix = self.graph.add_node(node);
    self.name_to_node.insert(name, ix);
    Ok(ix)
  }

  /// O(1) lookup by unique name
  pub fn node_by_name(&self, name: &str) -> Option<NodeIndex> {
    self.name_to_node.get(name).copied()
  }

  /// Node data for an index obtained from this graph
  pub fn node(&self, ix: NodeIndex) -> &Node {
    &self.graph[ix]
  }

  /// Insert a directed edge
  ///
  /// Does not reject duplicates; callers that need at-most-one-edge semantics
  /// (every component in this crate) check `has_edge` first.
  pub fn set_edge(&mut self, from: NodeIndex, to: NodeIndex) {
    self.graph.add_edge(from, to, ());
  }

  /// Whether an edge from `from` to `to` exists
  pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
    self.graph.find_edge(from, to).is_some()
  }

  /// Remove a node and all of its incident edges, both directions
  pub fn remove_node(&mut self, ix: NodeIndex) -> Option<Node> {
    let node = self.graph.remove_node(ix)?;
    self.name_to_node.remove(&node.unique_name);
    Some(node)
  }

  /// Remove every node unreachable from the declared roots, to a fixed point
  ///
  /// A node is an orphan if it is not a root name and has zero inbound edges.
  /// Removing one orphan can orphan its former dependents' other children, so
  /// this re-scans until a pass removes nothing. Returns the removed nodes in
  /// removal order. Terminates because every pass strictly shrinks the node
  /// set or stops.
  pub fn prune_orphans(&mut self) -> Vec<Node> {
    let mut removed = Vec::new();

    loop {
      let orphans: Vec<NodeIndex> = self
        .graph
        .node_indices()
        .filter(|&ix| {
          !self.is_root(&self.graph[ix].unique_name)
            && self.graph.neighbors_directed(ix, Direction::Incoming).next().is_none()
        })
        .collect();

      if orphans.is_empty() {
        break;
      }

      for ix in orphans {
        if let Some(node) = self.remove_node(ix) {
          removed.push(node);
        }
      }
    }

    removed
  }

  /// All nodes with their indices, in insertion order
  pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
    self.graph.node_indices().map(|ix| (ix, &self.graph[ix]))
  }

  /// Direct successors of a node
  pub fn successors(&self, ix: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
    self.graph.neighbors_directed(ix, Direction::Outgoing)
  }

  /// All edges as (from, to) index pairs
  pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
    self
      .graph
      .edge_indices()
      .filter_map(|edge| self.graph.edge_endpoints(edge))
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }

  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  /// Every node reachable from `start`, including `start` itself
  ///
  /// Single-source shortest path with unit edge costs; the graph is unweighted
  /// and only presence of a path matters.
  pub fn reachable_from(&self, start: NodeIndex) -> HashSet<NodeIndex> {
    algo::dijkstra(&self.graph, start, None, |_| 1usize)
      .into_keys()
      .collect()
  }

  /// The underlying petgraph storage, for the DOT adapter
  pub(crate) fn inner(&self) -> &StableDiGraph<Node, ()> {
    &self.graph
  }
}
