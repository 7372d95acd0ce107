//! Graph construction from package records
//!
//! Two passes over the package list: one to insert nodes, one to insert edges.
//! Imports that were never traversed by the lister (paths outside the root
//! trees) are expected and skipped; a retained package missing from the node
//! index after the node pass is a builder bug and aborts the build.

use crate::core::config::DepsConfig;
use crate::core::error::{DepResult, GraphError};
use crate::graph::dep_graph::{DepGraph, Node};
use crate::graph::filter::filter_packages;
use crate::packages::PackageList;

/// Injected build options: the engine has no compiled-in defaults
///
/// Constructed from a `DepsConfig` (deps.toml plus CLI flags); tests construct
/// it directly.
#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
  /// Entrypoint import paths, exempt from orphan pruning
  pub roots: Vec<String>,

  /// Prefixes to drop from the graph entirely
  pub excludes: Vec<String>,

  /// Subtree prefixes to collapse into single nodes
  pub filters: Vec<String>,

  /// Path segments marking a package as vendored/external
  pub vendor_dirs: Vec<String>,
}

impl From<&DepsConfig> for GraphOptions {
  fn from(config: &DepsConfig) -> Self {
    Self {
      roots: config.roots.clone(),
      excludes: config.excludes.clone(),
      filters: config.filters.clone(),
      vendor_dirs: config.vendor_dirs.clone(),
    }
  }
}

impl GraphOptions {
  /// Whether a path survives the exclude and validity filters
  pub fn retains(&self, path: &str) -> bool {
    !self.excludes.iter().any(|exclude| path.starts_with(exclude.as_str())) && is_valid_package_path(path)
  }

  /// Whether a path falls under the configured vendoring convention
  pub fn is_vendored(&self, path: &str) -> bool {
    path.split('/').any(|segment| self.vendor_dirs.iter().any(|dir| dir == segment))
  }

  /// Display label with everything before the vendor segment stripped
  ///
  /// `example.com/repo/vendor/x.com/y` becomes `vendor/x.com/y`; non-vendored
  /// paths get no label and render under their unique name.
  pub fn label_for(&self, path: &str) -> Option<String> {
    let mut offset = 0;
    for segment in path.split('/') {
      if self.vendor_dirs.iter().any(|dir| dir == segment) {
        return Some(path[offset..].to_string());
      }
      offset += segment.len() + 1;
    }
    None
  }
}

/// Syntactic check for a resolvable package path
///
/// A real package path starts with a host segment ("example.com/..."), which
/// distinguishes it from standard-library-style paths like "fmt" or
/// "encoding/json" — those are never graph nodes.
pub fn is_valid_package_path(path: &str) -> bool {
  match path.split('/').next() {
    Some(host) => host.contains('.'),
    None => false,
  }
}

/// Build a dependency graph from package records
///
/// One node per valid, non-excluded package; one edge per valid, resolvable
/// import relationship. Non-empty `filters` collapse matching subtrees, and
/// orphans are pruned before the graph is returned, so a node whose only
/// importer was excluded does not linger in the result.
pub fn build_graph(packages: &PackageList, opts: &GraphOptions) -> DepResult<DepGraph> {
  let mut graph = DepGraph::new(opts.roots.clone());

  for package in packages.iter() {
    if !opts.retains(&package.import_path) {
      continue;
    }
    if graph.node_by_name(&package.import_path).is_some() {
      // duplicate record from the lister; first one wins
      continue;
    }
    graph.add_node(Node::new(package.import_path.as_str(), opts.label_for(&package.import_path)))?;
  }

  for package in packages.iter() {
    if !opts.retains(&package.import_path) {
      continue;
    }

    let from = graph
      .node_by_name(&package.import_path)
      .ok_or_else(|| GraphError::MissingEdgeEndpoint {
        name: package.import_path.clone(),
      })?;

    for import in package.all_imports() {
      if !opts.retains(import) {
        continue;
      }

      let Some(to) = graph.node_by_name(import) else {
        // Import of a path the lister never visited (outside the root
        // trees). The graph only covers the traversed universe.
        tracing::debug!("skipping unvisited import {} -> {}", package.import_path, import);
        continue;
      };

      if from == to {
        // A package's external test binary imports the package itself
        continue;
      }

      if !graph.has_edge(from, to) {
        graph.set_edge(from, to);
      }
    }
  }

  let mut graph = if opts.filters.is_empty() {
    graph
  } else {
    filter_packages(&graph, &opts.filters, opts)?
  };

  let pruned = graph.prune_orphans();
  if !pruned.is_empty() {
    tracing::debug!("pruned {} orphaned packages after build", pruned.len());
  }

  Ok(graph)
}
