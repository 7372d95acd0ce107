//! Package dependency-graph engine
//!
//! Built on petgraph behind an internal abstraction (`DepGraph`) that exposes
//! exactly the operations the engine needs: deduplicated node/edge insertion,
//! name lookup, copy, and orphan pruning relative to declared roots. Data
//! flows `PackageList` -> `build_graph` -> optional `filter_packages` ->
//! `calculate_dependencies`; every stage is a pure transformation of the
//! graph value.

pub mod analyze;
pub mod builder;
pub mod dep_graph;
pub mod dot;
pub mod filter;

pub use analyze::{DependencySets, calculate_dependencies};
pub use builder::{GraphOptions, build_graph};
pub use dep_graph::{DepGraph, Node};
pub use dot::to_dot;
