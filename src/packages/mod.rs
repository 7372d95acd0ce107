//! Package model: the output contract of the package-listing tool
//!
//! One `Package` per compilation unit, shaped like a `go list -json` record.
//! Records are constructed once from the tool output and immutable afterward;
//! the graph builder is their only consumer.

pub mod golist;

use crate::core::error::{DepResult, ResultExt};
use serde::Deserialize;
use std::io::Read;

/// A single package record from the listing tool
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Package {
  /// Globally unique import path
  #[serde(rename = "ImportPath", default)]
  pub import_path: String,

  /// Import paths referenced by the package sources.
  /// May contain duplicates; order is irrelevant for graph purposes.
  #[serde(rename = "Imports", default)]
  pub imports: Vec<String>,

  /// Import paths referenced only by the package tests
  #[serde(rename = "TestImports", default)]
  pub test_imports: Vec<String>,
}

impl Package {
  /// Regular and test imports, in that order
  pub fn all_imports(&self) -> impl Iterator<Item = &String> {
    self.imports.iter().chain(self.test_imports.iter())
  }
}

/// An ordered collection of package records for one graph build
#[derive(Debug, Clone, Default)]
pub struct PackageList {
  packages: Vec<Package>,
}

impl PackageList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, package: Package) {
    self.packages.push(package);
  }

  pub fn iter(&self) -> impl Iterator<Item = &Package> {
    self.packages.iter()
  }

  pub fn len(&self) -> usize {
    self.packages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.packages.is_empty()
  }

  /// Decode a stream of JSON package records until EOF
  ///
  /// The listing tool emits one JSON object per package, concatenated (not a
  /// JSON array), so this decodes in a loop. Newline-delimited input parses
  /// identically.
  pub fn from_reader(reader: impl Read) -> DepResult<Self> {
    let mut list = PackageList::new();
    let stream = serde_json::Deserializer::from_reader(reader).into_iter::<Package>();

    for package in stream {
      let package = package.context("Failed to decode package record from lister output")?;
      list.add(package);
    }

    Ok(list)
  }
}
