mod commands;
mod core;
mod graph;
mod packages;

use crate::core::error::{DepError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Trace and analyze package-level dependency graphs
#[derive(Parser)]
#[command(name = "depcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct DepcheckCli {
  /// Enable debug logging (skipped imports, prune counts)
  #[arg(long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the dependency graph and render it
  Trace {
    /// Config file (deps.toml) with roots, excludes, filters
    #[arg(long)]
    config: Option<PathBuf>,
    /// Entrypoint import path (repeatable)
    #[arg(long = "root")]
    roots: Vec<String>,
    /// Import-path prefix to drop from the graph (repeatable)
    #[arg(long = "exclude")]
    excludes: Vec<String>,
    /// Subtree prefix to collapse into a single node (repeatable)
    #[arg(long = "filter")]
    filters: Vec<String>,
    /// Read package records from this file instead of running the lister ("-" for stdin)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Package lister binary (default: go)
    #[arg(long)]
    list_tool: Option<String>,
    /// Output format: dot, text
    #[arg(long, default_value = "dot")]
    output: String,
  },

  /// Classify a target's dependencies into yours/mine/ours
  Analyze {
    /// Config file (deps.toml) with roots, excludes, filters
    #[arg(long)]
    config: Option<PathBuf>,
    /// Entrypoint import path (repeatable)
    #[arg(long = "root")]
    roots: Vec<String>,
    /// Import-path prefix to drop from the graph (repeatable)
    #[arg(long = "exclude")]
    excludes: Vec<String>,
    /// Subtree prefix to collapse into a single node (repeatable)
    #[arg(long = "filter")]
    filters: Vec<String>,
    /// Read package records from this file instead of running the lister ("-" for stdin)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Package lister binary (default: go)
    #[arg(long)]
    list_tool: Option<String>,
    /// Target import path to analyze (repeatable)
    #[arg(long = "dep")]
    deps: Vec<String>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("depcheck=debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depcheck=warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  let cli = DepcheckCli::parse();
  init_logging(cli.verbose);

  let result = match cli.command {
    Commands::Trace {
      config,
      roots,
      excludes,
      filters,
      input,
      list_tool,
      output,
    } => commands::run_trace(config, roots, excludes, filters, input, list_tool, output),
    Commands::Analyze {
      config,
      roots,
      excludes,
      filters,
      input,
      list_tool,
      deps,
    } => commands::run_analyze(config, roots, excludes, filters, input, list_tool, deps),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: DepError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
