// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gradpath`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gradpath",
    version,
    about = "Compute the stages left and the critical prerequisite chain of a curriculum.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the curriculum file (TOML).
    #[arg(long, value_name = "PATH", default_value = "Curriculum.toml")]
    pub curriculum: String,

    /// A course that has already been passed. May be repeated.
    #[arg(long = "passed", value_name = "COURSE")]
    pub passed: Vec<String>,

    /// Optional progress file (TOML, `passed = [...]`) listing passed courses.
    #[arg(long, value_name = "PATH")]
    pub progress: Option<String>,

    /// How to print the result.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reject undeclared prerequisites, self-dependencies and cycles.
    #[arg(long)]
    pub strict: bool,

    /// Refuse to load a curriculum whose prerequisites form a cycle.
    #[arg(long)]
    pub reject_cycles: bool,

    /// Keep running and recompute whenever the curriculum or progress file changes.
    #[arg(long)]
    pub watch: bool,

    /// Parse + validate and print the curriculum, but compute nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRADPATH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Report format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary: stages left, bottleneck, chain.
    Text,
    /// Graphviz DOT diagram of the remaining courses.
    Dot,
    /// Machine-readable result including the attributed diagram.
    Json,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
