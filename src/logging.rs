// src/logging.rs

//! Logging setup for `gradpath` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (applies to every target)
//! 2. `GRADPATH_LOG` environment variable, in `EnvFilter` syntax, so
//!    `GRADPATH_LOG=warn,gradpath::engine=debug` traces only the path engine
//! 3. default to `info`
//!
//! Logs go to STDERR; STDOUT only ever carries the rendered report, so
//! `gradpath --format dot | dot -Tsvg` works.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "GRADPATH_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, env.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    let directive = filter_directive(cli_level, env);
    EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter {directive:?} (from {LOG_ENV_VAR})"))
}

/// The filter directive string actually used. A blank env var counts as unset.
fn filter_directive(cli_level: Option<LogLevel>, env: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return level_directive(lvl).to_string();
    }
    match env.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase().replace("warning", "warn"),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

fn level_directive(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
