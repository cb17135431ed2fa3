// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;
pub mod watch;

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, CurriculumFile};
use crate::engine::{Query, Runtime, RuntimeEvent, StdoutSink};

pub use crate::dag::{Curriculum, DependencyGraph};
pub use crate::engine::{compute_path, PathResult, PathStatus};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and validation
/// - graph building + critical path computation
/// - rendering to stdout
/// - (optional) file watcher and Ctrl-C handling for `--watch`
pub async fn run(args: CliArgs) -> Result<()> {
    let query = Query::from_args(&args);

    if args.dry_run {
        let cfg = load_and_validate(&query.curriculum_path, query.overrides)?;
        std::io::stdout().lock().write_all(render_dry_run(&cfg).as_bytes())?;
        return Ok(());
    }

    if !args.watch {
        let report = query.report()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        return Ok(());
    }

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let _watcher_handle = crate::watch::spawn_watcher(query.source_paths(), rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    info!(sources = ?query.source_paths(), "watching for changes");

    let runtime = Runtime::new(query, rt_rx, StdoutSink);
    runtime.run().await?;
    Ok(())
}

/// Dry-run output: the parsed courses, labels and prerequisites, plus any
/// prerequisites that are only referenced and never declared.
pub fn render_dry_run(cfg: &CurriculumFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "gradpath dry-run");
    let _ = writeln!(out, "  config.validation = {:?}", cfg.config.validation);
    let _ = writeln!(out, "  config.cycle_policy = {:?}", cfg.config.cycle_policy);
    let _ = writeln!(out);

    let _ = writeln!(out, "courses ({}):", cfg.course.len());
    for (id, course) in cfg.course.iter() {
        let _ = writeln!(out, "  - {id}");
        if let Some(ref label) = course.label {
            let _ = writeln!(out, "      label: {label}");
        }
        if !course.after.is_empty() {
            let _ = writeln!(out, "      after: {:?}", course.after);
        }
    }

    let curriculum = cfg.curriculum();
    let implicit = curriculum.undeclared_prerequisites();
    if !implicit.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "implicit courses (referenced but not declared):");
        for (course, prerequisite) in implicit {
            let _ = writeln!(out, "  - {prerequisite} (required by {course})");
        }
    }

    debug!("dry-run complete (nothing computed)");
    out
}
