// src/engine/mod.rs

//! Critical path engine.
//!
//! - [`core`] is the pure computation: copy the graph, drop passed courses,
//!   find the longest remaining prerequisite chain.
//! - [`query`] wires config loading, the graph builder, the core and the
//!   renderers together for one evaluation.
//! - [`runtime`] is the async shell used by `--watch`: it reacts to
//!   [`RuntimeEvent`]s by re-running the query and emitting reports.

use std::path::PathBuf;

use crate::dag::{CycleReport, DependencyGraph, TaskId};

/// How a computation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStatus {
    /// Courses remain and `path` is their critical chain.
    Remaining,
    /// Nothing remains: every course was passed (or the curriculum is empty).
    AllClear,
    /// The remaining courses contain a prerequisite cycle, so no chain could
    /// be computed. The result has the same shape as `AllClear`.
    Cyclic(CycleReport),
}

/// Outcome of [`compute_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Number of sequential stages still needed (courses on `path`).
    pub stage_count: usize,
    /// The critical chain, first course to take first.
    pub path: Vec<TaskId>,
    /// The prerequisite graph with all passed courses removed.
    pub residual: DependencyGraph,
    pub status: PathStatus,
}

impl PathResult {
    pub(crate) fn empty(residual: DependencyGraph, status: PathStatus) -> Self {
        Self {
            stage_count: 0,
            path: Vec::new(),
            residual,
            status,
        }
    }

    /// The course that must be taken next to avoid a delay.
    pub fn bottleneck(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn is_all_clear(&self) -> bool {
        self.status == PathStatus::AllClear
    }

    pub fn is_cyclic(&self) -> bool {
        matches!(self.status, PathStatus::Cyclic(_))
    }
}

/// Events flowing into the watch runtime.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// A curriculum or progress file may have changed.
    SourceChanged { path: PathBuf },
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod query;
pub mod runtime;

pub use self::core::{compute_path, longest_path};
pub use query::{Query, QueryOutcome};
pub use runtime::{ReportSink, Runtime, StdoutSink};
