// src/engine/runtime.rs

use std::fmt;
use std::io::Write;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::query::Query;
use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::watch::compute_hash_for_paths;

/// Where rendered reports go.
pub trait ReportSink: Send {
    fn emit(&mut self, report: &str) -> Result<()>;
}

/// Writes each report to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, report: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Re-runs a [`Query`] whenever its source files change.
///
/// Sources are fingerprinted with blake3 before each evaluation so that
/// editor save bursts and touch-only events do not reprint an identical
/// report. A source that fails to load (for example a half-written TOML
/// file) is logged and skipped until the next change.
pub struct Runtime<S: ReportSink> {
    query: Query,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    sink: S,
    last_fingerprint: Option<String>,
}

impl<S: ReportSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("query", &self.query)
            .field("last_fingerprint", &self.last_fingerprint)
            .finish_non_exhaustive()
    }
}

impl<S: ReportSink> Runtime<S> {
    pub fn new(query: Query, event_rx: mpsc::Receiver<RuntimeEvent>, sink: S) -> Self {
        Self {
            query,
            event_rx,
            sink,
            last_fingerprint: None,
        }
    }

    /// Main event loop.
    ///
    /// Evaluates once up front, then once per `SourceChanged` whose sources
    /// actually differ. Returns the sink when the channel closes or shutdown
    /// is requested.
    pub async fn run(mut self) -> Result<S> {
        info!("gradpath watch runtime started");
        self.refresh()?;

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::SourceChanged { path } => {
                    debug!(?path, "source changed");
                    self.refresh()?;
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        Ok(self.sink)
    }

    /// Re-evaluate if the sources changed since the last call. Returns
    /// whether an evaluation was attempted.
    ///
    /// A source that cannot be read (permission denied, or replaced mid-save)
    /// is logged and the fingerprint cleared, so the next event retries it.
    pub fn refresh(&mut self) -> Result<bool> {
        let fingerprint = match compute_hash_for_paths(self.query.source_paths()) {
            Ok(fingerprint) => fingerprint,
            Err(err) => {
                warn!(error = %err, "could not read curriculum sources; waiting for next change");
                self.last_fingerprint = None;
                return Ok(false);
            }
        };
        if self.last_fingerprint.as_deref() == Some(fingerprint.as_str()) {
            debug!("sources unchanged; skipping evaluation");
            return Ok(false);
        }
        self.last_fingerprint = Some(fingerprint);

        match self.query.report() {
            Ok(report) => self.sink.emit(&report)?,
            Err(err) => warn!(error = %err, "could not evaluate curriculum; waiting for next change"),
        }
        Ok(true)
    }
}
