use std::sync::{Arc, Mutex};

use gradpath::engine::ReportSink;
use gradpath::errors::Result;

/// A [`ReportSink`] that keeps every report in memory.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to the runtime.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingSink {
    fn emit(&mut self, report: &str) -> Result<()> {
        self.reports.lock().unwrap().push(report.to_string());
        Ok(())
    }
}
