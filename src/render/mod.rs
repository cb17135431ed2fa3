// src/render/mod.rs

//! Presentation of a [`PathResult`].
//!
//! - [`diagram`] turns the residual graph and the critical path into an
//!   attributed graph description (per-node and per-edge styles).
//! - [`dot`] writes that description as Graphviz DOT.
//! - [`text`] produces the human-readable summary.
//!
//! JSON output is the serialised [`JsonReport`].

pub mod diagram;
pub mod dot;
pub mod text;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::dag::TaskId;
use crate::engine::{PathResult, PathStatus};
use crate::errors::Result;

pub use diagram::{Diagram, DiagramEdge, DiagramNode, EdgeStyle, NodeStyle, Slack};
pub use dot::to_dot;
pub use text::render_text;

/// Machine-readable form of a result.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub stage_count: usize,
    pub path: &'a [TaskId],
    /// `"remaining"`, `"all_clear"` or `"cyclic"`.
    pub status: &'static str,
    /// Courses on prerequisite cycles; empty unless `status == "cyclic"`.
    pub cycles: &'a [Vec<TaskId>],
    pub diagram: Diagram,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a PathResult) -> Self {
        let (status, cycles): (&'static str, &'a [Vec<TaskId>]) = match &result.status {
            PathStatus::Remaining => ("remaining", &[][..]),
            PathStatus::AllClear => ("all_clear", &[][..]),
            PathStatus::Cyclic(report) => ("cyclic", report.cycles.as_slice()),
        };

        Self {
            stage_count: result.stage_count,
            path: &result.path,
            status,
            cycles,
            diagram: Diagram::from_result(result),
        }
    }
}

/// Render a result in the requested format.
pub fn render(result: &PathResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Dot => to_dot(&Diagram::from_result(result)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonReport::new(result))?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::{Curriculum, DependencyGraph};
    use crate::engine::compute_path;

    #[test]
    fn json_report_carries_status_and_path() {
        let g = DependencyGraph::build(
            &Curriculum::new()
                .with_course("X", Vec::<&str>::new())
                .with_course("Y", ["X"]),
        );
        let result = compute_path(&g, Vec::<String>::new());

        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stage_count"], 2);
        assert_eq!(value["status"], "remaining");
        assert_eq!(value["path"], serde_json::json!(["X", "Y"]));
        assert_eq!(value["diagram"]["edges"][0]["critical"], true);
    }

    #[test]
    fn json_report_lists_cycles() {
        let g = DependencyGraph::build(
            &Curriculum::new()
                .with_course("A", ["B"])
                .with_course("B", ["A"]),
        );
        let result = compute_path(&g, Vec::<String>::new());

        let value: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["status"], "cyclic");
        assert_eq!(value["cycles"], serde_json::json!([["A", "B"]]));
    }
}
