// src/render/text.rs

use std::fmt::Write;

use crate::engine::{PathResult, PathStatus};

const ARROW: &str = " -> ";

/// Human-readable summary of a result.
pub fn render_text(result: &PathResult) -> String {
    let mut out = String::new();

    match &result.status {
        PathStatus::AllClear => {
            out.push_str("All clear: no courses remain on the critical path. Ready to graduate.\n");
        }
        PathStatus::Cyclic(report) => {
            let _ = writeln!(
                out,
                "No stages computed: the remaining courses contain a prerequisite cycle {report}."
            );
            let _ = writeln!(
                out,
                "Courses still to take: {}",
                result.residual.node_count()
            );
        }
        PathStatus::Remaining => {
            let label = |id: &str| result.residual.label_of(id).unwrap_or(id).to_string();
            let chain: Vec<String> = result.path.iter().map(|id| label(id.as_str())).collect();
            let flexible = result.residual.node_count() - result.stage_count;

            let _ = writeln!(out, "Min. stages left: {}", result.stage_count);
            let _ = writeln!(out, "  based on prerequisite depth");
            if let Some(first) = result.bottleneck() {
                let _ = writeln!(out, "Bottleneck course: {}", label(first));
                let _ = writeln!(out, "  take this next");
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Critical path (zero slack):");
            let _ = writeln!(out, "  {}", chain.join(ARROW));
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Courses still to take: {} ({} flexible)",
                result.residual.node_count(),
                flexible
            );
        }
    }

    out
}
