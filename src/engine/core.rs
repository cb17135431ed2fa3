// src/engine/core.rs

//! Pure critical path computation.
//!
//! Everything here is synchronous and deterministic and does no IO, so it
//! can be called from any number of threads against one shared graph.

use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use tracing::{debug, info, warn};

use crate::dag::{stable_toposort, CycleReport, DependencyGraph, TaskId};
use crate::engine::{PathResult, PathStatus};

/// Remove the passed courses from a copy of `graph` and find the critical
/// path through what remains.
///
/// The input graph is never modified. Passed ids that are not in the graph
/// are ignored. Never fails: an empty residual yields [`PathStatus::AllClear`]
/// and a cyclic one [`PathStatus::Cyclic`], both with zero stages.
pub fn compute_path<I>(graph: &DependencyGraph, completed: I) -> PathResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut residual = graph.clone();

    for task in completed {
        let task = task.as_ref();
        if residual.remove_task(task) {
            debug!(course = %task, "removed passed course");
        } else {
            debug!(course = %task, "passed course not in remaining graph; ignoring");
        }
    }

    if residual.is_empty() {
        info!("no courses remaining");
        return PathResult::empty(residual, PathStatus::AllClear);
    }

    match longest_path(&residual) {
        Ok(path) => {
            info!(
                stages = path.len(),
                remaining = residual.node_count(),
                "computed critical path"
            );
            PathResult {
                stage_count: path.len(),
                path,
                residual,
                status: PathStatus::Remaining,
            }
        }
        Err(report) => {
            warn!(
                cycles = %report,
                "remaining courses contain a prerequisite cycle; reporting zero stages"
            );
            PathResult::empty(residual, PathStatus::Cyclic(report))
        }
    }
}

/// Longest path (by course count) through an acyclic graph.
///
/// Courses are visited in [`stable_toposort`] order while tracking, for each
/// course, the longest chain ending there and the prerequisite it came from.
/// Ties keep the first candidate seen: the prerequisite listed first, and
/// the end course that comes first in the topological order.
///
/// An empty graph yields an empty path.
pub fn longest_path(graph: &DependencyGraph) -> Result<Vec<TaskId>, CycleReport> {
    let order = stable_toposort(graph)?;

    // node -> (chain length ending here, predecessor on that chain)
    let mut best: HashMap<NodeIndex, (usize, Option<NodeIndex>)> =
        HashMap::with_capacity(order.len());
    let mut end: Option<(NodeIndex, usize)> = None;

    for &node in &order {
        let mut chain = (1, None);
        for pred in graph.ordered_neighbours(node, Direction::Incoming) {
            if let Some(&(len, _)) = best.get(&pred) {
                if len + 1 > chain.0 {
                    chain = (len + 1, Some(pred));
                }
            }
        }
        best.insert(node, chain);

        if end.is_none_or(|(_, longest)| chain.0 > longest) {
            end = Some((node, chain.0));
        }
    }

    let mut path = Vec::new();
    let mut cursor = end.map(|(node, _)| node);
    while let Some(node) = cursor {
        path.push(graph.id_of(node).to_string());
        cursor = best.get(&node).and_then(|&(_, pred)| pred);
    }
    path.reverse();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::Curriculum;

    fn chain() -> DependencyGraph {
        DependencyGraph::build(
            &Curriculum::new()
                .with_course("X", Vec::<&str>::new())
                .with_course("Y", ["X"])
                .with_course("Z", ["Y"]),
        )
    }

    #[test]
    fn single_course_is_one_stage() {
        let g = DependencyGraph::build(&Curriculum::new().with_course("Solo", Vec::<&str>::new()));
        let result = compute_path(&g, Vec::<String>::new());

        assert_eq!(result.stage_count, 1);
        assert_eq!(result.path, vec!["Solo"]);
        assert_eq!(result.status, PathStatus::Remaining);
    }

    #[test]
    fn passed_middle_course_splits_chain() {
        let result = compute_path(&chain(), ["Y"]);

        // X and Z no longer connected; X comes first in order.
        assert_eq!(result.stage_count, 1);
        assert_eq!(result.path, vec!["X"]);
        assert_eq!(result.residual.edge_count(), 0);
    }

    #[test]
    fn longest_path_of_empty_graph_is_empty() {
        assert_eq!(longest_path(&DependencyGraph::default()), Ok(Vec::new()));
    }

    #[test]
    fn predecessor_tie_prefers_first_listed() {
        let g = DependencyGraph::build(
            &Curriculum::new()
                .with_course("A", Vec::<&str>::new())
                .with_course("B", Vec::<&str>::new())
                .with_course("C", ["B", "A"]),
        );

        assert_eq!(longest_path(&g).unwrap(), vec!["B", "C"]);
    }

    #[test]
    fn cycle_degrades_to_zero_stages() {
        let g = DependencyGraph::build(
            &Curriculum::new()
                .with_course("Free", Vec::<&str>::new())
                .with_course("A", ["B"])
                .with_course("B", ["A"]),
        );

        let result = compute_path(&g, ["Free"]);
        assert_eq!(result.stage_count, 0);
        assert!(result.path.is_empty());
        assert!(result.is_cyclic());
        assert_eq!(result.residual.node_count(), 2);
    }

    #[test]
    fn passing_a_cycle_member_clears_the_cycle() {
        let g = DependencyGraph::build(
            &Curriculum::new()
                .with_course("A", ["B"])
                .with_course("B", ["A"]),
        );

        let result = compute_path(&g, ["A"]);
        assert_eq!(result.path, vec!["B"]);
        assert_eq!(result.status, PathStatus::Remaining);
    }
}
