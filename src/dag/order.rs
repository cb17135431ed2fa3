// src/dag/order.rs

//! Insertion-stable topological ordering.
//!
//! The ordering is Kahn's algorithm where the ready set is a min-heap keyed
//! by node index. Because indices follow curriculum insertion order, the
//! course that was declared (or first referenced) earliest is always emitted
//! first among the courses whose prerequisites are all emitted. This makes
//! every result derived from the order reproducible for a given curriculum.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::dag::curriculum::TaskId;
use crate::dag::graph::DependencyGraph;

/// The courses involved in prerequisite cycles.
///
/// Each group is one strongly connected component (or a course listing
/// itself), with ids in curriculum order. Groups are ordered by their first
/// course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub cycles: Vec<Vec<TaskId>>,
}

impl CycleReport {
    fn from_graph(graph: &DependencyGraph) -> Self {
        let inner = graph.inner();

        let mut groups: Vec<Vec<NodeIndex>> = tarjan_scc(inner)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => inner.find_edge(*single, *single).is_some(),
                _ => true,
            })
            .map(|mut component| {
                component.sort();
                component
            })
            .collect();
        groups.sort();

        let cycles = groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|idx| graph.id_of(idx).to_string())
                    .collect()
            })
            .collect();

        Self { cycles }
    }

    /// Every course that sits on some cycle.
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.cycles.iter().flatten().map(String::as_str)
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.cycles.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "[{}]", group.join(", "))?;
        }
        Ok(())
    }
}

/// Topologically order the graph, breaking ties by insertion order.
///
/// Fails with a [`CycleReport`] if some courses can never become ready.
pub fn stable_toposort(graph: &DependencyGraph) -> Result<Vec<NodeIndex>, CycleReport> {
    let inner = graph.inner();

    let mut in_degree: HashMap<NodeIndex, usize> = inner
        .node_indices()
        .map(|idx| (idx, inner.edges_directed(idx, Direction::Incoming).count()))
        .collect();

    let mut ready: BinaryHeap<Reverse<NodeIndex>> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(idx, _)| Reverse(*idx))
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());

    while let Some(Reverse(idx)) = ready.pop() {
        order.push(idx);
        for edge in inner.edges_directed(idx, Direction::Outgoing) {
            if let Some(degree) = in_degree.get_mut(&edge.target()) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(edge.target()));
                }
            }
        }
    }

    if order.len() < inner.node_count() {
        return Err(CycleReport::from_graph(graph));
    }

    Ok(order)
}
