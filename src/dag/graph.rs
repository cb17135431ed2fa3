// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::debug;

use crate::config::model::CurriculumFile;
use crate::dag::curriculum::{Curriculum, TaskId};

/// Node weight: course id plus the label to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNode {
    pub id: TaskId,
    pub label: String,
}

/// Directed prerequisite graph: an edge `p -> c` means `p` must be passed
/// before `c` can be taken.
///
/// Backed by a `StableDiGraph`, so node and edge indices keep reflecting
/// insertion order after courses are removed. Every ordering this type
/// exposes (`tasks`, `edges`, `dependencies_of`, ...) is insertion order.
///
/// Cloning is the only way the critical path engine obtains a graph it may
/// mutate; a built graph can be shared read-only between threads.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: StableDiGraph<CourseNode, ()>,
    index: HashMap<TaskId, NodeIndex>,
}

impl DependencyGraph {
    /// Build the prerequisite graph for a curriculum.
    ///
    /// Never fails: a prerequisite that is not declared as a course becomes
    /// a node with no prerequisites, and listing the same prerequisite twice
    /// yields a single edge.
    pub fn build(curriculum: &Curriculum) -> Self {
        let mut graph = DependencyGraph::default();

        for entry in curriculum.courses() {
            let course = graph.ensure_node(&entry.id, entry.label.as_deref());
            for prerequisite in &entry.prerequisites {
                let pre = graph.ensure_node(prerequisite, None);
                graph.graph.update_edge(pre, course, ());
            }
        }

        debug!(
            courses = graph.node_count(),
            prerequisites = graph.edge_count(),
            "built prerequisite graph"
        );
        graph
    }

    /// Build the graph for a validated [`CurriculumFile`].
    pub fn from_config(cfg: &CurriculumFile) -> Self {
        Self::build(&cfg.curriculum())
    }

    fn ensure_node(&mut self, id: &str, label: Option<&str>) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            // A course referenced as a prerequisite before its own entry
            // picks up the label once the entry is reached.
            if let Some(label) = label {
                self.graph[idx].label = label.to_string();
            }
            return idx;
        }

        let idx = self.graph.add_node(CourseNode {
            id: id.to_string(),
            label: label.unwrap_or(id).to_string(),
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All course ids, in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.graph
            .node_indices()
            .map(move |idx| self.graph[idx].id.as_str())
    }

    /// All course nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &CourseNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All `(prerequisite, course)` edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().filter_map(move |e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            Some((self.graph[a].id.as_str(), self.graph[b].id.as_str()))
        })
    }

    pub fn label_of(&self, id: &str) -> Option<&str> {
        let idx = self.index.get(id)?;
        Some(self.graph[*idx].label.as_str())
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Direct prerequisites of a course, in the order they were listed.
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, Direction::Incoming)
    }

    /// Courses that list `id` as a direct prerequisite, in insertion order.
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        self.neighbours(id, Direction::Outgoing)
    }

    fn neighbours(&self, id: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        self.ordered_neighbours(idx, dir)
            .into_iter()
            .map(|n| self.graph[n].id.as_str())
            .collect()
    }

    /// Neighbour indices sorted by the insertion order of the connecting edge.
    ///
    /// petgraph walks adjacency lists newest-first, so this re-sorts.
    pub(crate) fn ordered_neighbours(&self, idx: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = match dir {
                    Direction::Incoming => e.source(),
                    Direction::Outgoing => e.target(),
                };
                (e.id(), other)
            })
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, n)| n).collect()
    }

    /// Remove a course and every edge touching it.
    ///
    /// Returns `false` (and changes nothing) if the course is not in the graph.
    pub fn remove_task(&mut self, id: &str) -> bool {
        match self.index.remove(id) {
            Some(idx) => {
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<CourseNode, ()> {
        &self.graph
    }

    pub(crate) fn id_of(&self, idx: NodeIndex) -> &str {
        self.graph[idx].id.as_str()
    }
}

/// Two graphs are equal when they hold the same courses (with labels) and
/// the same edges, in the same order.
impl PartialEq for DependencyGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges().eq(other.edges())
    }
}

impl Eq for DependencyGraph {}
