// src/render/diagram.rs

use serde::Serialize;

use crate::dag::{DependencyGraph, TaskId};
use crate::engine::PathResult;

/// CPM reading of a course: on the critical path it has zero slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slack {
    Critical,
    Flexible,
}

/// Graphviz-compatible node attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub shape: &'static str,
    pub style: &'static str,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub pen_width: &'static str,
}

impl NodeStyle {
    pub const CRITICAL: NodeStyle = NodeStyle {
        shape: "box",
        style: "filled",
        fill_color: "lightpink",
        color: "red",
        pen_width: "2.0",
    };

    pub const FLEXIBLE: NodeStyle = NodeStyle {
        shape: "box",
        style: "filled",
        fill_color: "lightblue",
        color: "blue",
        pen_width: "1.0",
    };
}

/// Graphviz-compatible edge attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub style: &'static str,
}

impl EdgeStyle {
    pub const CRITICAL: EdgeStyle = EdgeStyle {
        color: "red",
        style: "bold",
    };

    pub const PLAIN: EdgeStyle = EdgeStyle {
        color: "gray",
        style: "solid",
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramNode {
    pub id: TaskId,
    pub label: String,
    pub slack: Slack,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramEdge {
    pub from: TaskId,
    pub to: TaskId,
    /// Both endpoints lie on the critical path.
    pub critical: bool,
    pub style: EdgeStyle,
}

/// Attributed directed graph of the remaining courses, ready for any
/// graph renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub rank_dir: &'static str,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    /// Style every course and prerequisite of `residual`, highlighting those
    /// on `path`. Nodes and edges keep the graph's insertion order.
    pub fn new(residual: &DependencyGraph, path: &[TaskId]) -> Self {
        let on_path = |id: &str| path.iter().any(|p| p == id);

        let nodes = residual
            .nodes()
            .map(|node| {
                let (slack, style) = if on_path(node.id.as_str()) {
                    (Slack::Critical, NodeStyle::CRITICAL)
                } else {
                    (Slack::Flexible, NodeStyle::FLEXIBLE)
                };
                DiagramNode {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    slack,
                    style,
                }
            })
            .collect();

        let edges = residual
            .edges()
            .map(|(from, to)| {
                let critical = on_path(from) && on_path(to);
                DiagramEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    critical,
                    style: if critical {
                        EdgeStyle::CRITICAL
                    } else {
                        EdgeStyle::PLAIN
                    },
                }
            })
            .collect();

        Self {
            rank_dir: "LR",
            nodes,
            edges,
        }
    }

    pub fn from_result(result: &PathResult) -> Self {
        Self::new(&result.residual, &result.path)
    }

    pub fn critical_nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes.iter().filter(|n| n.slack == Slack::Critical)
    }
}
