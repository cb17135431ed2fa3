// src/render/dot.rs

use std::fmt::Write;

use crate::render::diagram::Diagram;

/// Render a diagram as a Graphviz DOT digraph.
pub fn to_dot(diagram: &Diagram) -> String {
    let mut out = String::new();
    out.push_str("digraph G {\n");
    let _ = writeln!(out, "  rankdir=\"{}\";", diagram.rank_dir);
    out.push_str("  node [style=filled, shape=box];\n");

    if !diagram.nodes.is_empty() {
        out.push('\n');
    }
    for node in &diagram.nodes {
        let _ = writeln!(
            out,
            "  \"{}\" [label=\"{}\", shape={}, style={}, fillcolor=\"{}\", color=\"{}\", penwidth={}];",
            escape_dot(&node.id),
            escape_dot(&node.label),
            node.style.shape,
            node.style.style,
            node.style.fill_color,
            node.style.color,
            node.style.pen_width,
        );
    }

    if !diagram.edges.is_empty() {
        out.push('\n');
    }
    for edge in &diagram.edges {
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\" [color=\"{}\", style=\"{}\"];",
            escape_dot(&edge.from),
            escape_dot(&edge.to),
            edge.style.color,
            edge.style.style,
        );
    }

    out.push_str("}\n");
    out
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
