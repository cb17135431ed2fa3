// src/dag/mod.rs

//! Curriculum representation and the prerequisite graph.
//!
//! - [`curriculum`] holds the ordered course → prerequisites mapping.
//! - [`graph`] builds the directed prerequisite graph from a curriculum.
//! - [`order`] provides the insertion-stable topological order and cycle
//!   diagnostics the critical path engine relies on.

pub mod curriculum;
pub mod graph;
pub mod order;

pub use curriculum::{CourseEntry, Curriculum, TaskId};
pub use graph::{CourseNode, DependencyGraph};
pub use order::{stable_toposort, CycleReport};
