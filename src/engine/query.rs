// src/engine/query.rs

//! One evaluation of "what is left": load, build, compute, render.

use std::path::PathBuf;

use tracing::warn;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{load_and_validate, load_progress, ConfigOverrides, CurriculumFile};
use crate::dag::{DependencyGraph, TaskId};
use crate::engine::{compute_path, PathResult};
use crate::errors::Result;
use crate::render::render;

/// Everything needed to answer one question about a student's progress.
#[derive(Debug, Clone)]
pub struct Query {
    pub curriculum_path: PathBuf,
    pub progress_path: Option<PathBuf>,
    /// Courses passed on the command line, in addition to the progress file.
    pub passed: Vec<TaskId>,
    pub overrides: ConfigOverrides,
    pub format: OutputFormat,
}

/// Result of [`Query::evaluate`].
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub config: CurriculumFile,
    pub graph: DependencyGraph,
    pub result: PathResult,
    /// Passed ids that do not name any course; they were ignored.
    pub unknown_passed: Vec<TaskId>,
}

impl Query {
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            curriculum_path: PathBuf::from(&args.curriculum),
            progress_path: args.progress.as_ref().map(PathBuf::from),
            passed: args.passed.clone(),
            overrides: ConfigOverrides {
                strict: args.strict,
                reject_cycles: args.reject_cycles,
            },
            format: args.format,
        }
    }

    /// Files whose contents determine the answer.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.curriculum_path.clone()];
        paths.extend(self.progress_path.iter().cloned());
        paths
    }

    /// All passed courses: command line first, then the progress file.
    pub fn passed_courses(&self) -> Result<Vec<TaskId>> {
        let mut passed = self.passed.clone();
        if let Some(path) = &self.progress_path {
            passed.extend(load_progress(path)?.passed);
        }
        Ok(passed)
    }

    pub fn evaluate(&self) -> Result<QueryOutcome> {
        let config = load_and_validate(&self.curriculum_path, self.overrides)?;
        let passed = self.passed_courses()?;
        let graph = DependencyGraph::from_config(&config);

        let unknown_passed: Vec<TaskId> = passed
            .iter()
            .filter(|id| !graph.contains(id))
            .cloned()
            .collect();
        for id in &unknown_passed {
            warn!(course = %id, "passed course is not part of the curriculum; ignoring");
        }

        let result = compute_path(&graph, &passed);

        Ok(QueryOutcome {
            config,
            graph,
            result,
            unknown_passed,
        })
    }

    /// Evaluate and render in the requested format.
    pub fn report(&self) -> Result<String> {
        let outcome = self.evaluate()?;
        render(&outcome.result, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn combines_cli_and_progress_file() {
        let curriculum = write_temp(
            r#"
[course.X]
[course.Y]
after = ["X"]
[course.Z]
after = ["Y"]
"#,
        );
        let progress = write_temp(r#"passed = ["Y"]"#);

        let query = Query {
            curriculum_path: curriculum.path().to_path_buf(),
            progress_path: Some(progress.path().to_path_buf()),
            passed: vec!["X".to_string(), "Nope".to_string()],
            overrides: ConfigOverrides::default(),
            format: OutputFormat::Text,
        };

        assert_eq!(query.passed_courses().unwrap(), vec!["X", "Nope", "Y"]);

        let outcome = query.evaluate().unwrap();
        assert_eq!(outcome.result.path, vec!["Z"]);
        assert_eq!(outcome.unknown_passed, vec!["Nope"]);
        assert_eq!(outcome.graph.node_count(), 3);
        assert_eq!(query.source_paths().len(), 2);
    }
}
