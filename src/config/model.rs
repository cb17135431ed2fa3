// src/config/model.rs

use indexmap::IndexMap;
use serde::Deserialize;

use crate::dag::{Curriculum, TaskId};
use crate::types::{CyclePolicy, ValidationMode};

/// Curriculum file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// validation = "lenient"
/// cycle_policy = "degrade"
///
/// [course."Calculus 1"]
///
/// [course."Calculus 2"]
/// label = "Calculus II"
/// after = ["Calculus 1"]
/// ```
///
/// Courses keep the order in which they appear in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurriculumFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// All courses from `[course.<id>]`, keyed by id.
    #[serde(default)]
    pub course: IndexMap<TaskId, CourseConfig>,
}

impl RawCurriculumFile {
    pub fn new(config: ConfigSection) -> Self {
        Self {
            config,
            course: IndexMap::new(),
        }
    }

    /// Append a course (or replace one in place).
    pub fn add_course(&mut self, id: impl Into<TaskId>, course: CourseConfig) {
        self.course.insert(id.into(), course);
    }

    /// Apply command-line overrides on top of the `[config]` section.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        overrides.apply(&mut self.config);
        self
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigSection {
    /// `"lenient"` (default) or `"strict"`.
    #[serde(default)]
    pub validation: ValidationMode,

    /// `"degrade"` (default) or `"reject"`.
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}

impl ConfigSection {
    /// Whether a cyclic curriculum must be refused at load time.
    ///
    /// Strict validation always rejects cycles.
    pub fn rejects_cycles(&self) -> bool {
        self.validation == ValidationMode::Strict || self.cycle_policy == CyclePolicy::Reject
    }
}

/// `[course.<id>]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CourseConfig {
    /// Display label; the id is shown when absent.
    #[serde(default)]
    pub label: Option<String>,

    /// Prerequisites, in order. Order matters for tie-breaking between
    /// equally long critical paths.
    #[serde(default)]
    pub after: Vec<TaskId>,
}

impl CourseConfig {
    pub fn after<I, P>(prerequisites: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<TaskId>,
    {
        Self {
            label: None,
            after: prerequisites.into_iter().map(Into::into).collect(),
        }
    }
}

/// Command-line switches that tighten the `[config]` section.
///
/// Overrides can only make validation stricter, never looser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub strict: bool,
    pub reject_cycles: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, section: &mut ConfigSection) {
        if self.strict {
            section.validation = ValidationMode::Strict;
        }
        if self.reject_cycles {
            section.cycle_policy = CyclePolicy::Reject;
        }
    }
}

/// A validated curriculum file.
///
/// Obtained through `CurriculumFile::try_from(raw)` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct CurriculumFile {
    pub config: ConfigSection,
    pub course: IndexMap<TaskId, CourseConfig>,
}

impl CurriculumFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        course: IndexMap<TaskId, CourseConfig>,
    ) -> Self {
        Self { config, course }
    }

    /// The curriculum value handed to the graph builder.
    pub fn curriculum(&self) -> Curriculum {
        raw_curriculum(&self.course)
    }

    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.course.keys().map(String::as_str)
    }
}

pub(crate) fn raw_curriculum(courses: &IndexMap<TaskId, CourseConfig>) -> Curriculum {
    let mut curriculum = Curriculum::new();
    for (id, course) in courses {
        curriculum.insert(id.clone(), course.label.clone(), course.after.iter().cloned());
    }
    curriculum
}

/// Progress file listing the courses already passed.
///
/// ```toml
/// passed = ["Calculus 1", "Physics 1"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProgressFile {
    #[serde(default)]
    pub passed: Vec<TaskId>,
}
