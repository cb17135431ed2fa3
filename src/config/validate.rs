// src/config/validate.rs

use tracing::warn;

use crate::config::model::{raw_curriculum, CurriculumFile, RawCurriculumFile};
use crate::dag::{stable_toposort, DependencyGraph};
use crate::errors::{GradpathError, Result};
use crate::types::ValidationMode;

impl TryFrom<RawCurriculumFile> for CurriculumFile {
    type Error = crate::errors::GradpathError;

    fn try_from(raw: RawCurriculumFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(CurriculumFile::new_unchecked(raw.config, raw.course))
    }
}

fn validate_raw_config(cfg: &RawCurriculumFile) -> Result<()> {
    warn_if_empty(cfg);
    if cfg.config.validation == ValidationMode::Strict {
        validate_course_references(cfg)?;
    }
    if cfg.config.rejects_cycles() {
        validate_dag(cfg)?;
    }
    Ok(())
}

fn warn_if_empty(cfg: &RawCurriculumFile) {
    if cfg.course.is_empty() {
        warn!("curriculum has no [course.<id>] sections; every query will report zero stages");
    }
}

fn validate_course_references(cfg: &RawCurriculumFile) -> Result<()> {
    for (name, course) in cfg.course.iter() {
        for dep in course.after.iter() {
            if dep == name {
                return Err(GradpathError::SelfDependency(name.clone()));
            }
            if !cfg.course.contains_key(dep) {
                return Err(GradpathError::UnknownPrerequisite {
                    course: name.clone(),
                    prerequisite: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

fn validate_dag(cfg: &RawCurriculumFile) -> Result<()> {
    // Same graph the engine will later see, including implicit courses.
    let graph = DependencyGraph::build(&raw_curriculum(&cfg.course));

    match stable_toposort(&graph) {
        Ok(_order) => Ok(()),
        Err(report) => Err(GradpathError::DagCycle(format!(
            "courses {report} depend on each other"
        ))),
    }
}
