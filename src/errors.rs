// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! The critical path engine itself never fails; these errors only come from
//! the edges of the program (reading and validating configuration, watching
//! files, serialising reports).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradpathError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("course '{course}' has unknown prerequisite '{prerequisite}' in `after`")]
    UnknownPrerequisite {
        course: String,
        prerequisite: String,
    },

    #[error("course '{0}' cannot list itself in `after`")]
    SelfDependency(String),

    #[error("Cycle detected in curriculum: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON serialisation error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GradpathError>;
