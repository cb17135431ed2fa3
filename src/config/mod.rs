// src/config/mod.rs

//! Configuration loading and validation for gradpath.
//!
//! Responsibilities:
//! - Define the TOML-backed curriculum and progress models (`model.rs`).
//! - Load files from disk (`loader.rs`).
//! - Validate the curriculum according to its validation mode and cycle
//!   policy (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_progress};
pub use model::{
    ConfigOverrides, ConfigSection, CourseConfig, CurriculumFile, ProgressFile, RawCurriculumFile,
};
