// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigOverrides, CurriculumFile, ProgressFile, RawCurriculumFile};
use crate::errors::Result;

/// Load a curriculum file from a given path and return the raw `RawCurriculumFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCurriculumFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawCurriculumFile = toml::from_str(&contents)?;
    debug!(?path, courses = config.course.len(), "parsed curriculum file");

    Ok(config)
}

/// Load a curriculum file, apply CLI overrides and validate it.
///
/// This is the entry point the rest of the application uses:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Applies `overrides` (`--strict`, `--reject-cycles`).
/// - Checks, depending on the resulting `[config]`:
///   - undeclared prerequisites and self-listing (strict),
///   - prerequisite cycles (strict or `cycle_policy = "reject"`).
pub fn load_and_validate(
    path: impl AsRef<Path>,
    overrides: ConfigOverrides,
) -> Result<CurriculumFile> {
    let raw_config = load_from_path(&path)?.with_overrides(overrides);
    let config = CurriculumFile::try_from(raw_config)?;
    Ok(config)
}

/// Load a progress file (`passed = [...]`).
pub fn load_progress(path: impl AsRef<Path>) -> Result<ProgressFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let progress: ProgressFile = toml::from_str(&contents)?;
    debug!(?path, passed = progress.passed.len(), "parsed progress file");
    Ok(progress)
}
