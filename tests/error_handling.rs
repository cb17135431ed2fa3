mod common;
use crate::common::init_tracing;

use std::io::Write;

use gradpath::config::{load_and_validate, ConfigOverrides, CurriculumFile};
use gradpath::errors::GradpathError;
use gradpath_test_utils::builders::CurriculumBuilder;
use tempfile::NamedTempFile;

fn write_curriculum(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

const CYCLIC: &str = r#"
[course.A]
after = ["B"]

[course.B]
after = ["A"]
"#;

#[test]
fn test_dag_cycle_returns_structured_error_when_rejecting() {
    init_tracing();
    let file = write_curriculum(&format!("[config]\ncycle_policy = \"reject\"\n{CYCLIC}"));

    match load_and_validate(file.path(), ConfigOverrides::default()) {
        Err(GradpathError::DagCycle(msg)) => {
            assert!(msg.contains("[A, B]"));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_dag_cycle_is_loaded_by_default() {
    init_tracing();
    let file = write_curriculum(CYCLIC);

    let cfg = load_and_validate(file.path(), ConfigOverrides::default()).unwrap();
    assert_eq!(cfg.course.len(), 2);
}

#[test]
fn test_cli_override_rejects_cycle() {
    init_tracing();
    let file = write_curriculum(CYCLIC);

    let result = load_and_validate(
        file.path(),
        ConfigOverrides {
            strict: false,
            reject_cycles: true,
        },
    );
    assert!(matches!(result, Err(GradpathError::DagCycle(_))));
}

#[test]
fn test_unknown_prerequisite_in_strict_mode() {
    init_tracing();
    let toml = CurriculumBuilder::new()
        .course("Simulation", &["Operations Research"])
        .strict()
        .to_toml();
    let file = write_curriculum(&toml);

    match load_and_validate(file.path(), ConfigOverrides::default()) {
        Err(GradpathError::UnknownPrerequisite {
            course,
            prerequisite,
        }) => {
            assert_eq!(course, "Simulation");
            assert_eq!(prerequisite, "Operations Research");
        }
        Err(e) => panic!("Expected UnknownPrerequisite, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_invalid_mode_is_a_toml_error() {
    init_tracing();
    let file = write_curriculum("[config]\nvalidation = \"sloppy\"\n");

    let result = load_and_validate(file.path(), ConfigOverrides::default());
    assert!(matches!(result, Err(GradpathError::TomlError(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let result = load_and_validate(dir.path().join("nope.toml"), ConfigOverrides::default());
    assert!(matches!(result, Err(GradpathError::IoError(_))));
}

#[test]
fn test_builder_reject_policy_survives_toml_round_trip() {
    init_tracing();
    let builder = CurriculumBuilder::new()
        .course("A", &["B"])
        .course("B", &["A"])
        .reject_cycles();
    let file = write_curriculum(&builder.to_toml());

    let result = load_and_validate(file.path(), ConfigOverrides::default());
    assert!(matches!(result, Err(GradpathError::DagCycle(_))));
}

#[test]
fn test_raw_curriculum_with_undeclared_prerequisite_only_fails_when_strict() {
    init_tracing();
    let lenient = CurriculumBuilder::new().course("Simulation", &["Programming"]).raw();
    assert!(CurriculumFile::try_from(lenient).is_ok());

    let strict = CurriculumBuilder::new()
        .course("Simulation", &["Programming"])
        .strict()
        .raw();
    assert!(matches!(
        CurriculumFile::try_from(strict),
        Err(GradpathError::UnknownPrerequisite { .. })
    ));
}
