mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

use gradpath::cli::OutputFormat;
use gradpath::config::ConfigOverrides;
use gradpath::engine::{Query, Runtime, RuntimeEvent};
use gradpath_test_utils::builders::CurriculumBuilder;
use gradpath_test_utils::recording_sink::RecordingSink;
use tokio::sync::mpsc;

type TestResult = Result<(), Box<dyn Error>>;

fn chain_toml() -> String {
    CurriculumBuilder::new()
        .course("X", &[])
        .course("Y", &["X"])
        .course("Z", &["Y"])
        .to_toml()
}

fn query(curriculum: &Path, progress: Option<&Path>) -> Query {
    Query {
        curriculum_path: curriculum.to_path_buf(),
        progress_path: progress.map(Path::to_path_buf),
        passed: Vec::new(),
        overrides: ConfigOverrides::default(),
        format: OutputFormat::Text,
    }
}

async fn wait_for_reports(sink: &RecordingSink, n: usize) {
    while sink.reports().len() < n {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[test]
fn refresh_skips_unchanged_sources_and_survives_broken_files() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let curriculum = dir.path().join("Curriculum.toml");
    fs::write(&curriculum, "[course.X\n")?;

    let (_tx, rx) = mpsc::channel(1);
    let sink = RecordingSink::new();
    let mut runtime = Runtime::new(query(&curriculum, None), rx, sink.clone());

    // Broken TOML: evaluated, logged, nothing emitted.
    assert!(runtime.refresh()?);
    assert!(sink.reports().is_empty());

    fs::write(&curriculum, chain_toml())?;
    assert!(runtime.refresh()?);
    assert!(!runtime.refresh()?);

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("X -> Y -> Z"));
    Ok(())
}

#[tokio::test]
async fn runtime_reports_on_progress_change_until_shutdown() -> TestResult {
    tokio::time::timeout(Duration::from_secs(5), async {
        init_tracing();

        let dir = tempfile::tempdir()?;
        let curriculum = dir.path().join("Curriculum.toml");
        let progress = dir.path().join("progress.toml");
        fs::write(&curriculum, chain_toml())?;
        fs::write(&progress, "passed = []\n")?;

        let (tx, rx) = mpsc::channel(16);
        let sink = RecordingSink::new();
        let handle = tokio::spawn(
            Runtime::new(query(&curriculum, Some(&progress)), rx, sink.clone()).run(),
        );

        wait_for_reports(&sink, 1).await;

        fs::write(&progress, "passed = [\"X\"]\n")?;
        tx.send(RuntimeEvent::SourceChanged {
            path: progress.clone(),
        })
        .await?;
        wait_for_reports(&sink, 2).await;

        tx.send(RuntimeEvent::ShutdownRequested).await?;
        handle.await??;

        let reports = sink.reports();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].starts_with("Min. stages left: 3\n"));
        assert!(reports[1].starts_with("Min. stages left: 2\n"));
        Ok::<(), Box<dyn Error>>(())
    })
    .await?
}

#[tokio::test]
async fn runtime_ignores_touch_without_content_change() -> TestResult {
    tokio::time::timeout(Duration::from_secs(5), async {
        init_tracing();

        let dir = tempfile::tempdir()?;
        let curriculum = dir.path().join("Curriculum.toml");
        fs::write(&curriculum, chain_toml())?;

        let (tx, rx) = mpsc::channel(16);
        let sink = RecordingSink::new();
        let handle = tokio::spawn(Runtime::new(query(&curriculum, None), rx, sink.clone()).run());

        for _ in 0..3 {
            tx.send(RuntimeEvent::SourceChanged {
                path: curriculum.clone(),
            })
            .await?;
        }
        drop(tx);
        handle.await??;

        assert_eq!(sink.reports().len(), 1);
        Ok::<(), Box<dyn Error>>(())
    })
    .await?
}

// `/proc/self/mem` is a regular file whose reads fail with EIO, which stands in
// for a source that is unreadable or vanishes mid-save.
#[cfg(target_os = "linux")]
#[test]
fn refresh_survives_unreadable_source() -> TestResult {
    init_tracing();

    let unreadable = Path::new("/proc/self/mem");
    let (_tx, rx) = mpsc::channel(1);
    let sink = RecordingSink::new();
    let mut runtime = Runtime::new(query(unreadable, None), rx, sink.clone());

    assert!(!runtime.refresh()?);
    assert!(!runtime.refresh()?);
    assert!(sink.reports().is_empty());
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn runtime_keeps_running_when_progress_becomes_unreadable() -> TestResult {
    tokio::time::timeout(Duration::from_secs(5), async {
        init_tracing();

        let dir = tempfile::tempdir()?;
        let curriculum = dir.path().join("Curriculum.toml");
        fs::write(&curriculum, chain_toml())?;

        let (tx, rx) = mpsc::channel(16);
        let sink = RecordingSink::new();
        let unreadable = Path::new("/proc/self/mem");
        let handle = tokio::spawn(
            Runtime::new(query(&curriculum, Some(unreadable)), rx, sink.clone()).run(),
        );

        tx.send(RuntimeEvent::SourceChanged {
            path: unreadable.to_path_buf(),
        })
        .await?;
        tx.send(RuntimeEvent::ShutdownRequested).await?;

        // The loop must reach the shutdown event rather than bail out early.
        handle.await??;
        assert!(sink.reports().is_empty());
        Ok::<(), Box<dyn Error>>(())
    })
    .await?
}
