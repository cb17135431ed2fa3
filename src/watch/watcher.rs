// src/watch/watcher.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;
use crate::errors::Result;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher that sends `RuntimeEvent::SourceChanged`
/// whenever one of `sources` is created, modified or removed.
///
/// The parent directories are watched rather than the files themselves:
/// many editors save by writing a new file and renaming it over the old
/// one, which a file-level watch would lose track of.
pub fn spawn_watcher(
    sources: Vec<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let sources: BTreeSet<PathBuf> = sources.iter().map(|p| absolute(p)).collect();
    let dirs: BTreeSet<PathBuf> = sources
        .iter()
        .filter_map(|p| p.parent().map(Path::to_path_buf))
        .collect();

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // We can't log via tracing here easily, so fallback to stderr.
                    eprintln!("gradpath: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("gradpath: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
    }

    info!(?sources, "file watcher started");

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if !is_relevant_kind(&event.kind) {
                continue;
            }
            for path in event.paths {
                if !is_watched(&path, &sources) {
                    continue;
                }
                debug!(?path, "watched source changed");
                if runtime_tx
                    .send(RuntimeEvent::SourceChanged { path })
                    .await
                    .is_err()
                {
                    debug!("runtime channel closed; stopping watcher loop");
                    return;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

fn is_relevant_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    )
}

/// Whether an event path refers to one of the watched sources.
pub fn is_watched(path: &Path, sources: &BTreeSet<PathBuf>) -> bool {
    sources.contains(&absolute(path))
}

/// Absolute, symlink-resolved form of `path`.
///
/// A file that does not exist (yet) cannot be canonicalized, so its parent
/// is resolved instead and the file name re-attached.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = parent.canonicalize().unwrap_or(parent);
    match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    }
}
