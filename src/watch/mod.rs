// src/watch/mod.rs

//! File watching and change detection for `--watch`.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the
//!   curriculum and progress files.
//! - Content fingerprints (blake3) so the runtime can tell real edits from
//!   no-op writes.
//!
//! It does **not** know about curricula or graphs; it only turns filesystem
//! changes into [`RuntimeEvent::SourceChanged`](crate::engine::RuntimeEvent).

pub mod hash;
pub mod watcher;

pub use hash::{compute_file_hash, compute_hash_for_paths};
pub use watcher::{spawn_watcher, WatcherHandle};
