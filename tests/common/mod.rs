#![allow(dead_code)]

use std::path::PathBuf;

pub use gradpath_test_utils::init_tracing;

/// Path to a file under `demos/`.
pub fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}
