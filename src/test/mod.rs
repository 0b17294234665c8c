mod store;

use std::path::PathBuf;

use tempfile::TempDir;

/// Write a fixture document into a scratch directory and hand back its path.
pub(crate) fn write_fixture(dir: &TempDir, name: &str, content: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(content).unwrap()).unwrap();
    path
}
