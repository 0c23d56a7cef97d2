//! Locating committed MTL fixtures and writing scratch scene files.

use std::path::{Path, PathBuf};

/// Environment variable that points at an extra directory of scene metadata.
pub const TEST_DATA_ENV: &str = "TEST_DATA_DIR";

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// The committed `testdata/` directory at the workspace root.
pub fn testdata_dir() -> PathBuf {
    workspace_root().join("testdata")
}

/// Directories searched for fixtures, in priority order.
///
/// `$TEST_DATA_DIR` comes first so real scenes can be swapped in without
/// touching the repository.
pub fn fixture_search_path() -> Vec<PathBuf> {
    std::env::var_os(TEST_DATA_ENV)
        .map(PathBuf::from)
        .into_iter()
        .chain(std::iter::once(testdata_dir()))
        .collect()
}

/// First existing file called `name` on the fixture search path.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    fixture_search_path()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Contents of a fixture, or `None` when it is absent or unreadable.
pub fn read_test_file(name: &str) -> Option<String> {
    let path = find_test_file(name)?;
    std::fs::read_to_string(path).ok()
}

/// Write metadata text to `name` in a fresh scratch directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_temp_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("landsat_scene_")
        .tempdir()
        .expect("scratch directory");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("scratch scene file");
    (dir, path)
}
