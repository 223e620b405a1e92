//! Test fixture loader for the POMIS+ diagram definitions and golden results.
//!
//! Fixtures live in the workspace-level `test-fixtures/` directory:
//! `diagrams/*.json` holds diagram definitions (variables, edges,
//! confounders, slices, rewards) and `golden/*.json` holds the expected
//! enumeration and arm-selection output for each of them.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Names of every diagram that has a golden result.
pub const GOLDEN_DIAGRAMS: &[&str] = &["x0_to_y2", "w0_to_y2", "wt_to_yt_prime", "wxzy_four_step"];

/// Expected output for one diagram.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenResult {
    pub diagram: String,
    pub horizon: usize,
    /// Sorted sequences, each a list of sorted per-step variable lists.
    pub sequences: Vec<Vec<Vec<String>>>,
    #[serde(default)]
    pub arm_count: Option<usize>,
    #[serde(default)]
    pub pomis_plus_arms: Option<Vec<usize>>,
    #[serde(default)]
    pub myopic_arms: Option<Vec<usize>>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `diagrams/{name}.json` into any deserializable definition type.
pub fn load_diagram<T: DeserializeOwned>(name: &str) -> T {
    load_fixture(&format!("diagrams/{name}.json"))
}

/// Load `golden/{name}.json`.
pub fn load_golden(name: &str) -> GoldenResult {
    load_fixture(&format!("golden/{name}.json"))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}
