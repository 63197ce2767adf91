//! Test fixture loader for Verity golden datasets.
//!
//! Provides typed deserialization of the scenario JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use verity_core::config::LabelPolicy;
use verity_core::models::{
    ClassLabels, ClassPair, FeatureVector, Label, LabeledExample, RawExample, TrainingSet,
};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
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

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Expected outcome of one classification under one formula.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedOutcome {
    pub score: f64,
    pub decision: Label,
    pub degenerate: bool,
}

/// A query article with its expected outcome under each formula.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryCase {
    pub name: String,
    pub features: FeatureVector,
    pub literal: ExpectedOutcome,
    pub normalized: ExpectedOutcome,
}

/// A golden classification scenario: training data, expected priors, queries.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub labels: ClassLabels,
    #[serde(default)]
    pub label_policy: LabelPolicy,
    pub training: Vec<RawExample>,
    pub expected_priors: ClassPair<f64>,
    pub queries: Vec<QueryCase>,
}

impl Scenario {
    /// Ingest the raw training records under the scenario's label policy.
    ///
    /// # Panics
    /// Panics if ingestion fails; golden scenarios are expected to ingest.
    pub fn training_set(&self) -> TrainingSet {
        TrainingSet::ingest(self.training.clone(), &self.labels, self.label_policy)
            .unwrap_or_else(|e| panic!("scenario {} failed to ingest: {}", self.name, e))
    }
}

/// Load a scenario from `golden/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("golden/{name}.json"))
}

/// The three-article worked example the classifier was first validated on.
pub fn reference_scenario() -> Scenario {
    load_scenario("reference_worked_example")
}

/// Every golden scenario on disk.
pub fn all_scenarios() -> Vec<Scenario> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            load_scenario(&name)
        })
        .collect()
}

/// Synthetic training set of `n` articles cycling through every bucket
/// combination, for benchmarks and scale tests.
pub fn synthetic_training_set(n: usize) -> TrainingSet {
    let sources = ["trusted", "unreliable"];
    let lengths = ["short", "average", "long"];
    let keywords = ["rare", "unindicative", "common", "unknown"];

    (0..n)
        .map(|i| {
            let features = FeatureVector::new(
                sources[i % sources.len()],
                lengths[(i / 2) % lengths.len()],
                "unknown",
                "unknown",
                "unknown",
                keywords[(i / 3) % keywords.len()],
            );
            let label = if i % 5 < 2 { Label::Fabricated } else { Label::Genuine };
            LabeledExample::new(features, label)
        })
        .collect()
}
