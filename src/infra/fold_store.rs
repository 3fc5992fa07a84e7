// ============================================================
// Layer 6 — Fold Store
// ============================================================
// Persists a prepared run to disk as JSON so an external
// trainer can consume the folds without re-running the
// pipeline.
//
// File layout:
//   <out>/
//     pipeline_config.json   ← the PipelineConfig that produced the folds
//     folds/
//       <fold-name>.json     ← one Fold: name, training_files,
//       ...                     training and test partitions
//
// Loading re-checks partition alignment and the held-out
// file rule, so a hand-edited fold cannot slip through.
//
// Token indices are only meaningful against the vocabulary,
// cap and label mode recorded in pipeline_config.json.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::prepare_use_case::PipelineConfig;
use crate::domain::fold::Fold;

const CONFIG_FILE: &str = "pipeline_config.json";
const FOLDS_DIR:   &str = "folds";

pub struct FoldStore {
    dir: PathBuf,
}

impl FoldStore {
    /// Create the store, including `<dir>/folds`
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(dir.join(FOLDS_DIR))
            .with_context(|| format!("Cannot create '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_config(&self, cfg: &PipelineConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved pipeline config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<PipelineConfig> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write one fold; returns the path written
    pub fn save_fold(&self, fold: &Fold) -> Result<PathBuf> {
        let path = self.fold_path(&fold.name);
        let json = serde_json::to_string(fold)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write fold to '{}'", path.display()))?;

        tracing::debug!("Saved fold '{}' to '{}'", fold.name, path.display());
        Ok(path)
    }

    pub fn load_fold(&self, name: &str) -> Result<Fold> {
        let path = self.fold_path(name);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read fold from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid fold in '{}'", path.display()))
    }

    fn fold_path(&self, name: &str) -> PathBuf {
        self.dir.join(FOLDS_DIR).join(format!("{name}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{fold::Partition, instance::EncodedInstance, labels::LabelMode};

    #[test]
    fn test_saved_fold_reads_back_identical() {
        let dir   = tempfile::tempdir().unwrap();
        let store = FoldStore::new(dir.path().join("out")).unwrap();

        let test: Partition = std::iter::once(EncodedInstance {
            id:            "id1".into(),
            token_indices: vec![1, 3, 4, 1, 5, 4],
            label_vector:  vec![1.0, 0.0, 0.0],
        })
        .collect();
        let fold = Fold::new("f1.tsv", vec!["f2.tsv".into()], Partition::new(), test).unwrap();

        let path = store.save_fold(&fold).unwrap();
        assert!(path.ends_with("folds/f1.tsv.json"));
        assert_eq!(store.load_fold("f1.tsv").unwrap(), fold);

        let cfg = PipelineConfig {
            nb_words:   Some(20_000),
            label_mode: LabelMode::Reduced,
            ..PipelineConfig::default()
        };
        store.save_config(&cfg).unwrap();
        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.nb_words, Some(20_000));
        assert_eq!(loaded.label_mode, LabelMode::Reduced);
    }

    #[test]
    fn test_load_fold_rejects_misaligned_file() {
        let dir   = tempfile::tempdir().unwrap();
        let store = FoldStore::new(dir.path()).unwrap();
        fs::write(
            store.fold_path("a.tsv"),
            r#"{"name": "a.tsv", "training_files": [],
                "training": {"token_indices": [], "labels": [], "ids": []},
                "test": {"token_indices": [[1, 3]], "labels": [], "ids": ["x", "y"]}}"#,
        )
        .unwrap();

        let err = store.load_fold("a.tsv").unwrap_err();
        assert!(format!("{err:#}").contains("misaligned"));
    }

    #[test]
    fn test_load_fold_rejects_own_file_in_training() {
        let dir   = tempfile::tempdir().unwrap();
        let store = FoldStore::new(dir.path()).unwrap();
        let empty = r#"{"token_indices": [], "labels": [], "ids": []}"#;
        fs::write(
            store.fold_path("a.tsv"),
            format!(
                r#"{{"name": "a.tsv", "training_files": ["a.tsv"], "training": {empty}, "test": {empty}}}"#
            ),
        )
        .unwrap();

        assert!(store.load_fold("a.tsv").is_err());
    }
}
