// ============================================================
// Layer 4 — Leave-One-File-Out Fold Builder
// ============================================================
// Splits a directory of annotated files into one fold per
// file: that file is the test set, every other file is
// concatenated into the training set.
//
//   files: A B C
//
//   fold A → train [B C]  test [A]
//   fold B → train [A C]  test [B]
//   fold C → train [A B]  test [C]
//
// Why leave-one-file-out?
//   Each file holds the annotations for one debate topic.
//   Holding out a whole file tests whether a model
//   generalises to a topic it has never seen, instead of
//   memorising topic-specific vocabulary.
//
// Algorithm:
//   1. List the directory (flat, regular files only) and sort
//      the names so folds and training order do not depend on
//      file-system enumeration order
//   2. Load and encode every file exactly once into a cache
//   3. For every file f: test = cache[f],
//      training = concatenation of cache[g] for g != f
//
// The cache is complete before any fold is assembled and is
// only read afterwards.
//
// Reference: Rust Book §8 (Collections)

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::data::{encoder::InstanceEncoder, loader::FileLoader};
use crate::domain::{
    error::PrepError,
    fold::{Fold, FoldSet, Partition},
    labels::LabelMode,
    traits::{VocabularyProvider, WordTokenizer},
};

/// Builds every fold of one corpus directory
pub struct FoldBuilder {
    dir:        PathBuf,
    nb_words:   Option<usize>,
    label_mode: LabelMode,
}

impl FoldBuilder {
    pub fn new(dir: impl AsRef<Path>, nb_words: Option<usize>, label_mode: LabelMode) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            nb_words,
            label_mode,
        }
    }

    /// Load the vocabulary once, encode every file, assemble all folds.
    ///
    /// The provider's embedding map is passed through untouched.
    pub fn build(
        &self,
        provider:  &dyn VocabularyProvider,
        tokenizer: &dyn WordTokenizer,
    ) -> Result<FoldSet> {
        let vocabulary = provider.load().context("Cannot load vocabulary")?;
        vocabulary.check_coverage()?;
        tracing::info!(
            "Vocabulary: {} words, {} embedding rows",
            vocabulary.index.len(),
            vocabulary.embeddings.len()
        );

        let encoder = InstanceEncoder::new(&vocabulary.index, tokenizer, self.nb_words, self.label_mode)?;
        let loader  = FileLoader::new(&self.dir, encoder);

        let files = list_annotation_files(&self.dir)?;
        if files.is_empty() {
            tracing::warn!(
                "No annotated files in '{}', no folds to build",
                self.dir.display()
            );
        }

        let folds = build_folds(&loader, &files)
            .with_context(|| format!("Cannot build folds from '{}'", self.dir.display()))?;

        Ok(FoldSet {
            folds,
            embeddings: vocabulary.embeddings,
        })
    }
}

/// Names of all regular files directly inside `dir`, sorted
pub fn list_annotation_files(dir: &Path) -> Result<Vec<String>, PrepError> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| PrepError::io(dir, e))? {
        let entry = entry.map_err(|e| PrepError::io(dir, e))?;
        let path  = entry.path();

        if !path.is_file() {
            tracing::warn!("Skipping non-file entry '{}'", path.display());
            continue;
        }

        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| PrepError::InvalidFileName(path.clone()))?;
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// Encode every file once, then build one fold per file.
/// `files` order is the training concatenation order.
pub fn build_folds(
    loader: &FileLoader<'_>,
    files:  &[String],
) -> Result<BTreeMap<String, Fold>, PrepError> {
    // ── Step 1: Load every file exactly once ──────────────────────────────────
    let mut cache: BTreeMap<&str, Partition> = BTreeMap::new();
    for name in files {
        let partition = loader.load(name)?;
        cache.insert(name.as_str(), partition);
    }
    tracing::info!("Loaded {} files", cache.len());

    warn_on_duplicate_ids(&cache);

    // ── Step 2: One fold per file ─────────────────────────────────────────────
    let mut folds = BTreeMap::new();
    for test_name in files {
        let mut training       = Partition::new();
        let mut training_files = Vec::with_capacity(files.len().saturating_sub(1));

        for other in files.iter().filter(|f| *f != test_name) {
            if let Some(partition) = cache.get(other.as_str()) {
                training.extend_from(partition);
                training_files.push(other.clone());
            }
        }

        let test = cache.get(test_name.as_str()).cloned().unwrap_or_default();
        let fold = Fold::new(test_name.clone(), training_files, training, test)?;

        tracing::debug!(
            "Fold '{}': {} training, {} test",
            fold.name,
            fold.training.len(),
            fold.test.len()
        );
        folds.insert(test_name.clone(), fold);
    }

    Ok(folds)
}

/// An id present in two files ends up in both partitions of some fold.
/// Returns how many repeated ids were seen.
fn warn_on_duplicate_ids(cache: &BTreeMap<&str, Partition>) -> usize {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates = 0usize;

    for partition in cache.values() {
        for id in partition.ids() {
            if !seen.insert(id.as_str()) {
                duplicates += 1;
            }
        }
    }

    if duplicates > 0 {
        tracing::warn!(
            "{} instance ids occur more than once across the corpus",
            duplicates
        );
    }
    duplicates
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::encoder::tests::{sample_vocabulary, SpaceTokenizer};
    use crate::domain::vocabulary::Vocabulary;

    const HEADER: &str = "argId\tlabel\ta1\ta2\n";

    fn write(dir: &Path, name: &str, lines: &[&str]) {
        let mut body = HEADER.to_string();
        for l in lines {
            body.push_str(l);
            body.push('\n');
        }
        fs::write(dir.join(name), body).unwrap();
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary {
            index:      sample_vocabulary(),
            embeddings: (0..9).map(|i| (i, vec![i as f32; 2])).collect(),
        }
    }

    #[test]
    fn test_one_fold_per_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "C", &["c1\to7_1\tclaim\tpoint"]);
        write(dir.path(), "A", &["a1\to5_1\tgood\tbad", "a2\to5_2\tgood\tgood"]);
        write(dir.path(), "B", &["b1\to6_1\tstrong\tweak"]);

        let set = FoldBuilder::new(dir.path(), None, LabelMode::Full)
            .build(&vocabulary(), &SpaceTokenizer)
            .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.folds.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);

        let a = set.get("A").unwrap();
        assert_eq!(a.test.ids(), &["a1", "a2"]);
        assert_eq!(a.training.ids(), &["b1", "c1"]);
        assert_eq!(a.training_files, vec!["B", "C"]);

        let b = set.get("B").unwrap();
        assert_eq!(b.training.ids(), &["a1", "a2", "c1"]);
    }

    #[test]
    fn test_partitions_cover_corpus_without_overlap() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "x.tsv", &["x1\to5_1\tgood\tbad", "x2\to6_3\tweak\tclaim"]);
        write(dir.path(), "y.tsv", &["y1\to9_4\tpoint\tpoint"]);
        write(dir.path(), "z.tsv", &["z1\to8_5\tstrong\tbad", "z2\to7_4\tgood\tweak"]);

        let set = FoldBuilder::new(dir.path(), None, LabelMode::Full)
            .build(&vocabulary(), &SpaceTokenizer)
            .unwrap();

        let corpus: HashSet<&str> = ["x1", "x2", "y1", "z1", "z2"].into_iter().collect();
        for fold in set.iter() {
            assert!(fold.shared_ids().is_empty());
            let union: HashSet<&str> = fold
                .training
                .ids()
                .iter()
                .chain(fold.test.ids())
                .map(String::as_str)
                .collect();
            assert_eq!(union, corpus);
            assert_eq!(fold.training.len() + fold.test.len(), 5);
            assert_eq!(fold.training.labels().len(), fold.training.len());
            assert_eq!(fold.training.token_indices().len(), fold.training.len());
        }
    }

    #[test]
    fn test_two_file_scenario() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "f1.tsv", &["id1\to5_1\tgood point\tbad point"]);
        write(dir.path(), "f2.tsv", &["id2\to6_2\tstrong claim\tweak claim"]);

        let set = FoldBuilder::new(dir.path(), None, LabelMode::Full)
            .build(&vocabulary(), &SpaceTokenizer)
            .unwrap();

        let f1 = set.get("f1.tsv").unwrap();
        assert_eq!(f1.test.ids(), &["id1"]);
        assert_eq!(f1.training.ids(), &["id2"]);
        assert_eq!(f1.test.token_indices()[0], vec![1, 3, 4, 1, 5, 4]);

        let labels = &f1.test.labels()[0];
        assert_eq!(labels.len(), 17);
        assert_eq!(labels[0], 1.0);
        assert_eq!(labels.iter().sum::<f32>(), 1.0);

        let f2 = set.get("f2.tsv").unwrap();
        assert_eq!(f2.test.token_indices()[0], vec![1, 6, 7, 1, 8, 7]);

        // Embedding map passes through unchanged
        assert_eq!(set.embeddings, vocabulary().embeddings);
    }

    #[test]
    fn test_vocabulary_without_embedding_rows_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "f1.tsv", &["id1\to5_1\tgood point\tbad point"]);

        let vocabulary = Vocabulary {
            index:      sample_vocabulary(),
            embeddings: (0..6).map(|i| (i, vec![0.0; 2])).collect(),
        };
        let err = FoldBuilder::new(dir.path(), None, LabelMode::Full)
            .build(&vocabulary, &SpaceTokenizer)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PrepError>(),
            Some(PrepError::EmbeddingCoverage { max_index: 8, rows: 6 })
        ));
    }

    #[test]
    fn test_empty_directory_yields_no_folds() {
        let dir = tempfile::tempdir().unwrap();
        let set = FoldBuilder::new(dir.path(), None, LabelMode::Full)
            .build(&vocabulary(), &SpaceTokenizer)
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write(dir.path(), "only.tsv", &["o1\to5_1\tgood\tbad"]);

        let names = list_annotation_files(dir.path()).unwrap();
        assert_eq!(names, vec!["only.tsv"]);
    }

    #[test]
    fn test_duplicate_ids_are_counted_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.tsv", &["same\to5_1\tgood\tbad", "a2\to5_2\tgood\tgood"]);
        write(dir.path(), "b.tsv", &["same\to6_1\tstrong\tweak"]);

        let index   = sample_vocabulary();
        let encoder = InstanceEncoder::new(&index, &SpaceTokenizer, None, LabelMode::Full).unwrap();
        let loader  = FileLoader::new(dir.path(), encoder);

        let cache: BTreeMap<&str, Partition> = ["a.tsv", "b.tsv"]
            .into_iter()
            .map(|name| (name, loader.load(name).unwrap()))
            .collect();
        assert_eq!(warn_on_duplicate_ids(&cache), 1);

        let files = vec!["a.tsv".to_string(), "b.tsv".to_string()];
        let folds = build_folds(&loader, &files).unwrap();
        assert_eq!(folds["a.tsv"].shared_ids(), vec!["same"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"topic\xff.tsv")), HEADER).unwrap();

        let err = list_annotation_files(dir.path()).unwrap_err();
        assert!(matches!(err, PrepError::InvalidFileName(path) if path.starts_with(dir.path())));
    }

    #[test]
    fn test_bad_label_aborts_whole_run() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.tsv", &["g1\to5_1\tgood\tbad"]);
        write(dir.path(), "bad.tsv", &["b1\to5\tgood\tbad"]);

        let err = FoldBuilder::new(dir.path(), None, LabelMode::Full)
            .build(&vocabulary(), &SpaceTokenizer)
            .unwrap_err();
        let root = err.downcast_ref::<PrepError>().unwrap();
        assert!(matches!(root, PrepError::UnknownLabel { file, .. } if file == "bad.tsv"));
    }
}
