// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full data-preparation pipeline in order:
//
//   Step 1: Load vocabulary + embeddings   (Layer 6 - infra)
//   Step 2: Encode every annotated file    (Layer 4 - data)
//   Step 3: Build leave-one-out folds      (Layer 4 - data)
//   Step 4: Assemble the embedding table   (Layer 4 - data)
//   Step 5: Log per-fold statistics
//
// Every setting comes from PipelineConfig; nothing is read
// from process-wide state.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{embedding_matrix::EmbeddingTable, splitter::FoldBuilder};
use crate::domain::{
    fold::FoldSet,
    labels::LabelMode,
    traits::VocabularyProvider,
};
use crate::infra::{
    tokenizer::WhitespaceTokenizer,
    vocabulary_store::{JsonVocabularyProvider, TextEmbeddingsProvider},
};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Serialisable so an export can record exactly how its folds
// were produced.

/// Where the word → index and index → embedding maps come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularySource {
    /// `{"word_to_index": .., "index_to_embedding": ..}`
    Json(PathBuf),
    /// word2vec / GloVe text vectors
    TextEmbeddings(PathBuf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input_dir:  String,
    /// Indices >= nb_words become OOV
    pub nb_words:   Option<usize>,
    pub label_mode: LabelMode,
    pub vocabulary: VocabularySource,
    pub lowercase:  bool,
    /// Seeds the random start / OOV embedding rows
    pub seed:       u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir:  "data/gold-csv".to_string(),
            nb_words:   None,
            label_mode: LabelMode::Full,
            vocabulary: VocabularySource::Json(PathBuf::from("data/vocabulary.json")),
            lowercase:  false,
            seed:       1337,
        }
    }
}

impl PipelineConfig {
    pub fn provider(&self) -> Box<dyn VocabularyProvider> {
        match &self.vocabulary {
            VocabularySource::Json(path) => Box::new(JsonVocabularyProvider::new(path)),
            VocabularySource::TextEmbeddings(path) => {
                Box::new(TextEmbeddingsProvider::new(path, self.seed))
            }
        }
    }
}

/// Folds plus the embedding matrix every fold indexes into
#[derive(Debug)]
pub struct PreparedRun {
    pub folds:      FoldSet,
    pub embeddings: EmbeddingTable,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PipelineConfig,
}

impl PrepareUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run with the provider named in the config
    pub fn execute(&self) -> Result<PreparedRun> {
        let provider = self.config.provider();
        self.execute_with(provider.as_ref())
    }

    pub fn execute_with(&self, provider: &dyn VocabularyProvider) -> Result<PreparedRun> {
        let cfg = &self.config;

        // ── Steps 1-3: vocabulary, encoding, folds ────────────────────────────
        tracing::info!("Loading annotated files from '{}'", cfg.input_dir);
        let tokenizer = WhitespaceTokenizer::new(cfg.lowercase);
        let folds     = FoldBuilder::new(&cfg.input_dir, cfg.nb_words, cfg.label_mode)
            .build(provider, &tokenizer)?;

        // ── Step 4: Embedding table ───────────────────────────────────────────
        let embeddings = EmbeddingTable::from_map(&folds.embeddings)
            .context("Cannot assemble embedding table")?;
        tracing::info!(
            "Embedding table shape: ({}, {})",
            embeddings.rows(),
            embeddings.dim()
        );

        // ── Step 5: Statistics ────────────────────────────────────────────────
        for fold in folds.iter() {
            tracing::info!(
                "Fold '{}': {} training instances, {} test instances",
                fold.name,
                Dataset::len(&fold.training),
                Dataset::len(&fold.test)
            );
        }
        tracing::info!("Built {} folds", folds.len());

        Ok(PreparedRun { folds, embeddings })
    }
}
