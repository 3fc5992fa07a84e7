// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every fatal condition the data pipeline can hit while
// encoding instances or assembling folds.
//
// All of these abort the whole run: a half-encoded corpus
// would silently corrupt every fold built from it, so the
// loaders never skip a bad line and carry on.
//
// The application layer wraps these in anyhow::Error with
// extra context (which command, which directory).
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    /// A data line is not `id<TAB>label<TAB>arg1<TAB>arg2`
    #[error("{file}:{line}: expected 4 tab-separated fields, found {fields}")]
    MalformedLine {
        file:   String,
        line:   usize,
        fields: usize,
    },

    /// A sub-label that does not belong to the configured label space
    #[error("{file}:{line}: unknown label '{label}'")]
    UnknownLabel {
        file:  String,
        line:  usize,
        label: String,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file name is not valid UTF-8: '{}'", .0.display())]
    InvalidFileName(PathBuf),

    /// Indices 0, 1 and 2 belong to padding, start-of-sequence and OOV
    #[error("word '{word}' is mapped to reserved index {index}")]
    ReservedIndex { word: String, index: u32 },

    #[error("vocabulary cap must be at least 3, got {0}")]
    InvalidVocabularyCap(usize),

    #[error("embedding indices must be contiguous from 0: expected {expected}, found {found}")]
    EmbeddingGap { expected: u32, found: u32 },

    /// Every word index must address a row of the embedding table
    #[error("word index {max_index} has no embedding row, the map holds {rows} rows")]
    EmbeddingCoverage { max_index: u32, rows: usize },

    #[error("embedding row {index} has dimension {found}, expected {expected}")]
    EmbeddingDimension {
        index:    u32,
        expected: usize,
        found:    usize,
    },

    #[error("tokenizer failed: {0}")]
    Tokenizer(String),

    #[error("fold '{0}' lists its own test file among its training files")]
    FoldOverlap(String),

    #[error("partition is misaligned: {ids} ids, {tokens} token sequences, {labels} label vectors")]
    MisalignedPartition {
        ids:    usize,
        tokens: usize,
        labels: usize,
    },
}

impl PrepError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
