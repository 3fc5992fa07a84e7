// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concrete implementations of the collaborator seams plus
// everything that touches disk outside the annotated corpus:
//
//   tokenizer.rs        → WhitespaceTokenizer, the HuggingFace
//                         `tokenizers` pre-tokenizer behind the
//                         WordTokenizer trait
//
//   vocabulary_store.rs → JSON map pair or word2vec/GloVe text
//                         vectors behind VocabularyProvider
//
//   fold_store.rs       → JSON export of folds and the
//                         PipelineConfig that produced them
//
//   predictions.rs      → id / gold / predicted line writer for
//                         the single-label baseline
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Word tokenizer backed by the `tokenizers` crate
pub mod tokenizer;

/// JSON and text-embedding vocabulary providers
pub mod vocabulary_store;

/// Fold and config persistence
pub mod fold_store;

/// Prediction output file writer
pub mod predictions;
