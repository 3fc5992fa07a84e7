// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer turns a folder of annotated argument files into
// cross-validation folds and an embedding matrix.
//
// The pipeline flows in this order:
//
//   annotated .tsv files
//       │
//       ▼
//   FileLoader         → reads a file, drops the header
//       │
//       ▼
//   InstanceEncoder    → cleans, tokenizes, indexes, labels
//       │                (uses Preprocessor + WordTokenizer)
//       ▼
//   FoldBuilder        → caches every file, one fold per file
//       │
//       ▼
//   Partition          → implements burn's Dataset trait
//
//   index → vector map
//       │
//       ▼
//   EmbeddingTable     → dense [vocab, dim] matrix / tensor
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Cleans argument text before tokenisation
pub mod preprocessor;

/// Encodes one annotated line into token indices + label vector
pub mod encoder;

/// Loads one annotated file into a Partition
pub mod loader;

/// Builds leave-one-file-out folds over a directory
pub mod splitter;

/// Dense embedding matrix assembled from the index → vector map
pub mod embedding_matrix;

/// Implements burn's Dataset trait for Partition
pub mod dataset;
