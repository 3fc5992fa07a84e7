// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what the
// pipeline works with: raw and encoded instances, the label
// space, the vocabulary, folds, and the error taxonomy.
//
// Rules for this layer:
//   - NO burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Fatal conditions raised while encoding and assembling folds
pub mod error;

// RawLine, EncodedInstance and the reserved index constants
pub mod instance;

// Full / reduced label spaces and multi-hot encoding
pub mod labels;

// Word→index map and the provider output type
pub mod vocabulary;

// Partition, Fold, FoldSet
pub mod fold;

// Collaborator seams: VocabularyProvider, WordTokenizer
pub mod traits;
