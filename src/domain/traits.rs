// ============================================================
// Layer 3 — Core Traits (Collaborator Seams)
// ============================================================
// The pipeline treats two things as black boxes:
//
//   VocabularyProvider → hands over the word→index map and
//                        the index→embedding map, once per run
//   WordTokenizer      → splits argument text into word tokens
//
// Implementations live in Layer 6 (infra):
//   - JsonVocabularyProvider  → serialised map pair
//   - TextEmbeddingsProvider  → word2vec / GloVe text vectors
//   - WhitespaceTokenizer     → HuggingFace Whitespace pre-tokenizer
//
// Tests substitute tiny in-memory implementations.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::error::PrepError;
use crate::domain::vocabulary::Vocabulary;

// ─── VocabularyProvider ───────────────────────────────────────────────────────
/// Anything that can supply the vocabulary and its embeddings.
pub trait VocabularyProvider {
    /// Load both maps. Called exactly once per pipeline run.
    fn load(&self) -> Result<Vocabulary>;
}

// ─── WordTokenizer ────────────────────────────────────────────────────────────
/// Anything that can split raw text into word tokens.
pub trait WordTokenizer {
    fn tokenize(&self, text: &str) -> std::result::Result<Vec<String>, PrepError>;
}

/// An already-loaded vocabulary is its own provider
impl VocabularyProvider for Vocabulary {
    fn load(&self) -> Result<Vocabulary> {
        Ok(self.clone())
    }
}
