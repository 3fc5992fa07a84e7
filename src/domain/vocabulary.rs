// ============================================================
// Layer 3 — Vocabulary Domain Types
// ============================================================
// VocabularyIndex maps words to integer indices.
//
// Index convention (shared with the instance encoder):
//   0 → padding
//   1 → start-of-sequence
//   2 → out-of-vocabulary
//   3.. → real words
//
// A word missing from the index is not an error: it is
// looked up as OOV (2). This fallback is the only way an
// unknown token is handled anywhere in the pipeline.
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::{BTreeMap, HashMap};

use crate::domain::error::PrepError;
use crate::domain::instance::{FIRST_WORD_INDEX, OOV_INDEX};

/// Index → embedding vector, ordered by ascending index
pub type EmbeddingMap = BTreeMap<u32, Vec<f32>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyIndex {
    words: HashMap<String, u32>,
}

impl VocabularyIndex {
    /// Build an index, rejecting any word mapped onto a reserved slot
    pub fn new(words: HashMap<String, u32>) -> Result<Self, PrepError> {
        if let Some((word, &index)) = words.iter().find(|&(_, &i)| i < FIRST_WORD_INDEX) {
            return Err(PrepError::ReservedIndex { word: word.clone(), index });
        }
        Ok(Self { words })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, PrepError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(w, i)| (w.into(), i)).collect())
    }

    /// Index for a token, falling back to OOV
    pub fn lookup(&self, word: &str) -> u32 {
        self.words.get(word).copied().unwrap_or(OOV_INDEX)
    }

    /// Largest word index, None for an empty index
    pub fn max_index(&self) -> Option<u32> {
        self.words.values().copied().max()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// What a VocabularyProvider hands to the pipeline: both maps,
/// loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub index:      VocabularyIndex,
    pub embeddings: EmbeddingMap,
}

impl Vocabulary {
    /// Every word index must fall inside the embedding map.
    ///
    /// Contiguity of the map itself is checked when the dense
    /// table is assembled.
    pub fn check_coverage(&self) -> Result<(), PrepError> {
        match self.index.max_index() {
            Some(max_index) if max_index as usize >= self.embeddings.len() => {
                Err(PrepError::EmbeddingCoverage { max_index, rows: self.embeddings.len() })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_falls_back_to_oov() {
        let vocab = VocabularyIndex::from_pairs([("good", 3), ("point", 4)]).unwrap();
        assert_eq!(vocab.lookup("good"), 3);
        assert_eq!(vocab.lookup("point"), 4);
        assert_eq!(vocab.lookup("missing"), OOV_INDEX);
    }

    #[test]
    fn test_embeddings_must_cover_every_word() {
        let index = VocabularyIndex::from_pairs([("good", 3), ("point", 4), ("bad", 5)]).unwrap();
        assert_eq!(index.max_index(), Some(5));

        let missing = Vocabulary { index: index.clone(), embeddings: EmbeddingMap::new() };
        assert!(matches!(
            missing.check_coverage(),
            Err(PrepError::EmbeddingCoverage { max_index: 5, rows: 0 })
        ));

        let short = Vocabulary {
            index:      index.clone(),
            embeddings: (0..5).map(|i| (i, vec![0.0])).collect(),
        };
        assert!(matches!(
            short.check_coverage(),
            Err(PrepError::EmbeddingCoverage { max_index: 5, rows: 5 })
        ));

        let full = Vocabulary { index, embeddings: (0..6).map(|i| (i, vec![0.0])).collect() };
        assert!(full.check_coverage().is_ok());

        // No words, no rows needed
        assert!(Vocabulary::default().check_coverage().is_ok());
    }

    #[test]
    fn test_reserved_indices_rejected() {
        for reserved in 0..3 {
            let err = VocabularyIndex::from_pairs([("ok", 5), ("bad", reserved)]).unwrap_err();
            assert!(matches!(err, PrepError::ReservedIndex { index, .. } if index == reserved));
        }
    }
}
