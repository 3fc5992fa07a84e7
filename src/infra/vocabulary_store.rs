// ============================================================
// Layer 6 — Vocabulary Providers
// ============================================================
// Two ways of supplying the word → index map and the
// index → embedding map the pipeline consumes.
//
// JsonVocabularyProvider:
//   A pre-extracted pair of maps, as written by an external
//   vocabulary/embedding extraction step:
//     {
//       "word_to_index":      { "the": 3, "gun": 4, ... },
//       "index_to_embedding": { "0": [...], "1": [...], ... }
//     }
//
// TextEmbeddingsProvider:
//   A word2vec / GloVe text file, one "word v1 v2 ... vD" per
//   line, optional "count dim" header. Words are numbered
//   3, 4, 5, ... in file order. The reserved rows are:
//     0 (padding) → all zeros
//     1 (start)   → uniform in [-0.25, 0.25]
//     2 (OOV)     → uniform in [-0.25, 0.25]
//   drawn from a seeded RNG so two runs give the same table.
//
// Reference: serde_json crate documentation
//            rand crate documentation (SeedableRng)

use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use crate::domain::{
    instance::{FIRST_WORD_INDEX, OOV_INDEX, PAD_INDEX, START_INDEX},
    traits::VocabularyProvider,
    vocabulary::{EmbeddingMap, Vocabulary, VocabularyIndex},
};

/// Range the reserved start / OOV rows are drawn from
const RESERVED_ROW_SCALE: f32 = 0.25;

/// On-disk layout of the JSON vocabulary file
#[derive(Debug, Serialize, Deserialize)]
struct VocabularyFile {
    word_to_index: HashMap<String, u32>,
    index_to_embedding: BTreeMap<u32, Vec<f32>>,
}

pub struct JsonVocabularyProvider {
    path: PathBuf,
}

impl JsonVocabularyProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write a vocabulary in the layout `load` expects
    pub fn save(&self, words: &HashMap<String, u32>, embeddings: &EmbeddingMap) -> Result<()> {
        let file = VocabularyFile {
            word_to_index:      words.clone(),
            index_to_embedding: embeddings.clone(),
        };
        fs::write(&self.path, serde_json::to_string(&file)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", self.path.display()))?;
        Ok(())
    }
}

impl VocabularyProvider for JsonVocabularyProvider {
    fn load(&self) -> Result<Vocabulary> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read vocabulary '{}'", self.path.display()))?;

        let file: VocabularyFile = serde_json::from_str(&json)
            .with_context(|| format!("Invalid vocabulary JSON in '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded vocabulary from '{}' ({} words)",
            self.path.display(),
            file.word_to_index.len()
        );

        Ok(Vocabulary {
            index:      VocabularyIndex::new(file.word_to_index)?,
            embeddings: file.index_to_embedding,
        })
    }
}

pub struct TextEmbeddingsProvider {
    path: PathBuf,
    seed: u64,
}

impl TextEmbeddingsProvider {
    pub fn new(path: impl Into<PathBuf>, seed: u64) -> Self {
        Self { path: path.into(), seed }
    }
}

impl VocabularyProvider for TextEmbeddingsProvider {
    fn load(&self) -> Result<Vocabulary> {
        let file = fs::File::open(&self.path)
            .with_context(|| format!("Cannot open embeddings '{}'", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut words:      HashMap<String, u32> = HashMap::new();
        let mut embeddings: EmbeddingMap         = BTreeMap::new();
        let mut dim:        Option<usize>        = None;
        let mut next_index = FIRST_WORD_INDEX;
        let mut duplicates = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("Cannot read '{}'", self.path.display()))?;
            let line_no = idx + 1;
            let mut parts = line.split_whitespace();

            let Some(word) = parts.next() else { continue };
            let values: Vec<&str> = parts.collect();

            // word2vec text files open with "<count> <dim>"
            if line_no == 1 && values.len() == 1 && is_header(word, values[0]) {
                continue;
            }

            let vector = values
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .with_context(|| {
                    format!("{}:{}: invalid vector component", self.path.display(), line_no)
                })?;

            if vector.is_empty() {
                bail!(
                    "{}:{}: no vector components after '{}'",
                    self.path.display(),
                    line_no,
                    word
                );
            }

            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected {
                bail!(
                    "{}:{}: vector for '{}' has {} components, expected {}",
                    self.path.display(),
                    line_no,
                    word,
                    vector.len(),
                    expected
                );
            }

            if words.contains_key(word) {
                duplicates += 1;
                continue;
            }
            words.insert(word.to_string(), next_index);
            embeddings.insert(next_index, vector);
            next_index += 1;
        }

        let Some(dim) = dim else {
            bail!("No embedding vectors in '{}'", self.path.display());
        };

        if duplicates > 0 {
            tracing::warn!(
                "Ignored {} repeated words in '{}'",
                duplicates,
                self.path.display()
            );
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        embeddings.insert(PAD_INDEX, vec![0.0; dim]);
        for reserved in [START_INDEX, OOV_INDEX] {
            let row = (0..dim)
                .map(|_| rng.gen_range(-RESERVED_ROW_SCALE..=RESERVED_ROW_SCALE))
                .collect();
            embeddings.insert(reserved, row);
        }

        tracing::info!(
            "Loaded {} embeddings of dimension {} from '{}'",
            words.len(),
            dim,
            self.path.display()
        );

        Ok(Vocabulary {
            index: VocabularyIndex::new(words)?,
            embeddings,
        })
    }
}

fn is_header(first: &str, second: &str) -> bool {
    first.parse::<usize>().is_ok() && second.parse::<usize>().is_ok()
}
