// ============================================================
// Layer 3 — Fold Domain Types
// ============================================================
// Partition → order-aligned (token_indices, labels, ids)
//             for one file or a concatenation of files
// Fold      → one leave-one-file-out split, named after
//             the held-out file
// FoldSet   → every fold of a corpus plus the embedding map
//             they all share
//
// Partition keeps its three sequences private so they can
// only grow together. ids[i] always belongs to
// token_indices[i] and labels[i].
//
// Deserialisation goes through PartitionRepr / FoldRepr so a
// fold read back from disk passes the same checks as one
// built in memory.
//
// Reference: Rust Book §5 (Structs), §8 (Collections)

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::error::PrepError;
use crate::domain::instance::EncodedInstance;
use crate::domain::vocabulary::EmbeddingMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartitionRepr")]
pub struct Partition {
    token_indices: Vec<Vec<u32>>,
    labels:        Vec<Vec<f32>>,
    ids:           Vec<String>,
}

/// Unchecked wire form of a Partition
#[derive(Deserialize)]
struct PartitionRepr {
    token_indices: Vec<Vec<u32>>,
    labels:        Vec<Vec<f32>>,
    ids:           Vec<String>,
}

impl TryFrom<PartitionRepr> for Partition {
    type Error = PrepError;

    fn try_from(repr: PartitionRepr) -> Result<Self, Self::Error> {
        let PartitionRepr { token_indices, labels, ids } = repr;
        if token_indices.len() != ids.len() || labels.len() != ids.len() {
            return Err(PrepError::MisalignedPartition {
                ids:    ids.len(),
                tokens: token_indices.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { token_indices, labels, ids })
    }
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: EncodedInstance) {
        self.token_indices.push(instance.token_indices);
        self.labels.push(instance.label_vector);
        self.ids.push(instance.id);
    }

    /// Append every instance of `other`, keeping its order
    pub fn extend_from(&mut self, other: &Partition) {
        self.token_indices.extend_from_slice(&other.token_indices);
        self.labels.extend_from_slice(&other.labels);
        self.ids.extend_from_slice(&other.ids);
    }

    pub fn token_indices(&self) -> &[Vec<u32>] {
        &self.token_indices
    }

    pub fn labels(&self) -> &[Vec<f32>] {
        &self.labels
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Rebuild the i-th instance
    pub fn instance(&self, index: usize) -> Option<EncodedInstance> {
        Some(EncodedInstance {
            id:            self.ids.get(index)?.clone(),
            token_indices: self.token_indices.get(index)?.clone(),
            label_vector:  self.labels.get(index)?.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<EncodedInstance> for Partition {
    fn from_iter<I: IntoIterator<Item = EncodedInstance>>(iter: I) -> Self {
        let mut partition = Partition::new();
        for instance in iter {
            partition.push(instance);
        }
        partition
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FoldRepr")]
pub struct Fold {
    /// Name of the held-out file
    pub name:           String,
    /// Files whose instances make up `training`, in concatenation order
    pub training_files: Vec<String>,
    pub training:       Partition,
    pub test:           Partition,
}

#[derive(Deserialize)]
struct FoldRepr {
    name:           String,
    training_files: Vec<String>,
    training:       Partition,
    test:           Partition,
}

impl TryFrom<FoldRepr> for Fold {
    type Error = PrepError;

    fn try_from(repr: FoldRepr) -> Result<Self, Self::Error> {
        Fold::new(repr.name, repr.training_files, repr.training, repr.test)
    }
}

impl Fold {
    /// The held-out file must not contribute to its own training data.
    pub fn new(
        name:           impl Into<String>,
        training_files: Vec<String>,
        training:       Partition,
        test:           Partition,
    ) -> Result<Self, PrepError> {
        let name = name.into();
        if training_files.iter().any(|f| *f == name) {
            return Err(PrepError::FoldOverlap(name));
        }
        Ok(Self { name, training_files, training, test })
    }

    /// Instance ids present in both partitions (empty for a clean corpus)
    pub fn shared_ids(&self) -> Vec<&str> {
        let test: HashSet<&str> = self.test.ids().iter().map(String::as_str).collect();
        self.training
            .ids()
            .iter()
            .map(String::as_str)
            .filter(|id| test.contains(id))
            .collect()
    }
}

/// All folds of one corpus, keyed and iterated by fold name
#[derive(Debug, Clone, Default)]
pub struct FoldSet {
    pub folds:      BTreeMap<String, Fold>,
    pub embeddings: EmbeddingMap,
}

impl FoldSet {
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Fold> {
        self.folds.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fold> {
        self.folds.values()
    }
}
