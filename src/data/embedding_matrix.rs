// ============================================================
// Layer 4 — Embedding Matrix Assembler
// ============================================================
// Converts the provider's index → vector map into one dense
// row-major matrix: row i is the embedding of vocabulary
// index i.
//
//   { 0: [..], 1: [..], 2: [..], 3: [..] }  →  4 × dim matrix
//
// The map is a BTreeMap, so iteration is always ascending by
// index. On top of that the assembler checks the indices are
// exactly 0..n and every row has the same width; a gap would
// shift every following row onto the wrong word.
//
// Reference: Burn Book §3 (Tensors)

use burn::prelude::*;

use crate::domain::{error::PrepError, vocabulary::EmbeddingMap};

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    rows:   usize,
    dim:    usize,
    /// Row-major, rows * dim values
    values: Vec<f32>,
}

impl EmbeddingTable {
    pub fn from_map(map: &EmbeddingMap) -> Result<Self, PrepError> {
        let dim    = map.values().next().map(Vec::len).unwrap_or(0);
        let mut values = Vec::with_capacity(map.len() * dim);

        for (expected, (&index, row)) in (0u32..).zip(map.iter()) {
            if index != expected {
                return Err(PrepError::EmbeddingGap { expected, found: index });
            }
            if row.len() != dim {
                return Err(PrepError::EmbeddingDimension {
                    index,
                    expected: dim,
                    found:    row.len(),
                });
            }
            values.extend_from_slice(row);
        }

        tracing::debug!("Embedding table: {} x {}", map.len(), dim);
        Ok(Self { rows: map.len(), dim, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.dim;
        Some(&self.values[start..start + self.dim])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Materialise as a `[rows, dim]` float tensor on `device`
    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 2> {
        Tensor::<B, 1>::from_floats(self.values.as_slice(), device).reshape([self.rows, self.dim])
    }
}
