// ============================================================
// Layer 3 — Instance Domain Types
// ============================================================
// RawLine        → one data line of an annotated file, borrowed
//                  straight from the file contents
// EncodedInstance → the same line after tokenisation, index
//                  lookup and label encoding
//
// Encoded sequence layout:
//   [1] arg1 indices... [1] arg2 indices...
//    ^                   ^
//    start-of-sequence   start-of-sequence
//
// Reference: Rust Book §5 (Structs), §10 (Lifetimes)

use serde::{Deserialize, Serialize};

/// Reserved index for padding (never produced by the encoder)
pub const PAD_INDEX:   u32 = 0;
/// Reserved start-of-sequence marker, opens each argument
pub const START_INDEX: u32 = 1;
/// Reserved out-of-vocabulary index
pub const OOV_INDEX:   u32 = 2;
/// First index a real vocabulary word may use
pub const FIRST_WORD_INDEX: u32 = 3;

/// `id<TAB>label<TAB>argument1<TAB>argument2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub id:        &'a str,
    pub label:     &'a str,
    pub argument1: &'a str,
    pub argument2: &'a str,
}

impl<'a> RawLine<'a> {
    /// Split a line into its four fields.
    /// On failure returns the number of fields actually found.
    pub fn parse(line: &'a str) -> Result<Self, usize> {
        let fields: Vec<&str> = line.split('\t').collect();
        match fields[..] {
            [id, label, argument1, argument2] => Ok(Self {
                id,
                label,
                argument1,
                argument2,
            }),
            _ => Err(fields.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedInstance {
    pub id:            String,
    pub token_indices: Vec<u32>,
    pub label_vector:  Vec<f32>,
}

impl EncodedInstance {
    /// Position of the second start marker, i.e. where argument 2 begins
    pub fn separator_position(&self) -> Option<usize> {
        self.token_indices
            .iter()
            .skip(1)
            .position(|&i| i == START_INDEX)
            .map(|p| p + 1)
    }
}
