// ============================================================
// Layer 4 — Instance Encoder
// ============================================================
// Turns one raw annotated line into an EncodedInstance.
//
//   "id1\to5_1\tgood point\tbad point"
//       │
//       ▼  split into 4 fields            (RawLine)
//       ▼  clean + tokenize each argument (Preprocessor, WordTokenizer)
//       ▼  look up every token            (VocabularyIndex, OOV → 2)
//       ▼  [1] + arg1 + [1] + arg2
//       ▼  clamp indices >= nb_words to 2
//       ▼  compound label → multi-hot     (LabelSpace)
//       │
//   EncodedInstance { id: "id1", token_indices: [1,3,4,1,5,4], label_vector }
//
// The clamp runs after lookup on the whole sequence. Start
// markers survive it because the cap is never below 3.
//
// Encoding is a pure function of the line and the encoder's
// configuration: the same line always yields the same output.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    error::PrepError,
    instance::{EncodedInstance, RawLine, FIRST_WORD_INDEX, OOV_INDEX, START_INDEX},
    labels::{LabelMode, LabelSpace},
    traits::WordTokenizer,
    vocabulary::VocabularyIndex,
};

/// Where a line came from, for error messages
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    pub file: &'a str,
    /// 1-based physical line number, the header being line 1
    pub line: usize,
}

pub struct InstanceEncoder<'a> {
    vocabulary:   &'a VocabularyIndex,
    tokenizer:    &'a dyn WordTokenizer,
    nb_words:     Option<usize>,
    labels:       LabelSpace,
    preprocessor: Preprocessor,
}

impl<'a> InstanceEncoder<'a> {
    /// `nb_words`, when set, must leave room for the reserved indices
    pub fn new(
        vocabulary: &'a VocabularyIndex,
        tokenizer:  &'a dyn WordTokenizer,
        nb_words:   Option<usize>,
        label_mode: LabelMode,
    ) -> Result<Self, PrepError> {
        if let Some(cap) = nb_words {
            if cap < FIRST_WORD_INDEX as usize {
                return Err(PrepError::InvalidVocabularyCap(cap));
            }
        }
        Ok(Self {
            vocabulary,
            tokenizer,
            nb_words,
            labels: LabelSpace::new(label_mode),
            preprocessor: Preprocessor::new(),
        })
    }

    /// Parse and encode one data line
    pub fn encode_line(&self, line: &str, at: LineRef<'_>) -> Result<EncodedInstance, PrepError> {
        let raw = RawLine::parse(line).map_err(|fields| PrepError::MalformedLine {
            file: at.file.to_string(),
            line: at.line,
            fields,
        })?;
        self.encode(&raw, at)
    }

    pub fn encode(&self, raw: &RawLine<'_>, at: LineRef<'_>) -> Result<EncodedInstance, PrepError> {
        let arg1 = self.argument_indices(raw.argument1)?;
        let arg2 = self.argument_indices(raw.argument2)?;

        let mut token_indices = Vec::with_capacity(arg1.len() + arg2.len() + 2);
        token_indices.push(START_INDEX);
        token_indices.extend(arg1);
        token_indices.push(START_INDEX);
        token_indices.extend(arg2);

        if let Some(cap) = self.nb_words {
            for idx in token_indices.iter_mut() {
                if *idx as usize >= cap {
                    *idx = OOV_INDEX;
                }
            }
        }

        let label_vector = self.labels.encode(raw.label).map_err(|label| PrepError::UnknownLabel {
            file:  at.file.to_string(),
            line:  at.line,
            label: label.to_string(),
        })?;

        Ok(EncodedInstance {
            id: raw.id.to_string(),
            token_indices,
            label_vector,
        })
    }

    fn argument_indices(&self, text: &str) -> Result<Vec<u32>, PrepError> {
        let cleaned = self.preprocessor.clean(text);
        let tokens  = self.tokenizer.tokenize(&cleaned)?;
        Ok(tokens.iter().map(|t| self.vocabulary.lookup(t)).collect())
    }
}
