// ============================================================
// Layer 4 — Annotated File Loader
// ============================================================
// Reads one tab-separated annotation file and encodes every
// data line into a Partition.
//
// File layout:
//   argId<TAB>label<TAB>argument1<TAB>argument2   ← header, dropped
//   arg123<TAB>o5_1,o6_2<TAB>some text<TAB>more text
//   ...
//
// Guarantees:
//   - file order is preserved (first data line → element 0)
//   - ids, token sequences and label vectors stay aligned
//   - the first malformed line or unknown label aborts the
//     whole file; nothing partial is returned
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::encoder::{InstanceEncoder, LineRef};
use crate::domain::{error::PrepError, fold::Partition};

pub struct FileLoader<'a> {
    /// Directory the annotated files live in
    dir:     PathBuf,
    encoder: InstanceEncoder<'a>,
}

impl<'a> FileLoader<'a> {
    pub fn new(dir: impl AsRef<Path>, encoder: InstanceEncoder<'a>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            encoder,
        }
    }

    /// Load `<dir>/<file_name>` into an order-aligned Partition
    pub fn load(&self, file_name: &str) -> Result<Partition, PrepError> {
        let path     = self.dir.join(file_name);
        let contents = fs::read_to_string(&path).map_err(|e| PrepError::io(&path, e))?;

        let partition = self.encode_contents(file_name, &contents)?;

        tracing::debug!("Loaded '{}': {} instances", file_name, partition.len());
        Ok(partition)
    }

    /// Encode already-read file contents; the first line is the header
    pub fn encode_contents(&self, file_name: &str, contents: &str) -> Result<Partition, PrepError> {
        let mut partition = Partition::new();

        // enumerate() is 0-based, the header is line 1
        for (idx, line) in contents.lines().enumerate().skip(1) {
            let at = LineRef { file: file_name, line: idx + 1 };
            partition.push(self.encoder.encode_line(line, at)?);
        }

        Ok(partition)
    }
}
