// ============================================================
// Layer 6 — Prediction Writer
// ============================================================
// Writes single-label predictions, one instance per line:
//
//   id<TAB>gold_label<TAB>predicted_label
//
// Example output:
//   arg219_arg244	o5	o7
//   arg12_arg33	o6	o6
//
// Lines are collected across all folds and written once at
// the end, so a failed run never leaves a truncated file.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionLine {
    pub id:        String,
    pub gold:      String,
    pub predicted: String,
}

impl PredictionLine {
    pub fn is_correct(&self) -> bool {
        self.gold == self.predicted
    }
}

pub struct PredictionWriter {
    path: PathBuf,
}

impl PredictionWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn write_all(&self, lines: &[PredictionLine]) -> Result<()> {
        let file = fs::File::create(&self.path)
            .with_context(|| format!("Cannot create '{}'", self.path.display()))?;
        let mut out = BufWriter::new(file);

        for l in lines {
            writeln!(out, "{}\t{}\t{}", l.id, l.gold, l.predicted)?;
        }
        out.flush()?;

        tracing::info!("Wrote {} predictions to '{}'", lines.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_separated_lines() {
        let dir    = tempfile::tempdir().unwrap();
        let writer = PredictionWriter::new(dir.path().join("pred.tsv"));
        let lines  = vec![
            PredictionLine { id: "a".into(), gold: "o5".into(), predicted: "o7".into() },
            PredictionLine { id: "b".into(), gold: "o6".into(), predicted: "o6".into() },
        ];
        writer.write_all(&lines).unwrap();

        let written = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(written, "a\to5\to7\nb\to6\to6\n");
        assert!(!lines[0].is_correct());
        assert!(lines[1].is_correct());
    }
}
