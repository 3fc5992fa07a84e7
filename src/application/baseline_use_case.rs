// ============================================================
// Layer 2 — BaselineUseCase
// ============================================================
// Single-label variant of the experiment, with the simplest
// possible model: predict the most frequent training label.
//
//   for each fold (in fold-name order):
//     majority = most common arg-max label in fold.training
//     for each test instance:
//       gold      = arg-max label of its vector
//       predicted = majority
//       emit  id<TAB>gold<TAB>predicted
//
// The output file gives any real model a floor to beat and
// has the same layout as a trained model's prediction file.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::application::prepare_use_case::{PipelineConfig, PrepareUseCase};
use crate::domain::{fold::Partition, labels::LabelSpace, traits::VocabularyProvider};
use crate::infra::predictions::{PredictionLine, PredictionWriter};

pub struct BaselineUseCase {
    prepare: PrepareUseCase,
    writer:  PredictionWriter,
}

impl BaselineUseCase {
    pub fn new(config: PipelineConfig, output: impl Into<PathBuf>) -> Self {
        Self {
            prepare: PrepareUseCase::new(config),
            writer:  PredictionWriter::new(output.into()),
        }
    }

    pub fn execute(&self) -> Result<Vec<PredictionLine>> {
        let provider = self.prepare.config().provider();
        self.execute_with(provider.as_ref())
    }

    pub fn execute_with(&self, provider: &dyn VocabularyProvider) -> Result<Vec<PredictionLine>> {
        let run    = self.prepare.execute_with(provider)?;
        let labels = LabelSpace::new(self.prepare.config().label_mode);

        let mut lines = Vec::new();
        for fold in run.folds.iter() {
            let predicted = match majority_label(&labels, &fold.training) {
                Some(label) => label,
                None => {
                    tracing::warn!(
                        "Fold '{}' has no training data, predicting '{}'",
                        fold.name,
                        labels.labels()[0]
                    );
                    labels.labels()[0]
                }
            };

            let mut wrong = 0usize;
            for (id, vector) in fold.test.ids().iter().zip(fold.test.labels()) {
                let gold = labels
                    .label_for_vector(vector)
                    .ok_or_else(|| anyhow!("Label vector of '{}' does not match the label space", id))?;

                let line = PredictionLine {
                    id:        id.clone(),
                    gold:      gold.to_string(),
                    predicted: predicted.to_string(),
                };
                if !line.is_correct() {
                    wrong += 1;
                }
                lines.push(line);
            }

            tracing::info!(
                "Fold '{}': predicted '{}', {} of {} wrong",
                fold.name,
                predicted,
                wrong,
                fold.test.len()
            );
        }

        self.writer.write_all(&lines)?;
        Ok(lines)
    }
}

/// Most frequent arg-max label; ties go to the earlier label
fn majority_label(labels: &LabelSpace, training: &Partition) -> Option<&'static str> {
    let mut counts = vec![0usize; labels.len()];
    for vector in training.labels() {
        if let Some(label) = labels.label_for_vector(vector) {
            if let Some(pos) = labels.labels().iter().position(|l| *l == label) {
                counts[pos] += 1;
            }
        }
    }

    let (best, &count) = counts
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|&(_, c)| *c)?;
    (count > 0).then(|| labels.labels()[best])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prepare_use_case::tests::write_corpus;
    use crate::domain::{instance::EncodedInstance, labels::LabelMode};
    use std::fs;

    fn partition(vectors: &[[f32; 3]]) -> Partition {
        vectors
            .iter()
            .enumerate()
            .map(|(i, v)| EncodedInstance {
                id:            i.to_string(),
                token_indices: vec![1, 1],
                label_vector:  v.to_vec(),
            })
            .collect()
    }

    #[test]
    fn test_majority_label() {
        let space = LabelSpace::new(LabelMode::Reduced);
        let p     = partition(&[[0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_eq!(majority_label(&space, &p), Some("o6"));

        // Tie between o5 and o7 goes to o5
        let p = partition(&[[0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        assert_eq!(majority_label(&space, &p), Some("o5"));

        assert_eq!(majority_label(&space, &Partition::new()), None);
    }

    #[test]
    fn test_baseline_writes_id_gold_predicted() {
        let corpus = tempfile::tempdir().unwrap();
        let out    = tempfile::tempdir().unwrap();
        let vocab  = write_corpus(corpus.path());
        let output = out.path().join("predictions.tsv");

        let cfg = PipelineConfig {
            input_dir:  corpus.path().to_string_lossy().into_owned(),
            label_mode: LabelMode::Reduced,
            ..PipelineConfig::default()
        };
        let lines = BaselineUseCase::new(cfg, &output).execute_with(&vocab).unwrap();

        // f1 test (id1 o5, id3 o6) trained on f2 (o6) → predict o6
        // f2 test (id2 o6) trained on f1 (o5, o6 tie) → predict o5
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "id1\to5\to6\nid3\to6\to6\nid2\to6\to5\n");
        assert_eq!(lines.iter().filter(|l| l.is_correct()).count(), 1);
    }
}
