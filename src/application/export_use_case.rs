// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Prepares the folds and writes them to an output directory
// for an external trainer:
//
//   Step 1: Run the prepare pipeline
//   Step 2: Save the config next to the folds
//   Step 3: Write one JSON file per fold

use anyhow::Result;
use std::path::PathBuf;

use crate::application::prepare_use_case::{PipelineConfig, PrepareUseCase};
use crate::domain::traits::VocabularyProvider;
use crate::infra::fold_store::FoldStore;

pub struct ExportUseCase {
    prepare:    PrepareUseCase,
    output_dir: PathBuf,
}

impl ExportUseCase {
    pub fn new(config: PipelineConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            prepare:    PrepareUseCase::new(config),
            output_dir: output_dir.into(),
        }
    }

    /// Returns the number of folds written
    pub fn execute(&self) -> Result<usize> {
        let provider = self.prepare.config().provider();
        self.execute_with(provider.as_ref())
    }

    pub fn execute_with(&self, provider: &dyn VocabularyProvider) -> Result<usize> {
        let run   = self.prepare.execute_with(provider)?;
        let store = FoldStore::new(&self.output_dir)?;

        store.save_config(self.prepare.config())?;
        for fold in run.folds.iter() {
            store.save_fold(fold)?;
        }

        tracing::info!(
            "Exported {} folds to '{}'",
            run.folds.len(),
            store.dir().display()
        );
        Ok(run.folds.len())
    }
}
