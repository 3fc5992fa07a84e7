// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `prepare`, `export` and
// `baseline`, and the pipeline flags they share.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::prepare_use_case::{PipelineConfig, VocabularySource};
use crate::domain::labels::LabelMode;

/// Vocabulary cap `baseline` applies when `--nb-words` is not given
pub const BASELINE_NB_WORDS: usize = 20_000;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build all leave-one-file-out folds and report their sizes
    Prepare(PrepareArgs),

    /// Build the folds and write them to a directory as JSON
    Export(ExportArgs),

    /// Single-label majority baseline: write id/gold/predicted lines
    Baseline(BaselineArgs),
}

/// Flags shared by every command
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Folder of annotated tab-separated files, one topic per file
    pub input_dir: String,

    /// Vocabulary cap: word indices >= this become OOV (at least 3).
    /// Defaults to no cap, except 20000 for `baseline`
    #[arg(long)]
    pub nb_words: Option<usize>,

    /// JSON file with word_to_index and index_to_embedding maps
    #[arg(long, default_value = "data/vocabulary.json", conflicts_with = "embeddings")]
    pub vocab: PathBuf,

    /// word2vec / GloVe text vectors instead of a JSON vocabulary
    #[arg(long)]
    pub embeddings: Option<PathBuf>,

    /// Lowercase argument text before tokenizing
    #[arg(long)]
    pub lowercase: bool,

    /// Seed for the start / OOV embedding rows of text vectors
    #[arg(long, default_value_t = 1337)]
    pub seed: u64,
}

impl PipelineArgs {
    fn into_config(self, label_mode: LabelMode) -> PipelineConfig {
        let vocabulary = match self.embeddings {
            Some(path) => VocabularySource::TextEmbeddings(path),
            None       => VocabularySource::Json(self.vocab),
        };
        PipelineConfig {
            input_dir: self.input_dir,
            nb_words:  self.nb_words,
            label_mode,
            vocabulary,
            lowercase: self.lowercase,
            seed:      self.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Use the three coarse super-labels instead of the 17 fine labels
    #[arg(long)]
    pub reduced: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Directory to write pipeline_config.json and folds/ into
    pub output_dir: PathBuf,

    /// Use the three coarse super-labels instead of the 17 fine labels
    #[arg(long)]
    pub reduced: bool,
}

#[derive(Args, Debug)]
pub struct BaselineArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// File to write id<TAB>gold<TAB>predicted lines to
    pub output_file: PathBuf,

    /// Predict over the 17 fine labels instead of the 3 super-labels
    #[arg(long)]
    pub full: bool,
}

fn label_mode(reduced: bool) -> LabelMode {
    if reduced { LabelMode::Reduced } else { LabelMode::Full }
}

/// Convert CLI args into the application-layer PipelineConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PipelineConfig {
    fn from(a: PrepareArgs) -> Self {
        a.pipeline.into_config(label_mode(a.reduced))
    }
}

impl From<&ExportArgs> for PipelineConfig {
    fn from(a: &ExportArgs) -> Self {
        a.pipeline.clone().into_config(label_mode(a.reduced))
    }
}

impl From<&BaselineArgs> for PipelineConfig {
    fn from(a: &BaselineArgs) -> Self {
        let mut cfg = a.pipeline.clone().into_config(label_mode(!a.full));
        cfg.nb_words = cfg.nb_words.or(Some(BASELINE_NB_WORDS));
        cfg
    }
}
