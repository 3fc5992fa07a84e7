// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Uses `clap` to parse
// command line arguments and delegates everything else to
// Layer 2 (application).
//
// Three commands are supported:
//   1. `prepare`  → build folds and log their statistics
//   2. `export`   → build folds and write them as JSON
//   3. `baseline` → single-label majority baseline predictions
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BaselineArgs, Commands, ExportArgs, PrepareArgs};

use crate::application::prepare_use_case::PipelineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "argument-folds",
    version,
    about = "Encode annotated argument pairs and build leave-one-file-out folds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args)  => run_prepare(args),
            Commands::Export(args)   => run_export(args),
            Commands::Baseline(args) => run_baseline(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let run = PrepareUseCase::new(args.into()).execute()?;
    println!(
        "Prepared {} folds, embedding table {} x {}.",
        run.folds.len(),
        run.embeddings.rows(),
        run.embeddings.dim()
    );
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    use crate::application::export_use_case::ExportUseCase;

    let config  = PipelineConfig::from(&args);
    let written = ExportUseCase::new(config, &args.output_dir).execute()?;
    println!("Exported {} folds to '{}'.", written, args.output_dir.display());
    Ok(())
}

fn run_baseline(args: BaselineArgs) -> Result<()> {
    use crate::application::baseline_use_case::BaselineUseCase;

    let config = PipelineConfig::from(&args);
    let lines  = BaselineUseCase::new(config, &args.output_file).execute()?;
    let correct = lines.iter().filter(|l| l.is_correct()).count();
    println!(
        "Baseline: {} of {} test instances correct, written to '{}'.",
        correct,
        lines.len(),
        args.output_file.display()
    );
    Ok(())
}
