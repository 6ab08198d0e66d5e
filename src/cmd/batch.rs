use crate::reports;
use clap::Args;
use lq::config::ScoringConfig;
use lq::error::LqResult;
use lq::scorer::loader::{load_batch_from_file, write_batch, write_batch_to_file};
use lq::scorer::Scorer;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV with one patient per row and the 20 inputs as columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the augmented CSV (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config: &ScoringConfig, scorer: Arc<Scorer>) -> LqResult<()> {
    let batch = load_batch_from_file(&args.input)?;

    let start = Instant::now();
    let scored = if config.sequential {
        scorer.score_batch_sequential(&batch, config.cac_method)?
    } else {
        scorer.score_batch(&batch, config.cac_method)?
    };
    info!(
        "✅ Scored {} rows in {:.2}ms",
        scored.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    match &args.output {
        Some(path) => write_batch_to_file(path, &scored)?,
        None => write_batch(io::stdout().lock(), &scored)?,
    }

    reports::print_batch_summary(&scored);
    Ok(())
}
