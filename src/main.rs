use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lq::config::ScoringConfig;
use lq::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring options; explicit flags take precedence
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    scoring: ScoringConfig,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single record
    Score(cmd::score::ScoreArgs),
    /// Score every row of a CSV file
    Batch(cmd::batch::BatchArgs),
    /// Score the built-in example profiles
    Profiles,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing LQ scoring engine...");

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path.display());
            let mut file_config = ScoringConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load config: {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.scoring, &matches);
            file_config
        }
        None => cli.scoring.clone(),
    };

    let scorer = Scorer::standard();
    if let Err(e) = scorer.reference.validate() {
        error!("\n❌ FATAL ERROR INITIALIZING SCORER:");
        error!("   {}", e);
        process::exit(1);
    }
    let scorer = Arc::new(scorer);

    let outcome = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &config, scorer),
        Commands::Batch(args) => cmd::batch::run(args, &config, scorer),
        Commands::Profiles => cmd::profiles::run(&config, scorer),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
