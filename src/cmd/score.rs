use crate::reports;
use clap::{ArgGroup, Args};
use lq::config::ScoringConfig;
use lq::derive::{mvpa_from_activity, rem_percent};
use lq::error::{LqError, LqResult};
use lq::profiles::Profile;
use lq::scorer::{RawRecord, Scorer};
use lq::variables::Variable;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "profile"])))]
pub struct ScoreArgs {
    /// JSON object with the 20 inputs
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Score a built-in example patient
    #[arg(short, long, value_enum)]
    pub profile: Option<Profile>,

    /// Wearable high-intensity minutes/week (derives mvpa)
    #[arg(long, requires = "mvpa_medium")]
    pub mvpa_high: Option<f64>,

    /// Wearable medium-intensity minutes/week (derives mvpa)
    #[arg(long, requires = "mvpa_high")]
    pub mvpa_medium: Option<f64>,

    /// REM minutes per night (derives rem_pct)
    #[arg(long, requires = "total_sleep_minutes")]
    pub rem_minutes: Option<f64>,

    /// Total sleep time in minutes (derives rem_pct)
    #[arg(long, requires = "rem_minutes")]
    pub total_sleep_minutes: Option<f64>,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, config: &ScoringConfig, scorer: Arc<Scorer>) -> LqResult<()> {
    let (name, record) = build_record(&args)?;

    info!("🧮 Scoring '{}' (cac method: {})", name, config.cac_method);
    let result = scorer.score(&record, config.cac_method)?;

    if args.json {
        let output = serde_json::json!({
            "inputs": record,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        reports::print_record_report(&name, &record, &result);
    }
    Ok(())
}

fn build_record(args: &ScoreArgs) -> LqResult<(String, RawRecord)> {
    let (name, mut record) = match args.profile {
        Some(profile) => (profile.to_string(), profile.record()),
        None => {
            let Some(path) = args.input.as_deref() else {
                return Err(LqError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "either --input or --profile is required",
                )));
            };
            info!("📂 Loading record from: {}", path.display());
            let content = fs::read_to_string(path)?;
            (path.display().to_string(), RawRecord::from_json_str(&content)?)
        }
    };

    if let (Some(high), Some(medium)) = (args.mvpa_high, args.mvpa_medium) {
        let mvpa = mvpa_from_activity(high, medium);
        info!("Computed MVPA = {:.1}", mvpa);
        record.set(Variable::Mvpa.id(), mvpa);
    }

    if let (Some(rem), Some(tst)) = (args.rem_minutes, args.total_sleep_minutes) {
        let pct = rem_percent(rem, tst)?;
        info!("Computed REM% = {:.1}%", pct);
        record.set(Variable::RemPct.id(), pct);
    }

    Ok((name, record))
}
