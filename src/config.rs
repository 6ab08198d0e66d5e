use crate::error::LqResult;
use crate::scorer::CacMethod;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-run scoring options. Applied uniformly to every record of a call.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// CAC normalization method
    #[arg(global = true, long, value_enum, default_value_t = CacMethod::Ln)]
    pub cac_method: CacMethod,

    /// Score batch rows on a single thread
    #[arg(global = true, long, default_value_t = false)]
    pub sequential: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cac_method: CacMethod::Ln,
            sequential: false,
        }
    }
}

impl ScoringConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LqResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays options the user typed explicitly; defaults never override
    /// values loaded from a file.
    pub fn merge_from_cli(&mut self, cli: &ScoringConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(cac_method, "cac_method");
        update_if_present!(sequential, "sequential");
    }
}
