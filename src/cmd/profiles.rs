use crate::reports;
use lq::config::ScoringConfig;
use lq::error::LqResult;
use lq::profiles::get_all_profiles;
use lq::scorer::Scorer;
use std::sync::Arc;

pub fn run(config: &ScoringConfig, scorer: Arc<Scorer>) -> LqResult<()> {
    let mut results = Vec::new();
    for (profile, record) in get_all_profiles() {
        let result = scorer.score(&record, config.cac_method)?;
        results.push((profile.to_string(), result));
    }

    results.sort_by(|a, b| b.1.final_score.total_cmp(&a.1.final_score));
    reports::print_comparison_report(&results);
    Ok(())
}
