use super::normalize::{normalize_cac, normalize_fraction, normalize_z};
use super::types::{CacMethod, InputValues, NormalizedScores, RawRecord, ScoreResult};
use super::Scorer;
use crate::error::LqResult;
use crate::variables::{NormKind, Variable, VARIABLE_COUNT};
use tracing::warn;

pub const FINAL_MIN: f64 = 300.0;
pub const FINAL_MAX: f64 = 850.0;
const FINAL_SLOPE: f64 = 5.5;

/// Single-record pipeline: validate, normalize, aggregate.
pub fn score_record(
    scorer: &Scorer,
    record: &RawRecord,
    method: CacMethod,
) -> LqResult<ScoreResult> {
    let inputs = record.validate()?;
    warn_out_of_range(&inputs);
    let normalized = normalize_all(scorer, &inputs, method)?;
    Ok(aggregate(normalized))
}

/// Routes each variable through its normalizer.
pub fn normalize_all(
    scorer: &Scorer,
    inputs: &InputValues,
    method: CacMethod,
) -> LqResult<NormalizedScores> {
    let mut out = [0.0; VARIABLE_COUNT];
    for variable in Variable::all() {
        let x = inputs.get(variable);
        out[variable.index()] = match variable.kind() {
            NormKind::ZScore => {
                let params = scorer.reference.lookup(variable)?;
                normalize_z(variable, x, &params)?
            }
            NormKind::Cac => normalize_cac(x, method),
            NormKind::LinearFraction { max } => normalize_fraction(x, max),
        };
    }
    Ok(NormalizedScores(out))
}

/// Equal-weight composite and the 300-850 final score.
pub fn aggregate(normalized: NormalizedScores) -> ScoreResult {
    let composite = normalized.mean();
    ScoreResult {
        composite,
        final_score: final_score(composite),
        normalized,
    }
}

#[inline(always)]
pub fn final_score(composite: f64) -> f64 {
    (FINAL_MIN + FINAL_SLOPE * composite).clamp(FINAL_MIN, FINAL_MAX)
}

fn warn_out_of_range(inputs: &InputValues) {
    for variable in Variable::all() {
        let x = inputs.get(variable);
        if !variable.is_within_advisory_range(x) {
            warn!(
                "{} = {} is outside the expected range for {}",
                variable,
                x,
                variable.label()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fifty_composite() {
        let result = aggregate(NormalizedScores([50.0; VARIABLE_COUNT]));
        assert_eq!(result.composite, 50.0);
        assert_eq!(result.final_score, 575.0);
    }

    #[test]
    fn test_final_score_bounds() {
        assert_eq!(final_score(0.0), 300.0);
        assert_eq!(final_score(100.0), 850.0);
        assert_eq!(final_score(-10.0), 300.0);
        assert_eq!(final_score(120.0), 850.0);
    }

    #[test]
    fn test_composite_is_unweighted_mean() {
        let mut values = [0.0; VARIABLE_COUNT];
        values[Variable::Cac.index()] = 100.0;
        let result = aggregate(NormalizedScores(values));
        assert_eq!(result.composite, 5.0);
        assert_eq!(result.final_score, 327.5);
    }
}
