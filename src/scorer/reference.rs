use crate::error::{LqError, LqResult};
use crate::variables::{NormKind, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a higher raw value is favourable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    #[inline(always)]
    pub fn sign(self) -> f64 {
        match self {
            Self::HigherIsBetter => 1.0,
            Self::LowerIsBetter => -1.0,
        }
    }
}

/// Population reference for one z-score variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefParams {
    pub mean: f64,
    pub sd: f64,
    pub direction: Direction,
}

impl RefParams {
    pub const fn new(mean: f64, sd: f64, direction: Direction) -> Self {
        Self {
            mean,
            sd,
            direction,
        }
    }
}

use Direction::{HigherIsBetter as UP, LowerIsBetter as DOWN};

const STANDARD_PARAMS: [(Variable, RefParams); 18] = [
    (Variable::Ogtt2h, RefParams::new(120.0, 35.0, DOWN)),
    (Variable::Apob, RefParams::new(90.0, 25.0, DOWN)),
    (Variable::Vo2max, RefParams::new(36.0, 8.0, UP)),
    (Variable::Crp, RefParams::new(1.5, 0.8, DOWN)),
    (Variable::Bmi, RefParams::new(26.0, 5.0, DOWN)),
    (Variable::Packyrs, RefParams::new(2.0, 5.0, DOWN)),
    (Variable::Moca, RefParams::new(27.0, 2.0, UP)),
    (Variable::Mvpa, RefParams::new(150.0, 75.0, UP)),
    (Variable::Hrv, RefParams::new(35.0, 15.0, UP)),
    (Variable::Phq9, RefParams::new(4.0, 4.0, DOWN)),
    (Variable::Alt, RefParams::new(25.0, 12.0, DOWN)),
    (Variable::Egfr, RefParams::new(95.0, 15.0, UP)),
    (Variable::BmdT, RefParams::new(-0.5, 1.0, UP)),
    (Variable::TruageDelta, RefParams::new(2.0, 5.0, DOWN)),
    (Variable::SmallHdl, RefParams::new(25.0, 5.0, UP)),
    (Variable::RemPct, RefParams::new(20.0, 5.0, UP)),
    (Variable::Grip, RefParams::new(38.0, 10.0, UP)),
    (Variable::Swls, RefParams::new(24.0, 6.0, UP)),
];

/// Read-only mapping from z-score variables to their reference parameters.
///
/// `cac` and `rpdqs` are normalized by dedicated rules and have no entry.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: HashMap<Variable, RefParams>,
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReferenceTable {
    /// The fixed LQ v1.1 reference population.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_PARAMS.into_iter().collect(),
        }
    }

    /// Builds a table from explicit entries. Parameters are checked lazily
    /// at normalization time, so a bad SD surfaces as `InvalidConfiguration`
    /// on the first record that needs it.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Variable, RefParams)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, variable: Variable) -> LqResult<RefParams> {
        self.entries
            .get(&variable)
            .copied()
            .ok_or_else(|| LqError::UnknownVariable(variable.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every z-score variable has a usable entry.
    pub fn validate(&self) -> LqResult<()> {
        for variable in Variable::all().filter(|v| v.kind() == NormKind::ZScore) {
            let params = self.lookup(variable)?;
            check_params(variable, &params)?;
        }
        Ok(())
    }
}

pub(crate) fn check_params(variable: Variable, params: &RefParams) -> LqResult<()> {
    if !params.sd.is_finite() || params.sd <= 0.0 {
        return Err(LqError::InvalidConfiguration {
            variable: variable.to_string(),
            reason: format!("standard deviation must be positive, got {}", params.sd),
        });
    }
    if !params.mean.is_finite() {
        return Err(LqError::InvalidConfiguration {
            variable: variable.to_string(),
            reason: format!("mean must be finite, got {}", params.mean),
        });
    }
    Ok(())
}
