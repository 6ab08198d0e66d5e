use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Number of scored inputs. The composite is the mean over exactly this many values.
pub const VARIABLE_COUNT: usize = 20;

/// Prefix used for normalized columns in results and batch output.
pub const NORMALIZED_PREFIX: &str = "N_";

/// The 20 fixed inputs of the Longevity Quotient, in canonical order.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    #[strum(serialize = "ogtt_2h")]
    #[serde(rename = "ogtt_2h")]
    Ogtt2h,
    Apob,
    Vo2max,
    Crp,
    Bmi,
    Packyrs,
    Moca,
    Mvpa,
    Cac,
    Hrv,
    Phq9,
    Alt,
    Egfr,
    BmdT,
    TruageDelta,
    SmallHdl,
    RemPct,
    Grip,
    Swls,
    Rpdqs,
}

/// How a variable is mapped onto the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormKind {
    /// Reference mean/SD/direction through the normal CDF.
    ZScore,
    /// Coronary calcium, method selected per call.
    Cac,
    /// Bounded screener score rescaled linearly against its maximum.
    LinearFraction { max: f64 },
}

/// Upper bound of the rPDQS diet-quality screener.
pub const RPDQS_MAX: f64 = 52.0;

impl Variable {
    /// Identifiers in canonical order.
    pub fn all() -> impl Iterator<Item = Variable> {
        Variable::iter()
    }

    /// Position in canonical order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case identifier used in records, CSV headers and JSON.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Namespaced key for the normalized value, e.g. `N_apob`.
    pub fn normalized_key(self) -> String {
        format!("{}{}", NORMALIZED_PREFIX, self.id())
    }

    pub fn kind(self) -> NormKind {
        match self {
            Self::Cac => NormKind::Cac,
            Self::Rpdqs => NormKind::LinearFraction { max: RPDQS_MAX },
            _ => NormKind::ZScore,
        }
    }

    /// Human-readable label with units.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ogtt2h => "2-hour OGTT (mg/dL)",
            Self::Apob => "ApoB (mg/dL)",
            Self::Vo2max => "VO₂max (mL/kg/min)",
            Self::Crp => "CRP (mg/L)",
            Self::Bmi => "BMI",
            Self::Packyrs => "Pack-years",
            Self::Moca => "MoCA (0–30)",
            Self::Mvpa => "MVPA (min/week)",
            Self::Cac => "CAC (Agatston)",
            Self::Hrv => "HRV (ms)",
            Self::Phq9 => "PHQ-9 (0–27)",
            Self::Alt => "ALT (U/L)",
            Self::Egfr => "eGFR (mL/min/1.73m²)",
            Self::BmdT => "BMD T-score",
            Self::TruageDelta => "Epigenetic age delta (yrs)",
            Self::SmallHdl => "Small HDL (μmol/L)",
            Self::RemPct => "REM sleep (% TST)",
            Self::Grip => "Grip (kg)",
            Self::Swls => "SWLS (5–35)",
            Self::Rpdqs => "rPDQS (0–52)",
        }
    }

    /// Range callers are expected to respect. The engine only warns outside it;
    /// `None` means the variable has no natural bound beyond being non-negative
    /// or unbounded (T-score, age delta).
    pub fn advisory_range(self) -> Option<(f64, f64)> {
        match self {
            Self::Moca => Some((0.0, 30.0)),
            Self::Phq9 => Some((0.0, 27.0)),
            Self::RemPct => Some((0.0, 100.0)),
            Self::Swls => Some((5.0, 35.0)),
            Self::Rpdqs => Some((0.0, RPDQS_MAX)),
            Self::BmdT | Self::TruageDelta => None,
            _ => Some((0.0, f64::INFINITY)),
        }
    }

    pub fn is_within_advisory_range(self, value: f64) -> bool {
        match self.advisory_range() {
            Some((lo, hi)) => value >= lo && value <= hi,
            None => true,
        }
    }
}
