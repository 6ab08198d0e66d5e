use crate::scorer::RawRecord;
use crate::variables::Variable;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Night length the example REM minutes are expressed against.
const EXAMPLE_TST_MINUTES: f64 = 420.0;

/// Built-in example patients.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Profile {
    Typical,
    HighPerformer,
}

impl Profile {
    pub fn record(&self) -> RawRecord {
        use Variable::*;

        let (values, rem_minutes) = match self {
            Self::Typical => (
                [
                    (Ogtt2h, 152.0),
                    (Apob, 107.0),
                    (Vo2max, 34.0),
                    (Crp, 2.0),
                    (Bmi, 29.6),
                    (Packyrs, 0.0),
                    (Moca, 25.0),
                    (Mvpa, 112.5),
                    (Cac, 98.0),
                    (Hrv, 47.0),
                    (Phq9, 7.0),
                    (Alt, 42.0),
                    (Egfr, 82.0),
                    (BmdT, -1.2),
                    (TruageDelta, 2.0),
                    (SmallHdl, 10.2),
                    (Grip, 38.0),
                    (Swls, 26.0),
                    (Rpdqs, 35.0),
                ],
                52.0,
            ),
            Self::HighPerformer => (
                [
                    (Ogtt2h, 85.0),
                    (Apob, 60.0),
                    (Vo2max, 55.0),
                    (Crp, 0.4),
                    (Bmi, 22.5),
                    (Packyrs, 0.0),
                    (Moca, 29.0),
                    (Mvpa, 300.0),
                    (Cac, 0.0),
                    (Hrv, 75.0),
                    (Phq9, 0.0),
                    (Alt, 18.0),
                    (Egfr, 110.0),
                    (BmdT, 1.0),
                    (TruageDelta, -5.0),
                    (SmallHdl, 40.0),
                    (Grip, 55.0),
                    (Swls, 33.0),
                    (Rpdqs, 48.0),
                ],
                120.0,
            ),
        };

        let mut record: RawRecord = values.into_iter().collect();
        record.set(RemPct.id(), 100.0 * rem_minutes / EXAMPLE_TST_MINUTES);
        record
    }
}

pub fn get_all_profiles() -> Vec<(Profile, RawRecord)> {
    Profile::iter().map(|p| (p, p.record())).collect()
}
