//! Upstream derivations that feed `mvpa` and `rem_pct`. These sit outside the
//! scoring engine: callers apply them before building a record.

use crate::error::{LqError, LqResult};

/// Weekly MVPA is capped here before scoring.
pub const MVPA_CAP: f64 = 1000.0;

/// MVPA (min/week) from wearable activity minutes. Medium-intensity minutes
/// count half.
pub fn mvpa_from_activity(high_minutes: f64, medium_minutes: f64) -> f64 {
    (high_minutes + 0.5 * medium_minutes).min(MVPA_CAP)
}

/// REM sleep as a percentage of total sleep time.
pub fn rem_percent(rem_minutes: f64, total_sleep_minutes: f64) -> LqResult<f64> {
    if !total_sleep_minutes.is_finite() || total_sleep_minutes <= 0.0 {
        return Err(LqError::InvalidValue {
            field: "total_sleep_minutes".to_string(),
            value: total_sleep_minutes.to_string(),
        });
    }
    Ok(100.0 * rem_minutes / total_sleep_minutes)
}
