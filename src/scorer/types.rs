use crate::error::{LqError, LqResult};
use crate::variables::{Variable, VARIABLE_COUNT};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Coronary calcium normalization method, fixed for a whole scoring call.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CacMethod {
    /// Normal CDF of the log-distance from 100 Agatston units.
    #[default]
    Ln,
    /// Linear segments with breakpoints at 0, 100 and 400.
    Piecewise,
}

/// A single cell of a record: a number, or any other JSON value carried
/// through untouched (ids, notes, flags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Other(_) => None,
        }
    }
}

/// One caller-supplied record: identifier -> value, `None` when absent/null.
///
/// Keys other than the 20 scored identifiers may hold any JSON value and are
/// kept so they can be echoed back with the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    values: BTreeMap<String, Option<FieldValue>>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.values.insert(key.into(), Some(FieldValue::Number(value)));
        self
    }

    /// Stores a non-numeric value as-is.
    pub fn set_other(&mut self, key: impl Into<String>, value: serde_json::Value) -> &mut Self {
        self.values.insert(key.into(), Some(FieldValue::Other(value)));
        self
    }

    pub fn with(mut self, variable: Variable, value: f64) -> Self {
        self.set(variable.id(), value);
        self
    }

    pub fn set_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), None);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Option<FieldValue>> {
        self.values.remove(key)
    }

    /// Numeric value under `key`; `None` when absent, null or non-numeric.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key)?.as_ref()?.as_f64()
    }

    pub fn get_field(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)?.as_ref()
    }

    pub fn value(&self, variable: Variable) -> Option<f64> {
        self.get(variable.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn from_json_str(s: &str) -> LqResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Completeness check. Lists every absent or null identifier in canonical
    /// order, then rejects scored values that are non-numeric or non-finite.
    pub fn validate(&self) -> LqResult<InputValues> {
        let mut values = [0.0; VARIABLE_COUNT];
        let mut missing = Vec::new();
        let mut invalid = None;

        for variable in Variable::all() {
            match self.get_field(variable.id()) {
                Some(FieldValue::Number(v)) if v.is_finite() => values[variable.index()] = *v,
                Some(FieldValue::Number(v)) => {
                    invalid.get_or_insert_with(|| (variable, v.to_string()));
                }
                Some(FieldValue::Other(other)) => {
                    invalid.get_or_insert_with(|| (variable, other.to_string()));
                }
                None => missing.push(variable.id().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(LqError::MissingFields(missing));
        }

        if let Some((variable, value)) = invalid {
            return Err(LqError::InvalidValue {
                field: variable.id().to_string(),
                value,
            });
        }

        Ok(InputValues(values))
    }
}

impl FromIterator<(Variable, f64)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (Variable, f64)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (variable, value) in iter {
            record.set(variable.id(), value);
        }
        record
    }
}

/// A complete, finite set of the 20 raw values in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputValues(pub [f64; VARIABLE_COUNT]);

impl InputValues {
    #[inline(always)]
    pub fn get(&self, variable: Variable) -> f64 {
        self.0[variable.index()]
    }
}

/// Per-variable scores in [0,100], canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedScores(pub [f64; VARIABLE_COUNT]);

impl NormalizedScores {
    #[inline(always)]
    pub fn get(&self, variable: Variable) -> f64 {
        self.0[variable.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        Variable::all().map(move |v| (v, self.get(v)))
    }

    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / VARIABLE_COUNT as f64
    }
}

impl Serialize for NormalizedScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(VARIABLE_COUNT))?;
        for (variable, value) in self.iter() {
            map.serialize_entry(&variable.normalized_key(), &value)?;
        }
        map.end()
    }
}

/// Outcome of scoring one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub composite: f64,
    pub final_score: f64,
    #[serde(flatten)]
    pub normalized: NormalizedScores,
}
