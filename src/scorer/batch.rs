use super::engine::score_record;
use super::types::{CacMethod, RawRecord, ScoreResult};
use super::Scorer;
use crate::error::{LqError, LqResult};
use crate::variables::Variable;
use rayon::prelude::*;
use tracing::{debug, info};

/// Tabular input: one header shared by every row, cells kept as text so the
/// original columns can be echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A row of the input batch together with its result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub cells: Vec<String>,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredBatch {
    pub headers: Vec<String>,
    pub rows: Vec<ScoredRow>,
}

impl ScoredBatch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn mean_final_score(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|r| r.result.final_score).sum();
        Some(sum / self.rows.len() as f64)
    }
}

impl Batch {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Schema-level check, run before any row is scored.
    pub fn check_columns(&self) -> LqResult<()> {
        let missing: Vec<String> = Variable::all()
            .filter(|v| !self.headers.iter().any(|h| h == v.id()))
            .map(|v| v.id().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LqError::MissingColumns(missing))
        }
    }

    /// Converts row `idx` into a record. Empty cells are absent; anything
    /// else that does not parse as a number is rejected.
    pub fn record(&self, idx: usize) -> LqResult<RawRecord> {
        let cells = self.rows.get(idx).ok_or(LqError::RowOutOfRange {
            row: idx + 1,
            len: self.rows.len(),
        })?;
        let mut record = RawRecord::new();

        for variable in Variable::all() {
            let Some(col) = self.headers.iter().position(|h| h == variable.id()) else {
                continue;
            };
            let cell = cells.get(col).map(|s| s.trim()).unwrap_or("");
            if cell.is_empty() {
                record.set_null(variable.id());
                continue;
            }
            let value: f64 = cell.parse().map_err(|_| LqError::InvalidValue {
                field: variable.id().to_string(),
                value: cell.to_string(),
            })?;
            record.set(variable.id(), value);
        }
        Ok(record)
    }
}

/// Scores every row with one CAC method.
///
/// Output order matches input order. The first failing row (by position)
/// aborts the whole batch; its 1-based index is carried in `LqError::Row`.
pub fn score_batch(
    scorer: &Scorer,
    batch: &Batch,
    method: CacMethod,
    parallel: bool,
) -> LqResult<ScoredBatch> {
    batch.check_columns()?;

    info!(
        "Scoring {} rows (cac method: {}, parallel: {})",
        batch.len(),
        method,
        parallel
    );

    let score_row = |idx: usize| -> LqResult<ScoredRow> {
        let record = batch.record(idx).map_err(|e| row_error(idx, e))?;
        let result = score_record(scorer, &record, method).map_err(|e| row_error(idx, e))?;
        debug!(
            "Row {}: composite {:.2}, final {:.2}",
            idx + 1,
            result.composite,
            result.final_score
        );
        Ok(ScoredRow {
            cells: batch.rows[idx].clone(),
            result,
        })
    };

    let outcomes: Vec<LqResult<ScoredRow>> = if parallel {
        (0..batch.len()).into_par_iter().map(score_row).collect()
    } else {
        (0..batch.len()).map(score_row).collect()
    };
    // Sequential collect so the reported failure is the lowest row index.
    let rows = outcomes.into_iter().collect::<LqResult<Vec<_>>>()?;

    Ok(ScoredBatch {
        headers: batch.headers.clone(),
        rows,
    })
}

fn row_error(idx: usize, source: LqError) -> LqError {
    LqError::Row {
        row: idx + 1,
        source: Box::new(source),
    }
}
