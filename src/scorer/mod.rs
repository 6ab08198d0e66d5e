pub mod batch;
pub mod engine;
pub mod loader;
pub mod normalize;
pub mod reference;
pub mod types;

pub use self::batch::{Batch, ScoredBatch, ScoredRow};
use self::reference::ReferenceTable;
pub use self::types::{CacMethod, FieldValue, NormalizedScores, RawRecord, ScoreResult};
use crate::error::LqResult;

/// The LQ scoring engine. Stateless apart from the read-only reference
/// table, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub reference: ReferenceTable,
}

impl Scorer {
    pub fn new(reference: ReferenceTable) -> Self {
        Self { reference }
    }

    /// Engine backed by the standard reference population.
    pub fn standard() -> Self {
        Self::new(ReferenceTable::standard())
    }

    pub fn score(&self, record: &RawRecord, method: CacMethod) -> LqResult<ScoreResult> {
        engine::score_record(self, record, method)
    }

    /// Row-wise scoring of a whole table, rows in parallel.
    pub fn score_batch(&self, batch: &Batch, method: CacMethod) -> LqResult<ScoredBatch> {
        batch::score_batch(self, batch, method, true)
    }

    pub fn score_batch_sequential(
        &self,
        batch: &Batch,
        method: CacMethod,
    ) -> LqResult<ScoredBatch> {
        batch::score_batch(self, batch, method, false)
    }
}
