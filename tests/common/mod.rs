#![allow(dead_code)]

use lq::scorer::{Batch, RawRecord};
use lq::variables::Variable;

/// Every z-score input sits on its reference mean, CAC is zero and the
/// diet score is at half scale.
pub fn reference_record() -> RawRecord {
    RecordBuilder::new()
        .set(Variable::Ogtt2h, 120.0)
        .set(Variable::Apob, 90.0)
        .set(Variable::Vo2max, 36.0)
        .set(Variable::Crp, 1.5)
        .set(Variable::Bmi, 26.0)
        .set(Variable::Packyrs, 2.0)
        .set(Variable::Moca, 27.0)
        .set(Variable::Mvpa, 150.0)
        .set(Variable::Cac, 0.0)
        .set(Variable::Hrv, 35.0)
        .set(Variable::Phq9, 4.0)
        .set(Variable::Alt, 25.0)
        .set(Variable::Egfr, 95.0)
        .set(Variable::BmdT, -0.5)
        .set(Variable::TruageDelta, 2.0)
        .set(Variable::SmallHdl, 25.0)
        .set(Variable::RemPct, 20.0)
        .set(Variable::Grip, 38.0)
        .set(Variable::Swls, 24.0)
        .set(Variable::Rpdqs, 26.0)
        .build()
}

/// Builder for RawRecord to clean up tests
pub struct RecordBuilder {
    record: RawRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record: RawRecord::new(),
        }
    }

    pub fn from(record: RawRecord) -> Self {
        Self { record }
    }

    pub fn set(mut self, variable: Variable, value: f64) -> Self {
        self.record.set(variable.id(), value);
        self
    }

    pub fn without(mut self, variable: Variable) -> Self {
        self.record.remove(variable.id());
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}

/// CSV text for the given records, columns in canonical order plus a leading `id`.
pub fn batch_csv(records: &[(&str, RawRecord)]) -> String {
    let mut out = String::from("id");
    for v in Variable::all() {
        out.push(',');
        out.push_str(v.id());
    }
    out.push('\n');

    for (id, record) in records {
        out.push_str(id);
        for v in Variable::all() {
            out.push(',');
            if let Some(x) = record.value(v) {
                out.push_str(&x.to_string());
            }
        }
        out.push('\n');
    }
    out
}

pub fn batch_of(records: &[(&str, RawRecord)]) -> Batch {
    let mut headers = vec!["id".to_string()];
    headers.extend(Variable::all().map(|v| v.id().to_string()));
    let mut batch = Batch::new(headers);
    for (id, record) in records {
        let mut cells = vec![id.to_string()];
        cells.extend(
            Variable::all().map(|v| record.value(v).map(|x| x.to_string()).unwrap_or_default()),
        );
        batch.push_row(cells);
    }
    batch
}
