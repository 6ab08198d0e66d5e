use super::batch::{Batch, ScoredBatch};
use crate::error::LqResult;
use crate::variables::Variable;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Reads a headered CSV into a `Batch`. Headers and cells are trimmed;
/// rows with a different cell count than the header are rejected by the reader.
pub fn load_batch<R: Read>(reader: R) -> LqResult<Batch> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut batch = Batch::new(headers);

    for result in rdr.records() {
        let rec = result?;
        batch.push_row(rec.iter().map(str::to_string).collect());
    }

    debug!(
        "Loaded batch: {} columns, {} rows",
        batch.headers.len(),
        batch.len()
    );
    Ok(batch)
}

pub fn load_batch_from_file<P: AsRef<Path>>(path: P) -> LqResult<Batch> {
    let path = path.as_ref();
    info!("📂 Loading batch from: {}", path.display());
    let file = File::open(path)?;
    load_batch(file)
}

/// Header of the augmented output: original columns, then the result columns.
pub fn output_headers(input_headers: &[String]) -> Vec<String> {
    let mut headers = input_headers.to_vec();
    headers.push("composite".to_string());
    headers.push("final_score".to_string());
    headers.extend(Variable::all().map(Variable::normalized_key));
    headers
}

pub fn write_batch<W: Write>(writer: W, scored: &ScoredBatch) -> LqResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(output_headers(&scored.headers))?;

    for row in &scored.rows {
        let mut record = row.cells.clone();
        record.push(row.result.composite.to_string());
        record.push(row.result.final_score.to_string());
        record.extend(row.result.normalized.iter().map(|(_, v)| v.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_batch_to_file<P: AsRef<Path>>(path: P, scored: &ScoredBatch) -> LqResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_batch(file, scored)?;
    info!("💾 Wrote {} scored rows to {}", scored.len(), path.display());
    Ok(())
}
