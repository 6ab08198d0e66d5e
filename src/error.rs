use thiserror::Error;

#[derive(Error, Debug)]
pub enum LqError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid reference configuration for '{variable}': {reason}")]
    InvalidConfiguration { variable: String, reason: String },

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Row {row} is out of range (batch has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<LqError>,
    },
}

impl LqError {
    /// Field names carried by a `MissingFields` error, possibly nested in a row failure.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Self::MissingFields(fields) => Some(fields.as_slice()),
            Self::Row { source, .. } => source.missing_fields(),
            _ => None,
        }
    }
}

pub type LqResult<T> = Result<T, LqError>;
