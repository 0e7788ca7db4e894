use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading or writing file \"{file}\": {source}")]
    FileIo { file: String, source: BoxError },

    #[error("Error parsing hit table row {row} in \"{origin}\": {source}")]
    ParseTable {
        origin: String,
        row: usize,
        source: BoxError,
    },

    #[error("Error parsing record {idx} in \"{origin}\": {source}")]
    ParseRecord {
        origin: String,
        idx: usize,
        source: BoxError,
    },

    #[error("Cannot parse \"{value}\" as a number for field \"{field}\" in hit table row {row}")]
    ParseValue {
        field: String,
        value: String,
        row: usize,
    },

    #[error("Invalid field name \"{string}\" in output format \"{context}\"")]
    InvalidField { string: String, context: String },

    #[error("Output format \"{outfmt}\" does not name the required field \"{field}\"")]
    MissingField { field: &'static str, outfmt: String },

    #[error("Output format names {expected} columns, but the hit table has {found} columns")]
    ColumnMismatch { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
