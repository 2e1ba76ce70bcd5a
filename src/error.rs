use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid UTM string format: {0}")]
    InvalidFormat(String),

    #[error("{field} out of range: {value} (must be between {min} and {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid UTM zone: {0}")]
    InvalidZone(String),

    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    #[error("Column '{name}' has {actual} values but the table has {expected} rows")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row has {actual} cells but the table has {expected} columns")]
    RowLengthMismatch { expected: usize, actual: usize },

    #[error("Coordinate validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
