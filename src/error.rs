use thiserror::Error;

/// Contract violations in a page returned by the charting backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("required column header not found: {name:?}")]
    MissingHeader { name: String },

    #[error("row {row} has no cell for column {column}")]
    MissingCell { row: usize, column: usize },
}
