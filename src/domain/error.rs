use thiserror::Error;

/// Errors raised by the grid engines.
///
/// Not finding something (no path, no words) is never an error; those
/// come back as `None` or an empty collection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
