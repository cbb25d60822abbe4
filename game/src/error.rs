use thiserror::Error;

/// Problems with level data.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid tile csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid level metadata: {0}")]
    Metadata(#[from] serde_json::Error),
    #[error("unknown tile {text:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, text: String },
    #[error("level has no cells ({width}x{height})")]
    ZeroSized { width: usize, height: usize },
}
