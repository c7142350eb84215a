use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("No rows found in {source_name}")]
    EmptyInput { source_name: String },

    #[error("Invalid {field} for record {record_id}: '{value}'")]
    InvalidCoordinate {
        record_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Cannot partition {points} points into {k} clusters")]
    ClusterCountMismatch { k: usize, points: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
