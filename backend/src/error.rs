use thiserror::Error;

/// Every failure the dashboard backend reports.
///
/// Handlers never retry; they log the error and turn its message into a JSON
/// `error` field.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Dataset not found: {0}")]
    NotFound(i64),

    #[error("The CSV file is empty or has no headers")]
    EmptyFile,

    #[error("Row on line {line} has {found} fields, expected {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(
        "Failed writing row chunk {chunk_index} of dataset {dataset_id} after {rows_written} rows; creation rolled back: {message}"
    )]
    PartialWrite {
        dataset_id: i64,
        chunk_index: usize,
        rows_written: usize,
        message: String,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Upload error: {0}")]
    Multipart(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// Errors caused by what the client sent rather than by the server.
    ///
    /// CSV is only read from uploaded bytes held in memory, so a `Csv` error
    /// always means the file itself is unreadable (bad UTF-8, broken quoting).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DashboardError::EmptyFile
                | DashboardError::MalformedRow { .. }
                | DashboardError::InvalidRequest(_)
                | DashboardError::Multipart(_)
                | DashboardError::Csv(_)
        )
    }
}

impl From<actix_multipart::MultipartError> for DashboardError {
    fn from(value: actix_multipart::MultipartError) -> Self {
        Self::Multipart(value.to_string())
    }
}

impl From<actix_web::error::BlockingError> for DashboardError {
    fn from(value: actix_web::error::BlockingError) -> Self {
        Self::Internal(value.to_string())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
