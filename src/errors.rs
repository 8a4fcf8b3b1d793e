use astra::Response;
use std::fmt;

/// Errors originating from either the server logic (routing, missing
/// resources) or the report pipeline (dataset loading, chart rendering).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    /// The CSV header is missing an expected column. Raised once at load
    /// time so a renamed column fails with its name instead of deep inside
    /// an aggregation.
    MissingColumn(String),
    CsvError(String),
    EmptyDataset,
    ChartError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::MissingColumn(name) => {
                write!(f, "Dataset is missing expected column '{name}'")
            }
            ServerError::CsvError(msg) => write!(f, "CSV Error: {msg}"),
            ServerError::EmptyDataset => write!(f, "Dataset contains no rows"),
            ServerError::ChartError(msg) => write!(f, "Chart Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
