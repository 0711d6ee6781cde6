use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Provider error: {0}")]
    Provider(#[from] api_client::error::ApiError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write or read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("The export contains no result row")]
    Empty,
}
