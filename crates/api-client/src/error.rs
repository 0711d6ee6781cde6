use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to complete the HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Symbol could not be resolved: {0}")]
    InvalidSymbol(String),

    #[error("The API request returned an error: {0}")]
    Api(String),

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid data format from provider: {0}")]
    InvalidData(String),

    #[error("Failed to read price data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV price data: {0}")]
    Csv(#[from] csv::Error),
}
