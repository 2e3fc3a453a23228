use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderDeskError>;

#[derive(Debug, Error)]
pub enum OrderDeskError {
    #[error("Failed to fetch submissions: {0}")]
    FetchFailure(#[source] Box<OrderDeskError>),

    #[error("Provider responded with status {status}")]
    UnexpectedStatus { status: u16 },

    #[cfg(feature = "http-provider")]
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}

impl OrderDeskError {
    /// Wraps a provider error as a fetch failure
    pub fn fetch_failure(cause: OrderDeskError) -> Self {
        match cause {
            already @ Self::FetchFailure(_) => already,
            other => Self::FetchFailure(Box::new(other)),
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure(_))
    }
}
