use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Upstream returned status {status_code} for {endpoint}")]
    UpstreamStatus { status_code: u16, endpoint: String },

    #[error("Malformed post batch from {endpoint}: {details}")]
    MalformedBatch { endpoint: String, details: String },

    #[error("Request timeout")]
    RequestTimeout,
}

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl InsightsError {
    /// True when the failure came from the upstream fetch rather than
    /// this service, so callers can surface it as a gateway error.
    pub fn is_upstream(&self) -> bool {
        matches!(self, InsightsError::Fetch(_) | InsightsError::Network(_))
    }
}
