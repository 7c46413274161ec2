use std::net::SocketAddr;
use std::path::PathBuf;

use insights_core::{ClassifierConfig, ConfigError};
use posts_client::DEFAULT_POSTS_URL;

/// Runtime configuration for the HTTP service, read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the service binds to
    pub bind_addr: SocketAddr,
    /// Upstream endpoint the post batch is fetched from
    pub posts_url: String,
    /// Directory holding the prebuilt frontend bundle, if any
    pub static_dir: PathBuf,
    /// Anomaly heuristic thresholds
    pub classifier: ClassifierConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            posts_url: DEFAULT_POSTS_URL.to_string(),
            static_dir: PathBuf::from("public"),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("INSIGHTS_BIND_ADDR") {
            config.bind_addr = raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: "INSIGHTS_BIND_ADDR".to_string(),
                value: raw,
            })?;
        }
        if let Ok(url) = std::env::var("INSIGHTS_POSTS_URL") {
            config.posts_url = url;
        }
        if let Ok(dir) = std::env::var("INSIGHTS_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        config.classifier = ClassifierConfig::from_env()?;

        Ok(config)
    }
}
