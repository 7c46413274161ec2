pub mod classifier;
pub mod config;
pub mod error;
pub mod lexical;
pub mod summary;
pub mod types;

pub use classifier::find_anomalies;
pub use config::ClassifierConfig;
pub use error::{ConfigError, FetchError, InsightsError};
pub use summary::build_summary;
pub use types::{AuthorSummary, Finding, Post, Summary};
