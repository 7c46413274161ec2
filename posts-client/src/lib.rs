use std::time::Duration;

use insights_core::{FetchError, InsightsError, Post};
use reqwest::Client;
use tracing::{debug, error, info};

/// Upstream endpoint serving the post batch.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

const USER_AGENT: &str = concat!("ad-insights/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch collaborator: one GET against a fixed endpoint, returning the
/// whole decoded batch or an explicit error. No retries, no pagination,
/// no caching.
#[derive(Debug, Clone)]
pub struct PostsClient {
    http_client: Client,
    posts_url: String,
}

impl PostsClient {
    pub fn new(posts_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            posts_url: posts_url.into(),
        }
    }

    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>, InsightsError> {
        debug!("Fetching post batch from {}", self.posts_url);

        let response = match self.http_client.get(&self.posts_url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Network error for {}: {}", self.posts_url, e);
                if e.is_timeout() {
                    return Err(FetchError::RequestTimeout.into());
                }
                return Err(InsightsError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Upstream returned {} for {}", status, self.posts_url);
            return Err(FetchError::UpstreamStatus {
                status_code: status.as_u16(),
                endpoint: self.posts_url.clone(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(InsightsError::Network)?;
        let posts = decode_batch(&body, &self.posts_url)?;
        info!("Fetched {} posts from {}", posts.len(), self.posts_url);
        Ok(posts)
    }
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new(DEFAULT_POSTS_URL)
    }
}

/// Decode the upstream JSON array. A record missing a required field
/// rejects the whole batch rather than being silently skipped.
fn decode_batch(body: &[u8], endpoint: &str) -> Result<Vec<Post>, FetchError> {
    serde_json::from_slice(body).map_err(|e| {
        error!("Failed to parse post batch from {}: {}", endpoint, e);
        FetchError::MalformedBatch {
            endpoint: endpoint.to_string(),
            details: e.to_string(),
        }
    })
}
