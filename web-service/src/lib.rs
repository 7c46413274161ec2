mod config;
pub mod handlers;

pub use config::ServiceConfig;

use std::path::PathBuf;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use insights_core::ClassifierConfig;
use posts_client::PostsClient;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

// Dev frontend origins allowed through CORS.
const ALLOWED_ORIGINS: [&str; 2] = ["http://127.0.0.1:5173", "http://localhost:5173"];

#[derive(Clone)]
pub struct AppState {
    pub client: PostsClient,
    pub classifier: ClassifierConfig,
    pub static_dir: PathBuf,
}

/// Build the service router: three read-only endpoints over the engine,
/// plus static assets when a frontend bundle is present. Each request
/// fetches its own batch; no state is shared across requests beyond the
/// client and thresholds.
pub fn build_router(config: &ServiceConfig) -> Router {
    let state = AppState {
        client: PostsClient::new(config.posts_url.clone()),
        classifier: config.classifier.clone(),
        static_dir: config.static_dir.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.parse::<HeaderValue>().expect("static origin")),
        ))
        .allow_methods([Method::GET]);

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/posts", get(handlers::list_posts))
        .route("/anomalies", get(handlers::list_anomalies))
        .route("/summary", get(handlers::get_summary));

    if config.static_dir.is_dir() {
        info!("Serving static assets from {}", config.static_dir.display());
        router = router.nest_service("/static", ServeDir::new(&config.static_dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
