use insights_core::InsightsError;
use web_service::ServiceConfig;

#[tokio::main]
async fn main() -> Result<(), InsightsError> {
    tracing_subscriber::fmt()
        .with_env_filter("ad_insights=debug,web_service=debug,posts_client=debug")
        .init();

    tracing::info!("Starting Ad Insights Explorer");

    let config = ServiceConfig::from_env()?;
    let router = web_service::build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
