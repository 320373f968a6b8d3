use sut_proxy_service::create_app;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default external engine host; no API key is attached to outbound calls.
const DEFAULT_ENGINE_URL: &str = "https://sut-engine.hunerai.com";

/// Initialize structured JSON tracing based on environment variables
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sut_proxy_service=debug,tower_http=debug".into());

    match log_format.as_str() {
        "pretty" => {
            // Human-readable logging for development
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            // Structured JSON logging for production
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let upstream =
        std::env::var("SUT_ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let app = create_app(upstream.clone());
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    let addr = listener.local_addr()?;

    info!("SUT Proxy Service starting on {}", addr);
    info!("Relaying to engine at {}", upstream);
    info!("Jsonize endpoint: POST http://{}/api/jsonize", addr);
    info!("Analyze endpoint: POST http://{}/api/analyze", addr);
    info!("Health check endpoint: http://{}/api/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
