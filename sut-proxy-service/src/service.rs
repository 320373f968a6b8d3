use axum::{
    Router,
    extract::{Json, State},
    response::Response,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::relay;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: String,
}

pub fn create_app(upstream: impl Into<String>) -> Router {
    let state = AppState {
        http: reqwest::Client::new(),
        upstream: upstream.into(),
    };
    build_router(state)
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/jsonize", post(jsonize))
        .route("/api/analyze", post(analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "SUT Proxy Service",
        "version": "1.0.0",
        "description": "Relays workbench requests to the SUT engine, avoiding browser CORS restrictions",
        "endpoints": {
            "POST /api/jsonize": "Extract structured fields from free report text",
            "POST /api/analyze": "Evaluate a structured report for SUT compliance",
            "GET /api/health": "Engine health check"
        }
    }))
}

async fn jsonize(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    relay::relay_post(&state, "/jsonize", body).await
}

async fn analyze(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    relay::relay_post(&state, "/analyze", body).await
}

async fn health(State(state): State<AppState>) -> Response {
    relay::relay_health(&state).await
}
