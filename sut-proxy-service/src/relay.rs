//! Pass-through relay semantics.
//!
//! The relay imposes no schema of its own: any well-formed JSON body is
//! forwarded unmodified, an upstream non-2xx comes back with the same status
//! and body text so callers can still read validation payloads, and only
//! transport or malformed-body failures are converted into the uniform
//! `{error, details}` envelope with HTTP 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::service::AppState;

/// Longest raw-body excerpt carried in diagnostics and error details.
const EXCERPT_CHARS: usize = 500;

pub async fn relay_post(state: &AppState, path: &str, body: Value) -> Response {
    let url = format!("{}{}", state.upstream, path);
    info!("[proxy {}] calling {}", path, url);

    let upstream = match state.http.post(&url).json(&body).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("[proxy {}] request failed: {}", path, e);
            return proxy_error("Proxy error", &e.to_string());
        }
    };

    let status = translate_status(upstream.status());
    let text = match upstream.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("[proxy {}] failed to read body: {}", path, e);
            return proxy_error("Proxy error", &e.to_string());
        }
    };
    info!(
        "[proxy {}] upstream status {} body {}",
        path,
        status,
        excerpt(&text)
    );

    if !status.is_success() {
        // Status and body pass through verbatim; a 422 detail array must
        // reach the caller intact.
        return (status, text).into_response();
    }

    if text.trim().is_empty() {
        return proxy_error("Empty response", "API returned empty response");
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => (status, Json(data)).into_response(),
        Err(_) => proxy_error("Invalid JSON", excerpt(&text)),
    }
}

/// Health probes tolerate a quiet upstream: an empty or non-JSON body is
/// synthesized into `{status, message}` instead of an error.
pub async fn relay_health(state: &AppState) -> Response {
    let url = format!("{}/health", state.upstream);

    let upstream = match state.http.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("[proxy /health] request failed: {}", e);
            return proxy_error("Proxy error", &e.to_string());
        }
    };

    let status = translate_status(upstream.status());
    let text = match upstream.text().await {
        Ok(text) => text,
        Err(e) => return proxy_error("Proxy error", &e.to_string()),
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => (status, Json(data)).into_response(),
        Err(_) => {
            let synthesized = if status.is_success() { "ok" } else { "unknown" };
            Json(json!({
                "status": synthesized,
                "message": format!("upstream returned status {}", status.as_u16()),
            }))
            .into_response()
        }
    }
}

fn proxy_error(error: &str, details: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error, "details": details })),
    )
        .into_response()
}

// reqwest and axum may pin different http crate versions.
fn translate_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_is_char_boundary_safe() {
        let text = "Değil ".repeat(200);
        let cut = excerpt(&text);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS);
        assert!(text.starts_with(cut));

        assert_eq!(excerpt("short"), "short");
    }
}
