//! Server-side proxy for the Vendoo API
//!
//! The browser talks to `/auth/*` and `/api/*` on its own origin. Those
//! requests are forwarded upstream with method, query, body and the
//! `Authorization` header intact, and the upstream response is relayed back.

use axum::{
    Router,
    body::{Body, Bytes},
    extract::{OriginalUri, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    response::Response,
    routing::any,
};
use serde::Serialize;
use std::sync::Arc;

use super::config::Config;

/// Shared state of the proxy routes
#[derive(Clone)]
pub struct ProxyState {
    config: Config,
    client: reqwest::Client,
}

impl ProxyState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create the API proxy router
pub fn api_proxy_router(config: Config) -> Router {
    let state = Arc::new(ProxyState::new(config));

    Router::new()
        .route("/auth/{*path}", any(proxy_handler))
        .route("/api/{*path}", any(proxy_handler))
        .with_state(state)
}

async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let url = state.config.upstream_url(path_and_query);

    tracing::debug!("Proxying {} {}", method, url);

    let mut request = state.client.request(method.clone(), &url);
    for name in [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to reach Vendoo API at {}: {}", url, e);
            return error_response(StatusCode::BAD_GATEWAY, "Unable to reach Vendoo Server");
        }
    };

    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();

    match response.bytes().await {
        Ok(bytes) => {
            if !status.is_success() {
                tracing::warn!("Vendoo API answered {} {} with {}", method, url, status);
            }
            relay(status, content_type, bytes)
        }
        Err(e) => {
            tracing::error!("Failed to read Vendoo API response: {}", e);
            error_response(
                StatusCode::BAD_GATEWAY,
                &format!("Failed to read response: {}", e),
            )
        }
    }
}

fn relay(status: StatusCode, content_type: Option<HeaderValue>, body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    response
}

/// Create an error response
fn error_response(status: StatusCode, message: &str) -> Response {
    let body = serde_json::to_string(&ErrorResponse {
        error: message.to_string(),
    })
    .unwrap_or_else(|_| String::from("{}"));

    relay(
        status,
        Some(HeaderValue::from_static("application/json")),
        Bytes::from(body),
    )
}
