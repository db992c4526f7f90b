use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use service::review::ReviewService;

/// Static shared secret injected at startup. A single process-wide key, not a
/// token or session system.
#[derive(Clone)]
pub struct ApiKey(pub String);

#[derive(Clone)]
pub struct ServerState {
    pub reviews: Arc<ReviewService>,
    pub api_key: Arc<ApiKey>,
}

/// Middleware: require `Authorization: Bearer <key>` matching the configured
/// secret. A missing header or mismatched key short-circuits with 401 before
/// any handler runs.
pub async fn require_bearer(
    State(key): State<Arc<ApiKey>>,
    req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v));

    match presented {
        Some(candidate) if candidate.as_bytes() == key.0.as_bytes() => next.run(req).await,
        _ => {
            debug!(path = %req.uri().path(), "rejected request without valid bearer key");
            (StatusCode::UNAUTHORIZED, "Unauthorized.").into_response()
        }
    }
}
