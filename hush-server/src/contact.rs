use crate::error::ServerError;
use crate::inbox::{current_timestamp, ContactInbox};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use hush_content::{validate_contact, ContactReceipt, ContactRequest};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// `/api` routes: contact submission and health.
pub fn api_router(inbox: ContactInbox) -> Router {
    let api = Router::new()
        .route("/contact", post(submit_contact))
        .route("/health", get(health))
        .fallback(api_not_found)
        .with_state(inbox);
    Router::new().nest("/api", api)
}

/// API plus the built web bundle. Unknown non-API paths get `index.html`
/// so client-side routes load directly.
pub fn site_router(inbox: ContactInbox, dist: &Path) -> Router {
    let bundle = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));
    api_router(inbox)
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}

async fn submit_contact(
    State(inbox): State<ContactInbox>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactReceipt>), ServerError> {
    let request = request.trimmed();
    if let Err(err) = validate_contact(&request) {
        tracing::debug!(error = %err, "contact request rejected");
        return Err(err.into());
    }

    let id = tokio::task::spawn_blocking(move || inbox.record(&request, &current_timestamp())).await??;
    tracing::info!(id, "contact request stored");
    Ok((StatusCode::ACCEPTED, Json(ContactReceipt { id })))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn api_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
