//! # Webhook Server Module
//!
//! The HTTP face of the controller. One route accepts delivered envelopes
//! and always acknowledges with 200 — the delivery transport redelivers
//! anything it considers failed, and internal failures are already
//! contained and logged by the router. The body is taken as raw bytes so
//! even a non-UTF-8 delivery reaches the router's containment instead of
//! being rejected by the extractor.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

use crate::app::App;
use crate::bot;

/// Build the webhook router over the shared application state
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/webhook", post(webhook_handler))
        .with_state(app)
}

/// Accept one delivered envelope. Always 200, regardless of outcome.
async fn webhook_handler(State(app): State<Arc<App>>, body: Bytes) -> StatusCode {
    bot::handle_envelope(&app, &String::from_utf8_lossy(&body)).await;
    StatusCode::OK
}
