//! Procedure Routes
//!
//! The two action endpoints. Each invokes one zero-argument stored
//! procedure and, on success, answers 303 See Other pointing at
//! `/order_items` so the client re-fetches via GET. The failure
//! presentation differs between the two endpoints (templated error page
//! vs. plain text); that asymmetry is intentional and matched by tests.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::post;
use axum::Router;

use super::responses::{
    procedure_failure_page, procedure_failure_text, PROCEDURE_REDIRECT_TARGET,
};
use super::server::AppState;

/// Create the procedure routes (nested under `/api`)
pub fn procedure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/delete-all-order-items", post(delete_all_order_items_handler))
        .route("/reset-database", post(reset_database_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn delete_all_order_items_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.delete_all_order_items().await {
        Ok(()) => Redirect::to(PROCEDURE_REDIRECT_TARGET).into_response(),
        Err(err) => procedure_failure_page("/api/delete-all-order-items", &err),
    }
}

async fn reset_database_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.reset_database().await {
        Ok(()) => Redirect::to(PROCEDURE_REDIRECT_TARGET).into_response(),
        Err(err) => procedure_failure_text("/api/reset-database", &err),
    }
}
