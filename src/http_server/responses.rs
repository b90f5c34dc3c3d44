//! Response helpers and the error responder
//!
//! Failures are logged with full detail (route, error chain) and answered
//! with fixed, client-safe bodies. Driver messages and SQL text never
//! reach the client. The three failure bodies and the redirect target
//! reproduce the original application's observable behavior, including the
//! asymmetry between the two procedure endpoints.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::observability::Logger;
use crate::store::StoreError;
use crate::views::ErrorPage;

/// Body sent when a read route's query fails
pub const QUERY_FAILURE_BODY: &str =
    "An error occurred while executing the database queries.";

/// Body sent when a template fails to render
pub const RENDER_FAILURE_BODY: &str = "An error occurred while rendering the page.";

/// Body sent when the reset procedure fails
pub const PROCEDURE_FAILURE_BODY: &str = "An error occurred while executing the PL/SQL.";

/// Message shown on the error page when the delete procedure fails
pub const DELETE_FAILURE_MESSAGE: &str = "Deletion failed.";

/// Where procedure endpoints send the client after a successful call
pub const PROCEDURE_REDIRECT_TARGET: &str = "/order_items";

/// Render a page template into a 200 response.
///
/// A render failure is answered like the original's home-route catch:
/// 500 plain text, detail only in the log.
pub fn render_page<T: Template>(page: T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            let detail = err.to_string();
            Logger::error("render_failed", &[("error", &detail)]);
            (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_BODY).into_response()
        }
    }
}

/// 500 plain text for a failed read query
pub fn query_failure(route: &str, err: &StoreError) -> Response {
    let chain = err.chain();
    Logger::error("query_failed", &[("route", route), ("error", &chain)]);
    (StatusCode::INTERNAL_SERVER_ERROR, QUERY_FAILURE_BODY).into_response()
}

/// 500 plain text for a failed procedure call (reset-database)
pub fn procedure_failure_text(route: &str, err: &StoreError) -> Response {
    let chain = err.chain();
    Logger::error("procedure_failed", &[("route", route), ("error", &chain)]);
    (StatusCode::INTERNAL_SERVER_ERROR, PROCEDURE_FAILURE_BODY).into_response()
}

/// 500 rendered error template for a failed procedure call
/// (delete-all-order-items)
pub fn procedure_failure_page(route: &str, err: &StoreError) -> Response {
    let chain = err.chain();
    Logger::error("procedure_failed", &[("route", route), ("error", &chain)]);

    let page = ErrorPage {
        message: DELETE_FAILURE_MESSAGE.to_string(),
    };
    match page.render() {
        Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILURE_MESSAGE).into_response(),
    }
}
