//! Page Routes
//!
//! The six read endpoints plus the static home page. Every handler has the
//! same shape: run one fixed query, render the rows under the context key
//! its template expects, or divert to the error responder. Handlers take
//! no parameters; there are no wildcard or parameterized routes.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use super::responses::{query_failure, render_page};
use super::server::AppState;
use crate::views::{
    AuthorsPage, BooksPage, CustomersPage, HomePage, OrderItemsPage, OrdersPage,
};

/// Create the page routes
pub fn pages_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/authors", get(authors_handler))
        .route("/books", get(books_handler))
        .route("/customers", get(customers_handler))
        .route("/order_items", get(order_items_handler))
        .route("/orders", get(orders_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Static landing page; no query runs
async fn home_handler() -> Response {
    render_page(HomePage)
}

async fn authors_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_authors().await {
        Ok(people) => render_page(AuthorsPage { people }),
        Err(err) => query_failure("/authors", &err),
    }
}

async fn books_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_books().await {
        Ok(books) => render_page(BooksPage { books }),
        Err(err) => query_failure("/books", &err),
    }
}

async fn customers_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_customers().await {
        Ok(customers) => render_page(CustomersPage { customers }),
        Err(err) => query_failure("/customers", &err),
    }
}

async fn order_items_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_order_items().await {
        Ok(items) => render_page(OrderItemsPage { items }),
        Err(err) => query_failure("/order_items", &err),
    }
}

async fn orders_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_orders().await {
        Ok(orders) => render_page(OrdersPage { orders }),
        Err(err) => query_failure("/orders", &err),
    }
}
