//! HTTP server
//!
//! Builds the router from an injected store client and runs the Axum
//! server. The store is constructed once at startup (see `cli::serve`) and
//! shared by reference; no handler holds mutable state of its own.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::pages_routes::pages_routes;
use super::procedure_routes::procedure_routes;
use crate::config::AppConfig;
use crate::store::Bookstore;

/// State shared across handlers: the injected store client
pub struct AppState {
    pub store: Arc<dyn Bookstore>,
}

impl AppState {
    pub fn new(store: Arc<dyn Bookstore>) -> Self {
        Self { store }
    }
}

/// HTTP server for the bookstore front end
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from configuration and a store client
    pub fn new(config: AppConfig, store: Arc<dyn Bookstore>) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router: pages at the root, procedures under /api
    fn build_router(store: Arc<dyn Bookstore>) -> Router {
        let state = Arc::new(AppState::new(store));

        Router::new()
            .merge(pages_routes(state.clone()))
            .nest("/api", procedure_routes(state))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        println!("Bookstore server listening on http://{}", addr);
        println!("Press Ctrl-C to terminate.");

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::FakeStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_server() -> HttpServer {
        HttpServer::new(AppConfig::with_port(8080), Arc::new(FakeStore::default()))
    }

    #[test]
    fn test_socket_addr_from_config() {
        assert_eq!(test_server().socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_unmatched_route_falls_through_to_404() {
        let router = test_server().router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/no-such-page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_procedure_routes_are_nested_under_api() {
        let router = test_server().router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/reset-database")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
