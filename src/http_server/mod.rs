//! # Bookstore HTTP Server Module
//!
//! Axum router and server lifecycle. Page routes live at the root,
//! procedure routes under `/api`:
//!
//! - `GET /`, `/authors`, `/books`, `/customers`, `/orders`,
//!   `/order_items` - rendered listings
//! - `POST /api/delete-all-order-items` - clear order items, then redirect
//! - `POST /api/reset-database` - reset to seed data, then redirect
//!
//! Every handler runs at most one store operation and matches its result
//! explicitly; failures never escape to the framework's default handler.

pub mod pages_routes;
pub mod procedure_routes;
pub mod responses;
pub mod server;

pub use server::{AppState, HttpServer};
