//! bookstore - Server-rendered catalog and order views over a MySQL bookstore
//!
//! A small read-only web front end for a relational bookstore schema
//! (Authors, Books, Customers, Orders, OrderItems). Seven GET routes each
//! run one fixed query and render the rows into an HTML template; two POST
//! routes invoke zero-argument stored procedures and redirect back to the
//! order-items view. All mutable state lives in the database.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod views;
