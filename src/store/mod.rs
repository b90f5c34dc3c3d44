//! # Bookstore Store Module
//!
//! Data access for the bookstore schema. The [`Bookstore`] trait is the
//! query executor contract: one operation per fixed query or stored
//! procedure, returning typed rows or a [`StoreError`]. The production
//! implementation is [`MySqlStore`]; tests swap in a double.
//!
//! The store client is constructed once at startup and handed to the HTTP
//! layer as `Arc<dyn Bookstore>`. No handler holds state of its own.

pub mod error;
pub mod mysql;
pub mod rows;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{StoreError, StoreResult};
pub use mysql::MySqlStore;
pub use rows::{AuthorRow, BookRow, CustomerRow, OrderItemRow, OrderRow};

use async_trait::async_trait;

/// Query executor over the bookstore schema.
///
/// Reads are idempotent; the two procedure calls are not. Neither performs
/// retries — every failure is terminal for the request that issued it.
#[async_trait]
pub trait Bookstore: Send + Sync {
    /// All authors, no filter, no explicit order.
    async fn list_authors(&self) -> StoreResult<Vec<AuthorRow>>;

    /// All books with their author's full name (outer join), by title.
    async fn list_books(&self) -> StoreResult<Vec<BookRow>>;

    /// All customers, no filter, no explicit order.
    async fn list_customers(&self) -> StoreResult<Vec<CustomerRow>>;

    /// All orders with their customer's full name (outer join), newest
    /// first (order date descending, then id descending).
    async fn list_orders(&self) -> StoreResult<Vec<OrderRow>>;

    /// The denormalized order-items view. Inner joins to OrderItems, Books
    /// and Authors: rows missing any of those links are excluded. Same
    /// ordering as `list_orders`.
    async fn list_order_items(&self) -> StoreResult<Vec<OrderItemRow>>;

    /// Invoke the stored procedure that deletes every order-item row.
    async fn delete_all_order_items(&self) -> StoreResult<()>;

    /// Invoke the stored procedure that resets the dataset to its seed.
    async fn reset_database(&self) -> StoreResult<()>;
}
