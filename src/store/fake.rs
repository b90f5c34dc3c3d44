//! In-memory store double for tests
//!
//! Returns canned rows, or fails every operation when built with
//! `failing()`. Procedure invocations are counted so tests can assert a
//! handler called the store exactly once.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{StoreError, StoreResult};
use super::rows::{AuthorRow, BookRow, CustomerRow, OrderItemRow, OrderRow};
use super::Bookstore;

#[derive(Default)]
pub struct FakeStore {
    pub authors: Vec<AuthorRow>,
    pub books: Vec<BookRow>,
    pub customers: Vec<CustomerRow>,
    pub orders: Vec<OrderRow>,
    pub order_items: Vec<OrderItemRow>,
    pub fail: bool,
    pub deletes: AtomicUsize,
    pub resets: AtomicUsize,
}

impl FakeStore {
    /// A store where every operation fails with a driver error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail {
            Err(StoreError::from(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Bookstore for FakeStore {
    async fn list_authors(&self) -> StoreResult<Vec<AuthorRow>> {
        self.check()?;
        Ok(self.authors.clone())
    }

    async fn list_books(&self) -> StoreResult<Vec<BookRow>> {
        self.check()?;
        Ok(self.books.clone())
    }

    async fn list_customers(&self) -> StoreResult<Vec<CustomerRow>> {
        self.check()?;
        Ok(self.customers.clone())
    }

    async fn list_orders(&self) -> StoreResult<Vec<OrderRow>> {
        self.check()?;
        Ok(self.orders.clone())
    }

    async fn list_order_items(&self) -> StoreResult<Vec<OrderItemRow>> {
        self.check()?;
        Ok(self.order_items.clone())
    }

    async fn delete_all_order_items(&self) -> StoreResult<()> {
        self.check()?;
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn reset_database(&self) -> StoreResult<()> {
        self.check()?;
        self.resets.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// Row fixtures shared by the handler tests.

pub fn author(id: i32, first: &str, last: &str) -> AuthorRow {
    AuthorRow {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        country: Some("USA".to_string()),
        birth_year: Some(1906),
    }
}

pub fn book(id: i32, title: &str, author_name: Option<&str>) -> BookRow {
    BookRow {
        id,
        title: title.to_string(),
        author_name: author_name.map(str::to_string),
        genre: Some("Fiction".to_string()),
        price: Decimal::new(1999, 2),
        stock_quantity: 12,
        publish_year: Some(1987),
        isbn: Some("978-0-553-38168-9".to_string()),
    }
}

pub fn customer(id: i32, first: &str, last: &str) -> CustomerRow {
    CustomerRow {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone_number: Some("555-0100".to_string()),
        city: Some("Portland".to_string()),
        state: Some("OR".to_string()),
    }
}

pub fn order(id: i32, customer_name: Option<&str>, date: NaiveDate) -> OrderRow {
    OrderRow {
        id,
        customer_name: customer_name.map(str::to_string),
        order_date: date,
        total_amount: Decimal::new(5498, 2),
        payment_status: "Paid".to_string(),
    }
}

pub fn order_item(order_id: i32, title: &str, author_name: &str, date: NaiveDate) -> OrderItemRow {
    OrderItemRow {
        order_id,
        customer_name: Some("Grace Hopper".to_string()),
        order_date: date,
        quantity: 2,
        subtotal: Decimal::new(3998, 2),
        title: title.to_string(),
        author_name: author_name.to_string(),
    }
}
