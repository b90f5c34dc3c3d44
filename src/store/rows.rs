//! Typed row records
//!
//! One struct per query result shape, field names mapped onto the SQL
//! aliases the queries declare. Join-derived names are `Option` where the
//! join is outer; the order-items view reaches its author through inner
//! joins, so its `author_name` is always present.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the authors listing
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AuthorRow {
    pub id: i32,
    #[sqlx(rename = "fName")]
    pub first_name: String,
    #[sqlx(rename = "lName")]
    pub last_name: String,
    pub country: Option<String>,
    #[sqlx(rename = "birthyear")]
    pub birth_year: Option<i32>,
}

/// One row of the books listing (author joined in)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    /// Absent when the book has no author row (outer join)
    #[sqlx(rename = "authorName")]
    pub author_name: Option<String>,
    pub genre: Option<String>,
    pub price: Decimal,
    #[sqlx(rename = "stockQuantity")]
    pub stock_quantity: i32,
    #[sqlx(rename = "publishYear")]
    pub publish_year: Option<i32>,
    pub isbn: Option<String>,
}

/// One row of the customers listing
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerRow {
    pub id: i32,
    #[sqlx(rename = "fName")]
    pub first_name: String,
    #[sqlx(rename = "lName")]
    pub last_name: String,
    pub email: String,
    #[sqlx(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One row of the orders listing (customer joined in)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderRow {
    pub id: i32,
    /// Absent when the order has no customer row (outer join)
    #[sqlx(rename = "customerName")]
    pub customer_name: Option<String>,
    #[sqlx(rename = "orderDate")]
    pub order_date: NaiveDate,
    #[sqlx(rename = "totalAmount")]
    pub total_amount: Decimal,
    #[sqlx(rename = "paymentStatus")]
    pub payment_status: String,
}

/// One row of the denormalized order-items view
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItemRow {
    #[sqlx(rename = "orderID")]
    pub order_id: i32,
    #[sqlx(rename = "customerName")]
    pub customer_name: Option<String>,
    #[sqlx(rename = "orderDate")]
    pub order_date: NaiveDate,
    pub quantity: i32,
    pub subtotal: Decimal,
    pub title: String,
    #[sqlx(rename = "authorName")]
    pub author_name: String,
}
