//! MySQL store implementation
//!
//! `MySqlStore` runs the fixed queries against a sqlx connection pool. The
//! SQL texts are literal constants; nothing user-supplied is ever
//! interpolated into them. Pooling is internal to this module — callers
//! only see the [`Bookstore`] operations.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::error::StoreResult;
use super::rows::{AuthorRow, BookRow, CustomerRow, OrderItemRow, OrderRow};
use super::Bookstore;

const AUTHORS_SQL: &str = "\
    SELECT Authors.authorID AS id, Authors.fName, Authors.lName, \
    Authors.country, Authors.birthyear FROM Authors;";

const BOOKS_SQL: &str = "\
    SELECT Books.bookID AS id, Books.title, \
    CONCAT(Authors.fName, ' ', Authors.lName) AS authorName, Books.genre, Books.price, \
    Books.stockQuantity, Books.publishYear, Books.isbn \
    FROM Books \
    LEFT JOIN Authors ON Books.authorID = Authors.authorID \
    ORDER BY Books.title;";

const CUSTOMERS_SQL: &str = "\
    SELECT Customers.customerID AS id, Customers.fName, Customers.lName, \
    Customers.email, Customers.phoneNumber, Customers.city, Customers.state \
    FROM Customers;";

const ORDERS_SQL: &str = "\
    SELECT Orders.orderID as id, \
    CONCAT(Customers.fName, ' ', Customers.lName) AS customerName, \
    Orders.orderDate, Orders.totalAmount, Orders.paymentStatus \
    FROM Orders \
    LEFT JOIN Customers ON Orders.customerID = Customers.customerID \
    ORDER BY Orders.orderDate DESC, Orders.orderID DESC;";

const ORDER_ITEMS_SQL: &str = "\
    SELECT Orders.orderID, \
    CONCAT(Customers.fName, ' ', Customers.lName) AS customerName, \
    Orders.orderDate, OrderItems.quantity, OrderItems.subtotal, \
    Books.title, CONCAT(Authors.fName, ' ', Authors.lName) AS authorName \
    FROM Orders \
    LEFT JOIN Customers ON Orders.customerID = Customers.customerID \
    INNER JOIN OrderItems ON Orders.orderID = OrderItems.orderID \
    INNER JOIN Books ON OrderItems.bookID = Books.bookID \
    INNER JOIN Authors ON Books.authorID = Authors.authorID \
    ORDER BY Orders.orderDate DESC, Orders.orderID DESC;";

const DELETE_ORDER_ITEMS_SQL: &str = "CALL sp_delete_orderItems();";

const RESET_BOOKSTORE_SQL: &str = "CALL sp_reset_bookstore();";

/// MySQL-backed store over a sqlx connection pool
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Connect to the database and build the pool
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Bookstore for MySqlStore {
    async fn list_authors(&self) -> StoreResult<Vec<AuthorRow>> {
        let rows = sqlx::query_as::<_, AuthorRow>(AUTHORS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_books(&self) -> StoreResult<Vec<BookRow>> {
        let rows = sqlx::query_as::<_, BookRow>(BOOKS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_customers(&self) -> StoreResult<Vec<CustomerRow>> {
        let rows = sqlx::query_as::<_, CustomerRow>(CUSTOMERS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_orders(&self) -> StoreResult<Vec<OrderRow>> {
        let rows = sqlx::query_as::<_, OrderRow>(ORDERS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_order_items(&self) -> StoreResult<Vec<OrderItemRow>> {
        let rows = sqlx::query_as::<_, OrderItemRow>(ORDER_ITEMS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn delete_all_order_items(&self) -> StoreResult<()> {
        sqlx::query(DELETE_ORDER_ITEMS_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn reset_database(&self) -> StoreResult<()> {
        sqlx::query(RESET_BOOKSTORE_SQL).execute(&self.pool).await?;
        Ok(())
    }
}
