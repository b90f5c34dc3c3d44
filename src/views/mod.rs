//! # View Renderer
//!
//! One askama template struct per page. The struct fields are the context
//! keys the templates iterate over (`people`, `books`, `customers`,
//! `items`, `orders`), so a template referencing a missing or renamed
//! column fails at compile time instead of rendering blanks.

use askama::Template;

use crate::store::{AuthorRow, BookRow, CustomerRow, OrderItemRow, OrderRow};

/// Static landing page, no context
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage;

#[derive(Template)]
#[template(path = "authors.html")]
pub struct AuthorsPage {
    pub people: Vec<AuthorRow>,
}

#[derive(Template)]
#[template(path = "books.html")]
pub struct BooksPage {
    pub books: Vec<BookRow>,
}

#[derive(Template)]
#[template(path = "customers.html")]
pub struct CustomersPage {
    pub customers: Vec<CustomerRow>,
}

#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersPage {
    pub orders: Vec<OrderRow>,
}

#[derive(Template)]
#[template(path = "order_items.html")]
pub struct OrderItemsPage {
    pub items: Vec<OrderItemRow>,
}

/// Error page shown when the delete-all procedure fails
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub message: String,
}
