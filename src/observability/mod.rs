//! Observability
//!
//! Structured logging for the request pipeline. Query and procedure
//! failures are logged here with full detail; clients only ever see the
//! generic messages produced by the HTTP layer.

pub mod logger;

pub use logger::{Logger, Severity};
