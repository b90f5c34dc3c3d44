//! Store error types
//!
//! A single failure kind covers connection errors, SQL errors, and
//! procedure-invocation errors. The HTTP layer never distinguishes finer
//! subtypes; it logs the full chain and answers with a generic message.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data-access failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure reported by the MySQL driver (connection, SQL, or CALL)
    #[error("data access failed")]
    Driver(#[from] sqlx::Error),
}

impl StoreError {
    /// Full error chain as a single string, for logging.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_includes_driver_detail() {
        let err = StoreError::from(sqlx::Error::PoolClosed);
        let chain = err.chain();
        assert!(chain.starts_with("data access failed"));
        assert!(chain.contains("pool"));
    }
}
