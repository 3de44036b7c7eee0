use thiserror::Error;

use crate::book::models::BookId;

/// Error for BookTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Book title must not be empty")]
    Empty,

    #[error("Book title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for stock count validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StockError {
    #[error("Stock count must not be negative, got {0}")]
    Negative(i32),
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book title: {0}")]
    InvalidTitle(#[from] BookTitleError),

    #[error("Invalid stock count: {0}")]
    InvalidStock(#[from] StockError),

    #[error("Book not found: {0}")]
    NotFound(BookId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
