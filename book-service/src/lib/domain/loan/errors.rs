use thiserror::Error;

use crate::book::models::BookId;

/// Top-level error for loan ledger operations
#[derive(Debug, Clone, Error)]
pub enum LoanError {
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("Book {0} is out of stock")]
    OutOfStock(BookId),

    #[error("User {user_id} already holds a loan of book {book_id}")]
    AlreadyBorrowed { user_id: i64, book_id: BookId },

    #[error("User {user_id} has no active loan of book {book_id}")]
    NoActiveLoan { user_id: i64, book_id: BookId },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
