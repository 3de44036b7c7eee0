use async_trait::async_trait;

use crate::book::models::BookId;
use crate::loan::errors::LoanError;
use crate::loan::models::Borrower;
use crate::loan::models::BorrowReceipt;

/// Port for loan service operations.
#[async_trait]
pub trait LoanServicePort: Send + Sync + 'static {
    /// Borrow one copy of a book on behalf of the authenticated user.
    ///
    /// # Errors
    /// * `BookNotFound` - Book id does not exist
    /// * `OutOfStock` - No copies left
    /// * `AlreadyBorrowed` - Caller already holds a loan of this book
    /// * `DatabaseError` - Database operation failed
    async fn borrow_book(
        &self,
        book_id: BookId,
        borrower: &Borrower,
    ) -> Result<BorrowReceipt, LoanError>;

    /// Return a borrowed book on behalf of the authenticated user.
    ///
    /// # Errors
    /// * `NoActiveLoan` - Caller holds no loan of this book
    /// * `DatabaseError` - Database operation failed
    async fn return_book(&self, book_id: BookId, user_id: i64) -> Result<(), LoanError>;
}

/// Transactional persistence operations for the loan ledger.
///
/// Each method is a single logical transaction over the book row and the
/// loan set: both mutations land or neither does.
#[async_trait]
pub trait LoanLedger: Send + Sync + 'static {
    /// Atomically decrement stock (only while stock > 0) and insert a loan
    /// row for the borrower.
    ///
    /// # Returns
    /// Stock remaining after the decrement
    ///
    /// # Errors
    /// * `BookNotFound` - Book id does not exist
    /// * `OutOfStock` - The conditional decrement affected no row
    /// * `AlreadyBorrowed` - The (user, book) uniqueness constraint fired
    /// * `DatabaseError` - Database operation failed
    async fn borrow(&self, book_id: BookId, borrower: &Borrower) -> Result<i32, LoanError>;

    /// Atomically delete the caller's loan row and increment stock.
    ///
    /// # Errors
    /// * `NoActiveLoan` - The loan delete affected no row
    /// * `DatabaseError` - Database operation failed
    async fn return_book(&self, book_id: BookId, user_id: i64) -> Result<(), LoanError>;
}
