use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::book::models::BookId;

/// Port for catalog service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List the whole catalog, ordered by ascending id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Insert a new book. Admin-gated at the HTTP boundary.
    ///
    /// # Returns
    /// The created book with its assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_book(&self, draft: BookDraft) -> Result<Book, BookError>;

    /// Overwrite all mutable fields of an existing book.
    ///
    /// # Errors
    /// * `NotFound` - No book row was affected
    /// * `DatabaseError` - Database operation failed
    async fn update_book(&self, id: BookId, draft: BookDraft) -> Result<(), BookError>;

    /// Delete a book and every loan row referencing it.
    ///
    /// # Errors
    /// * `NotFound` - No book row was affected
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: BookId) -> Result<(), BookError>;

    /// Destructively reseed the catalog with the stock dev books.
    ///
    /// Loans are cleared too, so the ledger never references a vanished
    /// book. Returns the number of seeded books.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn reseed(&self) -> Result<usize, BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Retrieve all books ordered by ascending id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    /// Persist a new book and return it with its assigned id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, draft: &BookDraft) -> Result<Book, BookError>;

    /// Overwrite title, author, category, and stock of an existing book.
    ///
    /// # Errors
    /// * `NotFound` - No row was affected
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<(), BookError>;

    /// Delete a book after removing its loan rows, atomically.
    ///
    /// # Errors
    /// * `NotFound` - No book row was affected
    /// * `DatabaseError` - Database operation failed
    async fn delete_with_loans(&self, id: BookId) -> Result<(), BookError>;

    /// Replace the whole catalog (books and loans), atomically.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn replace_catalog(&self, books: &[BookDraft]) -> Result<(), BookError>;
}
