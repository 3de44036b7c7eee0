use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::book::models::BookId;
use crate::book::models::BookTitle;
use crate::book::models::StockLevel;
use crate::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_book(row: &sqlx::postgres::PgRow) -> Result<Book, BookError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;
        let author: Option<String> = row
            .try_get("author")
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;
        let category: Option<String> = row
            .try_get("category")
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;
        let stock: i32 = row
            .try_get("stock")
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(Book {
            id: BookId(id),
            title: BookTitle::new(title)?,
            author,
            category,
            stock: StockLevel::new(stock)?,
        })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, category, stock
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn create(&self, draft: &BookDraft) -> Result<Book, BookError> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author, category, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.author.as_deref())
        .bind(draft.category.as_deref())
        .bind(draft.stock.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(Book {
            id: BookId(id),
            title: draft.title.clone(),
            author: draft.author.clone(),
            category: draft.category.clone(),
            stock: draft.stock,
        })
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, category = $4, stock = $5
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(draft.title.as_str())
        .bind(draft.author.as_deref())
        .bind(draft.category.as_deref())
        .bind(draft.stock.as_i32())
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id));
        }

        Ok(())
    }

    async fn delete_with_loans(&self, id: BookId) -> Result<(), BookError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        // Loan rows reference the book; they go first
        sqlx::query("DELETE FROM loans WHERE book_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the loan delete
            return Err(BookError::NotFound(id));
        }

        tx.commit()
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn replace_catalog(&self, books: &[BookDraft]) -> Result<(), BookError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        sqlx::query("TRUNCATE TABLE loans, books RESTART IDENTITY")
            .execute(&mut *tx)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        for book in books {
            sqlx::query(
                r#"
                INSERT INTO books (title, author, category, stock)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(book.title.as_str())
            .bind(book.author.as_deref())
            .bind(book.category.as_deref())
            .bind(book.stock.as_i32())
            .execute(&mut *tx)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
