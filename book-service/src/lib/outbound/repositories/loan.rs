use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::book::models::BookId;
use crate::loan::errors::LoanError;
use crate::loan::models::Borrower;
use crate::loan::ports::LoanLedger;

pub struct PostgresLoanLedger {
    pool: PgPool,
}

impl PostgresLoanLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanLedger for PostgresLoanLedger {
    async fn borrow(&self, book_id: BookId, borrower: &Borrower) -> Result<i32, LoanError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        // Conditional decrement: the row lock serializes racing borrows of
        // the same book, and the stock guard lives in the predicate instead
        // of a prior read
        let updated = sqlx::query(
            r#"
            UPDATE books
            SET stock = stock - 1
            WHERE id = $1 AND stock > 0
            RETURNING stock
            "#,
        )
        .bind(book_id.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        let remaining: i32 = match updated {
            Some(row) => row
                .try_get("stock")
                .map_err(|e| LoanError::DatabaseError(e.to_string()))?,
            None => {
                // No row affected: missing book or empty stock
                let exists = sqlx::query("SELECT 1 FROM books WHERE id = $1")
                    .bind(book_id.as_i64())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

                return Err(if exists.is_some() {
                    LoanError::OutOfStock(book_id)
                } else {
                    LoanError::BookNotFound(book_id)
                });
            }
        };

        sqlx::query(
            r#"
            INSERT INTO loans (user_id, user_name, book_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(borrower.user_id)
        .bind(&borrower.username)
        .bind(book_id.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("loans_user_id_book_id_key")
                {
                    return LoanError::AlreadyBorrowed {
                        user_id: borrower.user_id,
                        book_id,
                    };
                }
            }
            LoanError::DatabaseError(e.to_string())
        })?;

        tx.commit()
            .await
            .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        Ok(remaining)
    }

    async fn return_book(&self, book_id: BookId, user_id: i64) -> Result<(), LoanError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM loans
            WHERE user_id = $1 AND book_id = $2
            "#,
        )
        .bind(user_id)
        .bind(book_id.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        if deleted.rows_affected() == 0 {
            return Err(LoanError::NoActiveLoan { user_id, book_id });
        }

        sqlx::query("UPDATE books SET stock = stock + 1 WHERE id = $1")
            .bind(book_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| LoanError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
