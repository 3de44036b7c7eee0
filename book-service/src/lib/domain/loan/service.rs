use std::sync::Arc;

use async_trait::async_trait;

use crate::book::models::BookId;
use crate::loan::errors::LoanError;
use crate::loan::models::Borrower;
use crate::loan::models::BorrowReceipt;
use crate::loan::ports::LoanLedger;
use crate::loan::ports::LoanServicePort;

/// Domain service implementation for borrow/return operations.
///
/// The atomicity of each operation lives in the ledger implementation; this
/// layer owns logging and the receipt shape.
pub struct LoanService<LL>
where
    LL: LoanLedger,
{
    ledger: Arc<LL>,
}

impl<LL> LoanService<LL>
where
    LL: LoanLedger,
{
    pub fn new(ledger: Arc<LL>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl<LL> LoanServicePort for LoanService<LL>
where
    LL: LoanLedger,
{
    async fn borrow_book(
        &self,
        book_id: BookId,
        borrower: &Borrower,
    ) -> Result<BorrowReceipt, LoanError> {
        let remaining_stock = self.ledger.borrow(book_id, borrower).await?;

        tracing::info!(
            book_id = book_id.as_i64(),
            user_id = borrower.user_id,
            remaining_stock,
            "Book borrowed"
        );

        Ok(BorrowReceipt { remaining_stock })
    }

    async fn return_book(&self, book_id: BookId, user_id: i64) -> Result<(), LoanError> {
        self.ledger.return_book(book_id, user_id).await?;

        tracing::info!(
            book_id = book_id.as_i64(),
            user_id,
            "Book returned"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestLoanLedger {}

        #[async_trait]
        impl LoanLedger for TestLoanLedger {
            async fn borrow(&self, book_id: BookId, borrower: &Borrower) -> Result<i32, LoanError>;
            async fn return_book(&self, book_id: BookId, user_id: i64) -> Result<(), LoanError>;
        }
    }

    fn budi() -> Borrower {
        Borrower {
            user_id: 2,
            username: "budi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_borrow_book_success() {
        let mut ledger = MockTestLoanLedger::new();

        ledger
            .expect_borrow()
            .withf(|book_id, borrower| *book_id == BookId(1) && borrower.username == "budi")
            .times(1)
            .returning(|_, _| Ok(0));

        let service = LoanService::new(Arc::new(ledger));

        let receipt = service.borrow_book(BookId(1), &budi()).await.unwrap();
        assert_eq!(receipt.remaining_stock, 0);
    }

    #[tokio::test]
    async fn test_borrow_book_out_of_stock() {
        let mut ledger = MockTestLoanLedger::new();

        ledger
            .expect_borrow()
            .times(1)
            .returning(|book_id, _| Err(LoanError::OutOfStock(book_id)));

        let service = LoanService::new(Arc::new(ledger));

        let result = service.borrow_book(BookId(3), &budi()).await;
        assert!(matches!(result, Err(LoanError::OutOfStock(BookId(3)))));
    }

    #[tokio::test]
    async fn test_borrow_book_not_found() {
        let mut ledger = MockTestLoanLedger::new();

        ledger
            .expect_borrow()
            .times(1)
            .returning(|book_id, _| Err(LoanError::BookNotFound(book_id)));

        let service = LoanService::new(Arc::new(ledger));

        let result = service.borrow_book(BookId(404), &budi()).await;
        assert!(matches!(result, Err(LoanError::BookNotFound(BookId(404)))));
    }

    #[tokio::test]
    async fn test_return_book_success() {
        let mut ledger = MockTestLoanLedger::new();

        ledger
            .expect_return_book()
            .with(eq(BookId(1)), eq(2))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LoanService::new(Arc::new(ledger));

        assert!(service.return_book(BookId(1), 2).await.is_ok());
    }

    #[tokio::test]
    async fn test_return_book_no_active_loan() {
        let mut ledger = MockTestLoanLedger::new();

        ledger
            .expect_return_book()
            .times(1)
            .returning(|book_id, user_id| Err(LoanError::NoActiveLoan { user_id, book_id }));

        let service = LoanService::new(Arc::new(ledger));

        let result = service.return_book(BookId(1), 2).await;
        assert!(matches!(result, Err(LoanError::NoActiveLoan { .. })));
    }
}
