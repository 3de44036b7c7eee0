/// The identity a borrow/return request acts on behalf of, taken from the
/// verified token claims. Never from the request body.
///
/// The username is snapshotted into the loan row at borrow time, so the
/// ledger stays readable without an auth-service round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrower {
    pub user_id: i64,
    pub username: String,
}

/// Outcome of a successful borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowReceipt {
    /// Stock left after the decrement
    pub remaining_stock: i32,
}
