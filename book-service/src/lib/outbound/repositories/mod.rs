pub mod book;
pub mod loan;

pub use book::PostgresBookRepository;
pub use loan::PostgresLoanLedger;
