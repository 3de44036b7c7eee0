use std::fmt;

use crate::book::errors::BookTitleError;
use crate::book::errors::StockError;

/// Book aggregate entity.
///
/// Stock mutation goes through the loan ledger or admin catalog operations;
/// nothing else touches it.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: Option<String>,
    pub category: Option<String>,
    pub stock: StockLevel,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub i64);

impl BookId {
    /// Get the raw numeric id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title value type
///
/// Ensures the title is non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid book title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 255 characters
    pub fn new(title: String) -> Result<Self, BookTitleError> {
        if title.trim().is_empty() {
            return Err(BookTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(BookTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stock counter value type. Guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StockLevel(i32);

impl StockLevel {
    /// Create a stock level from a raw count.
    ///
    /// # Errors
    /// * `Negative` - Count is below zero
    pub fn new(count: i32) -> Result<Self, StockError> {
        if count < 0 {
            return Err(StockError::Negative(count));
        }
        Ok(Self(count))
    }

    /// Get the raw count.
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Whether at least one copy is available.
    pub fn is_available(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated fields for catalog inserts and full-overwrite updates.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: BookTitle,
    pub author: Option<String>,
    pub category: Option<String>,
    pub stock: StockLevel,
}

impl BookDraft {
    /// Construct a draft from raw request fields.
    ///
    /// # Errors
    /// * `BookTitleError` - Title fails validation
    /// * `StockError` - Stock count is negative
    pub fn new(
        title: String,
        author: Option<String>,
        category: Option<String>,
        stock: i32,
    ) -> Result<Self, crate::book::errors::BookError> {
        Ok(Self {
            title: BookTitle::new(title)?,
            author,
            category,
            stock: StockLevel::new(stock)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_valid() {
        let title = BookTitle::new("Belajar Microservices".to_string()).unwrap();
        assert_eq!(title.as_str(), "Belajar Microservices");
    }

    #[test]
    fn test_title_empty() {
        assert!(matches!(
            BookTitle::new("   ".to_string()),
            Err(BookTitleError::Empty)
        ));
    }

    #[test]
    fn test_title_too_long() {
        let result = BookTitle::new("x".repeat(256));
        assert!(matches!(result, Err(BookTitleError::TooLong { .. })));
    }

    #[test]
    fn test_stock_level_guard() {
        assert_eq!(StockLevel::new(0).unwrap().as_i32(), 0);
        assert!(!StockLevel::new(0).unwrap().is_available());
        assert!(StockLevel::new(5).unwrap().is_available());
        assert!(matches!(StockLevel::new(-1), Err(StockError::Negative(-1))));
    }

    #[test]
    fn test_draft_rejects_negative_stock() {
        let result = BookDraft::new("Dasar-Dasar Python".to_string(), None, None, -3);
        assert!(result.is_err());
    }
}
