use std::sync::Arc;

use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::book::models::BookId;
use crate::book::ports::BookRepository;
use crate::book::ports::BookServicePort;

/// Stock dev catalog recreated by every reseed. One title deliberately
/// starts at zero stock so the out-of-stock path is exercisable right away.
const SEED_BOOKS: &[(&str, &str, &str, i32)] = &[
    ("Belajar Microservices", "Fulan", "Teknologi", 5),
    ("Tutorial Docker Lengkap", "Fulana", "Teknologi", 3),
    ("Resep Masakan Padang", "Budi", "Kuliner", 0),
    ("Algoritma & Struktur Data", "Rina", "Edukasi", 12),
    ("Dasar-Dasar Python", "Andi", "Teknologi", 8),
    ("Mastering React JS", "Siti", "Teknologi", 5),
    ("Keamanan Jaringan", "Joko", "Teknologi", 4),
    ("Kecerdasan Buatan (AI)", "Eko", "Sains", 6),
    ("Desain UI/UX Modern", "Dian", "Desain", 7),
];

/// Domain service implementation for catalog operations.
///
/// Concrete implementation of BookServicePort with dependency injection.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repository.list_all().await
    }

    async fn create_book(&self, draft: BookDraft) -> Result<Book, BookError> {
        let book = self.repository.create(&draft).await?;
        tracing::info!(book_id = book.id.as_i64(), title = %book.title, "Book created");
        Ok(book)
    }

    async fn update_book(&self, id: BookId, draft: BookDraft) -> Result<(), BookError> {
        self.repository.update(id, &draft).await?;
        tracing::info!(book_id = id.as_i64(), "Book updated");
        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<(), BookError> {
        self.repository.delete_with_loans(id).await?;
        tracing::info!(book_id = id.as_i64(), "Book deleted with its loan history");
        Ok(())
    }

    async fn reseed(&self) -> Result<usize, BookError> {
        let mut drafts = Vec::with_capacity(SEED_BOOKS.len());
        for (title, author, category, stock) in SEED_BOOKS {
            drafts.push(BookDraft::new(
                (*title).to_string(),
                Some((*author).to_string()),
                Some((*category).to_string()),
                *stock,
            )?);
        }

        self.repository.replace_catalog(&drafts).await?;

        Ok(drafts.len())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::book::models::BookTitle;
    use crate::book::models::StockLevel;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn list_all(&self) -> Result<Vec<Book>, BookError>;
            async fn create(&self, draft: &BookDraft) -> Result<Book, BookError>;
            async fn update(&self, id: BookId, draft: &BookDraft) -> Result<(), BookError>;
            async fn delete_with_loans(&self, id: BookId) -> Result<(), BookError>;
            async fn replace_catalog(&self, books: &[BookDraft]) -> Result<(), BookError>;
        }
    }

    fn sample_draft() -> BookDraft {
        BookDraft::new(
            "Belajar Microservices".to_string(),
            Some("Fulan".to_string()),
            Some("Teknologi".to_string()),
            5,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_book_returns_assigned_id() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_create()
            .withf(|draft| draft.title.as_str() == "Belajar Microservices")
            .times(1)
            .returning(|draft| {
                Ok(Book {
                    id: BookId(1),
                    title: draft.title.clone(),
                    author: draft.author.clone(),
                    category: draft.category.clone(),
                    stock: draft.stock,
                })
            });

        let service = BookService::new(Arc::new(repository));

        let book = service.create_book(sample_draft()).await.unwrap();
        assert_eq!(book.id, BookId(1));
        assert_eq!(book.stock, StockLevel::new(5).unwrap());
    }

    #[tokio::test]
    async fn test_update_book_propagates_not_found() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_update()
            .with(eq(BookId(99)), always())
            .times(1)
            .returning(|id, _| Err(BookError::NotFound(id)));

        let service = BookService::new(Arc::new(repository));

        let result = service.update_book(BookId(99), sample_draft()).await;
        assert!(matches!(result, Err(BookError::NotFound(BookId(99)))));
    }

    #[tokio::test]
    async fn test_delete_book_success() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_delete_with_loans()
            .with(eq(BookId(3)))
            .times(1)
            .returning(|_| Ok(()));

        let service = BookService::new(Arc::new(repository));

        assert!(service.delete_book(BookId(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_reseed_inserts_full_catalog() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_replace_catalog()
            .withf(|books| {
                books.len() == 9
                    // Zero-stock seed title must survive the draft validation
                    && books
                        .iter()
                        .any(|b| b.title.as_str() == "Resep Masakan Padang" && !b.stock.is_available())
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = BookService::new(Arc::new(repository));

        let seeded = service.reseed().await.unwrap();
        assert_eq!(seeded, 9);
    }

    #[tokio::test]
    async fn test_list_books_passthrough() {
        let mut repository = MockTestBookRepository::new();

        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![Book {
                id: BookId(1),
                title: BookTitle::new("Keamanan Jaringan".to_string()).unwrap(),
                author: Some("Joko".to_string()),
                category: Some("Teknologi".to_string()),
                stock: StockLevel::new(4).unwrap(),
            }])
        });

        let service = BookService::new(Arc::new(repository));

        let books = service.list_books().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, BookId(1));
    }
}
