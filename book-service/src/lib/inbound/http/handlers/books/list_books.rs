use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::book::models::Book;
use crate::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// The one public read: the whole catalog, ascending by id.
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    state
        .book_service
        .list_books()
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(
                StatusCode::OK,
                books.iter().map(BookData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub stock: i32,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.as_i64(),
            title: book.title.as_str().to_string(),
            author: book.author.clone(),
            category: book.category.clone(),
            stock: book.stock.as_i32(),
        }
    }
}
