use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::book::models::BookDraft;
use crate::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<BookRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    if !auth_user.role.is_admin() {
        return Err(ApiError::Forbidden("Hanya Admin!".to_string()));
    }

    let draft = BookDraft::new(body.title, body.author, body.category, body.stock)
        .map_err(ApiError::from)?;

    state
        .book_service
        .create_book(draft)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Buku berhasil ditambahkan!".to_string(),
        },
    ))
}

/// Shared body shape for catalog insert and full-overwrite update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRequestBody {
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub stock: i32,
}
