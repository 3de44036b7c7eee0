use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_book::BookRequestBody;
use crate::book::models::BookDraft;
use crate::book::models::BookId;
use crate::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(book_id): Path<i64>,
    Json(body): Json<BookRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    if !auth_user.role.is_admin() {
        return Err(ApiError::Forbidden("Hanya Admin!".to_string()));
    }

    let draft = BookDraft::new(body.title, body.author, body.category, body.stock)
        .map_err(ApiError::from)?;

    state
        .book_service
        .update_book(BookId(book_id), draft)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Data buku berhasil diperbarui!".to_string(),
        },
    ))
}
