use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::book::models::BookId;
use crate::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(book_id): Path<i64>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    if !auth_user.role.is_admin() {
        return Err(ApiError::Forbidden("Hanya Admin!".to_string()));
    }

    state
        .book_service
        .delete_book(BookId(book_id))
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Buku berhasil dihapus beserta riwayat peminjamannya!".to_string(),
        },
    ))
}
