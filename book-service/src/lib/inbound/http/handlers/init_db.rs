use axum::extract::State;
use axum::http::StatusCode;

use crate::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

/// Destructive reseed of books and loans. Dev/test utility, not part of
/// the runtime contract.
pub async fn init_db(
    State(state): State<AppState>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let seeded = state
        .book_service
        .reseed()
        .await
        .map_err(ApiError::from)?;

    tracing::info!(seeded, "Catalog reseeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Database berhasil di-reset dengan kategori buku!".to_string(),
        },
    ))
}
