use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::loan::models::Borrower;
use crate::loan::ports::LoanServicePort;

pub async fn borrow_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<BorrowRequestBody>,
) -> Result<ApiSuccess<BorrowResponseData>, ApiError> {
    // Identity comes from the verified claims, never from the body
    let borrower = Borrower {
        user_id: auth_user.user_id,
        username: auth_user.username,
    };

    let receipt = state
        .loan_service
        .borrow_book(BookId(body.book_id), &borrower)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        BorrowResponseData {
            message: "Peminjaman Berhasil!".to_string(),
            remaining_stock: receipt.remaining_stock,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BorrowRequestBody {
    #[serde(rename = "bookId")]
    pub book_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowResponseData {
    pub message: String,
    pub remaining_stock: i32,
}
