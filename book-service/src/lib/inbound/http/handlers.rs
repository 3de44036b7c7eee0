use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::book::errors::BookError;
use crate::loan::errors::LoanError;

pub mod books;
pub mod init_db;
pub mod loans;

pub use books::create_book;
pub use books::delete_book;
pub use books::list_books;
pub use books::update_book;
pub use init_db::init_db;
pub use loans::borrow_book;
pub use loans::return_book;

/// Successful API response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failed API response.
///
/// Domain-rule violations carry their user-facing message. Store failures
/// carry the internal detail, which is logged here and replaced by a
/// generic message in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(detail = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => ApiError::NotFound("Buku tidak ditemukan".to_string()),
            BookError::InvalidTitle(_) | BookError::InvalidStock(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        match err {
            LoanError::BookNotFound(_) => ApiError::NotFound("Buku tidak ditemukan".to_string()),
            LoanError::OutOfStock(_) => ApiError::BadRequest("Stok buku habis!".to_string()),
            LoanError::AlreadyBorrowed { .. } => {
                ApiError::Conflict("Anda sudah meminjam buku ini.".to_string())
            }
            LoanError::NoActiveLoan { .. } => {
                ApiError::BadRequest("Anda tidak sedang meminjam buku ini.".to_string())
            }
            LoanError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Body for endpoints that only report an outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}
