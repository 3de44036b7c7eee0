use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Destructive reseed of the user set. Dev/test utility, not part of the
/// runtime contract.
pub async fn init_db(
    State(state): State<AppState>,
) -> Result<ApiSuccess<InitDbResponseData>, ApiError> {
    let seeded = state
        .user_service
        .reseed()
        .await
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    tracing::info!(seeded, "User set reseeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        InitDbResponseData {
            message: "Database User Siap! (Admin & User dibuat)".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitDbResponseData {
    pub message: String,
}
