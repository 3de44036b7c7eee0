use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // A name that fails validation cannot match any seeded user
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("User tidak ditemukan".to_string()))?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::Unauthorized("User tidak ditemukan".to_string())
            }
            other => ApiError::InternalServerError(other.to_string()),
        })?;

    let claims = auth::Claims::for_user(
        user.id.as_i64(),
        user.username.as_str(),
        user.role,
        state.jwt_expiration_hours,
    );

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Password salah".to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    tracing::info!(user_id = user.id.as_i64(), username = %user.username, "Login succeeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login Berhasil!".to_string(),
            token: result.access_token,
            user: (&user).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
    pub user: LoginUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserData {
    pub id: i64,
    pub username: String,
    pub role: auth::Role,
}

impl From<&User> for LoginUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            role: user.role,
        }
    }
}
