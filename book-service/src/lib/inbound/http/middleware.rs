use std::sync::Arc;

use auth::Authenticator;
use auth::Role;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

/// Extension type storing the verified token identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Middleware that validates bearer tokens against the shared signing
/// secret and adds the claimed identity to request extensions.
///
/// No user table is consulted: a valid signature and unexpired `exp` are
/// the whole authorization state.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        (
            StatusCode::FORBIDDEN,
            Json(json!({
                "message": "Token tidak valid"
            })),
        )
            .into_response()
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Malformed subject claim in token: {}", e);
        (
            StatusCode::FORBIDDEN,
            Json(json!({
                "message": "Token tidak valid"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| missing_token_response())?;

    let auth_str = auth_header.to_str().map_err(|_| missing_token_response())?;

    if !auth_str.starts_with("Bearer ") {
        return Err(missing_token_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}

fn missing_token_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "message": "Akses ditolak: Butuh Token"
        })),
    )
        .into_response()
}
