//! Authentication API handlers

use axum::{Json, extract::State, http::HeaderMap};

use crate::auth::{JwtError, JwtService};
use crate::core::ServerState;
use crate::db::repository::CredentialRepository;
use crate::utils::{AppError, AppResponse, AppResult};
use shared::auth::{
    AuthUser, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyResponse,
};

const MIN_PASSWORD_LEN: usize = 6;

/// POST /api/login - credential login
///
/// Unknown user and wrong password return the same generic 401 so the
/// response never reveals which half was wrong.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let (username, password) = match (payload.username, payload.password) {
        (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::validation("Username and password are required"));
        }
    };

    let repo = CredentialRepository::new(state.get_db());
    let credential = repo
        .find_by_username(username.trim())
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let verified = credential
        .verify_password(&password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !verified {
        tracing::warn!(target: "security", "Failed login attempt for '{}'", username.trim());
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .get_jwt_service()
        .generate_token(&credential.username, &credential.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!("🔑 User '{}' logged in", credential.username);

    Ok(Json(AppResponse::success(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: AuthUser {
            username: credential.username,
            role: credential.role,
        },
        token,
    })))
}

/// GET /api/login - bearer token verification
///
/// This route is public, so the token is checked here rather than in
/// the auth middleware. A valid token for a since-deleted user is a
/// 404, distinct from the 401 for a bad token.
pub async fn verify(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> AppResult<Json<AppResponse<VerifyResponse>>> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?;

    let claims = state
        .get_jwt_service()
        .validate_token(token)
        .map_err(|e| match e {
            JwtError::ExpiredToken => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        })?;

    let repo = CredentialRepository::new(state.get_db());
    let credential = repo
        .find_by_username(&claims.username)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(AppResponse::success(VerifyResponse {
        success: true,
        user: AuthUser {
            username: credential.username,
            role: credential.role,
        },
    })))
}

/// POST /api/register - officer account registration
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<AppResponse<RegisterResponse>>> {
    let (username, password) = match (payload.username, payload.password) {
        (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::validation("Username and password are required"));
        }
    };

    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let repo = CredentialRepository::new(state.get_db());
    let credential = repo
        .create(crate::db::models::CredentialCreate {
            username: username.trim().to_string(),
            password,
            email: payload.email,
            full_name: payload.full_name,
        })
        .await?;

    tracing::info!("👤 Registered user '{}'", credential.username);

    Ok(Json(AppResponse::success(RegisterResponse {
        success: true,
        message: "Registration successful".to_string(),
        username: credential.username,
    })))
}
