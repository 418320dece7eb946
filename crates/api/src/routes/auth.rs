//! Authentication routes for login, the current user, and password changes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use stockroom_core::auth::{UserRole, hash_password, verify_dummy_password, verify_password};
use stockroom_db::UserRepository;
use stockroom_shared::{
    AppError,
    auth::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo},
};
use tracing::{error, info, warn};

use crate::{AppState, errors::ApiError, extract::JsonBody, middleware::auth::AuthUser};

const INVALID_CREDENTIALS: &str = "Invalid username, password, or role";

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Creates the auth routes that need a signed-in caller.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/auth/password", put(change_password))
}

/// POST /auth/login - Authenticate a user under a role and return a token.
async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let requested_role: UserRole = payload.role.parse()?;
    let user_repo = UserRepository::new((*state.db).clone());

    let user = user_repo
        .find_by_username(payload.username.trim())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let Some(user) = user else {
        verify_dummy_password(&payload.password);
        warn!(username = %payload.username, "login attempt for unknown user");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()).into());
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login attempt with wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()).into());
    }

    let stored_role: UserRole = user.role.into();
    if stored_role != requested_role {
        warn!(
            user_id = %user.id,
            requested = %requested_role,
            "login attempt under a role the user does not hold"
        );
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()).into());
    }

    let access_token = state
        .jwt_service
        .generate_access_token(user.id, &user.username, stored_role.as_str())
        .map_err(|e| {
            error!(error = %e, "failed to generate access token");
            AppError::Internal(e.to_string())
        })?;

    info!(user_id = %user.id, role = %stored_role, "user logged in");

    Ok(Json(LoginResponse {
        user: UserInfo {
            id: user.id,
            username: user.username,
            role: stored_role.to_string(),
        },
        access_token,
        token_type: "Bearer",
        expires_in: state.jwt_service.access_token_expires_in(),
    }))
}

/// GET /auth/me - Return the signed-in caller.
async fn me(user: AuthUser) -> Json<UserInfo> {
    let actor = user.actor();
    Json(UserInfo {
        id: actor.user_id,
        username: actor.username.clone(),
        role: actor.role.to_string(),
    })
}

/// PUT /auth/password - Rotate the caller's password.
async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let actor = user.actor();
    let user_repo = UserRepository::new((*state.db).clone());

    let record = user_repo
        .find_by_id(actor.user_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("User {}", actor.user_id)))?;

    if !verify_password(&payload.current_password, &record.password_hash)? {
        warn!(user_id = %actor.user_id, "password change with wrong current password");
        return Err(AppError::Unauthorized("Current password is incorrect".to_string()).into());
    }

    let new_hash = hash_password(&payload.new_password)?;
    user_repo
        .update_password(actor.user_id, &new_hash)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    info!(user_id = %actor.user_id, "password changed");

    Ok(StatusCode::NO_CONTENT)
}
