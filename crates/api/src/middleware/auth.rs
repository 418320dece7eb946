//! Authentication middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use stockroom_core::auth::{Actor, Operation, UserRole, authorize};
use stockroom_shared::{AppError, Claims, JwtError};
use tracing::debug;

use crate::{
    AppState,
    errors::{ApiError, json_error},
};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Authentication middleware that validates JWT tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the JWT service
/// 3. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return json_error(
            StatusCode::UNAUTHORIZED,
            "missing_token",
            "Authorization header with Bearer token is required",
        );
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(JwtError::Expired) => {
            json_error(StatusCode::UNAUTHORIZED, "token_expired", "Token has expired")
        }
        Err(e) => {
            debug!(error = %e, "rejected bearer token");
            json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_token",
                "Invalid or malformed token",
            )
        }
    }
}

/// Extractor for the authenticated caller.
///
/// Handlers take `AuthUser` and call [`AuthUser::require`] with the
/// operation they perform before touching any state:
///
/// ```ignore
/// async fn handler(user: AuthUser) -> Result<Json<T>, ApiError> {
///     let actor = user.require(Operation::RecordMovement)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Actor);

impl AuthUser {
    /// Returns the caller.
    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.0
    }

    /// Returns the caller if their role permits `operation`.
    ///
    /// # Errors
    ///
    /// Returns a 403 error if the role is not in the operation's allowed set.
    pub fn require(&self, operation: Operation) -> Result<&Actor, ApiError> {
        authorize(&self.0, operation)?;
        Ok(&self.0)
    }
}

impl TryFrom<&Claims> for AuthUser {
    type Error = ApiError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let role: UserRole = claims
            .role
            .parse()
            .map_err(|_| AppError::Unauthorized("Token carries an unknown role".to_string()))?;
        Ok(Self(Actor::new(claims.user_id(), &claims.username, role)))
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;
        Self::try_from(claims)
    }
}
