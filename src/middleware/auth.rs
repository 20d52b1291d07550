//! JWT authentication extractor
//!
//! Provides the `AuthUser` extractor for handlers requiring an
//! authenticated caller. The caller's identity and capability set are
//! resolved once here and threaded explicitly into service calls.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::Role;
use crate::jwt::Claims;
use crate::policy::Capabilities;
use crate::server::AppState;

/// Authenticated caller extracted from the Bearer token
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuthUser {
    /// Subject id from the token's `sub` claim
    pub id: i64,
    /// Caller role
    pub role: Role,
    /// Capability set resolved from the role
    #[serde(skip)]
    pub caps: Capabilities,
}

impl AuthUser {
    pub fn new(id: i64, role: Role) -> Self {
        Self {
            id,
            role,
            caps: Capabilities::for_role(role),
        }
    }

    pub fn from_claims(claims: Claims) -> Self {
        Self::new(claims.sub, claims.role)
    }
}

/// Authentication errors
#[derive(Debug, Clone)]
pub enum AuthError {
    /// No Authorization header present
    MissingToken,
    /// Invalid Authorization header format
    InvalidHeader,
    /// Token validation failed
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Authorization header missing",
            AuthError::InvalidHeader => "Invalid Authorization header format",
            AuthError::InvalidToken => "Invalid token",
        };

        let body = serde_json::json!({ "error": message });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

/// Extract the Bearer token from the Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidHeader)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state
            .jwt_manager
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser::from_claims(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());

        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert!(matches!(
            extract_bearer_token(&headers),
            Err(AuthError::InvalidHeader)
        ));
    }

    #[test]
    fn test_auth_user_from_claims() {
        let claims = Claims {
            sub: 5,
            role: Role::Faculty,
            iss: "test".to_string(),
            iat: 0,
            exp: 0,
        };
        let auth = AuthUser::from_claims(claims);
        assert_eq!(auth.id, 5);
        assert!(auth.caps.mutate);
    }
}
