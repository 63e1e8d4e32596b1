//! Authentication middleware
//!
//! Validates the bearer credential on every `/api/` request and injects
//! the resolved [`CurrentUser`] into the request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use shared::AppError;

/// Routes reachable without a credential
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths
/// - `/api/health`
/// - `POST /api/guests` and `GET /api/guests/{id}` — guest principals
///   are minted and resolved before any credential exists
fn public_route(method: &http::Method, path: &str) -> bool {
    if method == http::Method::OPTIONS {
        return true;
    }
    if !path.starts_with("/api/") {
        return true;
    }
    path == "/api/health"
        || (method == http::Method::POST && path == "/api/guests")
        || (method == http::Method::GET && path.starts_with("/api/guests/"))
}

/// Authentication middleware - requires a valid bearer credential on
/// everything `public_route` does not exempt
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if public_route(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_credential("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::missing_credential());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|e| AppError::invalid_credential(format!("Malformed claims: {e}")))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            Err(super::extractor::map_jwt_error(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_routes_open_without_credential() {
        assert!(public_route(&http::Method::POST, "/api/guests"));
        assert!(public_route(&http::Method::GET, "/api/guests/user:abc123"));
        // Only the mint/resolve pair is open
        assert!(!public_route(&http::Method::GET, "/api/guests"));
        assert!(!public_route(&http::Method::DELETE, "/api/guests/user:abc123"));
        assert!(!public_route(&http::Method::POST, "/api/guests/user:abc123"));
    }

    #[test]
    fn test_api_routes_guarded() {
        assert!(!public_route(&http::Method::GET, "/api/businesses/business:b1/notes"));
        assert!(!public_route(&http::Method::POST, "/api/businesses"));
        assert!(public_route(&http::Method::GET, "/api/health"));
        assert!(public_route(&http::Method::OPTIONS, "/api/businesses"));
        assert!(public_route(&http::Method::GET, "/"));
    }
}
