//! JWT Extractor
//!
//! Custom extractor that validates the bearer token and yields the
//! resolved [`CurrentUser`] in protected handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use shared::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Reuse the principal the middleware already resolved
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_credential("Invalid authorization header"))?,
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::missing_credential());
            }
        };

        let jwt_service = state.get_jwt_service();
        match jwt_service.validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::try_from(claims)
                    .map_err(|e| AppError::invalid_credential(format!("Malformed claims: {e}")))?;

                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );

                Err(map_jwt_error(e))
            }
        }
    }
}

pub(crate) fn map_jwt_error(e: crate::auth::JwtError) -> AppError {
    use crate::auth::JwtError;
    use shared::ErrorCode;
    match e {
        JwtError::ExpiredToken => AppError::token_expired(),
        JwtError::UnsupportedProvider(p) => {
            AppError::new(ErrorCode::UnsupportedProvider).with_detail("provider", p)
        }
        _ => AppError::invalid_credential("Invalid token"),
    }
}
