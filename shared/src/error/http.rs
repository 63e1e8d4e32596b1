//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::BusinessNotFound
            | Self::OwnerNotFound
            | Self::NoteNotFound
            | Self::ServiceNotFound
            | Self::GuestNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::DuplicateServiceName
            | Self::NoteAlreadyDelivered
            | Self::NoteConflict
            | Self::InvalidStatusTransition => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::MissingCredential
            | Self::InvalidCredential
            | Self::TokenExpired
            | Self::UnsupportedProvider => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::Unauthorized
            | Self::AdminRequired
            | Self::RegistrationIncomplete
            | Self::BusinessInactive
            | Self::GuestExpired => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity (state conflicts the caller can correct)
            Self::InsufficientAbonos | Self::BusinessHasBranches | Self::GuestCannotOwn => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::MissingBusinessId
            | Self::InvalidBusinessId
            | Self::InvalidHours
            | Self::EmptySelection
            | Self::InvalidAbonoAmount
            | Self::InvalidPaymentMethod
            | Self::InvalidName
            | Self::InvalidPrice
            | Self::InvalidSizes
            | Self::InvalidAvailableDays
            | Self::UnknownSelectionItem => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            Self::Unknown
            | Self::InternalError
            | Self::DatabaseError
            | Self::TransactionFailed
            | Self::CollaboratorFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::BusinessNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Unauthorized.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::MissingCredential.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ErrorCode::InsufficientAbonos.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::InvalidStatusTransition.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::TransactionFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
