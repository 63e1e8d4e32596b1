//! Unified error codes for the Lavadero platform
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Business errors
//! - 4xxx: Note errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 7xxx: Guest errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// No bearer credential supplied
    MissingCredential = 1001,
    /// Credential is unparseable or references an unknown principal
    InvalidCredential = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Credential issued by an unsupported identity provider
    UnsupportedProvider = 1004,

    // ==================== 2xxx: Permission ====================
    /// Principal may not act on this resource
    Unauthorized = 2001,
    /// Admin role required
    AdminRequired = 2002,
    /// Owner has not completed onboarding
    RegistrationIncomplete = 2003,

    // ==================== 3xxx: Business ====================
    /// No business id supplied
    MissingBusinessId = 3001,
    /// Business id is syntactically invalid
    InvalidBusinessId = 3002,
    /// Business not found
    BusinessNotFound = 3003,
    /// Business exists but is deactivated
    BusinessInactive = 3004,
    /// Business still has active sub-locations
    BusinessHasBranches = 3005,
    /// Owner principal not found
    OwnerNotFound = 3006,
    /// A guest principal cannot own a business
    GuestCannotOwn = 3007,
    /// Operating hours are malformed
    InvalidHours = 3008,

    // ==================== 4xxx: Note ====================
    /// Note not found
    NoteNotFound = 4001,
    /// Requested status does not follow the current status
    InvalidStatusTransition = 4002,
    /// Note has already been delivered
    NoteAlreadyDelivered = 4003,
    /// Note selection is empty
    EmptySelection = 4004,
    /// A concurrent update won the race for this note
    NoteConflict = 4005,

    // ==================== 5xxx: Payment ====================
    /// Sum of abonos does not cover the note total
    InsufficientAbonos = 5001,
    /// Abono amount must be positive
    InvalidAbonoAmount = 5002,
    /// Unknown payment method
    InvalidPaymentMethod = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Service not found
    ServiceNotFound = 6001,
    /// Service name is missing, too short, or too long
    InvalidName = 6002,
    /// Flat price is missing or negative
    InvalidPrice = 6003,
    /// Variant list is empty or contains a malformed variant
    InvalidSizes = 6004,
    /// Availability days must be integers 0-6
    InvalidAvailableDays = 6005,
    /// Another service in this business already uses that name
    DuplicateServiceName = 6006,
    /// Selection references a service or variant the catalog lacks
    UnknownSelectionItem = 6007,

    // ==================== 7xxx: Guest ====================
    /// Guest principal not found or not flagged as guest
    GuestNotFound = 7001,
    /// Guest principal has expired
    GuestExpired = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Transaction failed to commit
    TransactionFailed = 9003,
    /// Outbound collaborator call failed
    CollaboratorFailed = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::MissingCredential => "Authentication credential missing",
            Self::InvalidCredential => "Invalid authentication credential",
            Self::TokenExpired => "Token expired",
            Self::UnsupportedProvider => "Unsupported identity provider",

            Self::Unauthorized => "Not authorized to act on this resource",
            Self::AdminRequired => "Admin role required",
            Self::RegistrationIncomplete => "Registration is not complete",

            Self::MissingBusinessId => "Business id missing",
            Self::InvalidBusinessId => "Business id is invalid",
            Self::BusinessNotFound => "Business not found",
            Self::BusinessInactive => "Business is deactivated",
            Self::BusinessHasBranches => "Business still has active branches",
            Self::OwnerNotFound => "Owner not found",
            Self::GuestCannotOwn => "A guest account cannot own a business",
            Self::InvalidHours => "Operating hours are invalid",

            Self::NoteNotFound => "Note not found",
            Self::InvalidStatusTransition => "Status transition not allowed",
            Self::NoteAlreadyDelivered => "Note has already been delivered",
            Self::EmptySelection => "Service selection is empty",
            Self::NoteConflict => "Note was modified concurrently",

            Self::InsufficientAbonos => "Partial payments do not cover the total",
            Self::InvalidAbonoAmount => "Abono amount must be positive",
            Self::InvalidPaymentMethod => "Unknown payment method",

            Self::ServiceNotFound => "Service not found",
            Self::InvalidName => "Service name is invalid",
            Self::InvalidPrice => "Service price is invalid",
            Self::InvalidSizes => "Service variants are invalid",
            Self::InvalidAvailableDays => "Availability days are invalid",
            Self::DuplicateServiceName => "Service name already in use",
            Self::UnknownSelectionItem => "Selection references an unknown service",

            Self::GuestNotFound => "Guest not found",
            Self::GuestExpired => "Guest session expired",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::TransactionFailed => "Transaction failed",
            Self::CollaboratorFailed => "External collaborator call failed",
        }
    }

    /// Get the category of this error code
    pub fn category(&self) -> super::category::ErrorCategory {
        super::category::ErrorCategory::from_code(self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            1001 => Self::MissingCredential,
            1002 => Self::InvalidCredential,
            1003 => Self::TokenExpired,
            1004 => Self::UnsupportedProvider,

            2001 => Self::Unauthorized,
            2002 => Self::AdminRequired,
            2003 => Self::RegistrationIncomplete,

            3001 => Self::MissingBusinessId,
            3002 => Self::InvalidBusinessId,
            3003 => Self::BusinessNotFound,
            3004 => Self::BusinessInactive,
            3005 => Self::BusinessHasBranches,
            3006 => Self::OwnerNotFound,
            3007 => Self::GuestCannotOwn,
            3008 => Self::InvalidHours,

            4001 => Self::NoteNotFound,
            4002 => Self::InvalidStatusTransition,
            4003 => Self::NoteAlreadyDelivered,
            4004 => Self::EmptySelection,
            4005 => Self::NoteConflict,

            5001 => Self::InsufficientAbonos,
            5002 => Self::InvalidAbonoAmount,
            5003 => Self::InvalidPaymentMethod,

            6001 => Self::ServiceNotFound,
            6002 => Self::InvalidName,
            6003 => Self::InvalidPrice,
            6004 => Self::InvalidSizes,
            6005 => Self::InvalidAvailableDays,
            6006 => Self::DuplicateServiceName,
            6007 => Self::UnknownSelectionItem,

            7001 => Self::GuestNotFound,
            7002 => Self::GuestExpired,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::TransactionFailed,
            9004 => Self::CollaboratorFailed,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::InvalidCredential,
            ErrorCode::Unauthorized,
            ErrorCode::BusinessInactive,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::InsufficientAbonos,
            ErrorCode::InvalidSizes,
            ErrorCode::GuestExpired,
            ErrorCode::TransactionFailed,
        ];
        for code in codes {
            let n: u16 = code.into();
            assert_eq!(ErrorCode::try_from(n), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::InsufficientAbonos).unwrap();
        assert_eq!(json, "5001");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::InsufficientAbonos);
    }
}
