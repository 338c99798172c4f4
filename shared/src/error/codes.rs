//! Unified error codes for the Atrium suite
//!
//! Error codes are shared by the backend and both portals. They are
//! organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Company (tenant) errors
//! - 4xxx: Employee errors
//! - 5xxx: Finance errors (credit notes, loans, subscriptions, tax)
//! - 6xxx: Document / file storage errors
//! - 7xxx: Catalog errors (tags, products)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
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
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Company ====================
    /// No company selected for a company-scoped operation
    CompanyNotSelected = 3001,
    /// Company not found
    CompanyNotFound = 3002,
    /// Company is disabled
    CompanyDisabled = 3003,
    /// Company name already exists
    CompanyNameExists = 3004,

    // ==================== 4xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 4001,
    /// Employee email already exists
    EmployeeEmailExists = 4002,
    /// Employee is inactive
    EmployeeInactive = 4003,

    // ==================== 5xxx: Finance ====================
    /// Credit note not found
    CreditNoteNotFound = 5001,
    /// Credit note has already been issued
    CreditNoteAlreadyIssued = 5002,
    /// Credit note has already been cancelled
    CreditNoteAlreadyCancelled = 5003,
    /// Credit note has not been issued
    CreditNoteNotIssued = 5004,
    /// Referenced invoice not found
    InvoiceNotFound = 5005,
    /// Loan not found
    LoanNotFound = 5101,
    /// Loan has already been settled
    LoanAlreadySettled = 5102,
    /// Subscription not found
    SubscriptionNotFound = 5201,
    /// Subscription is inactive
    SubscriptionInactive = 5202,
    /// Tax declaration not found
    TaxDeclarationNotFound = 5301,
    /// Tax declaration has already been submitted
    TaxDeclarationAlreadySubmitted = 5302,
    /// Invalid tax period
    TaxPeriodInvalid = 5303,

    // ==================== 6xxx: Document ====================
    /// Document not found
    DocumentNotFound = 6001,
    /// Document exceeds the size limit
    DocumentTooLarge = 6002,
    /// Unsupported content type
    UnsupportedContentType = 6003,

    // ==================== 7xxx: Catalog ====================
    /// Tag not found
    TagNotFound = 7001,
    /// Tag name already exists
    TagNameExists = 7002,
    /// Product not found
    ProductNotFound = 7101,
    /// Product SKU already exists
    ProductSkuExists = 7102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Export operation failed
    ExportFailed = 9004,
    /// File storage failed
    StorageFailed = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Company
            ErrorCode::CompanyNotSelected => "No company selected",
            ErrorCode::CompanyNotFound => "Company not found",
            ErrorCode::CompanyDisabled => "Company is disabled",
            ErrorCode::CompanyNameExists => "Company name already exists",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeEmailExists => "Employee email already exists",
            ErrorCode::EmployeeInactive => "Employee is inactive",

            // Finance
            ErrorCode::CreditNoteNotFound => "Credit note not found",
            ErrorCode::CreditNoteAlreadyIssued => "Credit note has already been issued",
            ErrorCode::CreditNoteAlreadyCancelled => "Credit note has already been cancelled",
            ErrorCode::CreditNoteNotIssued => "Credit note has not been issued",
            ErrorCode::InvoiceNotFound => "Invoice not found",
            ErrorCode::LoanNotFound => "Loan not found",
            ErrorCode::LoanAlreadySettled => "Loan has already been settled",
            ErrorCode::SubscriptionNotFound => "Subscription not found",
            ErrorCode::SubscriptionInactive => "Subscription is inactive",
            ErrorCode::TaxDeclarationNotFound => "Tax declaration not found",
            ErrorCode::TaxDeclarationAlreadySubmitted => {
                "Tax declaration has already been submitted"
            }
            ErrorCode::TaxPeriodInvalid => "Invalid tax period",

            // Document
            ErrorCode::DocumentNotFound => "Document not found",
            ErrorCode::DocumentTooLarge => "Document exceeds the size limit",
            ErrorCode::UnsupportedContentType => "Unsupported content type",

            // Catalog
            ErrorCode::TagNotFound => "Tag not found",
            ErrorCode::TagNameExists => "Tag name already exists",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductSkuExists => "Product SKU already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ExportFailed => "Export operation failed",
            ErrorCode::StorageFailed => "File storage failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Company
            3001 => Ok(ErrorCode::CompanyNotSelected),
            3002 => Ok(ErrorCode::CompanyNotFound),
            3003 => Ok(ErrorCode::CompanyDisabled),
            3004 => Ok(ErrorCode::CompanyNameExists),

            // Employee
            4001 => Ok(ErrorCode::EmployeeNotFound),
            4002 => Ok(ErrorCode::EmployeeEmailExists),
            4003 => Ok(ErrorCode::EmployeeInactive),

            // Finance
            5001 => Ok(ErrorCode::CreditNoteNotFound),
            5002 => Ok(ErrorCode::CreditNoteAlreadyIssued),
            5003 => Ok(ErrorCode::CreditNoteAlreadyCancelled),
            5004 => Ok(ErrorCode::CreditNoteNotIssued),
            5005 => Ok(ErrorCode::InvoiceNotFound),
            5101 => Ok(ErrorCode::LoanNotFound),
            5102 => Ok(ErrorCode::LoanAlreadySettled),
            5201 => Ok(ErrorCode::SubscriptionNotFound),
            5202 => Ok(ErrorCode::SubscriptionInactive),
            5301 => Ok(ErrorCode::TaxDeclarationNotFound),
            5302 => Ok(ErrorCode::TaxDeclarationAlreadySubmitted),
            5303 => Ok(ErrorCode::TaxPeriodInvalid),

            // Document
            6001 => Ok(ErrorCode::DocumentNotFound),
            6002 => Ok(ErrorCode::DocumentTooLarge),
            6003 => Ok(ErrorCode::UnsupportedContentType),

            // Catalog
            7001 => Ok(ErrorCode::TagNotFound),
            7002 => Ok(ErrorCode::TagNameExists),
            7101 => Ok(ErrorCode::ProductNotFound),
            7102 => Ok(ErrorCode::ProductSkuExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::ExportFailed),
            9005 => Ok(ErrorCode::StorageFailed),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::CompanyNotSelected.code(), 3001);
        assert_eq!(ErrorCode::CreditNoteAlreadyIssued.code(), 5002);
        assert_eq!(ErrorCode::TaxDeclarationAlreadySubmitted.code(), 5302);
        assert_eq!(ErrorCode::ExportFailed.code(), 9004);
    }

    #[test]
    fn test_try_from_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::CompanyNotFound,
            ErrorCode::EmployeeNotFound,
            ErrorCode::CreditNoteNotIssued,
            ErrorCode::LoanAlreadySettled,
            ErrorCode::DocumentTooLarge,
            ErrorCode::TagNameExists,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serializes_as_u16() {
        let json = serde_json::to_value(ErrorCode::EmployeeNotFound).unwrap();
        assert_eq!(json, serde_json::json!(4001));
        let back: ErrorCode = serde_json::from_value(json).unwrap();
        assert_eq!(back, ErrorCode::EmployeeNotFound);
    }
}
