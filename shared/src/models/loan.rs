//! Employee Loan Model
//!
//! Record shapes only; amortization and interest math live in the
//! backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Active,
    Settled,
    WrittenOff,
}

/// Employee loan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub company_id: String,
    pub employee_id: String,
    pub principal: Decimal,
    /// Annual interest rate in percent
    pub annual_rate_pct: Decimal,
    pub term_months: u32,
    /// First repayment date (YYYY-MM-DD format)
    pub starts_on: String,
    pub outstanding_balance: Decimal,
    pub status: LoanStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create loan payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoanCreate {
    pub company_id: String,
    pub employee_id: String,
    pub principal: Decimal,
    pub annual_rate_pct: Decimal,
    #[validate(range(min = 1, max = 360))]
    pub term_months: u32,
    /// First repayment date (YYYY-MM-DD format)
    #[validate(custom(function = crate::util::validate_business_date))]
    pub starts_on: String,
}

/// Update loan payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoanUpdate {
    pub annual_rate_pct: Option<Decimal>,
    pub term_months: Option<u32>,
    pub outstanding_balance: Option<Decimal>,
    pub status: Option<LoanStatus>,
}

/// Loan list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LoanStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}
