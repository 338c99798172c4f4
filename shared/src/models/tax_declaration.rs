//! Tax Declaration Model
//!
//! Declaration shapes only; the actual tax math is a backend concern.
//! Declarations move one-way: Draft -> Submitted (-> Amended).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Tax declaration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxDeclarationStatus {
    Draft,
    Submitted,
    Amended,
}

/// Tax declaration entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxDeclaration {
    pub id: String,
    pub company_id: String,
    pub period_year: u16,
    /// Quarter within the year (1-4)
    pub period_quarter: u8,
    /// Declaration kind, e.g. "gst", "payroll"
    pub kind: String,
    pub status: TaxDeclarationStatus,
    pub total_payable: Decimal,
    pub submitted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create tax declaration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaxDeclarationCreate {
    pub company_id: String,
    #[validate(range(min = 2000, max = 2100))]
    pub period_year: u16,
    #[validate(range(min = 1, max = 4))]
    pub period_quarter: u8,
    #[validate(length(min = 1))]
    pub kind: String,
    pub total_payable: Decimal,
}

/// Update tax declaration payload (draft declarations only)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TaxDeclarationUpdate {
    pub total_payable: Option<Decimal>,
    #[validate(range(min = 1, max = 4))]
    pub period_quarter: Option<u8>,
}

/// Tax declaration list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxDeclarationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaxDeclarationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}
