//! Company Model
//!
//! Companies are the tenants of the suite; every other entity is scoped
//! to one company.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Company entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub registration_number: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create company payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub registration_number: String,
    #[validate(length(equal = 2))]
    pub country: String,
}

/// Update company payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompanyUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub registration_number: Option<String>,
    pub country: Option<String>,
    pub is_active: Option<bool>,
}

/// Company list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}
