//! Subscription Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Subscription entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub company_id: String,
    pub plan_name: String,
    pub seats: u32,
    pub monthly_cost: Decimal,
    /// Start date (YYYY-MM-DD format)
    pub started_on: String,
    /// Next renewal date (YYYY-MM-DD format)
    pub renews_on: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create subscription payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscriptionCreate {
    pub company_id: String,
    #[validate(length(min = 1))]
    pub plan_name: String,
    #[validate(range(min = 1))]
    pub seats: u32,
    pub monthly_cost: Decimal,
    /// Start date (YYYY-MM-DD format)
    #[validate(custom(function = crate::util::validate_business_date))]
    pub started_on: String,
}

/// Update subscription payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubscriptionUpdate {
    pub plan_name: Option<String>,
    #[validate(range(min = 1))]
    pub seats: Option<u32>,
    pub monthly_cost: Option<Decimal>,
    pub renews_on: Option<String>,
    pub is_active: Option<bool>,
}

/// Subscription list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
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
