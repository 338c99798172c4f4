//! Tag Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Tag entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub company_id: String,
    pub name: String,
    /// Hex color, e.g. "#2f7d4e"
    pub color: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create tag payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TagCreate {
    pub company_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub color: Option<String>,
    pub display_order: Option<i32>,
}

/// Update tag payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TagUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub color: Option<String>,
    pub display_order: Option<i32>,
}

/// Tag list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}
