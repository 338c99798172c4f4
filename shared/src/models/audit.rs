//! Audit Trail Model
//!
//! Audit entries are written server-side only; the client reads them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{SortDirection, Timestamp};

/// Audit trail entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTrailEntry {
    pub id: String,
    pub company_id: String,
    pub actor_id: String,
    pub actor_name: String,
    /// Action verb, e.g. "created", "updated", "deleted", "issued"
    pub action: String,
    /// Entity family, e.g. "employee", "credit_note"
    pub entity_type: String,
    pub entity_id: String,
    /// Field-level change set as recorded by the backend
    #[serde(default)]
    pub changes: Value,
    pub recorded_at: Timestamp,
}

/// Audit trail query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    /// Recorded at or after (Unix milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Timestamp>,
    /// Recorded at or before (Unix milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}
