//! Employee Document Model
//!
//! File storage metadata; contents travel base64-encoded in the upload
//! payload and as a raw binary body on download.

use base64::Engine;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Employee document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDocument {
    pub id: String,
    pub company_id: String,
    pub employee_id: String,
    pub file_name: String,
    /// MIME type, e.g. "application/pdf"
    pub content_type: String,
    pub size_bytes: u64,
    /// Opaque key into backend blob storage
    pub storage_key: String,
    pub uploaded_at: Timestamp,
}

/// Upload document payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentUpload {
    pub company_id: String,
    pub employee_id: String,
    #[validate(length(min = 1))]
    pub file_name: String,
    #[validate(length(min = 1))]
    pub content_type: String,
    /// File contents, base64-encoded
    pub data_base64: String,
}

impl DocumentUpload {
    /// Build an upload payload from raw bytes
    pub fn from_bytes(
        company_id: impl Into<String>,
        employee_id: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: &[u8],
    ) -> Self {
        Self {
            company_id: company_id.into(),
            employee_id: employee_id.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data_base64: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }

    /// Decode the payload back into raw bytes
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.data_base64)
    }
}

/// Document list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}
