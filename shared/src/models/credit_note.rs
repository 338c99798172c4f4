//! Credit Note Model
//!
//! Credit notes reference an invoice and move through a one-way status
//! lifecycle: Draft -> Issued -> Cancelled. Line items live behind a
//! separate endpoint and are merged into the note by the client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SortDirection, Timestamp};

/// Credit note status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditNoteStatus {
    Draft,
    Issued,
    Cancelled,
}

/// Credit note line item (independent endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNoteItem {
    pub id: String,
    pub credit_note_id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Credit note entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNote {
    pub id: String,
    pub company_id: String,
    /// Sequential document number, e.g. "CN-2026-0042"
    pub number: String,
    /// Invoice this note credits (foreign key, resolved server-side)
    pub invoice_id: String,
    pub customer_name: String,
    pub status: CreditNoteStatus,
    pub reason: Option<String>,
    /// ISO 4217 currency code
    pub currency: String,
    pub total_amount: Decimal,
    /// Issue date (YYYY-MM-DD format), set when the note is issued
    pub issued_on: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    // -- Relations (populated by the client from the items endpoint) --
    #[serde(default)]
    pub items: Vec<CreditNoteItem>,
}

/// Create credit note payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreditNoteCreate {
    pub company_id: String,
    pub invoice_id: String,
    #[validate(length(min = 1))]
    pub customer_name: String,
    pub reason: Option<String>,
    #[validate(length(equal = 3))]
    pub currency: String,
    pub total_amount: Decimal,
}

/// Update credit note payload (draft notes only)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreditNoteUpdate {
    pub customer_name: Option<String>,
    pub reason: Option<String>,
    pub total_amount: Option<Decimal>,
}

/// Cancel credit note payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNoteCancel {
    pub reason: String,
}

/// Credit note list query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditNoteFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CreditNoteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Issued on or after (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_from: Option<String>,
    /// Issued on or before (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_default_to_empty_when_absent() {
        // The detail endpoint serves the note without items; the client
        // merges them from the items endpoint afterwards.
        let json = r#"{
            "id": "cn-1",
            "company_id": "co-1",
            "number": "CN-2026-0001",
            "invoice_id": "inv-9",
            "customer_name": "Acme GmbH",
            "status": "draft",
            "reason": null,
            "currency": "EUR",
            "total_amount": 120.5,
            "issued_on": null,
            "created_at": 1754000000000,
            "updated_at": 1754000000000
        }"#;
        let note: CreditNote = serde_json::from_str(json).unwrap();
        assert!(note.items.is_empty());
        assert_eq!(note.status, CreditNoteStatus::Draft);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(CreditNoteStatus::Issued).unwrap(),
            serde_json::json!("issued")
        );
    }
}
