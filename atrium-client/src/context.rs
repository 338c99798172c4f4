//! Session scope context
//!
//! Portal views operate against one selected company at a time. The
//! selection is held explicitly on the client; company-scoped
//! operations that need it fail fast when nothing is selected.

use std::sync::RwLock;

use crate::error::{ClientError, ClientResult};

/// Mutable per-session scope shared across portal views
#[derive(Debug, Default)]
pub struct SessionContext {
    company: RwLock<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the active company
    pub fn select_company(&self, company_id: impl Into<String>) {
        *self.company.write().unwrap_or_else(|e| e.into_inner()) = Some(company_id.into());
    }

    /// Clear the selection
    pub fn clear_company(&self) {
        *self.company.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Currently selected company, if any
    pub fn active_company(&self) -> Option<String> {
        self.company
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Fail-fast accessor for company-scoped operations
    pub fn require_company(&self) -> ClientResult<String> {
        self.active_company()
            .ok_or(ClientError::CompanyNotSelected)
    }
}
