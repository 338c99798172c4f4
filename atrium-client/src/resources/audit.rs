//! Audit trail resource client
//!
//! Read-only: audit entries are written server-side as a side effect
//! of other operations.

use async_trait::async_trait;

use shared::models::{AuditFilter, AuditTrailEntry};
use shared::response::Page;

use super::ReadResource;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/audit-trail";
const KEYS: EntityKeys = EntityKeys::new("audit_trail");

/// Audit trail resource client
#[derive(Debug, Clone)]
pub struct AuditClient {
    http: HttpClient,
}

impl AuditClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for AuditClient {
    type Entity = AuditTrailEntry;
    type Filter = AuditFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<AuditTrailEntry>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &AuditFilter) -> ClientResult<Page<AuditTrailEntry>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<AuditTrailEntry> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}
