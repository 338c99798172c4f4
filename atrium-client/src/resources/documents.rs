//! Employee documents resource client
//!
//! Metadata follows the uniform read surface. There is no update call
//! since the backend treats stored files as immutable; contents are
//! uploaded base64-encoded and downloaded as a raw binary body.

use async_trait::async_trait;

use shared::models::{DocumentFilter, DocumentUpload, EmployeeDocument};
use shared::response::Page;

use super::ReadResource;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::cached::Cached;
use crate::query::key::EntityKeys;

const PATH: &str = "api/employee-documents";
const KEYS: EntityKeys = EntityKeys::new("employee_documents");

/// Employee documents resource client
#[derive(Debug, Clone)]
pub struct DocumentsClient {
    http: HttpClient,
}

impl DocumentsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Upload a document; returns the stored metadata
    pub async fn upload(&self, payload: &DocumentUpload) -> ClientResult<EmployeeDocument> {
        self.http.post(PATH, payload).await
    }

    /// Download a document's contents
    pub async fn download(&self, id: &str) -> ClientResult<Vec<u8>> {
        self.http.download(&format!("{PATH}/{id}/content")).await
    }

    /// Delete a document and its stored contents
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl ReadResource for DocumentsClient {
    type Entity = EmployeeDocument;
    type Filter = DocumentFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<EmployeeDocument>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &DocumentFilter) -> ClientResult<Page<EmployeeDocument>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<EmployeeDocument> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

impl Cached<DocumentsClient> {
    /// Upload a document; invalidates every cached document list
    pub async fn upload(&self, payload: &DocumentUpload) -> ClientResult<EmployeeDocument> {
        match self.client().upload(payload).await {
            Ok(document) => {
                self.invalidate_lists();
                Ok(document)
            }
            Err(err) => {
                tracing::warn!(error = %err, "document upload failed");
                Err(err)
            }
        }
    }

    /// Download a document's contents; bypasses the cache
    pub async fn download(&self, id: &str) -> ClientResult<Vec<u8>> {
        self.client().download(id).await
    }

    /// Delete a document; drops its detail entry and invalidates lists
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        match self.client().delete(id).await {
            Ok(()) => {
                self.remove_detail(id);
                self.invalidate_lists();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(document = id, error = %err, "document delete failed");
                Err(err)
            }
        }
    }
}
