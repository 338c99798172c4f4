//! Credit notes resource client
//!
//! Besides the uniform CRUD surface, credit notes have one-way status
//! transitions (`issue`, `cancel`), a CSV export and a line-items
//! endpoint the client merges into the detail view.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use shared::models::{
    CreditNote, CreditNoteCancel, CreditNoteCreate, CreditNoteFilter, CreditNoteItem,
    CreditNoteUpdate,
};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::{ClientError, ClientResult};
use crate::exports;
use crate::http::HttpClient;
use crate::query::cached::Cached;
use crate::query::key::EntityKeys;

const PATH: &str = "api/credit-notes";
const KEYS: EntityKeys = EntityKeys::new("credit_notes");

/// Credit notes resource client
#[derive(Debug, Clone)]
pub struct CreditNotesClient {
    http: HttpClient,
}

impl CreditNotesClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Issue a draft credit note
    pub async fn issue(&self, id: &str) -> ClientResult<CreditNote> {
        self.http.post_empty(&format!("{PATH}/{id}/issue")).await
    }

    /// Cancel an issued credit note with a reason
    pub async fn cancel(&self, id: &str, reason: &str) -> ClientResult<CreditNote> {
        let payload = CreditNoteCancel {
            reason: reason.to_string(),
        };
        self.http
            .post(&format!("{PATH}/{id}/cancel"), &payload)
            .await
    }

    /// Export matching credit notes as CSV, using a registered column
    /// profile
    pub async fn export_csv(
        &self,
        filter: &CreditNoteFilter,
        profile: &str,
    ) -> ClientResult<Vec<u8>> {
        let profile = exports::get(profile)
            .ok_or_else(|| ClientError::Export(format!("unknown export profile: {profile}")))?;

        let mut query = match serde_json::to_value(filter) {
            Ok(Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        query.insert(
            "columns".to_string(),
            Value::String(profile.columns.join(",")),
        );

        self.http
            .download_with_query(&format!("{PATH}/export"), &query)
            .await
            .map_err(|err| match err {
                ClientError::Export(_) => err,
                other => ClientError::Export(other.to_string()),
            })
    }

    async fn fetch_items(&self, id: &str) -> ClientResult<Vec<CreditNoteItem>> {
        self.http.get(&format!("{PATH}/{id}/items")).await
    }
}

#[async_trait]
impl ReadResource for CreditNotesClient {
    type Entity = CreditNote;
    type Filter = CreditNoteFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<CreditNote>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &CreditNoteFilter) -> ClientResult<Page<CreditNote>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    /// Fetch one credit note, merging in its line items
    ///
    /// The item fetch is fail-soft: when it errors, the note is still
    /// returned with an empty item list rather than failing the read.
    async fn get_by_id(&self, id: &str) -> ClientResult<CreditNote> {
        let mut note: CreditNote = self.http.get(&format!("{PATH}/{id}")).await?;

        match self.fetch_items(id).await {
            Ok(items) => note.items = items,
            Err(err) => {
                debug!(credit_note = id, error = %err, "item fetch failed, returning note without items");
                note.items = Vec::new();
            }
        }

        Ok(note)
    }
}

#[async_trait]
impl WriteResource for CreditNotesClient {
    type Create = CreditNoteCreate;
    type Update = CreditNoteUpdate;

    async fn create(&self, dto: &CreditNoteCreate) -> ClientResult<CreditNote> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &CreditNoteUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}

impl Cached<CreditNotesClient> {
    /// Issue a credit note; stores the returned note under its detail
    /// key and invalidates every cached list
    pub async fn issue(&self, id: &str) -> ClientResult<CreditNote> {
        match self.client().issue(id).await {
            Ok(note) => {
                self.store_detail(id, note.clone());
                self.invalidate_lists();
                Ok(note)
            }
            Err(err) => {
                tracing::warn!(credit_note = id, error = %err, "issue failed");
                Err(err)
            }
        }
    }

    /// Cancel a credit note; same cache effects as [`Self::issue`]
    pub async fn cancel(&self, id: &str, reason: &str) -> ClientResult<CreditNote> {
        match self.client().cancel(id, reason).await {
            Ok(note) => {
                self.store_detail(id, note.clone());
                self.invalidate_lists();
                Ok(note)
            }
            Err(err) => {
                tracing::warn!(credit_note = id, error = %err, "cancel failed");
                Err(err)
            }
        }
    }

    /// Export matching credit notes as CSV; bypasses the cache
    pub async fn export_csv(
        &self,
        filter: &CreditNoteFilter,
        profile: &str,
    ) -> ClientResult<Vec<u8>> {
        self.client().export_csv(filter, profile).await
    }
}
