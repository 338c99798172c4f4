//! Cached resource bindings
//!
//! [`Cached`] binds a resource client to the query cache: reads go
//! through the cache under the resource's key factory, writes
//! invalidate the affected key subtrees. Write failures are logged and
//! rethrown without touching any cached state.

use std::sync::{Arc, RwLock};

use tracing::warn;

use shared::response::Page;

use super::cache::{Freshness, QueryCache};
use crate::error::ClientResult;
use crate::resources::{ReadResource, WriteResource};

/// A resource client bound to the shared query cache
pub struct Cached<C: ReadResource> {
    client: C,
    cache: Arc<QueryCache>,
    freshness: Freshness,
    last_page: RwLock<Option<Arc<Page<C::Entity>>>>,
}

impl<C: ReadResource> Cached<C> {
    pub fn new(client: C, cache: Arc<QueryCache>, freshness: Freshness) -> Self {
        Self {
            client,
            cache,
            freshness,
            last_page: RwLock::new(None),
        }
    }

    /// Underlying resource client, for uncached calls
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Unpaged, optionally company-scoped list
    pub async fn list(&self, company_id: Option<&str>) -> ClientResult<Arc<Vec<C::Entity>>> {
        let key = self.client.keys().list(company_id);
        self.cache
            .get_or_fetch(&key, self.freshness.list_ttl, || {
                self.client.get_all(company_id)
            })
            .await
    }

    /// Paginated, filtered list
    pub async fn paged(&self, filter: &C::Filter) -> ClientResult<Arc<Page<C::Entity>>> {
        let key = self.client.keys().paged(Some(filter));
        let page = self
            .cache
            .get_or_fetch(&key, self.freshness.list_ttl, || {
                self.client.get_paged(filter)
            })
            .await?;
        *self.last_page.write().unwrap_or_else(|e| e.into_inner()) = Some(page.clone());
        Ok(page)
    }

    /// Page data to render while a fresh page loads
    ///
    /// Returns the exact key's cached page when one exists (stale
    /// allowed), falling back to the last page successfully fetched so
    /// pagination never flashes to empty.
    pub fn paged_placeholder(&self, filter: &C::Filter) -> Option<Arc<Page<C::Entity>>> {
        let key = self.client.keys().paged(Some(filter));
        if let Some(page) = self.cache.peek(&key) {
            return Some(page);
        }
        self.last_page
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Single entity detail
    pub async fn detail(&self, id: &str) -> ClientResult<Arc<C::Entity>> {
        let key = self.client.keys().detail(id);
        self.cache
            .get_or_fetch(&key, self.freshness.detail_ttl, || self.client.get_by_id(id))
            .await
    }

    /// Store a server-returned entity under its detail key
    pub(crate) fn store_detail(&self, id: &str, entity: C::Entity) {
        self.cache
            .insert(self.client.keys().detail(id), Arc::new(entity));
    }

    pub(crate) fn invalidate_lists(&self) {
        self.cache.invalidate(&self.client.keys().lists());
    }

    pub(crate) fn invalidate_detail(&self, id: &str) {
        self.cache.invalidate(&self.client.keys().detail(id));
    }

    pub(crate) fn remove_detail(&self, id: &str) {
        self.cache.remove(&self.client.keys().detail(id));
    }
}

impl<C: WriteResource> Cached<C> {
    /// Create an entity; invalidates every cached list
    pub async fn create(&self, dto: &C::Create) -> ClientResult<C::Entity> {
        match self.client.create(dto).await {
            Ok(entity) => {
                self.invalidate_lists();
                Ok(entity)
            }
            Err(err) => {
                warn!(resource = self.client.keys().scope(), error = %err, "create failed");
                Err(err)
            }
        }
    }

    /// Update an entity; invalidates lists and the entity's detail key
    pub async fn update(&self, id: &str, dto: &C::Update) -> ClientResult<()> {
        match self.client.update(id, dto).await {
            Ok(()) => {
                self.invalidate_lists();
                self.invalidate_detail(id);
                Ok(())
            }
            Err(err) => {
                warn!(resource = self.client.keys().scope(), id, error = %err, "update failed");
                Err(err)
            }
        }
    }

    /// Delete an entity; drops its detail entry and invalidates lists
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.remove_detail(id);
                self.invalidate_lists();
                Ok(())
            }
            Err(err) => {
                warn!(resource = self.client.keys().scope(), id, error = %err, "delete failed");
                Err(err)
            }
        }
    }
}
