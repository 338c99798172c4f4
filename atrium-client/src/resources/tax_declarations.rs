//! Tax declarations resource client
//!
//! Declarations support a one-way `submit` transition in addition to
//! the uniform CRUD surface.

use async_trait::async_trait;

use shared::models::{
    TaxDeclaration, TaxDeclarationCreate, TaxDeclarationFilter, TaxDeclarationUpdate,
};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::cached::Cached;
use crate::query::key::EntityKeys;

const PATH: &str = "api/tax-declarations";
const KEYS: EntityKeys = EntityKeys::new("tax_declarations");

/// Tax declarations resource client
#[derive(Debug, Clone)]
pub struct TaxDeclarationsClient {
    http: HttpClient,
}

impl TaxDeclarationsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Submit a draft declaration
    pub async fn submit(&self, id: &str) -> ClientResult<TaxDeclaration> {
        self.http.post_empty(&format!("{PATH}/{id}/submit")).await
    }
}

#[async_trait]
impl ReadResource for TaxDeclarationsClient {
    type Entity = TaxDeclaration;
    type Filter = TaxDeclarationFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<TaxDeclaration>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &TaxDeclarationFilter) -> ClientResult<Page<TaxDeclaration>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<TaxDeclaration> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for TaxDeclarationsClient {
    type Create = TaxDeclarationCreate;
    type Update = TaxDeclarationUpdate;

    async fn create(&self, dto: &TaxDeclarationCreate) -> ClientResult<TaxDeclaration> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &TaxDeclarationUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}

impl Cached<TaxDeclarationsClient> {
    /// Submit a declaration; stores the returned record under its
    /// detail key and invalidates every cached list
    pub async fn submit(&self, id: &str) -> ClientResult<TaxDeclaration> {
        match self.client().submit(id).await {
            Ok(declaration) => {
                self.store_detail(id, declaration.clone());
                self.invalidate_lists();
                Ok(declaration)
            }
            Err(err) => {
                tracing::warn!(declaration = id, error = %err, "submit failed");
                Err(err)
            }
        }
    }
}
