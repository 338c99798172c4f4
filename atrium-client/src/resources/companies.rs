//! Companies resource client
//!
//! Companies are the tenants themselves, so the list is never scoped
//! to a company.

use async_trait::async_trait;

use shared::models::{Company, CompanyCreate, CompanyFilter, CompanyUpdate};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/companies";
const KEYS: EntityKeys = EntityKeys::new("companies");

/// Companies resource client
#[derive(Debug, Clone)]
pub struct CompaniesClient {
    http: HttpClient,
}

impl CompaniesClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for CompaniesClient {
    type Entity = Company;
    type Filter = CompanyFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, _company_id: Option<&str>) -> ClientResult<Vec<Company>> {
        self.http.get(PATH).await
    }

    async fn get_paged(&self, filter: &CompanyFilter) -> ClientResult<Page<Company>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Company> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for CompaniesClient {
    type Create = CompanyCreate;
    type Update = CompanyUpdate;

    async fn create(&self, dto: &CompanyCreate) -> ClientResult<Company> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &CompanyUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}
