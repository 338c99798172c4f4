//! Employee loans resource client

use async_trait::async_trait;

use shared::models::{Loan, LoanCreate, LoanFilter, LoanUpdate};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/loans";
const KEYS: EntityKeys = EntityKeys::new("loans");

/// Loans resource client
#[derive(Debug, Clone)]
pub struct LoansClient {
    http: HttpClient,
}

impl LoansClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for LoansClient {
    type Entity = Loan;
    type Filter = LoanFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<Loan>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &LoanFilter) -> ClientResult<Page<Loan>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Loan> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for LoansClient {
    type Create = LoanCreate;
    type Update = LoanUpdate;

    async fn create(&self, dto: &LoanCreate) -> ClientResult<Loan> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &LoanUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}
