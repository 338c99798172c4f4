//! Products resource client

use async_trait::async_trait;

use shared::models::{Product, ProductCreate, ProductFilter, ProductUpdate};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/products";
const KEYS: EntityKeys = EntityKeys::new("products");

/// Products resource client
#[derive(Debug, Clone)]
pub struct ProductsClient {
    http: HttpClient,
}

impl ProductsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for ProductsClient {
    type Entity = Product;
    type Filter = ProductFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<Product>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &ProductFilter) -> ClientResult<Page<Product>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Product> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for ProductsClient {
    type Create = ProductCreate;
    type Update = ProductUpdate;

    async fn create(&self, dto: &ProductCreate) -> ClientResult<Product> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &ProductUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}
